//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an opengpg command running in the test directory.
    ///
    /// Colors are disabled and `OPENGPG_CONFIG` is cleared so the host
    /// environment cannot leak in.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("opengpg").expect("failed to find opengpg binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("OPENGPG_CONFIG");
        cmd.env_remove("OPENGPG_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `opengpg encrypt -k ...` with the message on stdin.
    pub fn encrypt(&self, keys: &[&str], message: &str) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("encrypt");
        for key in keys {
            cmd.args(["--key", key]);
        }
        cmd.write_stdin(message)
            .output()
            .expect("failed to run opengpg encrypt")
    }

    /// Shortcut for `opengpg inspect --json`.
    pub fn inspect_json(&self, files: &[&str], at: &str) -> Output {
        self.cmd()
            .arg("inspect")
            .args(files)
            .args(["--at", at, "--json"])
            .output()
            .expect("failed to run opengpg inspect")
    }
}
