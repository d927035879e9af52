use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// TestHarness runs the pizza-split binary inside an isolated temporary
/// directory, feeding it scripted stdin.
pub struct TestHarness {
    pub dir: TempDir,
    pub binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            binary: PathBuf::from(env!("CARGO_BIN_EXE_pizza-split")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a config file into the harness directory and returns its path.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Runs the binary with `args`, writing `stdin` to it and closing it.
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        self.run_bytes(args, stdin.as_bytes())
    }

    /// Like [`TestHarness::run`], for stdin that is not valid UTF-8.
    pub fn run_bytes(&self, args: &[&str], stdin: &[u8]) -> Output {
        let mut child = Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn pizza-split");

        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            // The process may exit before reading everything
            let _ = pipe.write_all(stdin);
        }

        child.wait_with_output().expect("Failed to wait for pizza-split")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
