#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the ghg-charts binary.
#[macro_export]
macro_rules! ghg_charts_cmd {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ghg-charts"))
    };
}

/// Path to the miniature proxy-dataset workbook checked in as a fixture.
pub const MINI_WORKBOOK: &str = "tests/fixtures/mini_proxy.xlsx";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic ghg-charts config file.
    pub fn create_config(&self, content: &str) {
        self.create_file("ghg-charts.toml", content);
    }

    /// Copies the miniature workbook into `data/` inside the fixture.
    pub fn stage_mini_workbook(&self) {
        self.create_dir("data");
        let source = Path::new(env!("CARGO_MANIFEST_DIR")).join(MINI_WORKBOOK);
        fs::copy(&source, self.dir.path().join("data/GHG_proxy_2022.xlsx"))
            .expect("Failed to copy workbook fixture");
    }
}
