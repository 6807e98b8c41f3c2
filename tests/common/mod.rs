//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary project tree for pipeline runs and provides
/// utilities for seeding inputs and inspecting outputs.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &[u8]) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project as text
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Read a file from the test project as bytes
    #[allow(dead_code)]
    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample vendored source carrying the local config include
#[allow(dead_code)]
pub const SAMPLE_MONGOOSE_C: &str = "#include \"mongoose.h\"\n#include \"mongoose_config.h\"\n\nint mg_send(void) { return 0; }\n";

/// Sample vendored header without the config include (patch is a no-op)
#[allow(dead_code)]
pub const SAMPLE_MONGOOSE_H: &str = "#pragma once\n\n#define MG_VERSION \"7.17\"\n";

/// Sample theme stylesheet carrying the content width variable
#[allow(dead_code)]
pub const SAMPLE_CSS: &str = "html {\n  --content-maxwidth: 1050px;\n  --font-size: 15px;\n}\n";

/// Sample theme script (persisted unpatched)
#[allow(dead_code)]
pub const SAMPLE_JS: &str = "class DoxygenAwesomeDarkModeToggle extends HTMLElement { }\n";
