//! Common test utilities for bundlepac integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Project manifest path used by the default settings
pub const MANIFEST: &str = "aurelia_project/aurelia.json";

const DEFAULT_MANIFEST: &str = r#"{
  "name": "demo-app",
  "transpiler": {
    "id": "babel",
    "fileExtension": ".js"
  },
  "paths": {
    "root": "src"
  },
  "build": {
    "targets": [
      {"id": "dev", "output": "scripts"}
    ],
    "bundles": [
      {
        "name": "app-bundle.js",
        "source": ["[**/*.js]", "**/*.{css,html}"]
      },
      {
        "name": "vendor-bundle.js",
        "prepend": ["node_modules/requirejs/require.js"],
        "dependencies": ["aurelia-binding", "jquery"]
      }
    ]
  }
}
"#;

/// A temporary project with a manifest in the standard location
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a project with the default manifest
    pub fn new() -> Self {
        let project = Self::empty();
        project.write_file(MANIFEST, DEFAULT_MANIFEST);
        project
    }

    /// Create a project without any files
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// The manifest as JSON
    pub fn manifest(&self) -> Value {
        serde_json::from_str(&self.read_file(MANIFEST)).expect("Manifest is not valid JSON")
    }

    /// Dependency names of a bundle, by index
    pub fn dependency_names(&self, bundle: usize) -> Vec<String> {
        self.manifest()["build"]["bundles"][bundle]["dependencies"]
            .as_array()
            .map(|deps| {
                deps.iter()
                    .map(|d| {
                        d.get("name")
                            .unwrap_or(d)
                            .as_str()
                            .expect("Dependency name is not a string")
                            .to_string()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Bundle names in manifest order
    pub fn bundle_names(&self) -> Vec<String> {
        self.manifest()["build"]["bundles"]
            .as_array()
            .expect("Manifest has no bundles")
            .iter()
            .map(|b| b["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Put an import definition into the registry
    pub fn write_registry(&self, pkg: &str, definition: &str) {
        self.write_file(
            &format!("node_modules/bundlepac/registry/{pkg}.json"),
            definition,
        );
    }

    /// Write a file into an installed package's `install/` directory
    pub fn write_package_file(&self, pkg: &str, file: &str, content: &str) {
        self.write_file(&format!("node_modules/{pkg}/install/{file}"), content);
    }

    /// Manifest backups next to the manifest
    pub fn backups(&self) -> Vec<PathBuf> {
        let dir = self.path.join("aurelia_project");
        let mut backups: Vec<PathBuf> = std::fs::read_dir(&dir)
            .expect("Failed to read project directory")
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("aurelia.json.") && n.ends_with(".bak"))
            })
            .collect();
        backups.sort();
        backups
    }

    /// Command running the binary inside this project
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bundlepac").expect("Binary not built");
        // Ignore developer overrides
        cmd.env_remove("BUNDLEPAC_PROJECT");
        cmd.env_remove("BUNDLEPAC_LOG");
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
