//! [`TestProject`] builder for Godot project test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary Godot project directory with helper methods for test setup
/// and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use gdpack_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.write_manifest(&["ui@../sources/repo-x@1.0.0"], &[]);
/// project.write_addon("ui", &[]);
/// project.assert_file_exists("addons/ui/plugin.cfg");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a `project.godot` declaring `dependencies` and `exports` in the
    /// `[gdpack]` section. Pass empty slices for a plain project.
    pub fn write_manifest(&self, dependencies: &[&str], exports: &[&str]) {
        let mut manifest = String::from(
            "; Engine configuration file.\nconfig_version=5\n\n[application]\n\nconfig/name=\"Fixture\"\n",
        );

        if !dependencies.is_empty() || !exports.is_empty() {
            manifest.push_str("\n[gdpack]\n\n");
            manifest.push_str(&format!(
                "dependencies={}\n",
                packed_string_array(dependencies)
            ));
            if !exports.is_empty() {
                manifest.push_str(&format!("exports={}\n", packed_string_array(exports)));
            }
        }

        fs::write(self.root().join("project.godot"), manifest)
            .expect("TestProject::write_manifest: failed to write project.godot");
    }

    /// Create `addons/<name>/plugin.cfg` with the given `[dependencies]`
    /// entries, each a `(name, locator)` pair.
    ///
    /// Returns the addon directory.
    pub fn write_addon(&self, name: &str, dependencies: &[(&str, &str)]) -> PathBuf {
        let dir = self.root().join("addons").join(name);
        fs::create_dir_all(&dir).unwrap();

        let mut cfg = format!("[plugin]\n\nname=\"{name}\"\nversion=\"1.0\"\n");
        if !dependencies.is_empty() {
            cfg.push_str("\n[dependencies]\n\n");
            for (dep, locator) in dependencies {
                cfg.push_str(&format!("{dep}=\"{locator}\"\n"));
            }
        }

        fs::write(dir.join("plugin.cfg"), cfg)
            .expect("TestProject::write_addon: failed to write plugin.cfg");
        dir
    }

    /// Drop a non-addon file into the addon, to verify installs copy whole
    /// directory trees.
    pub fn write_addon_file(&self, addon: &str, relative: &str, content: &str) {
        let path = self.root().join("addons").join(addon).join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}

/// Format items as a Godot `PackedStringArray(...)` literal.
pub fn packed_string_array(items: &[&str]) -> String {
    let quoted = items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("PackedStringArray({quoted})")
}
