//! Git source repositories for fetch and install tests.
//!
//! Addon sources are plain git repositories holding a Godot project; tests
//! build them with the `git` CLI so the fixtures have real history, tags,
//! and branches that a clone-based fetcher can check out.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::project::packed_string_array;

/// A git repository serving as an addon source.
///
/// The repository root is a Godot project whose `addons/` directory carries
/// the published addons. Commit and tag as needed, then hand [`url`] to the
/// code under test as the locator source.
///
/// [`url`]: GitSource::url
pub struct GitSource {
    temp_dir: TempDir,
}

impl GitSource {
    /// Initialise an empty git repository with test identity configured.
    ///
    /// # Panics
    /// Panics if any git operation fails.
    pub fn init() -> Self {
        let source = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        source.git(&["init"]);
        source.git(&["config", "user.email", "test@test.com"]);
        source.git(&["config", "user.name", "Test User"]);
        source.git(&["config", "commit.gpgsign", "false"]);
        source
    }

    /// Repository root on disk.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The repository path as a locator source string.
    pub fn url(&self) -> String {
        self.root().to_string_lossy().into_owned()
    }

    /// Write a `project.godot` exporting `exports` and depending on
    /// `dependencies`.
    pub fn write_manifest(&self, dependencies: &[&str], exports: &[&str]) {
        let mut manifest = String::from("config_version=5\n\n[gdpack]\n\n");
        manifest.push_str(&format!(
            "dependencies={}\n",
            packed_string_array(dependencies)
        ));
        if !exports.is_empty() {
            manifest.push_str(&format!("exports={}\n", packed_string_array(exports)));
        }
        fs::write(self.root().join("project.godot"), manifest)
            .expect("GitSource::write_manifest: failed to write project.godot");
    }

    /// Create `addons/<name>/plugin.cfg` with `(name, locator)` dependency
    /// entries, plus a script file so the addon has content to copy.
    pub fn write_addon(&self, name: &str, dependencies: &[(&str, &str)]) -> PathBuf {
        let dir = self.root().join("addons").join(name);
        fs::create_dir_all(&dir).unwrap();

        let mut cfg = format!("[plugin]\n\nname=\"{name}\"\n");
        if !dependencies.is_empty() {
            cfg.push_str("\n[dependencies]\n\n");
            for (dep, locator) in dependencies {
                cfg.push_str(&format!("{dep}=\"{locator}\"\n"));
            }
        }

        fs::write(dir.join("plugin.cfg"), cfg)
            .expect("GitSource::write_addon: failed to write plugin.cfg");
        fs::write(dir.join(format!("{name}.gd")), format!("# {name}\n")).unwrap();
        dir
    }

    /// Stage everything and commit.
    pub fn commit(&self, message: &str) {
        self.git(&["add", "."]);
        self.git(&["commit", "-m", message]);
    }

    /// Tag the current commit.
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Create a branch at the current commit.
    pub fn branch(&self, name: &str) {
        self.git(&["branch", name]);
    }

    /// Commit id a ref points at, for asserting what a fetch checked out.
    ///
    /// # Panics
    /// Panics if the repository cannot be opened or the ref does not resolve.
    pub fn commit_id(&self, reference: &str) -> String {
        let repo = git2::Repository::open(self.root())
            .unwrap_or_else(|e| panic!("GitSource: failed to open repository: {e}"));
        let object = repo
            .revparse_single(reference)
            .unwrap_or_else(|e| panic!("GitSource: failed to resolve '{reference}': {e}"));
        object.id().to_string()
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.root())
            .output()
            .unwrap_or_else(|e| panic!("GitSource: failed to run `git {args:?}`: {e}"));
        if !output.status.success() {
            panic!(
                "GitSource: `git {args:?}` failed:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
    }
}

/// Build a single-addon source repository in one call: the addon named
/// `name` is exported, depends on `dependencies`, and the whole thing is
/// committed and tagged `version`.
pub fn addon_source(name: &str, version: &str, dependencies: &[(&str, &str)]) -> GitSource {
    let source = GitSource::init();
    source.write_manifest(&[], &[name]);
    source.write_addon(name, dependencies);
    source.commit("Publish addon");
    source.tag(version);
    source
}
