//! Target descriptors and install-root resolution.

use std::path::{Path, PathBuf};

/// One installed file the patcher operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Path relative to the install root.
    pub relative_path: &'static str,
    /// Short name of the Clusterio package the file belongs to.
    pub package: &'static str,
}

impl Target {
    /// Absolute location of this target under `install_root`.
    pub fn resolve(&self, install_root: &Path) -> PathBuf {
        install_root.join(self.relative_path)
    }
}

/// The bundled entry points that print the banner.
///
/// Fixed list; processed and reported in this order. Paths are not
/// discovered dynamically.
pub const TARGETS: [Target; 3] = [
    Target {
        relative_path: "@clusterio/controller/dist/node/controller.js",
        package: "controller",
    },
    Target {
        relative_path: "@clusterio/ctl/dist/node/ctl.js",
        package: "ctl",
    },
    Target {
        relative_path: "@clusterio/host/dist/node/host.js",
        package: "host",
    },
];

/// Conventional dependency directory for a local install.
const DEFAULT_MODULES_DIR: &str = "node_modules";

/// Resolve the install root for a run.
///
/// `override_root` is the `--install-root` flag value; clap also feeds
/// `NODE_PATH` into it, so a global install is found the same way node
/// itself would find it. Without either, the root is `./node_modules`.
pub fn resolve_install_root(override_root: Option<&Path>) -> PathBuf {
    match override_root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_default()
            .join(DEFAULT_MODULES_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_cover_all_three_packages() {
        let packages: Vec<&str> = TARGETS.iter().map(|t| t.package).collect();
        assert_eq!(packages, ["controller", "ctl", "host"]);
    }

    #[test]
    fn target_paths_are_relative() {
        for target in &TARGETS {
            assert!(Path::new(target.relative_path).is_relative());
            assert!(target.relative_path.starts_with("@clusterio/"));
            assert!(target.relative_path.ends_with(".js"));
        }
    }

    #[test]
    fn resolve_joins_root_and_relative_path() {
        let resolved = TARGETS[0].resolve(Path::new("/opt/deps"));
        assert_eq!(
            resolved,
            Path::new("/opt/deps/@clusterio/controller/dist/node/controller.js")
        );
    }

    #[test]
    fn explicit_root_is_used_verbatim() {
        let root = resolve_install_root(Some(Path::new("/srv/node_modules")));
        assert_eq!(root, Path::new("/srv/node_modules"));
    }

    #[test]
    fn default_root_is_node_modules_under_cwd() {
        let root = resolve_install_root(None);
        assert!(root.ends_with(DEFAULT_MODULES_DIR));
    }
}
