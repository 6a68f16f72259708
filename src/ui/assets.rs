//! Filesystem-based asset source for loading piece SVGs.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Looks up assets relative to a list of root directories, first hit wins
pub struct FileAssets {
    roots: Vec<PathBuf>,
}

impl FileAssets {
    /// Search next to the executable, then the working directory, then the crate root
    pub fn new() -> Self {
        let mut roots = Vec::new();
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            roots.push(exe_dir);
        }
        if let Ok(cwd) = std::env::current_dir() {
            roots.push(cwd);
        }
        roots.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        Self { roots }
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for root in &self.roots {
            if let Ok(data) = fs::read(root.join(path)) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        debug!(path, "asset not found");
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let Some(entries) = self
            .roots
            .iter()
            .find_map(|root| fs::read_dir(root.join(path)).ok())
        else {
            return Ok(Vec::new());
        };

        Ok(entries
            .flatten()
            .filter_map(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map(|name| SharedString::from(name.to_string()))
            })
            .collect())
    }
}
