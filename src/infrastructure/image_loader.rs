//! External image loading for entry photos

use crate::domain::image::{ImageLoader, ImageSlot, LoadedImage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Resolves URLs as remote images and everything else as files on disk.
///
/// Relative paths resolve against the journal root. A file that cannot be
/// found is logged and the slot is left pending.
#[derive(Debug, Clone)]
pub struct FileSystemImageLoader {
    root: PathBuf,
}

impl FileSystemImageLoader {
    pub fn new(root: &Path) -> Self {
        FileSystemImageLoader {
            root: root.to_path_buf(),
        }
    }

    fn is_remote(reference: &str) -> bool {
        let lower = reference.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    fn local_path(&self, reference: &str) -> PathBuf {
        let reference = reference.strip_prefix("file://").unwrap_or(reference);
        let path = Path::new(reference);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[async_trait]
impl ImageLoader for FileSystemImageLoader {
    async fn load(&self, reference: &str, slot: &mut ImageSlot) {
        if Self::is_remote(reference) {
            *slot = ImageSlot::Loaded(LoadedImage::Remote(reference.to_string()));
            return;
        }

        let path = self.local_path(reference);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {
                *slot = ImageSlot::Loaded(LoadedImage::LocalFile(path));
            }
            _ => tracing::warn!(reference, path = %path.display(), "image not found"),
        }
    }
}
