/// Gallery index: the ordered set of photos the portfolio displays
///
/// The index is built exactly once, at startup, by scanning the portfolio
/// folder. It is immutable afterwards; there is no dynamic insertion.
/// Before the scan completes the application holds an empty index, which
/// every consumer (lightbox navigation in particular) must tolerate.

use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

/// Image file extensions recognized as gallery content
const GALLERY_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "tif", "tiff"];

/// Name of the optional per-folder subdirectory holding full-resolution
/// versions of the displayed images.
const FULL_DIR: &str = "full";

/// Errors from the one-shot gallery scan
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("portfolio folder not found: {0}")]
    MissingFolder(String),
}

/// One displayable photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Path of the image shown in the grid (the "thumbnail source")
    pub path: PathBuf,
    /// Full-resolution source shown by the lightbox. Falls back to
    /// `path` when no dedicated full-size file exists.
    pub full_path: PathBuf,
}

impl GalleryImage {
    /// The source the lightbox should display for this photo
    pub fn full_source(&self) -> &Path {
        &self.full_path
    }
}

/// Ordered, immutable-after-construction sequence of gallery photos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    /// The empty index used before the scan completes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index directly from a list of images (in order)
    pub fn from_images(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    /// Scan `root` for gallery images, in sorted path order.
    ///
    /// Files inside a `full/` subdirectory are full-resolution sources,
    /// not gallery entries of their own; a displayed image whose folder
    /// contains `full/<same filename>` uses that file in the lightbox.
    pub fn scan(root: &Path) -> Result<Self, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::MissingFolder(root.display().to_string()));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| is_gallery_image(p))
            .collect();

        // A directory walk has no inherent order; sort for a
        // deterministic document order.
        paths.sort();

        let images = paths
            .into_iter()
            .map(|path| {
                let full_path = full_sibling(&path).unwrap_or_else(|| path.clone());
                GalleryImage { path, full_path }
            })
            .collect();

        Ok(Self { images })
    }

    /// Async wrapper for the scan. Runs on a blocking thread because the
    /// walk is disk-bound; the error crosses the message boundary as a
    /// plain string.
    pub async fn scan_async(root: PathBuf) -> Result<Self, String> {
        task::spawn_blocking(move || Self::scan(&root).map_err(|e| e.to_string()))
            .await
            .map_err(|e| format!("Task join error: {}", e))?
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Position of a photo in the index, by identity (path) match
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.images.iter().position(|img| img.path == path)
    }
}

/// Whether a path is a displayable gallery image (recognized extension,
/// not hidden, not inside a `full/` directory)
fn is_gallery_image(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }

    let in_full_dir = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n == FULL_DIR)
        .unwrap_or(false);
    if in_full_dir {
        return false;
    }

    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            GALLERY_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// `<dir>/full/<filename>` when it exists on disk
fn full_sibling(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?;
    let name = path.file_name()?;
    let candidate = parent.join(FULL_DIR).join(name);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn img(name: &str) -> GalleryImage {
        GalleryImage {
            path: PathBuf::from(name),
            full_path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = Gallery::empty();
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
        assert_eq!(gallery.get(0), None);
    }

    #[test]
    fn test_position_by_identity() {
        let gallery = Gallery::from_images(vec![img("a.jpg"), img("b.jpg"), img("c.jpg")]);
        assert_eq!(gallery.position_of(Path::new("b.jpg")), Some(1));
        assert_eq!(gallery.position_of(Path::new("missing.jpg")), None);
    }

    #[test]
    fn test_scan_missing_folder() {
        let result = Gallery::scan(Path::new("/nonexistent/portfolio"));
        assert!(matches!(result, Err(ScanError::MissingFolder(_))));
    }

    #[test]
    fn test_scan_orders_and_resolves_full_sources() {
        let root = std::env::temp_dir().join(format!(
            "fotofolio-gallery-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(root.join("full")).unwrap();
        fs::write(root.join("b.jpg"), b"b").unwrap();
        fs::write(root.join("a.jpg"), b"a").unwrap();
        fs::write(root.join("notes.txt"), b"skip me").unwrap();
        fs::write(root.join(".hidden.jpg"), b"skip me").unwrap();
        fs::write(root.join("full").join("a.jpg"), b"a-full").unwrap();

        let gallery = Gallery::scan(&root).unwrap();
        fs::remove_dir_all(&root).unwrap();

        assert_eq!(gallery.len(), 2);
        // Sorted order, full/ contents not indexed on their own
        assert_eq!(gallery.get(0).unwrap().path, root.join("a.jpg"));
        assert_eq!(gallery.get(1).unwrap().path, root.join("b.jpg"));
        // a.jpg has a full-resolution sibling, b.jpg falls back to itself
        assert_eq!(
            gallery.get(0).unwrap().full_source(),
            root.join("full").join("a.jpg")
        );
        assert_eq!(gallery.get(1).unwrap().full_source(), root.join("b.jpg"));
    }
}
