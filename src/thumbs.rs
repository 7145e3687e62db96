/// Thumbnail generation and disk cache
///
/// Grid tiles are shown from pre-resized thumbnails cached under the
/// user's cache directory, so large originals are only decoded once.
/// Generation runs on a blocking thread off the UI; a photo whose
/// thumbnail cannot be produced falls back to its original file.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tokio::task;

/// Longest edge of a generated thumbnail
const THUMBNAIL_SIZE: u32 = 512;

/// The thumbnail cache directory (~/.cache/fotofolio/thumbnails on Linux)
pub fn cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .unwrap_or_else(std::env::temp_dir);

    path.push("fotofolio");
    path.push("thumbnails");
    path
}

/// Cache key: filename stem plus a hash of the absolute path, so equal
/// filenames from different folders never collide
fn cache_key(source: &Path) -> String {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    let stem = source
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    format!("{}-{:016x}.jpg", stem, hasher.finish())
}

/// Where the thumbnail for `source` lives (whether or not it exists yet)
pub fn thumbnail_path(source: &Path) -> PathBuf {
    cache_dir().join(cache_key(source))
}

/// Generate (or reuse) the thumbnail for one photo.
/// Returns None when the source cannot be decoded; the caller shows the
/// original instead.
pub fn generate_thumbnail(source: &Path) -> Option<PathBuf> {
    let target = thumbnail_path(source);
    if target.is_file() {
        return Some(target);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).ok()?;
    }

    let img = image::open(source).ok()?;
    let thumb = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    // JPEG has no alpha channel; flatten before saving
    thumb.to_rgb8().save(&target).ok()?;

    println!("📸 Generated thumbnail: {}", target.display());
    Some(target)
}

/// Generate one photo's thumbnail on a blocking thread, returning the
/// source paired with its thumbnail (None on failure). One task per
/// photo keeps the preloader's progress counter honest.
pub async fn generate_one(source: PathBuf) -> (PathBuf, Option<PathBuf>) {
    let worker = source.clone();
    let thumb = task::spawn_blocking(move || generate_thumbnail(&worker))
        .await
        .unwrap_or_else(|e| {
            eprintln!("⚠️  Thumbnail task failed for {}: {}", source.display(), e);
            None
        });
    (source, thumb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_stable_and_collision_safe() {
        let a = cache_key(Path::new("/portfolio/dunes/shot.jpg"));
        let b = cache_key(Path::new("/portfolio/coast/shot.jpg"));

        assert_eq!(a, cache_key(Path::new("/portfolio/dunes/shot.jpg")));
        assert_ne!(a, b);
        assert!(a.starts_with("shot-"));
        assert!(a.ends_with(".jpg"));
    }

    #[test]
    fn test_generate_fails_gracefully_for_missing_source() {
        assert_eq!(generate_thumbnail(Path::new("/nonexistent/photo.jpg")), None);
    }
}
