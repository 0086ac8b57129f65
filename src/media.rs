// src/media.rs
//
// Local artwork for the page chrome, inlined as data URIs.

use base64::Engine;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const HERO_FALLBACK: &str = "https://picsum.photos/1920/1080";
pub const HERO_BASES: [&str; 3] = ["image1", "image2", "image3"];
pub const HERO_LIMIT: usize = 12;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

fn mime_for(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_image(path: &Path) -> bool {
    extension(path).is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
}

/// Read an image file into a `data:` URI.
pub fn data_uri(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{encoded}", mime_for(path)))
}

/// The navbar logo, when `logo.png` exists.
pub fn logo_data_uri(images_dir: &Path) -> Option<String> {
    data_uri(&images_dir.join("logo.png")).ok()
}

/// The travel-tips banner, when `image4.png` exists.
pub fn banner_data_uri(images_dir: &Path) -> Option<String> {
    data_uri(&images_dir.join("image4.png")).ok()
}

/// Local image files for the hero carousel.
///
/// Preferred basenames are tried first with each known extension. If none
/// exist, any images in the directory are used in name order, up to `limit`.
pub fn gather_local_images(images_dir: &Path, bases: &[&str], limit: usize) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = bases
        .iter()
        .filter_map(|base| {
            IMAGE_EXTENSIONS
                .iter()
                .map(|ext| images_dir.join(format!("{base}.{ext}")))
                .find(|p| p.exists())
        })
        .collect();

    if images.is_empty() {
        if let Ok(entries) = fs::read_dir(images_dir) {
            let mut found: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| is_image(p))
                .collect();
            found.sort();
            found.truncate(limit);
            images = found;
        }
    }

    images
}

/// Carousel sources: local images as data URIs, the stock photo otherwise.
pub fn hero_sources(images_dir: &Path) -> Vec<String> {
    let sources: Vec<String> = gather_local_images(images_dir, &HERO_BASES, HERO_LIMIT)
        .iter()
        .map(|p| {
            data_uri(p).unwrap_or_else(|e| {
                tracing::warn!("could not read hero image {}: {e}", p.display());
                HERO_FALLBACK.to_string()
            })
        })
        .collect();

    if sources.is_empty() {
        vec![HERO_FALLBACK.to_string()]
    } else {
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "media_test_{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_directory_uses_stock_photo() {
        let sources = hero_sources(Path::new("/no/such/images/dir"));
        assert_eq!(sources, vec![HERO_FALLBACK.to_string()]);
        assert!(logo_data_uri(Path::new("/no/such/images/dir")).is_none());
    }

    #[test]
    fn preferred_basenames_win() {
        let dir = temp_dir();
        fs::write(dir.join("image2.png"), b"png").unwrap();
        fs::write(dir.join("aaa.jpg"), b"jpg").unwrap();

        let found = gather_local_images(&dir, &HERO_BASES, HERO_LIMIT);
        assert_eq!(found, vec![dir.join("image2.png")]);

        let uri = data_uri(&found[0]).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn falls_back_to_sorted_directory_listing() {
        let dir = temp_dir();
        fs::write(dir.join("b.webp"), b"1").unwrap();
        fs::write(dir.join("a.JPG"), b"2").unwrap();
        fs::write(dir.join("notes.txt"), b"3").unwrap();

        let found = gather_local_images(&dir, &HERO_BASES, 1);
        assert_eq!(found, vec![dir.join("a.JPG")]);
        assert!(hero_sources(&dir)[0].starts_with("data:image/jpeg;base64,"));

        let _ = fs::remove_dir_all(dir);
    }
}
