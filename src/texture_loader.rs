use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{In, Reader, Tag, Value};

use crate::deck::SlideInfo;
use crate::error::{DeckError, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// Containers kamadak-exif can read that we also load
const EXIF_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Metadata pulled from a slide's EXIF block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifMetadata {
    pub orientation: u16,
    pub title: Option<String>,
}

impl Default for ExifMetadata {
    fn default() -> Self {
        Self { orientation: 1, title: None }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Slide Order: supported images sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source: std::io::Error| DeckError::Io { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && IMAGE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(DeckError::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// First non-blank string of an EXIF ASCII value.
pub fn ascii_title(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(strings) => strings
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .find(|s| !s.is_empty()),
        _ => None,
    }
}

pub fn orientation_of(value: &Value) -> Option<u16> {
    match value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

/// Reads orientation and title. Unreadable EXIF yields the defaults.
pub fn read_exif_metadata(bytes: &[u8]) -> ExifMetadata {
    let mut metadata = ExifMetadata::default();

    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!(error = %e, "No usable EXIF data");
            return metadata;
        }
    };

    if let Some(orientation) = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| orientation_of(&field.value))
    {
        metadata.orientation = orientation;
    }
    metadata.title = exif
        .get_field(Tag::ImageDescription, In::PRIMARY)
        .and_then(|field| ascii_title(&field.value));

    metadata
}

/// A slide read from disk: its texture for the window, its info for the controller.
pub struct LoadedSlide {
    pub texture: Texture2D,
    pub info: SlideInfo,
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_slide(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<LoadedSlide> {
    let file_bytes = fs::read(image_path).map_err(|source| DeckError::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(image_path);
    let metadata = if EXIF_EXTENSIONS.contains(&extension.as_str()) {
        read_exif_metadata(&file_bytes)
    } else {
        ExifMetadata::default()
    };

    let image_error = |reason: String| DeckError::Image {
        path: image_path.to_path_buf(),
        reason,
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| image_error(e.to_string()))?;

    // 1 = Normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    match metadata.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if metadata.orientation != 1 {
        tracing::debug!(path = ?image_path, orientation = metadata.orientation, "Applied EXIF orientation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| image_error(e.to_string()))?;

    Ok(LoadedSlide {
        texture,
        info: SlideInfo::new(metadata.title),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exif::experimental::Writer;
    use exif::Field;
    use std::fs::File;

    fn tiff_with(fields: &[Field]) -> Vec<u8> {
        let mut writer = Writer::new();
        for field in fields {
            writer.push_field(field);
        }
        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, false).unwrap();
        buf.into_inner()
    }

    fn field(tag: Tag, value: Value) -> Field {
        Field { tag, ifd_num: In::PRIMARY, value }
    }

    #[test]
    fn image_paths_are_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.gif"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.PNG", "c.gif"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(DeckError::NoImages(_))
        ));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(matches!(
            load_sorted_image_paths(&missing),
            Err(DeckError::Io { .. })
        ));
    }

    #[test]
    fn ascii_title_skips_blank_strings() {
        let value = Value::Ascii(vec![b"  ".to_vec(), b" Roadmap ".to_vec()]);
        assert_eq!(ascii_title(&value), Some("Roadmap".to_string()));
        assert_eq!(ascii_title(&Value::Ascii(vec![])), None);
        assert_eq!(ascii_title(&Value::Short(vec![1])), None);
    }

    #[test]
    fn orientation_reads_first_short() {
        assert_eq!(orientation_of(&Value::Short(vec![6, 1])), Some(6));
        assert_eq!(orientation_of(&Value::Short(vec![])), None);
    }

    #[test]
    fn garbage_bytes_give_default_metadata() {
        assert_eq!(read_exif_metadata(b"not an image"), ExifMetadata::default());
    }

    #[test]
    fn exif_block_yields_title_and_orientation() {
        let bytes = tiff_with(&[
            field(Tag::ImageDescription, Value::Ascii(vec![b"Quarterly Roadmap".to_vec()])),
            field(Tag::Orientation, Value::Short(vec![6])),
        ]);
        assert_eq!(
            read_exif_metadata(&bytes),
            ExifMetadata { orientation: 6, title: Some("Quarterly Roadmap".to_string()) }
        );
    }

    #[test]
    fn blank_description_leaves_title_unset() {
        let bytes = tiff_with(&[
            field(Tag::ImageDescription, Value::Ascii(vec![b"   ".to_vec()])),
            field(Tag::Orientation, Value::Short(vec![3])),
        ]);
        let metadata = read_exif_metadata(&bytes);
        assert_eq!(metadata.orientation, 3);
        assert_eq!(metadata.title, None);
    }

    #[test]
    fn missing_orientation_defaults_to_normal() {
        let bytes = tiff_with(&[field(
            Tag::ImageDescription,
            Value::Ascii(vec![b"Intro".to_vec()]),
        )]);
        let metadata = read_exif_metadata(&bytes);
        assert_eq!(metadata.orientation, 1);
        assert_eq!(SlideInfo::new(metadata.title).title.as_deref(), Some("Intro"));
    }
}
