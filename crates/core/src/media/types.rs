use std::str::FromStr;

use serde::Serialize;

/// Image formats the media store accepts for listing and serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Webp,
    Svg,
}

impl ImageExtension {
    /// Every allowed extension, in display order.
    pub const ALL: [ImageExtension; 6] = [
        ImageExtension::Png,
        ImageExtension::Jpg,
        ImageExtension::Jpeg,
        ImageExtension::Gif,
        ImageExtension::Webp,
        ImageExtension::Svg,
    ];

    /// Returns the lowercase extension without the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Gif => "gif",
            ImageExtension::Webp => "webp",
            ImageExtension::Svg => "svg",
        }
    }

    /// Returns the MIME type used when serving a file of this kind.
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageExtension::Png => "image/png",
            ImageExtension::Jpg | ImageExtension::Jpeg => "image/jpeg",
            ImageExtension::Gif => "image/gif",
            ImageExtension::Webp => "image/webp",
            ImageExtension::Svg => "image/svg+xml",
        }
    }

    /// Extracts the extension of a file name, case-insensitively.
    ///
    /// Returns `None` for names without a `.` or with an extension outside
    /// the allow-list.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        ext.parse().ok()
    }
}

impl FromStr for ImageExtension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageExtension::ALL
            .into_iter()
            .find(|ext| ext.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// One stored image, identified by its file name within the store root.
///
/// The bytes stay on disk; this only describes the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    pub name: String,
    pub extension: ImageExtension,
}

impl MediaFile {
    /// Describes `name` as a listable image.
    ///
    /// Hidden names (leading `.`) and names outside the extension allow-list
    /// are not media files and yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.starts_with('.') {
            return None;
        }

        let extension = ImageExtension::from_file_name(name)?;

        Some(Self {
            name: name.to_string(),
            extension,
        })
    }

    pub fn content_type(&self) -> &'static str {
        self.extension.content_type()
    }
}
