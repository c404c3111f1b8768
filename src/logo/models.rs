use std::path::Path;

use crate::document::common::colors::RESIMIX_BLUE;

/// Label rendered in place of the logo image.
pub const FALLBACK_LABEL: &str = "RESIMIX S.R.L.";

/// Where the logo bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Local,
    Remote,
}

impl SourceKind {
    /// Infer the kind from a location: `http://` and `https://` are remote.
    pub fn infer(location: &str) -> Self {
        let lower = location.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Remote
        } else {
            Self::Local
        }
    }
}

/// Logo source configuration, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSource {
    kind: SourceKind,
    location: String,
    width: u32,
    height: u32,
    force_text_fallback: bool,
}

impl LogoSource {
    pub fn new(kind: SourceKind, location: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            kind,
            location: location.into(),
            width,
            height,
            force_text_fallback: false,
        }
    }

    pub fn local(path: impl AsRef<Path>, width: u32, height: u32) -> Self {
        Self::new(
            SourceKind::Local,
            path.as_ref().to_string_lossy().into_owned(),
            width,
            height,
        )
    }

    pub fn remote(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self::new(SourceKind::Remote, url, width, height)
    }

    /// Build a source whose kind is inferred from `location`.
    pub fn from_location(location: impl Into<String>, width: u32, height: u32) -> Self {
        let location = location.into();
        Self::new(SourceKind::infer(&location), location, width, height)
    }

    pub fn with_text_fallback(mut self, force: bool) -> Self {
        self.force_text_fallback = force;
        self
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn force_text_fallback(&self) -> bool {
        self.force_text_fallback
    }
}

/// Display styling of the text placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    /// Hex RGB without the leading `#`.
    pub color: String,
    pub size_pt: u32,
}

impl TextStyle {
    /// Bold 16pt in brand blue.
    pub fn brand() -> Self {
        Self {
            bold: true,
            color: RESIMIX_BLUE.to_string(),
            size_pt: 16,
        }
    }
}

/// The resolved logo: either image bytes or a styled text placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoAsset {
    Image {
        bytes: Vec<u8>,
        /// Display width in pixels.
        width: u32,
        /// Display height in pixels.
        height: u32,
    },
    Text { label: String, style: TextStyle },
}

impl LogoAsset {
    /// The Resimix text placeholder.
    pub fn placeholder() -> Self {
        Self::Text {
            label: FALLBACK_LABEL.to_string(),
            style: TextStyle::brand(),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}
