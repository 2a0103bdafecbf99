//! Page header shown at the top of every page, e.g. a company name and
//! address block.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};

fn default_size_pt() -> u16 {
    8
}

/// One line of header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLine {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default = "default_size_pt")]
    pub size_pt: u16,
}

impl HeaderLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            size_pt: default_size_pt(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, size_pt: u16) -> Self {
        self.size_pt = size_pt;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported logo image, expected PNG or JPEG")]
    UnsupportedFormat,
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoFormat {
    Png,
    Jpeg,
}

impl LogoFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Picture drawn left of the header lines. Only the pixel size is decoded;
/// the bytes are embedded as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    data: Vec<u8>,
    format: LogoFormat,
    width_px: u32,
    height_px: u32,
}

impl Logo {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, LogoError> {
        let format = match image::guess_format(&data) {
            Ok(ImageFormat::Png) => LogoFormat::Png,
            Ok(ImageFormat::Jpeg) => LogoFormat::Jpeg,
            _ => return Err(LogoError::UnsupportedFormat),
        };
        let (width_px, height_px) =
            ImageReader::with_format(Cursor::new(data.as_slice()), format.image_format())
                .into_dimensions()?;
        if width_px == 0 || height_px == 0 {
            return Err(LogoError::UnsupportedFormat);
        }
        Ok(Self {
            data,
            format,
            width_px,
            height_px,
        })
    }

    pub fn open(path: &Path) -> Result<Self, LogoError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> LogoFormat {
        self.format
    }

    /// Pixel size as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }
}

/// Header lines, each rendered as its own tightly spaced paragraph. With a
/// logo the header becomes a two column table: logo left, lines right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub lines: Vec<HeaderLine>,
    #[serde(skip)]
    pub logo: Option<Logo>,
}

impl Header {
    pub fn new(lines: Vec<HeaderLine>) -> Self {
        Self {
            alignment: Alignment::default(),
            lines,
            logo: None,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.logo.is_none() && self.lines.iter().all(|l| l.text.trim().is_empty())
    }
}
