// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Uploaded image handling
//!
//! Images are forwarded to the provider as opaque bytes. Only the leading
//! magic bytes are inspected, to pick a MIME type when the client sent none.

use bytes::Bytes;
use std::path::Path;
use thiserror::Error;

/// File name used when the client did not send one
pub const DEFAULT_FILE_NAME: &str = "image.jpg";

/// MIME type used when neither the client nor the magic bytes tell us
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Empty file uploaded")]
    Empty,

    #[error("Image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Image formats recognised by their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
    Tiff,
}

impl ImageKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::WebP => "image/webp",
            ImageKind::Bmp => "image/bmp",
            ImageKind::Tiff => "image/tiff",
        }
    }
}

/// Detect image format from magic bytes
pub fn detect_kind(bytes: &[u8]) -> Option<ImageKind> {
    match bytes {
        // PNG: 89 50 4E 47 (0x89 P N G)
        [0x89, 0x50, 0x4E, 0x47, ..] => Some(ImageKind::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Some(ImageKind::Jpeg),

        // WebP: RIFF .... WEBP
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Some(ImageKind::WebP),

        // GIF: GIF87a or GIF89a
        [0x47, 0x49, 0x46, 0x38, x, ..] if *x == 0x37 || *x == 0x39 => Some(ImageKind::Gif),

        // BMP: BM
        [0x42, 0x4D, ..] => Some(ImageKind::Bmp),

        // TIFF: II (little-endian) or MM (big-endian)
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => Some(ImageKind::Tiff),

        _ => None,
    }
}

/// A validated image ready to be forwarded for inference
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Validate uploaded bytes and fill in missing metadata.
    ///
    /// Blank names fall back to [`DEFAULT_FILE_NAME`]; a blank content type
    /// is sniffed from the bytes, then falls back to [`DEFAULT_CONTENT_TYPE`].
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Bytes,
        max_bytes: usize,
    ) -> Result<Self, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(UploadError::TooLarge(bytes.len(), max_bytes));
        }

        let file_name = file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        let content_type = content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| {
                detect_kind(&bytes)
                    .map(ImageKind::mime_type)
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string()
            });

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Read an image from disk; the MIME type is always sniffed.
    pub async fn from_path(path: &Path, max_bytes: usize) -> Result<Self, UploadError> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Self::new(file_name, None, Bytes::from(data), max_bytes)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
