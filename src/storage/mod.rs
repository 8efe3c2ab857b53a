//! Storage Module.
//!
//! Persists secrets, shares and reconstructions as encoded image files.
//! Writes go through [`raw_files::write_atomic`] so a crash never leaves a
//! half-written share on disk.

pub mod raw_files;

use std::fmt;
use std::path::Path;

use crate::codec::{CodecError, ImageCodec};
use crate::core::image::PixelImage;

/// Errors related to storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// File not found.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// IO error (generic).
    IoError,
    /// Invalid path or filename.
    InvalidPath,
    /// The file does not hold a decodable image.
    Codec(CodecError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound => write!(f, "File not found"),
            StorageError::PermissionDenied => write!(f, "Permission denied"),
            StorageError::IoError => write!(f, "I/O error"),
            StorageError::InvalidPath => write!(f, "Invalid path or filename"),
            StorageError::Codec(e) => write!(f, "Image codec error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied,
            _ => StorageError::IoError,
        }
    }
}

impl From<CodecError> for StorageError {
    fn from(err: CodecError) -> Self {
        StorageError::Codec(err)
    }
}

/// Encodes `image` with `codec` and writes it atomically to `path`.
pub fn save_image<P, C>(path: P, image: &PixelImage, codec: &C) -> Result<(), StorageError>
where
    P: AsRef<Path>,
    C: ImageCodec + ?Sized,
{
    let bytes = codec.encode(image)?;
    log::debug!(
        "Saving {}x{} image ({} bytes) to {}",
        image.width(),
        image.height(),
        bytes.len(),
        path.as_ref().display()
    );
    raw_files::write_atomic(path, &bytes)
}

/// Reads `path` and decodes it with `codec`.
pub fn load_image<P, C>(path: P, codec: &C) -> Result<PixelImage, StorageError>
where
    P: AsRef<Path>,
    C: ImageCodec + ?Sized,
{
    let bytes = raw_files::read_file(path)?;
    Ok(codec.decode(&bytes)?)
}
