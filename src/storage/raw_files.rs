//! Raw File Storage.
//!
//! Byte-level file access used for encoded images.
//!
//! # Security
//! - Files are written atomically (write-sync-rename).

use super::StorageError;

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Largest file [`read_file`] accepts.
const MAX_FILE_LEN: u64 = 1 << 30;

/// Writes data to a file atomically.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), StorageError> {
    let path = path.as_ref();
    let filename = path.file_name().ok_or(StorageError::InvalidPath)?;

    let mut temp_path = path.to_path_buf();
    temp_path.set_file_name(format!("{}.tmp", filename.to_string_lossy()));

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    // Atomic on POSIX.
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Reads data from a file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, StorageError> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    if len > MAX_FILE_LEN {
        return Err(StorageError::IoError);
    }

    let mut buffer = Vec::with_capacity(len as usize);
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_read() {
        let dir = std::env::temp_dir().join("shamir_image_test_raw");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("test_atomic.bin");

        let data = b"share bytes";
        write_atomic(&path, data).unwrap();

        assert!(!path.with_file_name("test_atomic.bin.tmp").exists());
        assert_eq!(read_file(&path).unwrap(), data);

        write_atomic(&path, b"replaced").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"replaced");

        fs::remove_file(&path).unwrap();
        assert_eq!(read_file(&path), Err(StorageError::NotFound));

        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_write_rejects_root() {
        assert_eq!(write_atomic("/", b"x"), Err(StorageError::InvalidPath));
    }
}
