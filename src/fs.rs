// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing whole files as byte buffers.
//!
//! Every failure is returned as an [`FsError`] naming the path involved;
//! nothing here panics. Reads are bounded: a file longer than its
//! destination (a fixed array, a caller's region, or
//! [`MAX_FILE_SIZE`] for growable buffers) is refused before any byte is
//! read.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::MAX_FILE_SIZE;
use crate::error::FsError;

/// Path reported for errors on writers that are not files.
const STREAM: &str = "<stream>";

/// A buffer type a whole file can be read into.
pub trait ReadTarget: Sized {
    /// Read all `len` bytes of `file`.
    fn read_from(file: &mut File, len: u64, path: &Path) -> Result<Self, FsError>;
}

impl ReadTarget for Vec<u8> {
    fn read_from(file: &mut File, len: u64, path: &Path) -> Result<Self, FsError> {
        if len > MAX_FILE_SIZE {
            return Err(FsError::too_large(path, len, MAX_FILE_SIZE));
        }
        let capacity = usize::try_from(len).map_err(|_| FsError::out_of_memory(path, len))?;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| FsError::out_of_memory(path, len))?;
        // Bytes appended after the size check are not read.
        Read::by_ref(file)
            .take(len)
            .read_to_end(&mut bytes)
            .map_err(|e| FsError::from_io(e, path))?;
        Ok(bytes)
    }
}

impl ReadTarget for String {
    fn read_from(file: &mut File, len: u64, path: &Path) -> Result<Self, FsError> {
        let bytes = Vec::<u8>::read_from(file, len, path)?;
        String::from_utf8(bytes).map_err(|e| FsError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }
}

/// Fixed arrays need the file to be exactly `N` bytes long.
impl<const N: usize> ReadTarget for [u8; N] {
    fn read_from(file: &mut File, len: u64, path: &Path) -> Result<Self, FsError> {
        let limit = N as u64;
        if len > limit {
            return Err(FsError::too_large(path, len, limit));
        }
        let mut bytes = [0u8; N];
        file.read_exact(&mut bytes)
            .map_err(|e| FsError::from_io(e, path))?;
        Ok(bytes)
    }
}

/// Length of the file at `path`, in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64, FsError> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
    Ok(metadata.len())
}

/// Read the whole file at `path` into a new `B`.
///
/// ```no_run
/// let header: [u8; 16] = rose::fs::read_file("header.bin")?;
/// let text: String = rose::fs::read_file("notes.txt")?;
/// # Ok::<(), rose::FsError>(())
/// ```
pub fn read_file<B: ReadTarget>(path: impl AsRef<Path>) -> Result<B, FsError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| FsError::from_io(e, path))?;
    let len = file
        .metadata()
        .map_err(|e| FsError::from_io(e, path))?
        .len();
    tracing::debug!(path = %path.display(), len, "reading file");
    B::read_from(&mut file, len, path)
}

/// Read the whole file at `path` into the front of `region`.
///
/// Returns the number of bytes read; bytes of `region` past that are left
/// as they were.
pub fn read_into(path: impl AsRef<Path>, region: &mut [u8]) -> Result<usize, FsError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| FsError::from_io(e, path))?;
    let len = file
        .metadata()
        .map_err(|e| FsError::from_io(e, path))?
        .len();
    let limit = region.len() as u64;
    if len > limit {
        return Err(FsError::too_large(path, len, limit));
    }
    // len <= region.len(), so it fits in usize
    let count = len as usize;
    file.read_exact(&mut region[..count])
        .map_err(|e| FsError::from_io(e, path))?;
    tracing::debug!(path = %path.display(), count, "read file into region");
    Ok(count)
}

/// Write all of `bytes` to `writer`.
pub fn write_to<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> Result<(), FsError> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| FsError::from_io(e, Path::new(STREAM)))
}

/// Create (or truncate) the file at `path` and write `bytes` to it.
pub fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), FsError> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| FsError::from_io(e, path))?;
    file.write_all(bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| FsError::from_io(e, path))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote file");
    Ok(())
}
