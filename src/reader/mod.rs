pub mod buffering;
pub mod mapping;

use std::{error, io::Read, path::Path};

/// A trait that extends the standard `Read` trait with the ability to be bound to a file and,
/// optionally, to map it into memory.
///
/// The runner uses a reader as follows for each file that needs to be hashed:
/// - Bind the instance to the target file.
/// - Read the file using the instance (or map it, with `ReadingStrategy::MemoryMapped`).
/// - Drop the instance.
pub trait Reader: Read {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<crate::E>;

    /// Binds the reader to the specified file path. The file is opened lazily on first access.
    fn bind<P: AsRef<Path>>(path: P) -> Self
    where
        Self: Sized;

    /// Memory-maps the file for reading. This method will be called only if the runner is used
    /// with `ReadingStrategy::MemoryMapped`.
    ///
    /// If the implementation of `Reader` doesn't support memory mapping, it should return an error.
    ///
    /// # Returns
    ///
    /// - `Result<&[u8], Self::Error>`: On success, returns a reference to the memory-mapped data.
    ///   On failure, returns an error of type `Self::Error`.
    fn mmap(&mut self) -> Result<&[u8], Self::Error>;
}
