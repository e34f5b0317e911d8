mod error;

use super::Reader;
pub use error::E;
use log::debug;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Plain file reader. Reading happens in chunks requested by the runner; the file is opened on
/// the first read.
#[derive(Default)]
pub struct Buffering {
    path: PathBuf,
    file: Option<File>,
    read: u64,
}

impl Buffering {
    /// Bytes read so far.
    pub fn position(&self) -> u64 {
        self.read
    }

    fn file(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            self.file = Some(File::open(&self.path)?);
            debug!("opened {} for buffered reading", self.path.display());
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other(format!("{} isn't opened", self.path.display())))
    }
}

impl Reader for Buffering {
    type Error = E;
    fn bind<P: AsRef<Path>>(path: P) -> Self
    where
        Self: Sized,
    {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }
    fn mmap(&mut self) -> Result<&[u8], E> {
        Err(E::MemoryMappingNotSupported)
    }
}

impl Read for Buffering {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let read = self.file()?.read(buffer)?;
        self.read += read as u64;
        Ok(read)
    }
}
