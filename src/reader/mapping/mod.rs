mod error;

use super::Reader;
pub use error::E;
use log::debug;
use memmap2::{Mmap, MmapOptions};
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Reader which maps the whole file into memory. Also supports plain reading.
///
/// Sources reporting a size of zero (empty files, but also procfs entries, pipes and character
/// devices) cannot be mapped; their content is read into memory instead.
#[derive(Default)]
pub struct Mapping {
    path: PathBuf,
    file: Option<File>,
    mmap: Option<Mmap>,
    content: Option<Vec<u8>>,
}

impl Mapping {
    fn file(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            self.file = Some(File::open(&self.path)?);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other(format!("{} isn't opened", self.path.display())))
    }
}

impl Reader for Mapping {
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
        let file = self.file()?;
        let len = file.metadata()?.len();
        let len = usize::try_from(len).map_err(|_| E::FileIsTooBig(len))?;
        if len == 0 {
            let mut content = Vec::new();
            self.read_to_end(&mut content)?;
            debug!(
                "{} has no size; read {} bytes instead of mapping",
                self.path.display(),
                content.len()
            );
            return Ok(&self.content.insert(content)[..]);
        }
        let mmap = unsafe { MmapOptions::new().len(len).map(&*file) }?;
        Ok(&self.mmap.insert(mmap)[..])
    }
}

impl Read for Mapping {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.file()?.read(buffer)
    }
}
