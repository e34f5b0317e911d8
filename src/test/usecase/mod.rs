use log::debug;
use rand::Rng;
use std::{
    env::temp_dir,
    fs::{create_dir, remove_dir_all, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};
use uuid::Uuid;

/// A set of files in a unique folder under the system temp dir.
pub struct UseCase {
    pub files: Vec<PathBuf>,
    pub root: PathBuf,
}

impl UseCase {
    pub fn new() -> Result<Self, io::Error> {
        let root = temp_dir().join(Uuid::new_v4().to_string());
        if root.exists() {
            remove_dir_all(&root)?;
        }
        create_dir(&root)?;
        Ok(Self {
            files: Vec::new(),
            root,
        })
    }

    /// Creates a file with the given content.
    pub fn file(&mut self, content: &[u8]) -> Result<PathBuf, io::Error> {
        let filename = self.root.join(Uuid::new_v4().to_string());
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&filename)?;
        file.write_all(content)?;
        file.flush()?;
        debug!("created {} ({} bytes)", filename.display(), content.len());
        self.files.push(filename.clone());
        Ok(filename)
    }

    /// Creates a file of `len` random bytes.
    pub fn random(&mut self, len: usize) -> Result<(PathBuf, Vec<u8>), io::Error> {
        let mut content = vec![0u8; len];
        rand::thread_rng().fill(&mut content[..]);
        Ok((self.file(&content)?, content))
    }

    /// Creates a nested folder.
    pub fn folder(&self) -> Result<PathBuf, io::Error> {
        let folder = self.root.join(Uuid::new_v4().to_string());
        create_dir(&folder)?;
        Ok(folder)
    }

    pub fn clean(&self) -> Result<(), io::Error> {
        if !self.root.exists() {
            return Ok(());
        }
        let Some(parent) = self.root.parent() else {
            return Ok(());
        };
        if !parent.starts_with(temp_dir()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("parent of root isn't belong to {}", temp_dir().display()),
            ));
        }
        remove_dir_all(&self.root)?;
        debug!("Removed {}", self.root.display());
        Ok(())
    }
}
