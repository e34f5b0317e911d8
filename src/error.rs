use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("File {0} does not exist")]
    NotFound(PathBuf),
    #[error("Given path {0} is a directory")]
    IsDirectory(PathBuf),
    #[error("Fail to read {0}: {1}")]
    IOError(PathBuf, io::Error),
    #[error("Reading IO error: {0}")]
    ReadingIOError(io::Error),
    #[error("Reader error: {0}")]
    Reader(String),
    #[error("Reader failed on {0}: {1}")]
    ReaderError(PathBuf, String),
    #[error("Hasher error: {0}")]
    Hasher(String),
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::ReadingIOError(err)
    }
}

impl From<(PathBuf, io::Error)> for E {
    fn from(err: (PathBuf, io::Error)) -> Self {
        E::IOError(err.0, err.1)
    }
}
