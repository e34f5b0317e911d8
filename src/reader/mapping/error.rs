use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to map: {0}")]
    IOError(io::Error),
    #[error("File is too big to be mapped into memory: {0} bytes")]
    FileIsTooBig(u64),
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::IOError(err)
    }
}

impl From<E> for crate::E {
    fn from(val: E) -> Self {
        crate::E::Reader(val.to_string())
    }
}
