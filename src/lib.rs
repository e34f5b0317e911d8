#![doc = include_str!("../README.md")]

mod error;
pub mod hasher;
pub mod reader;
pub mod runner;
#[cfg(test)]
pub(crate) mod test;

pub use error::E;
pub use hasher::{
    crush::{Crush, Digest, Params, BASE_STATE_DIGEST, FILL_BYTE, INITIAL_STATE, READ_CHUNK_SIZE},
    Hasher,
};
pub use reader::Reader;
pub use runner::{hash, hash_file, Options, Outcome, ReadingStrategy};
