use crate::{
    hasher::crush::{Crush, Digest, Params},
    Hasher, Reader, E,
};
use log::debug;
use std::{
    fs,
    io::{self, Read},
    path::Path,
    time::Instant,
};

/// Defines the strategy for reading a source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReadingStrategy {
    /// Reads the source chunk by chunk. The size of a chunk is defined by `Params`. Memory usage
    /// doesn't depend on the size of the source.
    #[default]
    Buffer,
    /// Reads the whole source into memory and hashes it at once.
    Complete,
    /// Maps the file into memory and hashes the mapping. Requires a reader supporting `mmap()`,
    /// for example `reader::mapping::Mapping`.
    MemoryMapped,
}

/// Result of hashing a single source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub digest: Digest,
    /// The digest equals the digest of the untouched initial state, which most likely means the
    /// source is all zeroes with a length divisible by 8 (or empty).
    pub base_state: bool,
}

impl Outcome {
    fn from_hasher(hasher: &Crush) -> Result<Self, E> {
        Ok(Self {
            digest: hasher.digest()?,
            base_state: hasher.is_base_state()?,
        })
    }
}

/// Options of hashing: reading strategy and parameters of the algorithm.
#[derive(Debug, Clone, Default)]
pub struct Options {
    strategy: ReadingStrategy,
    params: Params,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reading_strategy(mut self, strategy: ReadingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Hashes any byte source chunk by chunk. The reading strategy is ignored here: a plain `Read`
    /// can only be streamed.
    pub fn hash_reader<S: Read>(&self, mut source: S) -> Result<Outcome, E> {
        let mut hasher = Crush::with_params(self.params);
        stream(&mut hasher, &mut source, self.params.get_chunk_size())?;
        hasher.finish()?;
        Outcome::from_hasher(&hasher)
    }

    /// Hashes a file using the configured reading strategy.
    ///
    /// # Errors
    ///
    /// - `E::NotFound` if the file does not exist.
    /// - `E::IsDirectory` if the path points to a directory.
    /// - `E::IOError` if the file cannot be read.
    /// - `E::ReaderError` if the reader fails, for example doesn't support memory mapping or
    ///   cannot map the file.
    pub fn hash_file<R: Reader, P: AsRef<Path>>(&self, path: P) -> Result<Outcome, E> {
        let path = path.as_ref();
        let md = fs::metadata(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                E::NotFound(path.to_path_buf())
            } else {
                E::IOError(path.to_path_buf(), err)
            }
        })?;
        if md.is_dir() {
            return Err(E::IsDirectory(path.to_path_buf()));
        }
        let now = Instant::now();
        let mut reader = R::bind(path);
        let mut hasher = Crush::with_params(self.params);
        let mut apply = || -> Result<(), E> {
            match self.strategy {
                ReadingStrategy::Buffer => {
                    stream(&mut hasher, &mut reader, self.params.get_chunk_size())?;
                }
                ReadingStrategy::Complete => {
                    let mut buffer = Vec::new();
                    reader.read_to_end(&mut buffer)?;
                    hasher.absorb(&buffer)?;
                }
                ReadingStrategy::MemoryMapped => {
                    let mapped = reader.mmap().map_err(Into::<E>::into)?;
                    hasher.absorb(mapped)?;
                }
            };
            Ok(())
        };
        apply().map_err(|err| match err {
            E::ReadingIOError(err) => E::IOError(path.to_path_buf(), err),
            E::Reader(msg) => E::ReaderError(path.to_path_buf(), msg),
            err => err,
        })?;
        hasher.finish()?;
        debug!(
            "hashed {} ({} bytes, {:?}) in {}µs",
            path.display(),
            md.len(),
            self.strategy,
            now.elapsed().as_micros()
        );
        Outcome::from_hasher(&hasher)
    }
}

/// Hashes a byte source with default parameters.
pub fn hash<S: Read>(source: S) -> Result<Outcome, E> {
    Options::new().hash_reader(source)
}

/// Hashes a file with default parameters, reading it chunk by chunk.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Outcome, E> {
    Options::new().hash_file::<crate::reader::buffering::Buffering, P>(path)
}

/// Pushes the source into the hasher chunk by chunk until the end of the stream. A chunk shorter
/// than requested is the last one.
fn stream<H: Hasher, S: Read>(hasher: &mut H, source: &mut S, chunk_size: usize) -> Result<(), E> {
    let mut buffer = vec![0u8; chunk_size];
    let mut chunks: usize = 0;
    loop {
        let read = read_chunk(source, &mut buffer)?;
        if read == 0 {
            break;
        }
        chunks += 1;
        hasher
            .absorb(&buffer[..read])
            .map_err(Into::<E>::into)?;
        if read < buffer.len() {
            break;
        }
    }
    debug!("absorbed {chunks} chunk(s) of up to {chunk_size} bytes");
    Ok(())
}

/// Fills `buffer` from `source`. Returns fewer bytes than the buffer length only at the end of the
/// stream: a single `read()` may legitimately return less without the stream being exhausted.
pub(crate) fn read_chunk<S: Read>(source: &mut S, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match source.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
