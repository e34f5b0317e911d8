mod digest;
mod error;
mod folder;
mod nlfsr;

use super::Hasher;
pub use digest::Digest;
pub use error::E;
pub use folder::{BlockFolder, State};
use log::debug;
pub use nlfsr::diffuse;

/// Size of a folded word and of the state, in bytes.
pub const WORD: usize = 8;
/// Seed of the state: big-endian bytes of the fractional part of sqrt(3).
pub const INITIAL_STATE: u64 = 0x1c98c677de371c7d;
/// Pads an incomplete trailing word.
pub const FILL_BYTE: u8 = 0x37;
/// Default size of a single read from the source.
pub const READ_CHUNK_SIZE: usize = 4_096_000;
/// Digest of the untouched initial state. Any all-zero input with a length divisible by 8
/// (the empty input included) produces it.
pub const BASE_STATE_DIGEST: &str = "b4bb4023dcbf444b";

/// Constants of the algorithm. `Params::default()` gives the values every published digest is
/// computed with; other values produce incompatible digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub(crate) initial_state: u64,
    pub(crate) fill: u8,
    pub(crate) chunk_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            initial_state: INITIAL_STATE,
            fill: FILL_BYTE,
            chunk_size: READ_CHUNK_SIZE,
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_state(mut self, state: u64) -> Self {
        self.initial_state = state;
        self
    }

    pub fn fill(mut self, fill: u8) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the size of a single read. Only affects speed and memory, never the digest.
    ///
    /// # Errors
    ///
    /// - `E::InvalidChunkSize` if `size` is zero or not a multiple of 8.
    pub fn chunk_size(mut self, size: usize) -> Result<Self, E> {
        if size == 0 || size % WORD != 0 {
            return Err(E::InvalidChunkSize(size));
        }
        self.chunk_size = size;
        Ok(self)
    }

    pub fn get_chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Digest produced when nothing changed the initial state.
    pub fn base_digest(&self) -> Digest {
        Digest::from(diffuse(State::new(self.initial_state).to_bytes()))
    }
}

/// Streaming 64-bit fingerprint: XOR-fold of big-endian words followed by `diffuse`.
pub struct Crush {
    params: Params,
    folder: BlockFolder,
    digest: Option<Digest>,
    sealed: bool,
}

impl Default for Crush {
    fn default() -> Self {
        Self::with_params(Params::default())
    }
}

impl Crush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: Params) -> Self {
        Self {
            params,
            folder: BlockFolder::new(State::new(params.initial_state), params.fill),
            digest: None,
            sealed: false,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Folds a chunk into the state. A chunk marked as final gets its incomplete trailing word
    /// padded; no further bytes are expected after it.
    ///
    /// # Errors
    ///
    /// - `E::AlreadyFinished` if a final chunk has already been folded or the digest has already
    ///   been produced.
    pub fn fold(&mut self, chunk: &[u8], is_final: bool) -> Result<(), E> {
        if self.sealed || self.digest.is_some() {
            return Err(E::AlreadyFinished);
        }
        self.folder.fold(chunk, is_final);
        self.sealed = is_final;
        Ok(())
    }

    pub fn digest(&self) -> Result<Digest, E> {
        self.digest.ok_or(E::NotFinished)
    }

    /// `true` if the digest equals the digest of the untouched initial state. This is a hint only:
    /// the input is most likely all zeroes with a length divisible by 8, but any input folding back
    /// to the initial state gives the same answer.
    pub fn is_base_state(&self) -> Result<bool, E> {
        Ok(self.digest()? == self.params.base_digest())
    }
}

impl Hasher for Crush {
    type Error = E;

    fn new() -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        self.fold(data, false)
    }

    fn finish(&mut self) -> Result<(), E> {
        if self.digest.is_some() {
            return Err(E::AlreadyFinished);
        }
        if !self.sealed {
            self.fold(&[], true)?;
        }
        let state = self.folder.state();
        let digest = Digest::from(diffuse(state.to_bytes()));
        debug!("state {:016x} diffused into {digest}", state.value());
        self.digest = Some(digest);
        Ok(())
    }

    fn hash(&self) -> Result<&[u8], E> {
        Ok(self
            .digest
            .as_ref()
            .ok_or(E::NotFinished)?
            .as_bytes()
            .as_slice())
    }
}
