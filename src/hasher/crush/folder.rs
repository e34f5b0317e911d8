use super::WORD;

/// Running 64-bit accumulator. Kept as an integer and exposed in its big-endian byte form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State(u64);

impl State {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn to_bytes(self) -> [u8; WORD] {
        self.0.to_be_bytes()
    }

    pub fn from_bytes(bytes: [u8; WORD]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    fn absorb(&mut self, word: [u8; WORD]) {
        self.0 ^= u64::from_be_bytes(word);
    }
}

/// Folds a byte stream into a `State` by XOR-ing successive big-endian 8-byte words.
///
/// Chunks may have any length. Bytes of a non-final chunk that do not complete a word are carried
/// over and prefixed to the next chunk, so the result depends on the stream content only and never
/// on the way it was split. Padding with the fill byte happens only when a chunk is marked as final.
#[derive(Debug, Clone)]
pub struct BlockFolder {
    state: State,
    fill: u8,
    tail: [u8; WORD],
    tail_len: usize,
}

impl BlockFolder {
    pub fn new(initial: State, fill: u8) -> Self {
        Self {
            state: initial,
            fill,
            tail: [0u8; WORD],
            tail_len: 0,
        }
    }

    /// Folds `chunk` into the state. With `is_final` set, an incomplete trailing word is padded
    /// with the fill byte and folded as well.
    pub fn fold(&mut self, chunk: &[u8], is_final: bool) {
        let mut chunk = chunk;
        if self.tail_len > 0 {
            let missed = (WORD - self.tail_len).min(chunk.len());
            self.tail[self.tail_len..self.tail_len + missed].copy_from_slice(&chunk[..missed]);
            self.tail_len += missed;
            chunk = &chunk[missed..];
            if self.tail_len == WORD {
                self.state.absorb(self.tail);
                self.tail_len = 0;
            }
        }
        let mut words = chunk.chunks_exact(WORD);
        for word in words.by_ref() {
            let mut buf = [0u8; WORD];
            buf.copy_from_slice(word);
            self.state.absorb(buf);
        }
        let rest = words.remainder();
        if !rest.is_empty() {
            self.tail[..rest.len()].copy_from_slice(rest);
            self.tail_len = rest.len();
        }
        if is_final && self.tail_len > 0 {
            self.tail[self.tail_len..].fill(self.fill);
            self.state.absorb(self.tail);
            self.tail_len = 0;
        }
    }

    /// Number of bytes waiting for the rest of their word.
    pub fn pending(&self) -> usize {
        self.tail_len
    }

    pub fn state(&self) -> State {
        self.state
    }
}
