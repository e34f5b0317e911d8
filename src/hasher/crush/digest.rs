use super::WORD;
use std::fmt;

/// Final 8-byte fingerprint. Displayed as 16 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; WORD]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; WORD] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<[u8; WORD]> for Digest {
    fn from(bytes: [u8; WORD]) -> Self {
        Digest(bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", u64::from_be_bytes(self.0))
    }
}

#[cfg(test)]
mod test {
    use super::Digest;

    #[test]
    fn hex_keeps_leading_zeros() {
        let digest = Digest::from([0x00, 0x0a, 0, 0, 0, 0, 0, 0xff]);
        assert_eq!(digest.to_hex(), "000a0000000000ff");
        assert_eq!(digest.to_hex().len(), 16);
    }
}
