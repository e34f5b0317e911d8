use super::WORD;

const ROUNDS: usize = 8;
const STEPS: usize = 8;

/// Complemented after every round: even bytes of the working buffer.
const SRC_MASK: [u8; WORD] = [0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00];
/// Complemented after every round: odd bytes of the scratch buffer.
const DST_MASK: [u8; WORD] = [0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF];

/// Non-linear feedback shift register over bytes. Spreads the folded state so that an input byte
/// influences more than its own position in the digest.
///
/// Every step rotates the buffer left by one byte, appends the XOR of all bytes as feedback, and
/// then adds the rotated buffer to itself in reverse byte order (modulo 256). Eight steps make a
/// round; each round ends with the fixed complement masks. The result is the working buffer after
/// eight rounds.
pub fn diffuse(state: [u8; WORD]) -> [u8; WORD] {
    let mut src = state;
    let mut dst = [0u8; WORD];
    for _ in 0..ROUNDS {
        for _ in 0..STEPS {
            let feedback = src.iter().fold(0u8, |acc, b| acc ^ b);
            dst[..WORD - 1].copy_from_slice(&src[1..]);
            dst[WORD - 1] = feedback;
            src = dst;
            for (s, d) in src.iter_mut().zip(dst.iter().rev()) {
                *s = s.wrapping_add(*d);
            }
        }
        for (s, m) in src.iter_mut().zip(SRC_MASK.iter()) {
            *s ^= m;
        }
        // dst is rebuilt by the next step, so this only touches the scratch copy
        for (d, m) in dst.iter_mut().zip(DST_MASK.iter()) {
            *d ^= m;
        }
    }
    src
}
