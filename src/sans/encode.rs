//! Helper for rendering match identifiers as text.

use alloc::string::String;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Encode a 16 byte match identifier as unpadded, URL-safe base64.
///
/// The result is always 22 characters long.
pub fn encode_uuid(r: &[u8; 16]) -> String {
    let mut s = String::with_capacity(22);

    let mut chunks = r.chunks_exact(3);
    for c in &mut chunks {
        let n = u32::from(c[0]) << 16 | u32::from(c[1]) << 8 | u32::from(c[2]);
        push_sextets(&mut s, n, 4);
    }

    // 16 bytes leave a single trailing byte, encoded as two characters.
    if let [b] = chunks.remainder() {
        push_sextets(&mut s, u32::from(*b) << 16, 2);
    }

    s
}

/// Push the leading `count` sextets of a 24-bit group.
fn push_sextets(s: &mut String, n: u32, count: usize) {
    for i in 0..count {
        let sextet = (n >> (18 - 6 * i)) & 0x3F;
        s.push(char::from(ALPHABET[sextet as usize]));
    }
}
