//! Case-insensitive djb2 hashing of function names.
//!
//! Names are hashed code point by code point with `0x20` OR-ed in, which folds
//! ASCII letters to lowercase. Non-letters are folded too, so a few distinct
//! names collide (`@` and `` ` `` for instance). Handler names are plain
//! identifiers, where that never matters.

pub(crate) const SEED: u32 = 5381;
const CASE_FOLD: u32 = 0x20;

/// Hash of `url`, checked by the ident-like consumer before handler lookup.
pub(crate) const URL_HASH: u32 = name_hash("url");

#[inline]
pub(crate) const fn mix(hash: u32, code_point: u32) -> u32 {
    hash.wrapping_mul(33).wrapping_add(code_point | CASE_FOLD)
}

/// Hashes a function name the same way the tokenizer hashes the code points
/// in front of a `(`, so the result can key a [`HandlerTable`](super::HandlerTable).
///
/// ```
/// use csstokenizer::tokenizer::name_hash;
/// assert_eq!(name_hash("Contains"), name_hash("contains"));
/// assert_ne!(name_hash("contains"), name_hash("has-text"));
/// ```
pub const fn name_hash(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash = SEED;
    let mut i = 0;
    while i < bytes.len() {
        let (code_point, width) = decode_utf8(bytes, i);
        hash = mix(hash, code_point);
        i += width;
    }
    hash
}

/// Decodes the scalar starting at `bytes[i]`. `bytes` comes from a `&str`,
/// so the sequence is always complete and well formed.
const fn decode_utf8(bytes: &[u8], i: usize) -> (u32, usize) {
    let lead = bytes[i] as u32;
    if lead < 0x80 {
        (lead, 1)
    } else if lead < 0xE0 {
        (((lead & 0x1F) << 6) | continuation(bytes, i + 1), 2)
    } else if lead < 0xF0 {
        (
            ((lead & 0x0F) << 12) | (continuation(bytes, i + 1) << 6) | continuation(bytes, i + 2),
            3,
        )
    } else {
        (
            ((lead & 0x07) << 18)
                | (continuation(bytes, i + 1) << 12)
                | (continuation(bytes, i + 2) << 6)
                | continuation(bytes, i + 3),
            4,
        )
    }
}

const fn continuation(bytes: &[u8], i: usize) -> u32 {
    (bytes[i] as u32) & 0x3F
}
