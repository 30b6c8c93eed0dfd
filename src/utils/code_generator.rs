//! Short code generation.

use rand::Rng;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 8;

/// Symbols a generated code may contain.
///
/// URL-safe, with the look-alike characters `0`, `O`, `1`, `I` and `l`
/// removed. 59 symbols at 8 positions gives a ~2^47 code space, so
/// collisions are rare but possible and the allocator retries on them.
const CODE_ALPHABET: &[u8] = b"23456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ-_";

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Uniqueness is a birthday-bound probabilistic property, not a
/// guarantee; the store's uniqueness constraint is the authority.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` has the exact shape of a generated code.
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
