use sha1::{Digest as _, Sha1};

/// The number of bytes in an address digest.
pub const DIGEST_BYTES: usize = 20;

/// Computes the salted digest of an address.
///
/// The digest is SHA-1 over the address bytes immediately followed by the salt
/// bytes, with no separator and no normalization of either input. Changing the
/// hash function changes every mnemonic ever produced for a given salt.
///
/// # Arguments
///
/// * `address` - The address text, exactly as supplied by the caller
/// * `salt` - The secret salt
///
/// # Returns
///
/// A 20-byte digest
pub fn digest(address: &str, salt: &str) -> [u8; DIGEST_BYTES] {
    digest_bytes(address.as_bytes(), salt.as_bytes())
}

pub(crate) fn digest_bytes(address: &[u8], salt: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut hasher = Sha1::new();
    hasher.update(address);
    hasher.update(salt);
    hasher.finalize().into()
}
