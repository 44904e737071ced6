//! Salted, pronounceable mnemonics for IP addresses.
//!
//! This crate maps an IPv4 or IPv6 address to a short string of four
//! syllables, such as `kuryuiko`, so that machines can be referred to by
//! something easier to remember and say than their address.
//!
//! The mapping is keyed by a secret salt: the same address and salt always
//! produce the same mnemonic, but the address cannot be recovered from the
//! mnemonic without the salt.
//!
//! # Pipeline
//!
//! - [`classify`] checks that the input is IPv4 or IPv6 text. Invalid input never reaches the hash.
//! - [`digest`] hashes the address text followed by the salt with SHA-1.
//! - [`encode`] turns the 20-byte digest into four onset/rhyme syllables.
//!
//! # Examples
//!
//! ```rust
//! use ipmnemonic::Mnemonizer;
//!
//! let checked = Mnemonizer::new("testsalt-testsalt-testsalt-testsalt-1234");
//! assert!(checked.is_clean());
//! let mnem = checked.into_inner();
//!
//! assert_eq!(mnem.apply_str("192.168.1.1").as_deref(), Some("kuryuiko"));
//! assert_eq!(mnem.apply_str("::1").as_deref(), Some("suzichemo"));
//! assert_eq!(mnem.apply("hello"), None);
//!
//! // Short salts still work, but are reported.
//! let weak = Mnemonizer::new("short");
//! assert!(!weak.is_clean());
//! assert!(weak.value().apply("10.0.0.1").is_some());
//! ```
//!
//! # Security Considerations
//!
//! - A mnemonic carries less than 32 bits, so collisions between addresses are expected
//! - With a short or public salt, the mnemonics of the whole IPv4 space can be precomputed; use at least 40 characters of secret salt
//! - The hash function is fixed to SHA-1 so that existing salts keep producing the same mnemonics

pub(crate) mod address;
pub(crate) mod diagnostic;
pub(crate) mod digest;
pub(crate) mod encoder;
pub(crate) mod mnemonizer;

pub use address::{classify, AddressKind};
pub use diagnostic::{Checked, Diagnostic};
pub use digest::{digest, DIGEST_BYTES};
pub use encoder::{
    encode, encode_via_hex, Mnemonic, ParseMnemonicError, Syllable, ONSETS, RHYMES, SYLLABLES,
};
pub use mnemonizer::Mnemonizer;

pub mod reexports {
    #[cfg(feature = "random")]
    pub use rand;
    pub use sha1;
}
