use std::fmt;

use crate::address::{classify, AddressKind};
use crate::diagnostic::{Checked, Diagnostic};
use crate::digest::digest_bytes;
use crate::encoder::{encode, Mnemonic};

/// Converts addresses to mnemonics under a fixed secret salt.
///
/// The salt is bound at construction and never changes afterwards, so a
/// `Mnemonizer` can be shared freely between threads.
pub struct Mnemonizer {
    salt: Vec<u8>,
}

impl Drop for Mnemonizer {
    fn drop(&mut self) {
        self.salt.fill(0);
    }
}

impl fmt::Debug for Mnemonizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonizer")
            .field("salt_len", &self.salt.len())
            .finish_non_exhaustive()
    }
}

impl Mnemonizer {
    /// The recommended minimum salt length, in bytes.
    pub const MIN_SALT_LEN: usize = 40;

    /// The length of salts returned by `generate_salt`.
    #[cfg(feature = "random")]
    pub const GENERATED_SALT_LEN: usize = 48;

    /// Creates a new Mnemonizer with the given salt.
    ///
    /// This never fails. A salt shorter than [`Self::MIN_SALT_LEN`] is used
    /// as-is and reported as [`Diagnostic::WeakSalt`].
    ///
    /// # Arguments
    ///
    /// * `salt` - The secret salt
    pub fn new(salt: impl Into<String>) -> Checked<Self> {
        Self::with_salt(salt.into().into_bytes(), Vec::new())
    }

    /// Creates a new Mnemonizer from a salt argument that may be missing.
    ///
    /// A missing salt falls back to the empty salt and raises
    /// [`Diagnostic::MissingSalt`] in addition to the weak salt warning.
    pub fn from_arg(salt: Option<&str>) -> Checked<Self> {
        match salt {
            Some(salt) => Self::new(salt),
            None => Self::with_salt(Vec::new(), vec![Diagnostic::MissingSalt.raise()]),
        }
    }

    /// Creates a new Mnemonizer, refusing salts that would raise a diagnostic.
    pub fn new_strict(salt: impl Into<String>) -> Result<Self, Diagnostic> {
        Self::new(salt).into_strict()
    }

    /// Generates a new random salt.
    #[cfg(feature = "random")]
    pub fn generate_salt() -> String {
        use rand::distr::{Alphanumeric, SampleString as _};

        Alphanumeric.sample_string(&mut rand::rng(), Self::GENERATED_SALT_LEN)
    }

    /// Creates a new Mnemonizer with a random salt.
    ///
    /// Mnemonics produced this way cannot be reproduced by another instance.
    #[cfg(feature = "random")]
    pub fn new_random() -> Self {
        Self::new(Self::generate_salt()).into_inner()
    }

    fn with_salt(salt: Vec<u8>, mut diagnostics: Vec<Diagnostic>) -> Checked<Self> {
        if salt.len() < Self::MIN_SALT_LEN {
            diagnostics.push(
                Diagnostic::WeakSalt {
                    len: salt.len(),
                    min: Self::MIN_SALT_LEN,
                }
                .raise(),
            );
        }
        Checked::new(Self { salt }, diagnostics)
    }

    /// The length of the salt, in bytes.
    pub fn salt_len(&self) -> usize {
        self.salt.len()
    }

    /// Converts an address to its mnemonic.
    ///
    /// # Arguments
    ///
    /// * `address` - An IPv4 or IPv6 address, as text
    ///
    /// # Returns
    ///
    /// The mnemonic, or `None` if the address is neither valid IPv4 nor valid IPv6
    pub fn apply(&self, address: &str) -> Option<Mnemonic> {
        let kind = classify(address);
        tracing::trace!(%kind, "classified address");
        if kind == AddressKind::Invalid {
            return None;
        }
        let digest = digest_bytes(address.as_bytes(), &self.salt);
        Some(encode(&digest))
    }

    /// Converts an address to its mnemonic text.
    pub fn apply_str(&self, address: &str) -> Option<String> {
        self.apply(address).map(String::from)
    }

    /// Converts an address argument that may be missing.
    ///
    /// A missing address yields no mnemonic and raises [`Diagnostic::NonTextAddress`].
    pub fn apply_arg(&self, address: Option<&str>) -> Checked<Option<Mnemonic>> {
        match address {
            Some(address) => Checked::new(self.apply(address), Vec::new()),
            None => Checked::new(None, vec![Diagnostic::NonTextAddress.raise()]),
        }
    }

    /// Converts an address given as raw bytes.
    ///
    /// Bytes that are not valid UTF-8 yield no mnemonic and raise [`Diagnostic::NonTextAddress`].
    pub fn apply_bytes(&self, address: &[u8]) -> Checked<Option<Mnemonic>> {
        self.apply_arg(std::str::from_utf8(address).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SALT: &str = "testsalt-testsalt-testsalt-testsalt-1234";

    fn mnemonizer() -> Mnemonizer {
        let checked = Mnemonizer::new(TEST_SALT);
        assert!(checked.is_clean());
        checked.into_inner()
    }

    #[test]
    fn test_golden_vectors() {
        let mnem = mnemonizer();
        let test_vectors = vec![
            ("192.168.1.1", "kuryuiko"),
            ("::1", "suzichemo"),
            ("2001:db8::1", "minyiliri"),
            ("10.0.0.1", "seb'luri"),
            ("255.255.255.255", "kufazepyo"),
        ];

        for (address, expected) in test_vectors {
            assert_eq!(mnem.apply_str(address).as_deref(), Some(expected), "{address}");
        }
    }

    #[test]
    fn test_loose_forms_convert() {
        let mnem = mnemonizer();
        for address in ["1.2.3", "::", "1::", "2001:DB8::1"] {
            assert!(mnem.apply(address).is_some(), "{address}");
        }
        // The address text is hashed as written.
        assert_ne!(mnem.apply("2001:DB8::1"), mnem.apply("2001:db8::1"));
    }

    #[test]
    fn test_invalid_addresses_have_no_mnemonic() {
        for salt in ["", "short", TEST_SALT] {
            let mnem = Mnemonizer::new(salt).into_inner();
            for address in ["hello", "", "256.0.0.1", "1.2.3.", "1:2:3:4:5:6:7:8:9", "fffff::1"] {
                assert_eq!(mnem.apply(address), None, "{address:?}");
            }
        }
    }

    #[test]
    fn test_salt_sensitivity() {
        let a = Mnemonizer::new("other-salt").into_inner();
        let b = Mnemonizer::new("").into_inner();
        assert_eq!(a.apply_str("192.168.1.1").as_deref(), Some("setudyachu"));
        assert_eq!(b.apply_str("192.168.1.1").as_deref(), Some("hyiman'ma"));
        assert_ne!(mnemonizer().apply("192.168.1.1"), a.apply("192.168.1.1"));
    }

    #[test]
    fn test_weak_salt() {
        let checked = Mnemonizer::new("short");
        assert_eq!(
            checked.diagnostics(),
            &[Diagnostic::WeakSalt { len: 5, min: 40 }]
        );
        assert_eq!(checked.value().salt_len(), 5);
        assert!(Mnemonizer::new_strict("short").is_err());
        assert!(Mnemonizer::new_strict(TEST_SALT).is_ok());
    }

    #[test]
    fn test_missing_salt() {
        let checked = Mnemonizer::from_arg(None);
        assert_eq!(
            checked.diagnostics(),
            &[
                Diagnostic::MissingSalt,
                Diagnostic::WeakSalt { len: 0, min: 40 }
            ]
        );
        let mnem = checked.into_inner();
        assert_eq!(mnem.salt_len(), 0);
        assert_eq!(mnem.apply(TEST_SALT), None);
        assert_eq!(mnem.apply_str("192.168.1.1").as_deref(), Some("hyiman'ma"));
        assert!(Mnemonizer::from_arg(Some(TEST_SALT)).is_clean());
    }

    #[test]
    fn test_non_text_address() {
        let mnem = mnemonizer();

        let checked = mnem.apply_arg(None);
        assert_eq!(checked.value(), &None);
        assert_eq!(checked.diagnostics(), &[Diagnostic::NonTextAddress]);

        let checked = mnem.apply_bytes(&[0x31, 0x2e, 0xff, 0x2e, 0x33]);
        assert_eq!(checked.value(), &None);
        assert_eq!(checked.diagnostics(), &[Diagnostic::NonTextAddress]);

        let checked = mnem.apply_bytes(b"192.168.1.1");
        assert!(checked.is_clean());
        assert_eq!(checked.into_inner().map(String::from).as_deref(), Some("kuryuiko"));

        // Malformed text is not a diagnostic, just no value.
        assert!(mnem.apply_arg(Some("hello")).is_clean());
    }

    #[test]
    fn test_debug_hides_salt() {
        let debug = format!("{:?}", mnemonizer());
        assert!(!debug.contains("testsalt"));
        assert!(debug.contains("salt_len: 40"));
    }

    #[test]
    fn test_concurrent_use() {
        let mnem = &mnemonizer();
        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || mnem.apply_str("192.168.1.1")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|r| r.as_deref() == Some("kuryuiko")));
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_salt() {
        let salt = Mnemonizer::generate_salt();
        assert_eq!(salt.len(), Mnemonizer::GENERATED_SALT_LEN);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(Mnemonizer::new_strict(salt).is_ok());

        let mnem = Mnemonizer::new_random();
        assert!(mnem.apply("192.0.2.1").is_some());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn conversion_is_deterministic(octets in prop::array::uniform4(any::<u8>())) {
            let address = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
            let first = mnemonizer().apply(&address);
            prop_assert!(first.is_some());
            prop_assert_eq!(first, mnemonizer().apply(&address));
        }

        #[test]
        fn ipv6_groups_are_accepted(groups in prop::array::uniform8(any::<u16>())) {
            let address = groups.iter().map(|g| format!("{g:x}")).collect::<Vec<_>>().join(":");
            prop_assert!(mnemonizer().apply(&address).is_some());
        }
    }
}
