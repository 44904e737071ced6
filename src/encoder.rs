//! Digest to syllable encoding.
//!
//! A digest is split into four 5-byte segments. Each segment yields one
//! syllable: the high nibble of its last byte selects an onset, the low nibble
//! selects a rhyme. The remaining bytes of a segment never influence the
//! result.

use std::fmt;
use std::str::FromStr;

use crate::digest::DIGEST_BYTES;

/// Syllable onsets, indexed by the high nibble of a segment's last byte.
pub const ONSETS: [&str; 16] = [
    "", "k", "s", "t", "d", "n", "h", "b", "p", "m", "f", "r", "g", "z", "l", "ch",
];

/// Syllable rhymes, indexed by the low nibble of a segment's last byte.
pub const RHYMES: [&str; 16] = [
    "a", "i", "u", "e", "o", "a", "i", "u", "e", "o", "ya", "yi", "yu", "ye", "yo", "'",
];

/// The number of syllables in a mnemonic.
pub const SYLLABLES: usize = 4;

const SEGMENT_BYTES: usize = DIGEST_BYTES / SYLLABLES;
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// One onset followed by one rhyme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Syllable {
    onset: &'static str,
    rhyme: &'static str,
}

impl Syllable {
    /// Builds the syllable selected by a segment value.
    ///
    /// Only `value mod 256` is significant.
    pub fn from_value(value: u64) -> Self {
        let low = value % 256;
        Self {
            onset: ONSETS[(low / 16) as usize],
            rhyme: RHYMES[(low % 16) as usize],
        }
    }

    /// The onset, possibly empty.
    pub fn onset(&self) -> &'static str {
        self.onset
    }

    /// The rhyme, one or two characters long.
    pub fn rhyme(&self) -> &'static str {
        self.rhyme
    }

    /// Reads one syllable from the start of `s`, returning it with the rest of the input.
    fn split_first(s: &str) -> Option<(Self, &str)> {
        let onset = if s.starts_with("ch") {
            "ch"
        } else {
            ONSETS[1..15]
                .iter()
                .copied()
                .find(|onset| s.starts_with(onset))
                .unwrap_or("")
        };
        let s = &s[onset.len()..];
        // Two-character rhymes come first in the search so "ya" is never read as "y".
        let rhyme = RHYMES[10..15]
            .iter()
            .chain(RHYMES[..10].iter())
            .chain(RHYMES[15..].iter())
            .copied()
            .find(|rhyme| s.starts_with(rhyme))?;
        Some((Self { onset, rhyme }, &s[rhyme.len()..]))
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.onset)?;
        f.write_str(self.rhyme)
    }
}

/// A pronounceable mnemonic: exactly four syllables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mnemonic {
    syllables: [Syllable; SYLLABLES],
}

impl Mnemonic {
    /// The syllables, in digest segment order.
    pub fn syllables(&self) -> &[Syllable; SYLLABLES] {
        &self.syllables
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for syllable in &self.syllables {
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}

impl From<Mnemonic> for String {
    fn from(mnemonic: Mnemonic) -> Self {
        mnemonic.to_string()
    }
}

/// The error returned when text is not a well-formed mnemonic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not a mnemonic: expected four onset/rhyme syllables")]
pub struct ParseMnemonicError;

impl FromStr for Mnemonic {
    type Err = ParseMnemonicError;

    /// Splits mnemonic text back into its syllables.
    ///
    /// This only checks the shape of the text. Nothing about the address is recovered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s;
        let mut syllables = [Syllable::from_value(0); SYLLABLES];
        for slot in &mut syllables {
            let (syllable, tail) = Syllable::split_first(rest).ok_or(ParseMnemonicError)?;
            *slot = syllable;
            rest = tail;
        }
        if !rest.is_empty() {
            return Err(ParseMnemonicError);
        }
        Ok(Self { syllables })
    }
}

/// Encodes a digest into a mnemonic.
///
/// Reads the last byte of each 5-byte segment directly. This always agrees with
/// [`encode_via_hex`].
pub fn encode(digest: &[u8; DIGEST_BYTES]) -> Mnemonic {
    let mut syllables = [Syllable::from_value(0); SYLLABLES];
    for (slot, segment) in syllables.iter_mut().zip(digest.chunks_exact(SEGMENT_BYTES)) {
        *slot = Syllable::from_value(u64::from(segment[SEGMENT_BYTES - 1]));
    }
    Mnemonic { syllables }
}

/// Encodes a digest into a mnemonic by rendering each segment as uppercase
/// hex and parsing the hex back into an integer.
pub fn encode_via_hex(digest: &[u8; DIGEST_BYTES]) -> Mnemonic {
    let mut syllables = [Syllable::from_value(0); SYLLABLES];
    for (slot, segment) in syllables.iter_mut().zip(digest.chunks_exact(SEGMENT_BYTES)) {
        let hex = segment_to_hex(segment);
        let value = hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0u64, |acc, digit| (acc << 4) | u64::from(digit));
        *slot = Syllable::from_value(value);
    }
    Mnemonic { syllables }
}

fn segment_to_hex(segment: &[u8]) -> String {
    let mut out = String::with_capacity(segment.len() * 2);
    for &b in segment {
        out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(b & 15)]));
    }
    out
}
