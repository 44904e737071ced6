//! Textual IPv4 and IPv6 address validation.
//!
//! Addresses are checked exactly as written, and nothing is normalized: the
//! text the caller supplies is also the text that gets hashed, so `"::1"` and
//! `"0::1"` are both valid but remain distinct inputs.
//!
//! The accepted grammar is deliberately loose in a few places (IPv4 addresses
//! with fewer than four parts, unbounded group counts once an IPv6 gap has been
//! seen). Tightening any of these changes which inputs produce a mnemonic.

use std::fmt;

/// The classification of an address string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// A dotted-decimal IPv4 address (one to four parts).
    Ipv4,
    /// A colon-separated IPv6 address, optionally using a single `::` gap.
    Ipv6,
    /// Neither of the above.
    Invalid,
}

impl AddressKind {
    /// Returns `true` for `Ipv4` and `Ipv6`.
    pub fn is_valid(self) -> bool {
        !matches!(self, AddressKind::Invalid)
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddressKind::Ipv4 => "ipv4",
            AddressKind::Ipv6 => "ipv6",
            AddressKind::Invalid => "invalid",
        })
    }
}

/// Classifies an address string as IPv4, IPv6 or invalid.
///
/// IPv4 is tried first. The two grammars are disjoint: a valid IPv4 string
/// never contains `:`, and a valid IPv6 string always does.
///
/// # Arguments
///
/// * `address` - The address text, as supplied by the caller
///
/// # Returns
///
/// The address family, or `AddressKind::Invalid`
pub fn classify(address: &str) -> AddressKind {
    if is_ipv4(address) {
        AddressKind::Ipv4
    } else if is_ipv6(address) {
        AddressKind::Ipv6
    } else {
        AddressKind::Invalid
    }
}

fn is_ipv4(address: &str) -> bool {
    if address.is_empty() || address.ends_with('.') {
        return false;
    }
    let mut count = 0;
    for part in address.split('.') {
        if count > 3 || part.is_empty() {
            return false;
        }
        match parse_integer(part, 10) {
            Some(value) if (0..=0xFF).contains(&value) => {}
            _ => return false,
        }
        count += 1;
    }
    true
}

fn is_ipv6(address: &str) -> bool {
    let bytes = address.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    // A trailing colon is only allowed as part of "::".
    if bytes[bytes.len() - 1] == b':' && bytes[bytes.len() - 2] != b':' {
        return false;
    }

    let (mut gap, rest) = match address.strip_prefix("::") {
        Some(rest) => (true, rest),
        None => (false, address),
    };

    let mut count = 0;
    for part in rest.split_terminator(':') {
        if part.is_empty() {
            if gap {
                return false;
            }
            gap = true;
        } else {
            match parse_integer(part, 16) {
                Some(value) if (0..=0xFFFF).contains(&value) => {}
                _ => return false,
            }
        }
        count += 1;
    }
    gap || count == 8
}

/// Parses a complete integer literal in the given radix.
///
/// Accepts optional leading whitespace, an optional sign and, in radix 16,
/// an optional `0x`/`0X` prefix. At least one digit is required and nothing
/// may follow the digits. Magnitudes saturate instead of wrapping, so an
/// oversized literal is always out of range.
fn parse_integer(part: &str, radix: u32) -> Option<i64> {
    let s = part.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let s = match s.get(..2) {
        Some("0x" | "0X") if radix == 16 && s[2..].starts_with(|c: char| c.is_ascii_hexdigit()) => {
            &s[2..]
        }
        _ => s,
    };
    if s.is_empty() {
        return None;
    }
    let mut magnitude: i64 = 0;
    for c in s.chars() {
        let digit = c.to_digit(radix)?;
        magnitude = magnitude
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }
    Some(if negative { -magnitude } else { magnitude })
}
