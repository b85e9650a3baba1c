//! Helpers for binary register vectors.
//!
//! A register is a plain `[u8]` holding one bit per line. Gates treat any
//! non-zero value as 1 when reading controls; these helpers are for callers
//! that want to check or render registers strictly.

use crate::error::{IrError, IrResult};

/// Parse a bit string such as `"1101"` or `"110_1"` into a register.
///
/// Whitespace and `_` are accepted as separators. Positions in errors refer to
/// characters of the source text.
pub fn parse_bits(text: &str) -> IrResult<Vec<u8>> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace() && *c != '_')
        .map(|(position, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            found => Err(IrError::InvalidBit { position, found }),
        })
        .collect()
}

/// Render a register as a bit string, line 0 first.
pub fn format_bits(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// Check that every value in a register is 0 or 1.
pub fn validate_bits(bits: &[u8]) -> IrResult<()> {
    match bits.iter().position(|&b| b > 1) {
        Some(position) => Err(IrError::InvalidBit {
            position,
            found: char::from_digit(u32::from(bits[position]), 10).unwrap_or('?'),
        }),
        None => Ok(()),
    }
}

/// Encode a register as an integer, line 0 being the most significant bit.
pub fn to_index(bits: &[u8]) -> u64 {
    bits.iter()
        .fold(0u64, |acc, &b| (acc << 1) | u64::from(b != 0))
}

/// Decode an integer into a register of `lines` bits, line 0 first.
pub fn from_index(index: u64, lines: usize) -> Vec<u8> {
    (0..lines)
        .map(|line| ((index >> (lines - 1 - line)) & 1) as u8)
        .collect()
}
