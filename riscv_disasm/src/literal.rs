//! Textual instruction literals
//!
//! Instruction words arrive either as hexadecimal (`003E8037`, `0x003e8037`)
//! or as binary strings of up to 32 digits. Shorter literals are zero padded
//! on the left, so `0b1` and `00000000000000000000000000000001` are the same
//! word. Hex literals may carry extra leading zeros as long as the value fits
//! in 32 bits.
use std::{fmt, str::FromStr};

use crate::Error;

const HEX_DIGITS: usize = 8;
const BIN_DIGITS: usize = 32;

/// Radix of an instruction literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Bin,
    Hex,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" => Ok(Encoding::Bin),
            "hex" => Ok(Encoding::Hex),
            _ => Err(Error::MalformedInput {
                literal: s.to_string(),
                reason: "encoding must be `bin` or `hex`",
            }),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Bin => f.write_str("bin"),
            Encoding::Hex => f.write_str("hex"),
        }
    }
}

/// Parse `literal` as an instruction word in `encoding`
pub fn parse_word(encoding: Encoding, literal: &str) -> Result<u32, Error> {
    match encoding {
        Encoding::Bin => parse_bin(literal),
        Encoding::Hex => parse_hex(literal),
    }
}

/// Parse up to 8 significant hex digits, with an optional `0x` prefix
pub fn parse_hex(literal: &str) -> Result<u32, Error> {
    let digits = strip_prefix(literal.trim(), "0x", "0X");
    let significant = digits.trim_start_matches('0').len();
    parse_digits(literal, digits, 16, significant, HEX_DIGITS)
}

/// Parse up to 32 binary digits, with an optional `0b` prefix
pub fn parse_bin(literal: &str) -> Result<u32, Error> {
    let digits = strip_prefix(literal.trim(), "0b", "0B");
    parse_digits(literal, digits, 2, digits.len(), BIN_DIGITS)
}

/// The word as 32 binary digits, MSB first
pub fn to_bit_string(word: u32) -> String {
    format!("{word:032b}")
}

fn strip_prefix<'a>(s: &'a str, lower: &str, upper: &str) -> &'a str {
    s.strip_prefix(lower).or_else(|| s.strip_prefix(upper)).unwrap_or(s)
}

/// `len` is the digit count checked against `max_len`
fn parse_digits(
    literal: &str,
    digits: &str,
    radix: u32,
    len: usize,
    max_len: usize,
) -> Result<u32, Error> {
    let malformed = |reason| Error::MalformedInput { literal: literal.to_string(), reason };

    if digits.is_empty() {
        return Err(malformed("no digits"));
    }
    if len > max_len {
        return Err(malformed("more digits than fit in a 32-bit word"));
    }
    // from_str_radix alone would also accept a leading sign
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed(if radix == 2 {
            "not a binary digit string"
        } else {
            "not a hexadecimal digit string"
        }));
    }
    u32::from_str_radix(digits, radix).map_err(|_| malformed("out of range"))
}
