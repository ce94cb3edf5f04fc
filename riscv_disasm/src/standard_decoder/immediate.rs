//! Immediate reconstruction
//!
//! Every format scatters its immediate across the word differently. The
//! functions below concatenate the sub-fields MSB first, exactly in the order
//! of the ISA manual's immediate tables, without the implicit trailing zero
//! of branch and jump offsets:
//!
//! | Format | Concatenation                                 | Width |
//! |--------|-----------------------------------------------|-------|
//! | I      | `[31:20]`                                     | 12    |
//! | S      | `[31:25] ++ [11:7]`                           | 12    |
//! | SB     | `[31] ++ [7] ++ [30:25] ++ [11:8]`            | 12    |
//! | U      | `[31:12]`                                     | 20    |
//! | UJ     | `[31] ++ [19:12] ++ [20] ++ [30:21]`          | 20    |
use tracing::trace;

use super::fields::FieldExtractor;

/// How an assembled immediate is turned into a number
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImmediateMode {
    /// The concatenated bits read as an unsigned binary numeral
    #[default]
    Unsigned,
    /// Two's-complement value as the hardware sees it. I, S, SB and UJ
    /// immediates are sign-extended, SB and UJ offsets are scaled to bytes.
    /// U immediates are left as is.
    Signed,
}

/// Radix an immediate operand is printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

/// An immediate reassembled from its sub-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Immediate {
    /// Concatenated bits, right aligned
    bits: u32,
    /// Number of meaningful bits in `bits`
    width: u8,
    /// Implicit low zero bits dropped from the encoding
    shift: u8,
    /// Whether the ISA treats this immediate as signed
    signed: bool,
}

impl Immediate {
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Numeric value under `mode`
    pub fn value(&self, mode: ImmediateMode) -> i64 {
        match mode {
            ImmediateMode::Signed if self.signed => {
                i64::from(sign_extend(self.bits, self.width)) << self.shift
            }
            _ => i64::from(self.bits),
        }
    }

    pub fn render(&self, mode: ImmediateMode, radix: Radix) -> String {
        format_value(self.value(mode), radix)
    }
}

/// Print `value` in `radix`, negative hex values as `-0x..`
pub fn format_value(value: i64, radix: Radix) -> String {
    match radix {
        Radix::Decimal => value.to_string(),
        Radix::Hex if value < 0 => format!("-{:#x}", value.unsigned_abs()),
        Radix::Hex => format!("{value:#x}"),
    }
}

/// Sign-extend a value of specified bit width to i32
pub fn sign_extend(value: u32, width: u8) -> i32 {
    let shift = 32 - u32::from(width);
    ((value << shift) as i32) >> shift
}

/// I-type immediate: bits [31:20]
pub fn i_immediate(inst: u32) -> Immediate {
    Immediate { bits: inst.imm_11_0(), width: 12, shift: 0, signed: true }
}

/// S-type immediate: bits [31:25] followed by bits [11:7]
pub fn s_immediate(inst: u32) -> Immediate {
    let bits = (inst.imm_11_5() << 5) | inst.imm_4_0();
    Immediate { bits, width: 12, shift: 0, signed: true }
}

/// SB-type immediate: bit 31, bit 7, bits [30:25], bits [11:8]
pub fn sb_immediate(inst: u32) -> Immediate {
    let bits =
        (inst.bit31() << 11) | (inst.bit7() << 10) | (inst.bits_30_25() << 4) | inst.bits_11_8();
    trace!(inst, bits, "assembled branch immediate");
    Immediate { bits, width: 12, shift: 1, signed: true }
}

/// U-type immediate: bits [31:12], not shifted into place
pub fn u_immediate(inst: u32) -> Immediate {
    Immediate { bits: inst.bits_31_12(), width: 20, shift: 0, signed: false }
}

/// UJ-type immediate: bit 31, bits [19:12], bit 20, bits [30:21]
pub fn uj_immediate(inst: u32) -> Immediate {
    let bits =
        (inst.bit31() << 19) | (inst.bits_19_12() << 11) | (inst.bit20() << 10) | inst.bits_30_21();
    trace!(inst, bits, "assembled jump immediate");
    Immediate { bits, width: 20, shift: 1, signed: true }
}
