//! Operand reconstruction
//!
//! Each format has a fixed operand template:
//!
//! | Format        | Operands          |
//! |---------------|-------------------|
//! | R             | rd, rs1, rs2      |
//! | I             | rd, rs1, imm      |
//! | I (load)      | rd, imm(rs1)      |
//! | S             | rs2, imm(rs1)     |
//! | SB            | rs1, rs2, imm     |
//! | U (both)      | rd, imm           |
//! | UJ            | rd, imm           |
//! | CSR           | rd, csr, rs1      |
//!
//! Shift-immediates use funct7 as part of the mnemonic lookup, so only the
//! 5-bit shift amount is left as their immediate. The immediate CSR forms
//! (`csrrwi`, `csrrsi`, `csrrci`) carry a 5-bit unsigned value in the rs1 slot.
use std::fmt;

use super::{
    fields::FieldExtractor,
    immediate::{
        format_value, i_immediate, s_immediate, sb_immediate, u_immediate, uj_immediate, Radix,
    },
    mnemonic::Depth,
    opcode::Format,
    registers::register_name,
    DecodeError,
};
use crate::options::DecodeOptions;

/// funct3 bit that selects the immediate CSR forms
const CSR_IMMEDIATE_FUNCT3_BIT: u8 = 0b100;

/// A single reconstructed operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Register(&'static str),
    Immediate { value: i64, radix: Radix },
    /// CSR address, bits [31:20]
    Csr(u16),
    /// `offset(base)` addressing of loads and stores
    Memory { offset: i64, base: &'static str },
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(name) => f.write_str(name),
            Operand::Immediate { value, radix } => f.write_str(&format_value(*value, *radix)),
            Operand::Csr(address) => write!(f, "{address}"),
            Operand::Memory { offset, base } => write!(f, "{offset}({base})"),
        }
    }
}

/// Build the operand list of `inst` for `format`
///
/// `depth` is how far the mnemonic lookup went; an I-type instruction that
/// needed funct7 is a shift-immediate.
pub fn reconstruct(
    inst: u32,
    format: Format,
    depth: Depth,
    options: &DecodeOptions,
) -> Result<Vec<Operand>, DecodeError> {
    let naming = options.register_naming();
    let mode = options.immediate_mode();
    let reg = |index: u8| register_name(index, naming).map(Operand::Register);
    let decimal = |value: i64| Operand::Immediate { value, radix: Radix::Decimal };

    let operands = match format {
        Format::R => vec![reg(inst.rd())?, reg(inst.rs1())?, reg(inst.rs2())?],
        Format::I if depth == Depth::Funct7 => {
            vec![reg(inst.rd())?, reg(inst.rs1())?, decimal(i64::from(inst.shamt()))]
        }
        Format::I => {
            vec![reg(inst.rd())?, reg(inst.rs1())?, decimal(i_immediate(inst).value(mode))]
        }
        Format::ILoad => vec![
            reg(inst.rd())?,
            Operand::Memory {
                offset: i_immediate(inst).value(mode),
                base: register_name(inst.rs1(), naming)?,
            },
        ],
        Format::S => vec![
            reg(inst.rs2())?,
            Operand::Memory {
                offset: s_immediate(inst).value(mode),
                base: register_name(inst.rs1(), naming)?,
            },
        ],
        Format::SB => vec![
            reg(inst.rs1())?,
            reg(inst.rs2())?,
            Operand::Immediate { value: sb_immediate(inst).value(mode), radix: Radix::Hex },
        ],
        Format::UPcRelative | Format::UAbsolute => {
            vec![reg(inst.rd())?, decimal(u_immediate(inst).value(mode))]
        }
        Format::UJ => vec![reg(inst.rd())?, decimal(uj_immediate(inst).value(mode))],
        Format::Csr => {
            let source = if inst.funct3() & CSR_IMMEDIATE_FUNCT3_BIT != 0 {
                decimal(i64::from(inst.rs1()))
            } else {
                reg(inst.rs1())?
            };
            vec![reg(inst.rd())?, Operand::Csr(inst.csr()), source]
        }
    };

    Ok(operands)
}
