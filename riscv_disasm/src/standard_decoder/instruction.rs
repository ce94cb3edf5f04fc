use std::fmt;

use super::{
    opcode::{Format, Opcode},
    operands::Operand,
};

/// A fully resolved 32-bit instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Original 32-bit instruction word
    pub word: u32,
    pub opcode: Opcode,
    pub format: Format,
    pub mnemonic: &'static str,
    /// Operands in assembly order
    pub operands: Vec<Operand>,
}

impl DecodedInstruction {
    /// Size of an instruction in bytes
    pub const fn size() -> usize {
        4
    }

    /// Operands rendered as strings, in assembly order
    pub fn operand_strings(&self) -> Vec<String> {
        self.operands.iter().map(ToString::to_string).collect()
    }
}

/// Formats as `<mnemonic> <op>, <op>, ...`
impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)?;
        for (i, operand) in self.operands.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{operand}")?;
        }
        Ok(())
    }
}
