//! Standard (32-bit uncompressed) RISC-V instruction decoder
//!
//! Decoding is a two stage pipeline: the [`fields`] module slices a word into
//! its fixed-position fields, then the resolver classifies the format from the
//! opcode, walks the [`mnemonic`] table and rebuilds the operand list.
//!
//! Ref: https://five-embeddev.com/riscv-user-isa-manual/Priv-v1.12/rv32.html#rv32
mod error;
pub mod fields;
pub mod immediate;
mod instruction;
pub mod mnemonic;
mod opcode;
mod operands;
mod registers;

pub use error::DecodeError;
pub use immediate::{ImmediateMode, Radix};
pub use instruction::DecodedInstruction;
pub use opcode::{Format, Opcode};
pub use operands::Operand;
pub use registers::{register_name, RegisterNaming, NUM_REGISTERS};

use tracing::trace;

use crate::{options::DecodeOptions, standard_decoder::fields::FieldExtractor};

/// Decode a 32-bit standard RISC-V instruction
pub fn decode_standard_instruction(
    word: u32,
    options: &DecodeOptions,
) -> Result<DecodedInstruction, DecodeError> {
    let (opcode_bits, funct3, funct7) = (word.opcode(), word.funct3(), word.funct7());
    trace!(word, opcode_bits, funct3, funct7, "extracted fields");

    let opcode = Opcode::from_bits(opcode_bits)
        .ok_or(DecodeError::UnrecognizedOpcode { opcode: opcode_bits })?;
    let format = opcode.format();

    let resolution = mnemonic::resolve(opcode, funct3, funct7, options)?;
    let operands = operands::reconstruct(word, format, resolution.depth, options)?;

    Ok(DecodedInstruction { word, opcode, format, mnemonic: resolution.mnemonic, operands })
}
