/// Decoder errors
///
/// Field values are printed in binary at their ISA width so they can be
/// compared directly against the opcode map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Unrecognized opcode {opcode:#09b}")]
    UnrecognizedOpcode { opcode: u8 },

    #[error("Unrecognized funct3 {funct3:#05b} for opcode {opcode:#09b}")]
    UnrecognizedFunct3 { opcode: u8, funct3: u8 },

    #[error("Unrecognized funct7 {funct7:#09b} for opcode {opcode:#09b}, funct3 {funct3:#05b}")]
    UnrecognizedFunct7 { opcode: u8, funct3: u8, funct7: u8 },

    #[error("Unknown register index {index}")]
    UnknownRegister { index: u8 },
}
