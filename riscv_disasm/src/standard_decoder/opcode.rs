use super::DecodeError;

/// RISC-V instruction format families
///
/// Each format has a fixed operand template and its own immediate layout.
/// See section `2.3 Immediate Encoding Variants` of the unprivileged ISA manual.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// R-type: register-register operations (add, sub, mul, etc.)
    /*
    --------------------------------------------------------
    R-type | funct7 |  rs2 |  rs1 | funct3 |   rd  | opcode |
           | 31-25  |24-20 |19-15 | 14-12  | 11-7  | 6-0    |
    --------------------------------------------------------
    */
    R,
    /// I-type: immediate arithmetic/logic and `jalr`
    /*
    --------------------------------------------------------
    I-type |   imm[11:0]    |  rs1 | funct3 |   rd  | opcode |
           |   31-20        |19-15 | 14-12  | 11-7  | 6-0    |
    --------------------------------------------------------
    */
    I,
    /// I-type loads. Same layout as [`Format::I`], printed as `rd, imm(rs1)`.
    ILoad,
    /// S-type: stores
    /*
    --------------------------------------------------------------
    S-type | imm[11:5] |  rs2 |  rs1 | funct3 | imm[4:0] | opcode |
           | 31-25     |24-20 |19-15 | 14-12  | 11-7     | 6-0    |
    --------------------------------------------------------------
    */
    S,
    /// SB-type: conditional branches
    /*
    ---------------------------------------------------------------------------
    B-type | imm[12] | imm[10:5] |  rs2 |  rs1 | funct3 | imm[4:1|11] | opcode |
           |   31    | 30-25     |24-20 |19-15 | 14-12  | 11-7        | 6-0    |
    ---------------------------------------------------------------------------
    */
    SB,
    /// U-type, PC relative (`auipc`)
    /*
    --------------------------------------------------------------------
    U-type |                imm[31:12]                 |   rd  | opcode |
           |                31-12                      | 11-7  | 6-0    |
    --------------------------------------------------------------------
    */
    UPcRelative,
    /// U-type, absolute (`lui`)
    UAbsolute,
    /// UJ-type: `jal`
    /*
    --------------------------------------------------------------------
    J-type | imm[20] | imm[10:1] | imm[11] | imm[19:12] |   rd  | opcode |
           |   31    | 30-21     |   20    | 19-12      | 11-7  | 6-0    |
    --------------------------------------------------------------------
    */
    UJ,
    /// CSR access instructions. I-type layout with the immediate holding the CSR address.
    Csr,
}

impl Format {
    /// Classify an instruction by its 7-bit opcode
    pub fn from_opcode(opcode: u8) -> Result<Self, DecodeError> {
        Opcode::from_bits(opcode)
            .map(Opcode::format)
            .ok_or(DecodeError::UnrecognizedOpcode { opcode })
    }
}

/// The 32-bit opcodes understood by the decoder
///
/// Only the opcodes whose formats are listed in [`Format`] appear here. Fence,
/// atomics and the floating point opcodes are rejected as unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::unusual_byte_groupings)]
#[repr(u8)]
pub enum Opcode {
    /// Load instructions (lb, lh, lw, lbu, lhu)
    Load = 0b00_000_11,

    /// Immediate arithmetic/logic operations (addi, slti, xori, etc.)
    OpImm = 0b00_100_11,

    /// Add upper immediate to PC (auipc)
    Auipc = 0b00_101_11,

    /// Store instructions (sb, sh, sw)
    Store = 0b01_000_11,

    /// Register-register operations (add, sub, mul, etc.)
    Op = 0b01_100_11,

    /// Load upper immediate (lui)
    Lui = 0b01_101_11,

    /// Branch instructions (beq, bne, blt, etc.)
    Branch = 0b11_000_11,

    /// Jump and link register (jalr)
    Jalr = 0b11_001_11,

    /// Jump and link (jal)
    Jal = 0b11_011_11,

    /// CSR instructions
    System = 0b11_100_11,
}

impl Opcode {
    pub const ALL: [Opcode; 10] = [
        Opcode::Load,
        Opcode::OpImm,
        Opcode::Auipc,
        Opcode::Store,
        Opcode::Op,
        Opcode::Lui,
        Opcode::Branch,
        Opcode::Jalr,
        Opcode::Jal,
        Opcode::System,
    ];

    #[allow(clippy::unusual_byte_groupings)]
    /// Convert from the raw 7-bit field
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00_000_11 => Some(Opcode::Load),
            0b00_100_11 => Some(Opcode::OpImm),
            0b00_101_11 => Some(Opcode::Auipc),
            0b01_000_11 => Some(Opcode::Store),
            0b01_100_11 => Some(Opcode::Op),
            0b01_101_11 => Some(Opcode::Lui),
            0b11_000_11 => Some(Opcode::Branch),
            0b11_001_11 => Some(Opcode::Jalr),
            0b11_011_11 => Some(Opcode::Jal),
            0b11_100_11 => Some(Opcode::System),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Every opcode belongs to exactly one format
    pub const fn format(self) -> Format {
        match self {
            Opcode::Op => Format::R,
            Opcode::OpImm | Opcode::Jalr => Format::I,
            Opcode::Load => Format::ILoad,
            Opcode::Store => Format::S,
            Opcode::Branch => Format::SB,
            Opcode::Auipc => Format::UPcRelative,
            Opcode::Lui => Format::UAbsolute,
            Opcode::Jal => Format::UJ,
            Opcode::System => Format::Csr,
        }
    }
}
