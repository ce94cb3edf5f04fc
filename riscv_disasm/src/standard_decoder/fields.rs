//! Bitfield views over a 32-bit instruction word
//!
//! Bits are numbered from the least-significant bit, as in the ISA manual:
//! bit 0 is the lowest bit of the opcode and bit 31 is the top of funct7.
//! Every accessor is a plain mask-and-shift. Nothing here interprets a field,
//! that is left to the resolver.
/*
    R-type | funct7 |  rs2 |  rs1 | funct3 |   rd  | opcode |
           | 31-25  |24-20 |19-15 | 14-12  | 11-7  | 6-0    |
*/

/// Bit masks for field extraction
const MASK1: u32 = 0b1;
const MASK3: u32 = 0b111;
const MASK4: u32 = 0b1111;
const MASK5: u32 = 0b1_1111;
const MASK6: u32 = 0b11_1111;
const MASK7: u32 = 0b111_1111;
const MASK8: u32 = 0b1111_1111;
const MASK10: u32 = 0b11_1111_1111;
const MASK12: u32 = 0b1111_1111_1111;
const MASK20: u32 = 0b1111_1111_1111_1111_1111;

/// Field extraction from instruction words
pub trait FieldExtractor {
    /// Opcode (bits [6:0])
    fn opcode(&self) -> u8;

    /// Destination register (bits [11:7])
    fn rd(&self) -> u8;

    /// Function code 3 (bits [14:12])
    fn funct3(&self) -> u8;

    /// Source register 1 (bits [19:15])
    fn rs1(&self) -> u8;

    /// Source register 2 (bits [24:20])
    fn rs2(&self) -> u8;

    /// Function code 7 (bits [31:25])
    ///
    /// For the shift-immediate instructions this is the top of the I-type
    /// immediate, reused as a discriminator.
    fn funct7(&self) -> u8;

    /// Shift amount of `slli/srli/srai` (bits [24:20])
    fn shamt(&self) -> u8;

    /// CSR address (bits [31:20])
    fn csr(&self) -> u16;

    /// I-type immediate, bits [31:20]
    fn imm_11_0(&self) -> u32;

    /// Upper S-type immediate, bits [31:25]
    fn imm_11_5(&self) -> u32;

    /// Lower S-type immediate, bits [11:7]
    fn imm_4_0(&self) -> u32;

    /// Bit 31
    fn bit31(&self) -> u32;

    /// Bit 7
    fn bit7(&self) -> u32;

    /// Bits [30:25]
    fn bits_30_25(&self) -> u32;

    /// Bits [11:8]
    fn bits_11_8(&self) -> u32;

    /// U-type immediate, bits [31:12]
    fn bits_31_12(&self) -> u32;

    /// Bits [19:12]
    fn bits_19_12(&self) -> u32;

    /// Bit 20
    fn bit20(&self) -> u32;

    /// Bits [30:21]
    fn bits_30_21(&self) -> u32;
}

impl FieldExtractor for u32 {
    fn opcode(&self) -> u8 {
        (*self & MASK7) as u8
    }

    fn rd(&self) -> u8 {
        ((*self >> 7) & MASK5) as u8
    }

    fn funct3(&self) -> u8 {
        ((*self >> 12) & MASK3) as u8
    }

    fn rs1(&self) -> u8 {
        ((*self >> 15) & MASK5) as u8
    }

    fn rs2(&self) -> u8 {
        ((*self >> 20) & MASK5) as u8
    }

    fn funct7(&self) -> u8 {
        ((*self >> 25) & MASK7) as u8
    }

    fn shamt(&self) -> u8 {
        ((*self >> 20) & MASK5) as u8
    }

    fn csr(&self) -> u16 {
        ((*self >> 20) & MASK12) as u16
    }

    fn imm_11_0(&self) -> u32 {
        (*self >> 20) & MASK12
    }

    fn imm_11_5(&self) -> u32 {
        (*self >> 25) & MASK7
    }

    fn imm_4_0(&self) -> u32 {
        (*self >> 7) & MASK5
    }

    fn bit31(&self) -> u32 {
        (*self >> 31) & MASK1
    }

    fn bit7(&self) -> u32 {
        (*self >> 7) & MASK1
    }

    fn bits_30_25(&self) -> u32 {
        (*self >> 25) & MASK6
    }

    fn bits_11_8(&self) -> u32 {
        (*self >> 8) & MASK4
    }

    fn bits_31_12(&self) -> u32 {
        (*self >> 12) & MASK20
    }

    fn bits_19_12(&self) -> u32 {
        (*self >> 12) & MASK8
    }

    fn bit20(&self) -> u32 {
        (*self >> 20) & MASK1
    }

    fn bits_30_21(&self) -> u32 {
        (*self >> 21) & MASK10
    }
}
