//! Integer register names
//!
//! Ref: https://riscv-non-isa.github.io/riscv-elf-psabi-doc/#_register_convention
//!
//! | Index | ABI name | Usage                                |
//! |-------|----------|--------------------------------------|
//! | x0    | zero     | Read always as zero                  |
//! | x1    | ra       | Return address                       |
//! | x2    | sp       | Stack pointer                        |
//! | x3    | gp       | Global pointer                       |
//! | x4    | tp       | Thread pointer                       |
//! | x5-7  | t0-t2    | Temporaries                          |
//! | x8    | s0       | Saved register 0 / frame pointer     |
//! | x9    | s1       | Saved register 1                     |
//! | x10-17| a0-a7    | Function arguments / return values   |
//! | x18-27| s2-s11   | Saved registers                      |
//! | x28-31| t3-t6    | Temporaries                          |

use super::DecodeError;

pub const NUM_REGISTERS: usize = 32;

/// ABI names, indexed by register number
const ABI_NAMES: [&str; NUM_REGISTERS] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Architectural names, indexed by register number
const NUMERIC_NAMES: [&str; NUM_REGISTERS] = [
    "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8", "x9", "x10", "x11", "x12", "x13", "x14",
    "x15", "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23", "x24", "x25", "x26", "x27",
    "x28", "x29", "x30", "x31",
];

/// Which naming convention register operands are printed with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterNaming {
    /// Calling convention aliases (`zero`, `ra`, `sp`, ...)
    #[default]
    Abi,
    /// Architectural names (`x0`..`x31`)
    Numeric,
}

impl RegisterNaming {
    /// The full 32-entry table for this convention
    pub const fn table(self) -> &'static [&'static str; NUM_REGISTERS] {
        match self {
            RegisterNaming::Abi => &ABI_NAMES,
            RegisterNaming::Numeric => &NUMERIC_NAMES,
        }
    }
}

/// Look up the name of register `index`
///
/// Register fields are 5 bits wide so every decoded index is in range, but
/// callers may hand in arbitrary values.
pub fn register_name(index: u8, naming: RegisterNaming) -> Result<&'static str, DecodeError> {
    naming.table().get(index as usize).copied().ok_or(DecodeError::UnknownRegister { index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_bijective() {
        for naming in [RegisterNaming::Abi, RegisterNaming::Numeric] {
            let names: HashSet<&str> =
                (0..NUM_REGISTERS as u8).map(|i| register_name(i, naming).unwrap()).collect();
            assert_eq!(names.len(), NUM_REGISTERS, "{naming:?} table has duplicate names");
        }
    }

    #[test]
    fn test_well_known_abi_names() {
        let abi = |i| register_name(i, RegisterNaming::Abi).unwrap();
        assert_eq!(abi(0), "zero");
        assert_eq!(abi(1), "ra");
        assert_eq!(abi(2), "sp");
        assert_eq!(abi(6), "t1");
        assert_eq!(abi(8), "s0");
        assert_eq!(abi(10), "a0");
        assert_eq!(abi(17), "a7");
        assert_eq!(abi(18), "s2");
        assert_eq!(abi(27), "s11");
        assert_eq!(abi(28), "t3");
        assert_eq!(abi(31), "t6");
    }

    #[test]
    fn test_numeric_names() {
        for i in 0..NUM_REGISTERS as u8 {
            assert_eq!(register_name(i, RegisterNaming::Numeric).unwrap(), format!("x{i}"));
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(
            register_name(32, RegisterNaming::Abi),
            Err(DecodeError::UnknownRegister { index: 32 })
        );
        assert_eq!(
            register_name(u8::MAX, RegisterNaming::Numeric),
            Err(DecodeError::UnknownRegister { index: u8::MAX })
        );
    }
}
