//! Mnemonic table
//!
//! The table is a static trie keyed on opcode, then funct3, then funct7. How
//! deep a lookup goes is decided by the shape of the entry for the opcode:
//!
//! - `lui`, `auipc` and `jal` are identified by the opcode alone
//! - loads, stores, branches, most immediate ops and CSR ops need funct3
//! - register-register ops and the shift-immediates also need funct7
//!
//! The two levels are distinct types, so a funct7 level can only hold
//! mnemonics and the walk in [`resolve`] never has to ask what kind of node
//! it is looking at beyond the variant it matches on.
use tracing::debug;

use super::{opcode::Opcode, DecodeError};
use crate::options::DecodeOptions;

/// funct7 of the M extension under the OP opcode
pub const M_EXTENSION_FUNCT7: u8 = 0b000_0001;

/// Top level of the trie, one per opcode
#[derive(Debug)]
pub enum MnemonicEntry {
    Mnemonic(&'static str),
    Funct3(&'static [(u8, Funct3Node)]),
}

/// Second level of the trie, keyed by funct3
#[derive(Debug, Clone, Copy)]
pub enum Funct3Node {
    Mnemonic(&'static str),
    Funct7(&'static [(u8, &'static str)]),
}

/// How many fields were consumed to reach a mnemonic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Opcode,
    Funct3,
    Funct7,
}

/// Outcome of a table walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub mnemonic: &'static str,
    pub depth: Depth,
}

/// A defined path through the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    pub opcode: Opcode,
    pub funct3: Option<u8>,
    pub funct7: Option<u8>,
    pub mnemonic: &'static str,
}

const OP: MnemonicEntry = MnemonicEntry::Funct3(&[
    (0b000, Funct3Node::Funct7(&[(0b000_0000, "add"), (0b010_0000, "sub"), (0b000_0001, "mul")])),
    (0b001, Funct3Node::Funct7(&[(0b000_0000, "sll"), (0b000_0001, "mulh")])),
    (0b010, Funct3Node::Funct7(&[(0b000_0000, "slt"), (0b000_0001, "mulhsu")])),
    (0b011, Funct3Node::Funct7(&[(0b000_0000, "sltu"), (0b000_0001, "mulhu")])),
    (0b100, Funct3Node::Funct7(&[(0b000_0000, "xor"), (0b000_0001, "div")])),
    (0b101, Funct3Node::Funct7(&[(0b000_0000, "srl"), (0b010_0000, "sra"), (0b000_0001, "divu")])),
    (0b110, Funct3Node::Funct7(&[(0b000_0000, "or"), (0b000_0001, "rem")])),
    (0b111, Funct3Node::Funct7(&[(0b000_0000, "and"), (0b000_0001, "remu")])),
]);

const LOAD: MnemonicEntry = MnemonicEntry::Funct3(&[
    (0b000, Funct3Node::Mnemonic("lb")),
    (0b001, Funct3Node::Mnemonic("lh")),
    (0b010, Funct3Node::Mnemonic("lw")),
    (0b100, Funct3Node::Mnemonic("lbu")),
    (0b101, Funct3Node::Mnemonic("lhu")),
]);

// slli/srli/srai reuse imm[11:5] as funct7
const OP_IMM: MnemonicEntry = MnemonicEntry::Funct3(&[
    (0b000, Funct3Node::Mnemonic("addi")),
    (0b001, Funct3Node::Funct7(&[(0b000_0000, "slli")])),
    (0b010, Funct3Node::Mnemonic("slti")),
    (0b011, Funct3Node::Mnemonic("sltiu")),
    (0b100, Funct3Node::Mnemonic("xori")),
    (0b101, Funct3Node::Funct7(&[(0b000_0000, "srli"), (0b010_0000, "srai")])),
    (0b110, Funct3Node::Mnemonic("ori")),
    (0b111, Funct3Node::Mnemonic("andi")),
]);

const STORE: MnemonicEntry = MnemonicEntry::Funct3(&[
    (0b000, Funct3Node::Mnemonic("sb")),
    (0b001, Funct3Node::Mnemonic("sh")),
    (0b010, Funct3Node::Mnemonic("sw")),
]);

const BRANCH: MnemonicEntry = MnemonicEntry::Funct3(&[
    (0b000, Funct3Node::Mnemonic("beq")),
    (0b001, Funct3Node::Mnemonic("bne")),
    (0b100, Funct3Node::Mnemonic("blt")),
    (0b101, Funct3Node::Mnemonic("bge")),
    (0b110, Funct3Node::Mnemonic("bltu")),
    (0b111, Funct3Node::Mnemonic("bgeu")),
]);

const JALR: MnemonicEntry = MnemonicEntry::Funct3(&[(0b000, Funct3Node::Mnemonic("jalr"))]);

// funct3 = 000 (ecall/ebreak) is not part of the table
const SYSTEM: MnemonicEntry = MnemonicEntry::Funct3(&[
    (0b001, Funct3Node::Mnemonic("csrrw")),
    (0b010, Funct3Node::Mnemonic("csrrs")),
    (0b011, Funct3Node::Mnemonic("csrrc")),
    (0b101, Funct3Node::Mnemonic("csrrwi")),
    (0b110, Funct3Node::Mnemonic("csrrsi")),
    (0b111, Funct3Node::Mnemonic("csrrci")),
]);

const AUIPC: MnemonicEntry = MnemonicEntry::Mnemonic("auipc");
const LUI: MnemonicEntry = MnemonicEntry::Mnemonic("lui");
const JAL: MnemonicEntry = MnemonicEntry::Mnemonic("jal");

/// Table entry for `opcode`
pub const fn entry(opcode: Opcode) -> &'static MnemonicEntry {
    match opcode {
        Opcode::Op => &OP,
        Opcode::Load => &LOAD,
        Opcode::OpImm => &OP_IMM,
        Opcode::Store => &STORE,
        Opcode::Branch => &BRANCH,
        Opcode::Jalr => &JALR,
        Opcode::System => &SYSTEM,
        Opcode::Auipc => &AUIPC,
        Opcode::Lui => &LUI,
        Opcode::Jal => &JAL,
    }
}

/// Walk the table for `(opcode, funct3, funct7)`
///
/// funct3 and funct7 are only looked at when the entry for the opcode has a
/// level for them.
pub fn resolve(
    opcode: Opcode,
    funct3: u8,
    funct7: u8,
    options: &DecodeOptions,
) -> Result<Resolution, DecodeError> {
    let resolution = match entry(opcode) {
        MnemonicEntry::Mnemonic(mnemonic) => {
            Resolution { mnemonic: *mnemonic, depth: Depth::Opcode }
        }
        MnemonicEntry::Funct3(children) => {
            let node = lookup(*children, funct3).ok_or(DecodeError::UnrecognizedFunct3 {
                opcode: opcode.bits(),
                funct3,
            })?;
            match node {
                Funct3Node::Mnemonic(mnemonic) => Resolution { mnemonic, depth: Depth::Funct3 },
                Funct3Node::Funct7(children) => {
                    let unrecognized =
                        DecodeError::UnrecognizedFunct7 { opcode: opcode.bits(), funct3, funct7 };
                    if opcode == Opcode::Op && funct7 == M_EXTENSION_FUNCT7 && !options.m_enabled()
                    {
                        return Err(unrecognized);
                    }
                    let mnemonic = lookup(children, funct7).ok_or(unrecognized)?;
                    Resolution { mnemonic, depth: Depth::Funct7 }
                }
            }
        }
    };

    debug!(?opcode, funct3, funct7, mnemonic = resolution.mnemonic, "resolved mnemonic");
    Ok(resolution)
}

fn lookup<T: Copy>(children: &[(u8, T)], key: u8) -> Option<T> {
    children.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Every defined path through the table, in table order
pub fn leaves() -> Vec<Leaf> {
    let mut result = Vec::new();
    for opcode in Opcode::ALL {
        match entry(opcode) {
            MnemonicEntry::Mnemonic(mnemonic) => {
                result.push(Leaf { opcode, funct3: None, funct7: None, mnemonic: *mnemonic })
            }
            MnemonicEntry::Funct3(children) => {
                for (funct3, node) in children.iter() {
                    match node {
                        Funct3Node::Mnemonic(mnemonic) => result.push(Leaf {
                            opcode,
                            funct3: Some(*funct3),
                            funct7: None,
                            mnemonic: *mnemonic,
                        }),
                        Funct3Node::Funct7(children) => {
                            for (funct7, mnemonic) in children.iter() {
                                result.push(Leaf {
                                    opcode,
                                    funct3: Some(*funct3),
                                    funct7: Some(*funct7),
                                    mnemonic: *mnemonic,
                                })
                            }
                        }
                    }
                }
            }
        }
    }
    result
}
