//! Decoder configuration
use std::fmt;

use crate::standard_decoder::{ImmediateMode, RegisterNaming};

/// How instruction words are resolved and rendered, using builder pattern
///
/// The default decodes RV32IM with ABI register names and unsigned immediates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Multiply/divide extension
    m: bool,
    /// Register naming convention
    register_naming: RegisterNaming,
    /// Immediate interpretation
    immediate_mode: ImmediateMode,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            m: true,
            register_naming: RegisterNaming::Abi,
            immediate_mode: ImmediateMode::Unsigned,
        }
    }

    /// Disable the multiply/divide extension (M)
    pub const fn without_m(mut self) -> Self {
        self.m = false;
        self
    }

    /// Print registers as `x0`..`x31`
    pub const fn with_numeric_registers(mut self) -> Self {
        self.register_naming = RegisterNaming::Numeric;
        self
    }

    pub const fn with_register_naming(mut self, naming: RegisterNaming) -> Self {
        self.register_naming = naming;
        self
    }

    /// Sign-extend immediates and scale branch/jump offsets to bytes
    pub const fn with_signed_immediates(mut self) -> Self {
        self.immediate_mode = ImmediateMode::Signed;
        self
    }

    pub const fn with_immediate_mode(mut self, mode: ImmediateMode) -> Self {
        self.immediate_mode = mode;
        self
    }

    pub const fn m_enabled(&self) -> bool {
        self.m
    }

    pub const fn register_naming(&self) -> RegisterNaming {
        self.register_naming
    }

    pub const fn immediate_mode(&self) -> ImmediateMode {
        self.immediate_mode
    }

    /// ISA string of the accepted instruction set
    pub fn isa_string(&self) -> String {
        let mut result = String::from("RV32I");
        if self.m {
            result.push('M');
        }
        result.push_str("_Zicsr");
        result
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DecodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?} registers, {:?} immediates)",
            self.isa_string(),
            self.register_naming,
            self.immediate_mode
        )
    }
}
