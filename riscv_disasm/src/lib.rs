pub mod literal;
pub mod options;
pub mod standard_decoder;

use rayon::prelude::*;
use tracing::debug;

pub use literal::{parse_word, Encoding};
pub use options::DecodeOptions;
pub use standard_decoder::{
    decode_standard_instruction, DecodeError, DecodedInstruction, Format, ImmediateMode, Opcode,
    Operand, RegisterNaming,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("Malformed instruction literal {literal:?}: {reason}")]
    MalformedInput { literal: String, reason: &'static str },
    #[error("Code length {len} is not a multiple of {}", DecodedInstruction::size())]
    Misaligned { len: usize },
}

/// Decode a single 32-bit word with the default options
pub fn decode(word: u32) -> Result<DecodedInstruction, DecodeError> {
    decode_standard_instruction(word, &DecodeOptions::default())
}

/// Decode a single 32-bit word with `options`
pub fn decode_with(word: u32, options: &DecodeOptions) -> Result<DecodedInstruction, DecodeError> {
    decode_standard_instruction(word, options)
}

/// High-level RISC-V instruction decoder holding its options
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionDecoder {
    options: DecodeOptions,
}

impl InstructionDecoder {
    /// Create a new decoder for RV32IM with default rendering
    pub fn new() -> Self {
        Self { options: DecodeOptions::new() }
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a single 32-bit instruction
    pub fn decode(&self, word: u32) -> Result<DecodedInstruction, DecodeError> {
        decode_standard_instruction(word, &self.options)
    }

    /// Parse a textual literal and decode it
    pub fn decode_literal(
        &self,
        encoding: Encoding,
        literal: &str,
    ) -> Result<DecodedInstruction, Error> {
        let word = parse_word(encoding, literal)?;
        Ok(self.decode(word)?)
    }

    /// Decode every word independently; results are in input order
    pub fn decode_words(&self, words: &[u32]) -> Vec<Result<DecodedInstruction, DecodeError>> {
        debug!(count = words.len(), "decoding words");
        words.par_iter().map(|&word| self.decode(word)).collect()
    }

    /// Decode a code blob of little-endian 32-bit words
    ///
    /// The blob must be 32-bit aligned. A word that fails to decode does not
    /// stop the others; each gets its own result, in input order.
    pub fn decode_bytes(
        &self,
        bytes: &[u8],
    ) -> Result<Vec<Result<DecodedInstruction, DecodeError>>, Error> {
        let size = DecodedInstruction::size();
        if !bytes.len().is_multiple_of(size) {
            return Err(Error::Misaligned { len: bytes.len() });
        }

        debug!(len = bytes.len(), "decoding code blob");
        Ok(bytes
            .par_chunks_exact(size)
            .map(|chunk| {
                let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                self.decode(word)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_literal() {
        let decoder = InstructionDecoder::new();
        let instruction = decoder.decode_literal(Encoding::Hex, "003E8037").unwrap();
        assert_eq!(instruction.to_string(), "lui zero, 1000");

        assert!(matches!(
            decoder.decode_literal(Encoding::Bin, "2"),
            Err(Error::MalformedInput { .. })
        ));
        assert!(matches!(
            decoder.decode_literal(Encoding::Hex, "0000000F"),
            Err(Error::Decode(DecodeError::UnrecognizedOpcode { opcode: 0b000_1111 }))
        ));
        // Leading zeros beyond eight digits still fit the word
        let instruction = decoder.decode_literal(Encoding::Hex, "0x0003E8037").unwrap();
        assert_eq!(instruction.word, 0x003E8037);
    }

    #[test]
    fn test_decode_entry_points() {
        // mul a0, a1, a2
        let mul = (0b000_0001 << 25) | (12 << 20) | (11 << 15) | (10 << 7) | 0b011_0011;
        let instruction = decode(mul).unwrap();
        assert_eq!(instruction.mnemonic, "mul");
        assert_eq!(instruction.operand_strings(), ["a0", "a1", "a2"]);

        let options = DecodeOptions::new().without_m().with_numeric_registers();
        assert!(matches!(decode_with(mul, &options), Err(DecodeError::UnrecognizedFunct7 { .. })));
        // add x3, x1, x2
        let add = (2 << 20) | (1 << 15) | (3 << 7) | 0b011_0011;
        assert_eq!(decode_with(add, &options).unwrap().to_string(), "add x3, x1, x2");
    }

    #[test]
    fn test_decoder_keeps_its_options() {
        let options = DecodeOptions::new().with_signed_immediates();
        let decoder = InstructionDecoder::with_options(options);
        assert_eq!(decoder.options(), &options);
        assert_eq!(InstructionDecoder::default().options(), &DecodeOptions::default());
        // addi x1, x0, -1
        assert_eq!(decoder.decode(0xFFF00093).unwrap().to_string(), "addi ra, zero, -1");
    }

    #[test]
    fn test_decode_words_keeps_order() {
        // addi a0, zero, i
        let words: Vec<u32> = (0..1000u32).map(|i| (i << 20) | (10 << 7) | 0b001_0011).collect();
        let results = InstructionDecoder::new().decode_words(&words);
        assert_eq!(results.len(), words.len());
        for (i, result) in results.iter().enumerate() {
            let instruction = result.as_ref().unwrap();
            assert_eq!(instruction.word, words[i]);
            assert_eq!(instruction.to_string(), format!("addi a0, zero, {i}"));
        }
    }

    #[test]
    fn test_decode_bytes() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x003E8037u32.to_le_bytes());
        bytes.extend_from_slice(&0x0000000Fu32.to_le_bytes());
        bytes.extend_from_slice(&0x00812503u32.to_le_bytes());

        let results = InstructionDecoder::new().decode_bytes(&bytes).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().to_string(), "lui zero, 1000");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().to_string(), "lw a0, 8(sp)");
    }

    #[test]
    fn test_decode_bytes_misaligned() {
        let decoder = InstructionDecoder::new();
        assert!(matches!(
            decoder.decode_bytes(&[0x37, 0x80, 0x3E]),
            Err(Error::Misaligned { len: 3 })
        ));
        assert!(decoder.decode_bytes(&[]).unwrap().is_empty());
    }
}
