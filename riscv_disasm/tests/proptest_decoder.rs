//! Property-based tests for the instruction decoder.
//!
//! These tests verify invariants that hold for every 32-bit word:
//! - Decoding never panics on arbitrary input
//! - Decoding is deterministic
//! - Operand count is fixed by the format
//! - Literals survive a trip through their textual form

use proptest::prelude::*;

use riscv_disasm::{
    literal::{parse_bin, parse_hex, to_bit_string},
    DecodeError, DecodeOptions, Format, InstructionDecoder, Opcode, Operand,
};

fn options() -> impl Strategy<Value = DecodeOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(numeric, signed, no_m)| {
        let mut options = DecodeOptions::new();
        if numeric {
            options = options.with_numeric_registers();
        }
        if signed {
            options = options.with_signed_immediates();
        }
        if no_m {
            options = options.without_m();
        }
        options
    })
}

/// Words whose opcode is one the decoder understands
fn known_opcode_word() -> impl Strategy<Value = u32> {
    (any::<u32>(), prop::sample::select(Opcode::ALL.to_vec()))
        .prop_map(|(word, opcode)| (word & !0x7F) | u32::from(opcode.bits()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary words should never panic.
    #[test]
    fn decode_never_panics(word in any::<u32>(), options in options()) {
        let decoder = InstructionDecoder::with_options(options);
        // This should not panic - errors are fine
        let _ = decoder.decode(word);
    }

    /// Decoding is deterministic: same input always produces same output.
    #[test]
    fn decode_is_deterministic(word in any::<u32>(), options in options()) {
        let decoder = InstructionDecoder::with_options(options);
        prop_assert_eq!(decoder.decode(word), decoder.decode(word));
    }

    /// Unknown opcodes fail at the first level, known ones never do.
    #[test]
    fn opcode_errors_match_the_format_table(word in any::<u32>()) {
        let result = InstructionDecoder::new().decode(word);
        let opcode = (word & 0x7F) as u8;
        match Opcode::from_bits(opcode) {
            Some(_) => {
                let is_unrecognized = matches!(result, Err(DecodeError::UnrecognizedOpcode { .. }));
                prop_assert!(!is_unrecognized);
            }
            None => prop_assert_eq!(result, Err(DecodeError::UnrecognizedOpcode { opcode })),
        }
    }

    /// Operand count is fixed per format.
    #[test]
    fn operand_count_follows_format(word in known_opcode_word(), options in options()) {
        if let Ok(instruction) = InstructionDecoder::with_options(options).decode(word) {
            let expected = match instruction.format {
                Format::R | Format::I | Format::SB | Format::Csr => 3,
                Format::ILoad
                | Format::S
                | Format::UPcRelative
                | Format::UAbsolute
                | Format::UJ => 2,
            };
            prop_assert_eq!(instruction.operands.len(), expected);
            prop_assert_eq!(instruction.format, instruction.opcode.format());
            prop_assert_eq!(instruction.word, word);
        }
    }

    /// Display is the mnemonic followed by comma separated operands.
    #[test]
    fn display_joins_operands(word in known_opcode_word(), options in options()) {
        if let Ok(instruction) = InstructionDecoder::with_options(options).decode(word) {
            let expected =
                format!("{} {}", instruction.mnemonic, instruction.operand_strings().join(", "));
            prop_assert_eq!(instruction.to_string(), expected);
        }
    }

    /// Unsigned mode never produces a negative immediate.
    #[test]
    fn unsigned_immediates_are_non_negative(word in known_opcode_word()) {
        if let Ok(instruction) = InstructionDecoder::new().decode(word) {
            for operand in &instruction.operands {
                match operand {
                    Operand::Immediate { value, .. } | Operand::Memory { offset: value, .. } => {
                        prop_assert!(*value >= 0);
                    }
                    Operand::Register(_) | Operand::Csr(_) => {}
                }
            }
        }
    }

    /// Batch decoding matches word by word decoding, in order.
    #[test]
    fn decode_words_matches_decode(words in prop::collection::vec(any::<u32>(), 0..64)) {
        let decoder = InstructionDecoder::new();
        let batch = decoder.decode_words(&words);
        prop_assert_eq!(batch.len(), words.len());
        for (word, result) in words.iter().zip(batch) {
            prop_assert_eq!(result, decoder.decode(*word));
        }
    }

    /// Binary and hex literals round trip.
    #[test]
    fn literal_round_trip(word in any::<u32>()) {
        let bits = to_bit_string(word);
        prop_assert_eq!(bits.len(), 32);
        prop_assert_eq!(parse_bin(&bits).unwrap(), word);
        prop_assert_eq!(parse_hex(&format!("{word:08X}")).unwrap(), word);
        prop_assert_eq!(parse_hex(&format!("{word:#x}")).unwrap(), word);
    }
}
