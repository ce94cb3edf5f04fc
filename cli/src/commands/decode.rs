use anyhow::{Context, Result};
use riscv_disasm::{DecodeOptions, Encoding, InstructionDecoder};
use tracing::debug;

// Structure representing the 'decode' subcommand.
#[derive(clap::Args)]
pub struct DecodeCmd {
    /// Literal encoding: `bin` or `hex`
    pub encoding: Encoding,

    /// Instruction word, e.g. 003E8037
    pub literal: String,
}

impl DecodeCmd {
    pub fn run(&self, options: &DecodeOptions) -> Result<()> {
        let decoder = InstructionDecoder::with_options(*options);
        debug!(
            options = %decoder.options(),
            encoding = %self.encoding,
            literal = %self.literal,
            "decoding literal"
        );
        let instruction =
            decoder.decode_literal(self.encoding, &self.literal).with_context(|| {
                format!("Failed to decode {} literal {:?}", self.encoding, self.literal)
            })?;

        println!("Instruction:\n{instruction}");
        Ok(())
    }
}
