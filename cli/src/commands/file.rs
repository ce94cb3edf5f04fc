use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use riscv_disasm::{DecodeOptions, DecodedInstruction, InstructionDecoder};
use tracing::{debug, warn};

// Structure representing the 'file' subcommand.
#[derive(clap::Args)]
pub struct FileCmd {
    /// Raw code blob, little-endian 32-bit words
    pub path: PathBuf,
}

impl FileCmd {
    pub fn run(&self, options: &DecodeOptions) -> Result<()> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        debug!(path = %self.path.display(), len = bytes.len(), "read code blob");

        let decoder = InstructionDecoder::with_options(*options);
        debug!(options = %decoder.options(), "disassembling");
        let results = decoder
            .decode_bytes(&bytes)
            .with_context(|| format!("Failed to disassemble {}", self.path.display()))?;

        let mut failed = 0;
        for (i, result) in results.iter().enumerate() {
            let offset = i * DecodedInstruction::size();
            let word = word_at(&bytes, offset);
            match result {
                Ok(instruction) => println!("{offset:08x}: {word:08x} {instruction}"),
                Err(e) => {
                    warn!(offset, word, "{e}");
                    println!("{offset:08x}: {word:08x} <unknown>");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(anyhow!("{failed} of {} words failed to decode", results.len()));
        }
        Ok(())
    }
}

fn word_at(bytes: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(word)
}
