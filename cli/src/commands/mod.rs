mod decode;
mod file;

pub use decode::DecodeCmd;
pub use file::FileCmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use riscv_disasm::{DecodeOptions, ImmediateMode, RegisterNaming};

#[derive(Parser)]
#[command(name = "rvdis", author, version, about = "RISC-V RV32IM instruction disassembler")]
pub struct Cli {
    #[clap(flatten)]
    pub flags: DecodeFlags,

    #[clap(subcommand)]
    pub command: Commands,
}

// Enum defining the available subcommands for `Cli`.
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single instruction literal
    Decode(DecodeCmd),
    /// Disassemble a raw little-endian code blob
    File(FileCmd),
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let options = self.flags.options();
        match &self.command {
            Commands::Decode(cmd) => cmd.run(&options),
            Commands::File(cmd) => cmd.run(&options),
        }
    }
}

/// Rendering flags shared by every subcommand
#[derive(clap::Args, Debug, Default)]
pub struct DecodeFlags {
    /// Print registers as x0..x31 instead of ABI names
    #[clap(long, global = true, env = "RVDIS_NUMERIC_REGISTERS")]
    pub numeric_registers: bool,

    /// Sign-extend immediates and scale branch/jump offsets to bytes
    #[clap(long, global = true, env = "RVDIS_SIGNED_IMMEDIATES")]
    pub signed: bool,

    /// Reject the multiply/divide extension
    #[clap(long, global = true, env = "RVDIS_NO_M")]
    pub no_m: bool,
}

impl DecodeFlags {
    pub fn options(&self) -> DecodeOptions {
        let naming =
            if self.numeric_registers { RegisterNaming::Numeric } else { RegisterNaming::Abi };
        let mode = if self.signed { ImmediateMode::Signed } else { ImmediateMode::Unsigned };
        let options = DecodeOptions::new().with_register_naming(naming).with_immediate_mode(mode);
        if self.no_m {
            options.without_m()
        } else {
            options
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riscv_disasm::Encoding;

    #[test]
    fn test_parse_decode_command() {
        let cli = Cli::try_parse_from(["rvdis", "decode", "hex", "003E8037"]).unwrap();
        let Commands::Decode(cmd) = &cli.command else { panic!("expected decode") };
        assert_eq!(cmd.encoding, Encoding::Hex);
        assert_eq!(cmd.literal, "003E8037");
        assert_eq!(cli.flags.options(), DecodeOptions::default());
    }

    #[test]
    fn test_parse_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rvdis",
            "decode",
            "bin",
            "00000000001111101000000000110111",
            "--numeric-registers",
            "--signed",
            "--no-m",
        ])
        .unwrap();
        let options = cli.flags.options();
        assert_eq!(options.register_naming(), RegisterNaming::Numeric);
        assert_eq!(options.immediate_mode(), ImmediateMode::Signed);
        assert!(!options.m_enabled());
    }

    #[test]
    fn test_parse_file_command() {
        let cli = Cli::try_parse_from(["rvdis", "--signed", "file", "code.bin"]).unwrap();
        let Commands::File(cmd) = &cli.command else { panic!("expected file") };
        assert_eq!(cmd.path.to_str(), Some("code.bin"));
        assert!(cli.flags.signed);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["rvdis"]).is_err());
        assert!(Cli::try_parse_from(["rvdis", "decode", "oct", "17"]).is_err());
        assert!(Cli::try_parse_from(["rvdis", "decode", "hex"]).is_err());
    }
}
