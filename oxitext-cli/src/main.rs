//! OxiText CLI - LZ77, Huffman and LZW text coding
//!
//! Encodes text files into JSON documents with the LZ77 + Huffman pipeline
//! and inspects each coding stage.

mod commands;
mod document;
mod utils;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use commands::{
    cmd_codes, cmd_completions, cmd_decode, cmd_encode, cmd_lzw, cmd_test, cmd_tokens,
};
use log::LevelFilter;
use oxitext_deflate::DEFAULT_WINDOW_SIZE;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxitext")]
#[command(author, version, about = "Pure Rust LZ77 / Huffman / LZW text coding")]
#[command(long_about = "
OxiText compresses text with an LZ77 match finder followed by Huffman coding,
and exposes each stage for inspection.

Examples:
  oxitext encode notes.txt
  oxitext encode notes.txt -w 4 --encoding shift_jis
  oxitext decode notes_encoded.json
  oxitext tokens --text abacabacabadaca
  oxitext codes notes.txt
  oxitext lzw --text abacabadabacacacd
  oxitext test notes.txt
  oxitext completions bash
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Text taken from a file or directly from the command line.
#[derive(Args)]
struct InputArgs {
    /// Input text file
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Use this text instead of a file
    #[arg(short, long)]
    text: Option<String>,

    /// Character encoding of the input file (any WHATWG label)
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,
}

impl InputArgs {
    fn read(&self) -> oxitext_core::Result<String> {
        utils::read_input(self.file.as_deref(), self.text.as_deref(), &self.encoding)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a text file into a JSON document
    #[command(alias = "e")]
    Encode {
        /// Text file to encode
        file: PathBuf,

        /// Output document (default: <stem>_encoded.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// LZ77 window size
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,

        /// Character encoding of the input file (any WHATWG label)
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
    },

    /// Decode a JSON document back into text
    #[command(alias = "d")]
    Decode {
        /// Document to decode
        document: PathBuf,

        /// Output text file (default: <stem>_decoded.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the LZ77 tokens of a text
    Tokens {
        #[command(flatten)]
        input: InputArgs,

        /// LZ77 window size
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,
    },

    /// Print the Huffman code table of a text
    Codes {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the LZW codes of a text
    Lzw {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Round-trip a text through every coder
    #[command(alias = "t")]
    Test {
        #[command(flatten)]
        input: InputArgs,

        /// LZ77 window size
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable.
    if let Err(e) = TermLogger::init(
        log_level(cli.verbose, cli.quiet),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Encode {
            file,
            output,
            window,
            encoding,
        } => cmd_encode(&file, output, window, &encoding),
        Commands::Decode { document, output } => cmd_decode(&document, output),
        Commands::Tokens { input, window } => input
            .read()
            .map_err(Into::into)
            .and_then(|text| cmd_tokens(&text, window)),
        Commands::Codes { input } => input
            .read()
            .map_err(Into::into)
            .and_then(|text| cmd_codes(&text)),
        Commands::Lzw { input } => input.read().map_err(Into::into).and_then(|text| cmd_lzw(&text)),
        Commands::Test {
            input,
            window,
            progress,
        } => input
            .read()
            .map_err(Into::into)
            .and_then(|text| cmd_test(&text, window, cli.verbose > 0, progress && !cli.quiet)),
        Commands::Completions { shell } => cmd_completions::<Cli>(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
