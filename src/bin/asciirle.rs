use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use asciirle::{
    decode_str, CodecConfig, DecodeMode, Document, DocumentCodec, EncodeStats, LoadOptions,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "asciirle")]
#[command(about = "Run-length encode line-oriented ASCII text (and decode it back)")]
#[command(after_help = "Exit status: 0 = encoded, 1 = input stored verbatim (did not shrink), 2 = error")]
#[command(version)]
struct Args {
    /// Input text file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Treat the input as an encoded token stream and decode it
    #[arg(long, conflicts_with_all = ["roundtrip", "check"])]
    decode: bool,

    /// Write the encoded text followed by its decoding
    #[arg(long, conflicts_with = "check")]
    roundtrip: bool,

    /// Report whether the input compresses and exit (0=compressed, 1=stored verbatim, 2=error)
    #[arg(long)]
    check: bool,

    /// Reject malformed token streams instead of decoding them best-effort
    #[arg(long)]
    strict: bool,

    /// Keep zero-length lines from the input (dropped by default)
    #[arg(long)]
    keep_empty_lines: bool,

    /// Maximum decoded size in bytes
    #[arg(long)]
    max_decoded_len: Option<usize>,

    /// Show verbose statistics and debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes for encoding and --check mode
const EXIT_COMPRESSED: u8 = 0;
const EXIT_STORED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<u8, Box<dyn std::error::Error>> {
    let config = CodecConfig {
        decode_mode: if args.strict { DecodeMode::Strict } else { DecodeMode::Lenient },
        max_decoded_len: args.max_decoded_len,
    };

    if args.decode {
        return run_decode_mode(args, &config);
    }

    let options = LoadOptions { skip_empty_lines: !args.keep_empty_lines };
    let document = if is_stdio(&args.input) {
        Document::from_reader(io::stdin().lock(), &options)?
    } else {
        Document::from_path(&args.input, &options)?
    };

    let start = std::time::Instant::now();
    let mut codec = DocumentCodec::with_config(document, config);
    let stats = codec.encode().stats().clone();

    if args.check {
        if args.verbose {
            print_stats(&stats, start.elapsed());
        }
        eprintln!("Compressed: {}", if stats.used_fallback { "no" } else { "yes" });
        return Ok(if stats.used_fallback { EXIT_STORED } else { EXIT_COMPRESSED });
    }

    let mut output = open_output(&args.output)?;
    output.write_all(codec.encode().as_str().as_bytes())?;
    output.write_all(b"\n")?;

    if args.roundtrip {
        let decoded = codec.decode()?;
        output.write_all(decoded.as_bytes())?;
        output.write_all(b"\n")?;
        if decoded != codec.document().as_str() {
            log::warn!("decoded text differs from the input");
        }
    }
    output.flush()?;

    if args.verbose {
        print_stats(&stats, start.elapsed());
    }

    if stats.used_fallback {
        log::warn!(
            "encoding would not shrink the input; wrote it verbatim (not readable by --decode)"
        );
        return Ok(EXIT_STORED);
    }

    Ok(EXIT_COMPRESSED)
}

fn run_decode_mode(args: &Args, config: &CodecConfig) -> Result<u8, Box<dyn std::error::Error>> {
    let mut encoded = String::new();
    if is_stdio(&args.input) {
        io::stdin().lock().read_to_string(&mut encoded)?;
    } else {
        BufReader::new(File::open(&args.input)?).read_to_string(&mut encoded)?;
    }
    // Encoded files are written with a single trailing newline
    if encoded.ends_with('\n') {
        encoded.pop();
    }

    let start = std::time::Instant::now();
    let decoded = decode_str(&encoded, config)?;
    let elapsed = start.elapsed();

    let mut output = open_output(&args.output)?;
    output.write_all(decoded.as_bytes())?;
    output.write_all(b"\n")?;
    output.flush()?;

    if args.verbose {
        eprintln!("Decoding complete:");
        eprintln!("  Encoded bytes:    {}", encoded.len());
        eprintln!("  Decoded bytes:    {}", decoded.len());
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    Ok(0)
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdout().lock()))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

fn print_stats(stats: &EncodeStats, elapsed: std::time::Duration) {
    eprintln!("Encoding complete:");
    eprintln!("  Lines:            {}", stats.lines);
    eprintln!("  Tokens:           {}", stats.tokens);
    eprintln!("  Original bytes:   {}", stats.original_len);
    eprintln!("  Encoded bytes:    {}", stats.encoded_len);
    eprintln!("  Ratio:            {:.3}", stats.ratio());
    eprintln!("  Stored verbatim:  {}", if stats.used_fallback { "yes" } else { "no" });
    if let Some(line) = stats.aborted_at_line {
        eprintln!("  Overrun at line:  {}", line + 1);
    }
    eprintln!("  Time:             {:.2?}", elapsed);
}
