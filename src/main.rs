use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use gzpack::codec::Mode;
use gzpack::convert::{
    ConvertError, FileReport, convert_file, convert_file_with_default_name, convert_string,
};
use serde_json::json;

#[derive(Debug)]
struct CliError {
    code: &'static str,
    message: String,
}

impl CliError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn io(err: io::Error) -> Self {
        Self::new("io_error", err.to_string())
    }
}

impl From<ConvertError> for CliError {
    fn from(value: ConvertError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "gzpack")]
#[command(about = "Gzip compression for files and strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file; DEST defaults to SOURCE with `.gz` appended.
    Compress {
        source: PathBuf,
        dest: Option<PathBuf>,
    },
    /// Decompress a file; DEST defaults to SOURCE with `.gz` stripped.
    Decompress {
        source: PathBuf,
        dest: Option<PathBuf>,
    },
    /// Read one line, print its compressed Base64 form, then the recovered
    /// text.
    Demo {
        /// Text encoding label, e.g. utf-8 or windows-1252.
        #[arg(long, default_value = "utf-8")]
        encoding: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let payload = json!({
                "error": {
                    "code": err.code,
                    "message": err.message,
                }
            });
            eprintln!("{payload}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Compress { source, dest } => run_file(Mode::Compress, source, dest),
        Command::Decompress { source, dest } => run_file(Mode::Decompress, source, dest),
        Command::Demo { encoding } => run_demo(&encoding),
    }
}

fn run_file(mode: Mode, source: PathBuf, dest: Option<PathBuf>) -> Result<(), CliError> {
    let report = match dest {
        Some(dest) => convert_file(mode, &source, &dest)?,
        None => convert_file_with_default_name(mode, &source)?,
    };
    print_report(&report);
    Ok(())
}

fn print_report(report: &FileReport) {
    let payload = json!({
        "status": "ok",
        "source": report.source.display().to_string(),
        "dest": report.dest.display().to_string(),
        "bytes": report.bytes,
    });
    println!("{payload}");
}

fn run_demo(encoding_label: &str) -> Result<(), CliError> {
    let encoding = Encoding::for_label(encoding_label.as_bytes()).ok_or_else(|| {
        CliError::new(
            "unknown_encoding",
            format!("unknown encoding label `{encoding_label}`"),
        )
    })?;

    // Prompt on stderr keeps stdout limited to the Base64 and recovered
    // text lines.
    eprint!("Enter a string to compress: ");
    io::stderr().flush().map_err(CliError::io)?;

    let line = read_line()?;
    let compressed = convert_string(Mode::Compress, line.as_deref(), encoding)?;
    println!("{compressed}");
    let recovered = convert_string(Mode::Decompress, Some(&compressed), encoding)?;
    println!("{recovered}");
    Ok(())
}

/// Reads one line from stdin. A closed stream yields `None`, which the
/// converter rejects as absent input.
fn read_line() -> Result<Option<String>, CliError> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).map_err(CliError::io)?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
