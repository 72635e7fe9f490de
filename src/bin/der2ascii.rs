//! der2ascii: Disassemble BER or DER encoded data into text.

use std::{fs, io};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use clap::Parser;
use derascii::{Disassembler, Options};
use tracing_subscriber::EnvFilter;


//------------ Args ----------------------------------------------------------

/// Disassemble BER or DER encoded data into text.
#[derive(Debug, Parser)]
#[command(name = "der2ascii", version, about)]
struct Args {
    /// Read input from this file instead of stdin.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Decode every PEM block of the input and disassemble it.
    #[arg(long)]
    pem: bool,

    /// Maximum nesting depth before content is shown as a literal.
    #[arg(long, value_name = "N", default_value_t = Options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log heuristic decisions.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn init_tracing(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    fn read_input(&self) -> Result<Bytes, Error> {
        let res = match self.input.as_ref() {
            Some(path) => {
                fs::read(path).map_err(|err| Error::io(path, err))?
            }
            None => {
                let mut res = Vec::new();
                io::stdin().lock().read_to_end(&mut res)
                    .map_err(|err| Error::io("<stdin>", err))?;
                res
            }
        };
        Ok(res.into())
    }

    fn write_output(&self, text: &str) -> Result<(), Error> {
        match self.output.as_ref() {
            Some(path) => {
                fs::write(path, text).map_err(|err| Error::io(path, err))
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|err| Error::io("<stdout>", err))
            }
        }
    }
}


//------------ PemBlock ------------------------------------------------------

/// A single decoded block of a PEM file.
#[derive(Clone, Debug, Eq, PartialEq)]
struct PemBlock {
    label: String,
    data: Vec<u8>,
}

impl PemBlock {
    /// Extracts all blocks from PEM encoded text.
    ///
    /// Text outside of blocks is ignored, as are RFC 1421 style header
    /// lines inside blocks.
    fn parse_all(text: &str) -> Result<Vec<Self>, Error> {
        let mut res = Vec::new();
        let mut current: Option<(&str, String)> = None;
        for line in text.lines().map(str::trim) {
            match current.as_mut() {
                None => {
                    if let Some(label) = pem_label(line, "BEGIN") {
                        current = Some((label, String::new()));
                    }
                }
                Some((label, base64)) => {
                    if let Some(end) = pem_label(line, "END") {
                        if end != *label {
                            return Err(Error::Pem(format!(
                                "block '{}' ended by '{}'", label, end
                            )))
                        }
                        let data = STANDARD.decode(base64.as_bytes())
                            .map_err(|err| Error::Pem(format!(
                                "block '{}': {}", label, err
                            )))?;
                        res.push(PemBlock { label: label.to_string(), data });
                        current = None;
                    }
                    else if !line.contains(':') {
                        base64.push_str(line);
                    }
                }
            }
        }
        if let Some((label, _)) = current {
            return Err(Error::Pem(format!("unterminated block '{}'", label)))
        }
        if res.is_empty() {
            return Err(Error::Pem("no PEM blocks found".into()))
        }
        Ok(res)
    }
}

/// Returns the label of a PEM boundary line of the given kind.
fn pem_label<'a>(line: &'a str, kind: &str) -> Option<&'a str> {
    line.strip_prefix("-----")?
        .strip_prefix(kind)?
        .strip_prefix(' ')?
        .strip_suffix("-----")
}


//------------ Error ---------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid PEM input: {0}")]
    Pem(String),
}

impl Error {
    fn io(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        Error::Io { path: path.as_ref().display().to_string(), source }
    }
}


//------------ main ----------------------------------------------------------

fn run(args: &Args) -> Result<(), Error> {
    let disasm = Disassembler::new(
        Options::new().with_max_depth(args.max_depth)
    );
    let input = args.read_input()?;
    tracing::debug!(len = input.len(), pem = args.pem, "read input");

    let text = if args.pem {
        let text = std::str::from_utf8(&input).map_err(|_| {
            Error::Pem("input is not valid UTF-8".into())
        })?;
        let mut res = String::new();
        for (idx, block) in PemBlock::parse_all(text)?.iter().enumerate() {
            if idx > 0 {
                res.push('\n');
            }
            res.push_str("# ");
            res.push_str(&block.label);
            res.push('\n');
            res.push_str(&disasm.disassemble(&block.data));
        }
        res
    }
    else {
        disasm.disassemble(&input)
    };
    args.write_output(&text)
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}


//============ Tests =========================================================
