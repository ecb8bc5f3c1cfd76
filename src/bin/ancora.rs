//! Command-line interface for the ancora tokenizer
//!
//! Reads Spanish text from a file or stdin, tokenizes it and writes tokens
//! space-separated to stdout, one output line per input line. Reports
//! line/token throughput to stderr on completion.
//!
//! Usage:
//!   ancora [FILE] [--ancora] [--lower-case] [--encoding <enc>]
//!          [--ortho-opts <optstring>] [--options <optstring>]
//!          [--format <text|json>]

use ancora::spanish::{ScanError, Token, TokenizerFactory};
use clap::{Arg, ArgAction, Command};
use std::io::{self, Cursor, Read, Write};
use std::time::Instant;

fn main() {
    env_logger::init();

    let matches = Command::new("ancora")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizes raw Spanish text")
        .arg(
            Arg::new("file")
                .help("Input file (defaults to stdin)")
                .index(1),
        )
        .arg(
            Arg::new("ancora")
                .long("ancora")
                .action(ArgAction::SetTrue)
                .help("Tokenization style of the AnCora corpus (all splitting rules on)"),
        )
        .arg(
            Arg::new("lower-case")
                .long("lower-case")
                .action(ArgAction::SetTrue)
                .help("Lowercase all output tokens"),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .default_value("utf-8")
                .help("Input text encoding ('utf-8' or 'iso-8859-1')"),
        )
        .arg(
            Arg::new("ortho-opts")
                .long("ortho-opts")
                .default_value("")
                .help("Orthographic option string forwarded to the scanner"),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .default_value("")
                .help("Tokenizer option string (e.g. 'splitAll,splitVerbs=false')"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .default_value("text")
                .help("Output format ('text' or 'json')"),
        )
        .get_matches();

    let file = matches.get_one::<String>("file");
    let encoding = matches.get_one::<String>("encoding").unwrap();
    let ortho_opts = matches.get_one::<String>("ortho-opts").unwrap();
    let options = matches.get_one::<String>("options").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let lower_case = matches.get_flag("lower-case");

    let source = match read_input(file.map(String::as_str), encoding) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let mut factory = if matches.get_flag("ancora") {
        TokenizerFactory::ancora()
    } else {
        TokenizerFactory::new()
    };
    factory.set_options(ortho_opts);
    factory.set_options(options);
    // When driven from the command line, split output on newlines
    factory.set_options("tokenizeNLs");

    let result = match format.as_str() {
        "text" => emit_text(&factory, source, lower_case),
        "json" => emit_json(&factory, source, lower_case),
        other => {
            eprintln!("Unknown output format '{}'", other);
            std::process::exit(1);
        }
    };

    match result {
        Ok((lines, tokens, elapsed_secs)) => {
            eprintln!(
                "Done! Tokenized {} lines ({} tokens) at {:.2} lines/sec",
                lines,
                tokens,
                lines as f64 / elapsed_secs
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Read the whole input and decode it to a string
fn read_input(file: Option<&str>, encoding: &str) -> io::Result<String> {
    let bytes = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buffered = Vec::new();
            io::stdin().lock().read_to_end(&mut buffered)?;
            buffered
        }
    };
    decode(bytes, encoding)
}

fn decode(bytes: Vec<u8>, encoding: &str) -> io::Result<String> {
    match encoding.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(bytes.into_iter().map(|b| b as char).collect())
        }
        other => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported encoding '{}'", other),
        )),
    }
}

/// Space-separated tokens, one output line per `*NL*` token
fn emit_text(
    factory: &TokenizerFactory,
    source: String,
    lower_case: bool,
) -> Result<(usize, usize, f64), ScanError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tokenizer = factory.tokenizer(Cursor::new(source));

    let started = Instant::now();
    let mut lines = 0usize;
    let mut tokens = 0usize;
    let mut print_space = false;

    while let Some(tok) = tokenizer.next_token()? {
        tokens += 1;
        if tok.is_newline() {
            lines += 1;
            print_space = false;
            writeln!(out).map_err(ScanError::Io)?;
        } else {
            if print_space {
                write!(out, " ").map_err(ScanError::Io)?;
            }
            write!(out, "{}", output_word(&tok, lower_case)).map_err(ScanError::Io)?;
            print_space = true;
        }
    }
    if print_space {
        writeln!(out).map_err(ScanError::Io)?;
    }
    out.flush().map_err(ScanError::Io)?;

    Ok((lines, tokens, started.elapsed().as_secs_f64()))
}

/// One JSON array of token words per input line
fn emit_json(
    factory: &TokenizerFactory,
    source: String,
    lower_case: bool,
) -> Result<(usize, usize, f64), ScanError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tokenizer = factory.tokenizer(Cursor::new(source));

    let started = Instant::now();
    let mut lines = 0usize;
    let mut tokens = 0usize;
    let mut line_words: Vec<String> = Vec::new();

    while let Some(tok) = tokenizer.next_token()? {
        tokens += 1;
        if tok.is_newline() {
            lines += 1;
            write_json_line(&mut out, &line_words)?;
            line_words.clear();
        } else {
            line_words.push(output_word(&tok, lower_case));
        }
    }
    if !line_words.is_empty() {
        write_json_line(&mut out, &line_words)?;
    }
    out.flush().map_err(ScanError::Io)?;

    Ok((lines, tokens, started.elapsed().as_secs_f64()))
}

fn write_json_line(out: &mut impl Write, words: &[String]) -> Result<(), ScanError> {
    let encoded = serde_json::to_string(words)
        .map_err(|e| ScanError::Io(io::Error::new(io::ErrorKind::Other, e)))?;
    writeln!(out, "{}", encoded).map_err(ScanError::Io)
}

fn output_word(tok: &Token, lower_case: bool) -> String {
    if lower_case {
        tok.word_text().to_lowercase()
    } else {
        tok.word_text().to_string()
    }
}
