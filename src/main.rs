//! ferrolink CLI - link URLs and emails in text, print HTML

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ferrolink::{Autolinker, Input, Options};
use log::info;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input is already HTML-escaped; copy non-link text verbatim
    #[arg(long, action = ArgAction::SetTrue)]
    safe: bool,

    /// Omit rel="nofollow" on web links
    #[arg(long = "no-nofollow", action = ArgAction::SetTrue)]
    no_nofollow: bool,

    /// Shorten link labels longer than N characters
    #[arg(long, value_name = "N")]
    trim: Option<usize>,

    /// Input file (default or `-`: stdin)
    input: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let linker = Autolinker::new(Options {
        nofollow: !cli.no_nofollow,
        trim_url_limit: cli.trim,
    });
    let input = if cli.safe {
        Input::Safe(&text)
    } else {
        Input::Raw(&text)
    };

    let mut out = Vec::with_capacity(text.len() + text.len() / 2);
    linker.process_into(input, &mut out);
    info!("read {} bytes, wrote {} bytes", text.len(), out.len());
    io::stdout().write_all(&out)?;

    Ok(())
}
