use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use svgclean::{Options, clean_with_options};

#[derive(Parser)]
#[command(name = "svgclean")]
#[command(about = "Normalizes SVG files", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Precision for coordinates (decimal places)
    #[arg(short, long, default_value = "1")]
    precision: u8,

    /// Remove this attribute from every element (repeatable, e.g. --strip id)
    #[arg(long, value_name = "ATTR")]
    strip: Vec<String>,

    /// Leave translate() transforms in place
    #[arg(long)]
    no_fold: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("svgclean: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = if cli.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };
    let input_len = input.len();

    let options = Options {
        precision: cli.precision,
        fold_translations: !cli.no_fold,
        strip: cli.strip,
    };

    // Any error leaves the output untouched
    let output = clean_with_options(&input, &options)?;
    let output_len = output.len();

    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&cli.output, &output)?;
    }

    if cli.stats {
        let saved = input_len.saturating_sub(output_len);
        let percent = if input_len > 0 {
            (saved as f64 / input_len as f64) * 100.0
        } else {
            0.0
        };
        eprintln!(
            "{} -> {} bytes ({:.1}% smaller)",
            input_len, output_len, percent
        );
    }

    Ok(())
}
