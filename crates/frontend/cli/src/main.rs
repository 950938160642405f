use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Generate 8086 ALU test vectors for differential comparison.
#[derive(Parser)]
struct Args {
    /// Write records to this file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Emit newline-delimited JSON records instead of the text format
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn emit<W: Write>(out: &mut W, json: bool) -> Result<u64> {
    let count = if json {
        vec86_core::run_json(out)?
    } else {
        vec86_core::run(out)?
    };
    Ok(count)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let count = match args.output.as_deref() {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            emit(&mut out, args.json)?
        }
        None => {
            // Lock stdout for the whole run; records are line-buffered by
            // the BufWriter and flushed before exit
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            emit(&mut out, args.json)?
        }
    };

    log::info!("emitted {} test records", count);
    Ok(())
}
