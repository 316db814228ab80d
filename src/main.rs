use core::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use index_mask::codec::{IndexReader, MaskWriter, OutputFormat};
use index_mask::convert::{ConvertConfig, Converter, Parallelism};
use index_mask::error::MaskError;
use index_mask::host::{self, HostValue};
use index_mask::logging;

/// Converts index sets, one per input line, into boolean masks.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cmd {
    /// Length of every output mask.
    #[arg(long, short)]
    pub length: u64,
    /// Input file. Reads stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Separator between values, for both input and text output.
    #[arg(long, short, default_value_t = ',')]
    pub delimiter: char,
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
    /// How index sets are spread across worker threads.
    #[arg(long, value_enum, default_value_t = ParallelismArg::Auto)]
    pub parallelism: ParallelismArg,
    /// Worker thread count. Uses the global pool when omitted.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Log verbosity level.
    #[arg(short, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// `0`/`1` digits, one mask per line.
    Text,
    /// JSON array of boolean arrays.
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ParallelismArg {
    Sequential,
    Parallel,
    Auto,
}

pub fn main() {
    let cmd = Cmd::parse();
    logging::init(cmd.verbose as usize).expect("initialize logging");

    if let Err(err) = run(cmd) {
        match err.downcast_ref::<MaskError>() {
            Some(e) => log::error!("ERROR [{}]: {e}", e.identifier()),
            None => log::error!("ERROR: {err}"),
        }
        std::process::exit(1);
    }
}

fn run(cmd: Cmd) -> Result<(), Box<dyn Error>> {
    let data = match &cmd.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let parallelism = match cmd.parallelism {
        ParallelismArg::Sequential => Parallelism::Sequential,
        ParallelismArg::Parallel => Parallelism::Parallel,
        ParallelismArg::Auto => Parallelism::Auto,
    };
    let mut config = ConvertConfig::new().with_parallelism(parallelism);
    if let Some(threads) = cmd.threads {
        config = config.with_threads(threads);
    }
    let converter = Converter::new(config);

    let cells = IndexReader::new().with_delimiter(cmd.delimiter).read_str(&data);
    let outputs = host::call_with(&converter, &[cells, HostValue::from(cmd.length)], 1)?;
    let masks = outputs
        .into_iter()
        .next()
        .and_then(HostValue::into_masks)
        .ok_or("conversion returned no mask batch")?;
    let marked: usize = masks.iter().map(|m| m.count_true()).sum();
    log::debug!("converted {} masks, {} positions set", masks.len(), marked);

    let format = match cmd.format {
        FormatArg::Text => OutputFormat::Text,
        FormatArg::Json => OutputFormat::Json,
    };
    let writer = MaskWriter::new().with_delimiter(cmd.delimiter).with_format(format);
    writer.write(io::stdout().lock(), &masks)?;

    Ok(())
}
