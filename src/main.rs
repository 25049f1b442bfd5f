use std::io::{self, BufRead, Write};

use clap::Parser;
use flexi_logger::Logger;
use log::warn;
use plain_date::{DEFAULT_DELIMITER, DEFAULT_FORMAT, Date};

const PROMPT: &str = "BBeDuTe DaTY Bashego PojDeHuya (yyyymmdd)";

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "warn"
};

#[derive(Debug, Parser)]
#[command(name = "plain-date")]
#[command(about = "Reads a date as `year month day` and prints it back.")]
struct Args {
    /// Output order: ddmmyyyy, mmddyyyy, yyyyddmm or yyyymmdd
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Text placed between the day, month and year
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Also print this many following days
    #[arg(short = 'n', long, default_value_t = 0)]
    following: usize,

    /// Log filter, e.g. `debug` or `plain_date=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn run<R: BufRead, W: Write>(args: &Args, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{PROMPT}")?;
    output.flush()?;

    let mut date = Date::new_default();
    date.set_format(args.format.as_str());
    date.set_delimiter(args.delimiter.as_str());

    if let Err(err) = date.read_from(input) {
        warn!("Could not read date: {err}");
    }

    write!(output, "You was born in {date}\n\n")?;

    for _ in 0..args.following {
        date.increase();
        writeln!(output, "{date}")?;
    }

    output.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logger = match &args.log_level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?,
    };
    let _logger = logger.start()?;

    run(&args, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
