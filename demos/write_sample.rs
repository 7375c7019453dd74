//! Write two small BIFF2 worksheets side by side.
//!
//! Both files are open at once and their writers are driven in interleaved
//! order, showing that independent writers do not affect each other.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example write_sample -- test1.xls test2.xls
//! RUST_LOG=trace cargo run --example write_sample -- --strict a.xls b.xls
//! ```

use clap::Parser;
use microxls::{IoSink, WriterOptions, XlsResult, XlsWriter};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

/// Write two sample .xls files
#[derive(Parser, Debug)]
#[command(name = "write_sample", version)]
struct Args {
    /// First output file
    #[arg(value_name = "FIRST", default_value = "test1.xls")]
    first: PathBuf,

    /// Second output file
    #[arg(value_name = "SECOND", default_value = "test2.xls")]
    second: PathBuf,

    /// Reject out-of-order operations instead of writing them
    #[arg(long)]
    strict: bool,
}

fn run(args: &Args) -> XlsResult<()> {
    let options = if args.strict {
        WriterOptions::strict()
    } else {
        WriterOptions::default()
    };

    let mut w1 = XlsWriter::with_options(IoSink::new(File::create(&args.first)?), options);
    let mut w2 = XlsWriter::with_options(IoSink::new(File::create(&args.second)?), options);

    w1.begin()?;
    w2.begin()?;

    w1.set_column_width(2, 256 * 100)?;
    w1.add_number_cell(0, 0, 12345.6)?;
    w1.add_label_cell(0, 1, "Testing")?;

    // Only touches the second file
    w2.add_number_cell(5, 5, 555.5)?;

    w1.add_label_cell(0, 2, "Testing much longer cell content")?;
    w1.add_number_cell(0, 255, 3.141592)?;

    w1.finish()?;
    w2.finish()?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            println!(
                "Wrote {} and {}",
                args.first.display(),
                args.second.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Output is not usable after a failed write
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
