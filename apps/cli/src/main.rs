//! # Tally CLI
//!
//! Command-line driver for receipt processing.
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Tally CLI                                     │
//! │                                                                         │
//! │  tally            ───► process the built-in sample baskets             │
//! │  tally random     ───► generate and process a random basket            │
//! │  tally bench      ───► time repeated processing of a sample basket     │
//! │                                                                         │
//! │  --strict on any mode turns skipped malformed lines into hard errors   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A processing failure logs the error and exits non-zero without printing
//! a partial receipt.

mod generate;

use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use tally_core::{CoreResult, Receipt, ReceiptParser};

/// Built-in sample baskets, one receipt each.
const SAMPLE_BASKETS: &[&str] = &[
    "2 book at 12.49\n\
     1 music CD at 14.99\n\
     1 chocolate bar at 0.85",
    "1 imported box of chocolates at 10.00\n\
     1 imported bottle of perfume at 47.50",
    "1 imported bottle of perfume at 27.99\n\
     1 bottle of perfume at 18.99\n\
     1 packet of headache pills at 9.75\n\
     3 imported boxes of chocolates at 11.25",
];

const RULE: &str = "----------------------------------------";

#[derive(Debug, Parser)]
#[command(name = "tally", about = "Parses basket text and prints taxed receipts")]
struct Cli {
    /// Fail on malformed lines instead of skipping them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate and process a random basket
    Random,
    /// Time repeated processing of the first sample basket
    Bench {
        /// Number of parse+render passes to time
        #[arg(long, default_value_t = 100)]
        iterations: u32,
    },
}

fn main() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!(error = %err, "receipt processing failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CoreResult<()> {
    match cli.command {
        None => {
            for (index, basket) in SAMPLE_BASKETS.iter().enumerate() {
                println!("\nReceipt {}:", index + 1);
                println!("{RULE}");
                process(basket, cli.strict)?;
                println!("{RULE}");
            }
        }
        Some(Command::Random) => {
            let basket = generate::random_basket(&mut rand::thread_rng());
            println!("\nRandom Receipt:");
            println!("{RULE}");
            process(&basket, cli.strict)?;
            println!("{RULE}");
        }
        Some(Command::Bench { iterations }) => {
            println!("\nRunning Benchmark:");
            println!("{RULE}");
            bench(SAMPLE_BASKETS[0], iterations)?;
            println!("{RULE}");
        }
    }
    Ok(())
}

/// Parses one basket and prints the rendered receipt.
fn process(raw_input: &str, strict: bool) -> CoreResult<()> {
    info!("processing receipt input");
    let receipt = parse(raw_input, strict)?;
    println!("{}", receipt.render());
    Ok(())
}

/// Times `iterations` full parse+render passes over one basket.
///
/// This is the quick smoke-test loop; the rigorous harness is the
/// criterion benchmark in tally-core (`cargo bench -p tally-core`).
fn bench(raw_input: &str, iterations: u32) -> CoreResult<()> {
    let start = Instant::now();
    for _ in 0..iterations {
        let receipt = parse(raw_input, false)?;
        std::hint::black_box(receipt.render());
    }
    let elapsed = start.elapsed();
    println!(
        "Receipt processing: {iterations} iterations in {elapsed:?} ({:?}/iteration)",
        elapsed / iterations.max(1)
    );
    Ok(())
}

fn parse(raw_input: &str, strict: bool) -> CoreResult<Receipt> {
    if strict {
        ReceiptParser::parse_strict(Some(raw_input))
    } else {
        ReceiptParser::parse(Some(raw_input))
    }
}
