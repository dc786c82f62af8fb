//! wfm_appraiser - values a Warframe inventory listing against live
//! warframe.market prices and writes an XLSX report.

use std::path::PathBuf;

use clap::Parser;

use wfm_appraiser::{
    appraise, read_line_items, write_report, MarketClient, MarketResolver, Normalizer,
    PriceMethod, PriceSource, StarTable,
};

/// Value an inventory listing against warframe.market
#[derive(Parser, Debug)]
#[command(name = "wfm_appraiser")]
#[command(version, about, long_about = None)]
struct Args {
    /// Inventory listing to value (.txt, .csv/.tsv or .xlsx)
    input: PathBuf,

    /// Where to write the valued report
    #[arg(short, long, default_value = "report.xlsx")]
    output: PathBuf,

    /// Which upstream data prices are read from
    #[arg(long, value_enum, default_value_t = PriceSource::Statistics)]
    source: PriceSource,

    /// How a single representative price is chosen
    #[arg(long, value_enum, default_value_t = PriceMethod::Median)]
    method: PriceMethod,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let items = match read_line_items(&args.input) {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to read {}: {e}", args.input.display());
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Valuing {} line items", items.len());

    let resolver = MarketResolver::new(MarketClient::new(), args.source, args.method);
    let valuation = appraise(&items, &Normalizer::default(), &StarTable::default(), &resolver);

    if let Err(e) = write_report(&args.output, &valuation) {
        log::error!("Failed to write {}: {e}", args.output.display());
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let valued = valuation
        .rows
        .iter()
        .filter(|r| r.resolved_price.is_some())
        .count();
    log::info!(
        "Valued {valued}/{} rows, grand total {} platinum; report at {}",
        valuation.rows.len(),
        valuation.grand_total,
        args.output.display()
    );
}
