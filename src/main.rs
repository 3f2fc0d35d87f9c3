use ip_range_summary::cli::{parse_args, Command, OutputMode};
use ip_range_summary::output;
use ip_range_summary::processing::{enumerate, expand, summarize_range};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    //
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    match cli.command {
        Command::Summarize { start, end } => {
            let blocks = summarize_range(start, end)?;
            match cli.output {
                OutputMode::Plain => output::print_blocks(&blocks),
                OutputMode::Csv => output::print_blocks_csv(&blocks)?,
                OutputMode::Json => output::print_blocks_json(&blocks),
            }
        }
        Command::Expand { block } => {
            let range = expand(block)?;
            output::print_range(&range);
        }
        Command::List { block } => {
            let addresses = enumerate(block)?;
            output::print_addresses(&addresses);
        }
    }

    Ok(())
}
