use std::path::PathBuf;

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use rope::command::parse_commands;
use rope::parser::read_input;
use rope::Chain;

#[derive(Parser, Debug)]
#[command(
    name = "rope",
    about = "Counts the cells visited by the last knot of a rope dragged around a grid",
    version
)]
struct Cli {
    /// File with one `<direction> <count>` command per line; stdin if absent or `-`
    input: Option<PathBuf>,

    /// Number of knots in the rope, head included (repeat to simulate several)
    #[arg(short, long = "knots", default_values_t = [2, 10])]
    knots: Vec<usize>,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, RUST_LOG overrides the level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let input = read_input(cli.input.as_deref())?;
    let commands = parse_commands(&input)?;

    let results = cli
        .knots
        .par_iter()
        .map(|&knots| -> rope::Result<(usize, usize)> {
            let mut chain = Chain::new(knots)?;
            for command in commands.iter() {
                chain.apply(command);
            }
            Ok((knots, chain.visited_count()))
        })
        .collect::<rope::Result<Vec<_>>>()?;

    for (knots, visited) in results {
        println!("{} knots: {}", knots, visited);
    }

    Ok(())
}
