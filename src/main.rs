use clap::Parser;
use std::{error::Error, io};

mod app;
mod bearing;
mod cli;
mod error;
mod logging;
mod units;

use crate::app::{demo_routes, Output, Report};
use crate::cli::Args;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.verbose, !args.no_color);

    let reports = match (args.from, args.to) {
        (Some(from), Some(to)) => vec![Report::new(from, to)],
        _ => demo_routes()
            .iter()
            .map(|(origin, target)| Report::between(origin, target))
            .collect(),
    };

    let output = Output {
        json: args.json,
        color: !args.no_color,
    };
    output.write(&mut io::stdout().lock(), &reports)?;

    Ok(())
}
