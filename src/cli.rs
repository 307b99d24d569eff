use clap::builder::{styling::AnsiColor, Styles};
use clap::{ArgAction, Parser};

use crate::bearing::Coordinate;

const ABOUT: &str = "Compass bearing between two points";

const LONG_ABOUT: &str = "
Computes the initial great-circle bearing from one point to another and names the compass
direction (north, north east, east, ...) the second point lies in.

Points are given to --from and --to as \"lat,lon\" in signed decimal degrees, negative for
South and West (e.g. 40.3188,-111.6452). With no points, two worked examples around the River
Bottoms are printed.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(
        long,
        value_name = "LAT,LON",
        help = "Starting point",
        requires = "to",
        allow_hyphen_values = true
    )]
    pub from: Option<Coordinate>,

    #[arg(
        long,
        value_name = "LAT,LON",
        help = "Target point",
        requires = "from",
        allow_hyphen_values = true
    )]
    pub to: Option<Coordinate>,

    #[arg(long, help = "Print reports as JSON")]
    pub json: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}
