use std::io::Write;

use crossterm::style::Stylize;
use serde::Serialize;
use tracing::debug;

use crate::bearing::Coordinate;
use crate::error::Error;
use crate::units::wrap_360;

const ORIGIN_NAME: &str = "River Bottoms";

pub struct Landmark {
    pub name: &'static str,
    pub location: Coordinate,
}

// River Bottoms 40.3188 N, 111.6452 W
const RIVER_BOTTOMS: Landmark = Landmark {
    name: ORIGIN_NAME,
    location: Coordinate::new(40.3188, -111.6452),
};

// Rock Canyon Cave 40.2674 N, 111.6067 W
const ROCK_CANYON_CAVE: Landmark = Landmark {
    name: "Rock Canyon Cave",
    location: Coordinate::new(40.2674, -111.6067),
};

const RIVER_BOTTOMS_TRAILHEAD: Landmark = Landmark {
    name: ORIGIN_NAME,
    location: Coordinate::new(40.327459, -111.632306),
};

const LUNA_TRAIL: Landmark = Landmark {
    name: "Luna Trail",
    location: Coordinate::new(40.320533, -111.634047),
};

/// The two worked examples printed when no coordinates are given.
pub fn demo_routes() -> [(Landmark, Landmark); 2] {
    [
        (RIVER_BOTTOMS, ROCK_CANYON_CAVE),
        (RIVER_BOTTOMS_TRAILHEAD, LUNA_TRAIL),
    ]
}

#[derive(Serialize, Debug)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub from: Coordinate,
    pub to: Coordinate,
    pub bearing: f64,
    pub compass_bearing: f64,
    pub direction: &'static str,
}

impl Report {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        let bearing = from.bearing_to(&to);
        let direction = from.direction_to(&to);
        debug!(%from, %to, bearing, direction, "computed bearing");
        Self {
            target: None,
            origin: None,
            from,
            to,
            bearing,
            compass_bearing: wrap_360(bearing),
            direction,
        }
    }

    pub fn between(origin: &Landmark, target: &Landmark) -> Self {
        Self {
            origin: Some(origin.name.to_string()),
            target: Some(target.name.to_string()),
            ..Self::new(origin.location, target.location)
        }
    }
}

pub struct Output {
    pub json: bool,
    pub color: bool,
}

impl Output {
    pub fn write<W: Write>(&self, out: &mut W, reports: &[Report]) -> Result<(), Error> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
            return Ok(());
        }
        for report in reports {
            self.write_text(out, report)?;
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W, report: &Report) -> Result<(), Error> {
        let direction = if self.color {
            report.direction.green().to_string()
        } else {
            report.direction.to_string()
        };
        let bearing = if self.color {
            report.bearing.to_string().yellow().to_string()
        } else {
            report.bearing.to_string()
        };

        match (&report.target, &report.origin) {
            (Some(target), Some(origin)) => {
                writeln!(out, "The {target} is {direction} of the {origin}")?
            }
            _ => writeln!(out, "{} is {direction} of {}", report.to, report.from)?,
        }
        writeln!(out, "Actual bearing of {bearing}")?;
        Ok(())
    }
}
