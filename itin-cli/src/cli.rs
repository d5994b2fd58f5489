use crate::render::ColorMode;
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use itin_core::{EventPatch, LegKind, TripLegPatch, itinerary::hh_mm};
use std::path::PathBuf;

/// itin — road trip itinerary
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Itinerary file to use instead of the configured one.
    #[arg(long, short, global = true, env = "ITIN_FILE")]
    pub file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints the itinerary file path
    Path,
    /// Shows the title, both legs and the day timeline.
    Show {
        /// Only list days and event titles.
        #[arg(long, short)]
        short: bool,
    },
    /// Sets the trip title (e.g. `itin title Serra Gaúcha`).
    Title {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Edits the outbound or return leg and prints its fuel estimate.
    Leg {
        #[arg(value_enum)]
        leg: LegArg,
        #[command(flatten)]
        fields: LegFields,
    },
    /// Adds, removes or lists days.
    Day {
        #[command(subcommand)]
        action: DayCommand,
    },
    /// Adds, edits or removes events of a day.
    Event {
        #[command(subcommand)]
        action: EventCommand,
    },
    /// Prints map search links for an event's location.
    Links {
        /// Day (DD/MM/YYYY, YYYY-MM-DD, today, yesterday, tomorrow).
        date: String,
        /// Event number, as shown by `itin show`.
        #[arg(value_parser = parse_position)]
        number: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum DayCommand {
    /// Adds an empty day (e.g. `itin day add 21/07/2025`).
    Add { date: String },
    /// Removes a day and all of its events.
    Rm { date: String },
    /// Lists days in calendar order.
    List,
}

#[derive(Subcommand, Debug)]
pub enum EventCommand {
    /// Appends an event to a day.
    Add {
        date: String,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Changes the given fields of an event.
    Edit {
        date: String,
        #[arg(value_parser = parse_position)]
        number: usize,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Removes one or more events (e.g. `itin event rm today 1 3`).
    Rm {
        date: String,
        #[arg(required = true, num_args(1..), value_parser = parse_position)]
        numbers: Vec<usize>,
    },
    /// Attaches a jpg/png photo to an event, or removes it with `--clear`.
    Photo {
        date: String,
        #[arg(value_parser = parse_position)]
        number: usize,
        #[arg(required_unless_present = "clear", conflicts_with = "clear")]
        file: Option<PathBuf>,
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LegArg {
    Outbound,
    Return,
}

impl From<LegArg> for LegKind {
    fn from(leg: LegArg) -> Self {
        match leg {
            LegArg::Outbound => LegKind::Outbound,
            LegArg::Return => LegKind::Return,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct LegFields {
    #[arg(long)]
    pub origin: Option<String>,
    #[arg(long)]
    pub destination: Option<String>,
    /// YYYY-MM-DD
    #[arg(long, value_parser = parse_iso_date)]
    pub depart_date: Option<NaiveDate>,
    /// HH:MM
    #[arg(long, value_parser = parse_time)]
    pub depart_time: Option<NaiveTime>,
    /// YYYY-MM-DD
    #[arg(long, value_parser = parse_iso_date)]
    pub arrive_date: Option<NaiveDate>,
    /// HH:MM
    #[arg(long, value_parser = parse_time)]
    pub arrive_time: Option<NaiveTime>,
    /// Estimated distance in km.
    #[arg(long, value_parser = parse_non_negative)]
    pub distance: Option<f64>,
    /// Vehicle efficiency in km per litre (0 = unknown).
    #[arg(long, value_parser = parse_non_negative)]
    pub efficiency: Option<f64>,
    /// Fuel price per litre.
    #[arg(long, value_parser = parse_non_negative)]
    pub price: Option<f64>,
    /// Stops and durations (e.g. "Posto X - 20min").
    #[arg(long)]
    pub stops: Option<String>,
}

impl From<LegFields> for TripLegPatch {
    fn from(f: LegFields) -> Self {
        TripLegPatch {
            origin: f.origin,
            destination: f.destination,
            departure_date: f.depart_date,
            departure_time: f.depart_time,
            arrival_date: f.arrive_date,
            arrival_time: f.arrive_time,
            distance_km: f.distance,
            fuel_efficiency_km_per_unit: f.efficiency,
            fuel_price_per_unit: f.price,
            stops_notes: f.stops,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct EventFields {
    /// HH:MM
    #[arg(long, short, value_parser = parse_time)]
    pub time: Option<NaiveTime>,
    #[arg(long, short)]
    pub place: Option<String>,
    #[arg(long, short)]
    pub description: Option<String>,
    /// Address or place used for the map link.
    #[arg(long, short)]
    pub location: Option<String>,
}

impl From<EventFields> for EventPatch {
    fn from(f: EventFields) -> Self {
        EventPatch {
            time: f.time,
            place: f.place,
            description: f.description,
            location_text: f.location,
        }
    }
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

fn parse_iso_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("'{s}' is not a YYYY-MM-DD date"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    hh_mm::parse(s).ok_or_else(|| format!("'{s}' is not a HH:MM time"))
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{s}' must be zero or positive"))
    }
}

/// 1-based event number as displayed.
fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{s}' is not an event number (1, 2, ...)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn leg_flags_become_a_patch() {
        let cli = Cli::try_parse_from([
            "itin", "leg", "outbound", "--origin", "Curitiba", "--depart-time", "06:00",
            "--distance", "550", "--price", "5,80",
        ])
        .unwrap();
        let Command::Leg { leg, fields } = cli.command else {
            panic!("expected leg command");
        };
        assert_eq!(leg, LegArg::Outbound);
        let patch = TripLegPatch::from(fields);
        assert_eq!(patch.origin.as_deref(), Some("Curitiba"));
        assert_eq!(patch.departure_time, NaiveTime::from_hms_opt(6, 0, 0));
        assert_eq!(patch.distance_km, Some(550.0));
        assert_eq!(patch.fuel_price_per_unit, Some(5.8));
        assert!(patch.destination.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(
            Cli::try_parse_from(["itin", "leg", "return", "--depart-date", "21/07/2025"]).is_err()
        );
        assert!(Cli::try_parse_from(["itin", "leg", "return", "--distance", "-5"]).is_err());
        assert!(Cli::try_parse_from(["itin", "event", "rm", "today", "0"]).is_err());
        assert!(Cli::try_parse_from(["itin", "event", "rm", "today"]).is_err());
    }

    #[test]
    fn photo_needs_file_or_clear() {
        assert!(Cli::try_parse_from(["itin", "event", "photo", "today", "1"]).is_err());
        assert!(Cli::try_parse_from(["itin", "event", "photo", "today", "1", "--clear"]).is_ok());
        assert!(
            Cli::try_parse_from(["itin", "event", "photo", "today", "1", "a.png", "--clear"])
                .is_err()
        );
    }

    #[test]
    fn batch_event_numbers() {
        let cli = Cli::try_parse_from(["itin", "event", "rm", "21/07/2025", "3", "1"]).unwrap();
        let Command::Event {
            action: EventCommand::Rm { date, numbers },
        } = cli.command
        else {
            panic!("expected event rm");
        };
        assert_eq!(date, "21/07/2025");
        assert_eq!(numbers, [3, 1]);
    }
}
