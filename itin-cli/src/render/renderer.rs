use super::theme::Roadtrip;
use itin_core::{
    Day, Event, ItineraryDocument, LegKind, MapProvider, TripLeg,
    utils::format_utils::{
        NumberFormat, format_byte_size, format_fuel_estimate, format_number, format_schedule,
    },
};
use strum::IntoEnumIterator;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub number_format: NumberFormat,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Roadtrip::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    number_format: NumberFormat::default(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn set_short_mode(&mut self, short_mode: bool) {
        self.opts.short_mode = short_mode;
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
            if !md.ends_with('\n') {
                println!();
            }
        }
    }

    /// Prints `message` as is; it is never parsed as markdown.
    pub fn print_info(&self, message: &str) {
        println!("{}", info_line(message, self.opts.use_color));
    }

    pub fn print_warning(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", message.with(Color::Yellow));
        } else {
            eprintln!("{message}");
        }
    }

    pub fn print_document(&self, doc: &ItineraryDocument) {
        self.print_md(&document_md(doc, &self.opts));
    }

    pub fn print_leg(&self, kind: LegKind, leg: &TripLeg) {
        self.print_md(&leg_md(kind, leg, &self.opts.number_format));
    }

    pub fn print_day(&self, day: &Day) {
        self.print_md(&day_md(day, self.opts.short_mode));
    }

    pub fn print_day_list(&self, days: &[Day]) {
        let mut md = String::new();
        for day in days {
            md.push_str(&format!("* {} ({})\n", day.date, events_count(day.events.len())));
        }
        self.print_md(&md);
    }

    pub fn print_event_line(&self, number: usize, event: &Event) {
        let mut time = event.time.format("%H:%M").to_string();
        let mut place = place_or_placeholder(event).to_string();
        if self.opts.use_color {
            time = time.with(Color::Blue).to_string();
            place = place.with(Color::Yellow).to_string();
        }
        println!("{number}. {time} - {place}");
    }

    pub fn print_place_links(&self, location: &str) {
        let mut md = String::new();
        for provider in MapProvider::iter() {
            if let Some(url) = itin_core::place_search_url(provider, location) {
                md.push_str(&format!("* {}: `{url}`\n", provider.as_ref()));
            }
        }
        self.print_md(&md);
    }
}

fn info_line(message: &str, use_color: bool) -> String {
    if use_color {
        message.with(Roadtrip::ORANGE).to_string()
    } else {
        message.to_string()
    }
}

fn events_count(n: usize) -> String {
    match n {
        1 => "1 event".to_string(),
        n => format!("{n} events"),
    }
}

fn place_or_placeholder(event: &Event) -> &str {
    if event.place.trim().is_empty() {
        "No place"
    } else {
        event.place.as_str()
    }
}

fn leg_title(kind: LegKind) -> &'static str {
    match kind {
        LegKind::Outbound => "Outbound",
        LegKind::Return => "Return",
    }
}

fn document_md(doc: &ItineraryDocument, opts: &RenderOptions) -> String {
    let mut md = String::new();
    let title = doc.trip_title.trim();
    if title.is_empty() {
        md.push_str("# ✈️ Road trip\n\n");
    } else {
        md.push_str(&format!("# ✈️ {title}\n\n"));
    }

    if !opts.short_mode {
        for kind in LegKind::iter() {
            md.push_str(&leg_md(kind, doc.leg(kind), &opts.number_format));
            md.push('\n');
        }
    }

    md.push_str("## 📅 Days\n\n");
    if doc.days.is_empty() {
        md.push_str("*No days yet. Use `itin day add <DD/MM/YYYY>`.*\n");
    }
    for day in &doc.days {
        md.push_str(&day_md(day, opts.short_mode));
    }
    md
}

fn leg_md(kind: LegKind, leg: &TripLeg, fmt: &NumberFormat) -> String {
    let route = match (leg.origin.trim(), leg.destination.trim()) {
        ("", "") => String::new(),
        (o, d) => format!(": {o} → {d}"),
    };
    let mut md = format!("## 🚗 {}{route}\n\n", leg_title(kind));
    md.push_str(&format!(
        "* Departure: {}\n",
        format_schedule(leg.departure_date, leg.departure_time)
    ));
    md.push_str(&format!(
        "* Arrival: {}\n",
        format_schedule(leg.arrival_date, leg.arrival_time)
    ));
    md.push_str(&format!(
        "* Distance: {} km, {} km/{}, {} {} per {}\n",
        format_number(leg.distance_km, 0, fmt),
        format_number(leg.fuel_efficiency_km_per_unit, 1, fmt),
        fmt.volume_unit,
        fmt.currency_symbol,
        format_number(leg.fuel_price_per_unit, 2, fmt),
        fmt.volume_unit,
    ));
    md.push_str(&format!(
        "* ⛽ Estimate: {}\n",
        format_fuel_estimate(&leg.fuel_estimate(), fmt)
    ));
    if !leg.stops_notes.trim().is_empty() {
        md.push_str(&format!("* Stops: {}\n", leg.stops_notes.trim()));
    }

    let links: Vec<String> = MapProvider::iter()
        .filter_map(|p| {
            leg.directions_url(p)
                .map(|url| format!("* {}: `{url}`\n", p.as_ref()))
        })
        .collect();
    if links.is_empty() {
        md.push_str("\n*Fill in origin and destination to see routes.*\n");
    } else {
        md.push_str(&links.concat());
    }
    md
}

fn day_md(day: &Day, short_mode: bool) -> String {
    let mut md = format!("### {} ({})\n", day.date, events_count(day.events.len()));
    for (i, event) in day.events.iter().enumerate() {
        md.push_str(&format!(
            "**{}.** {} - {}\n",
            i + 1,
            event.time.format("%H:%M"),
            place_or_placeholder(event)
        ));
        if short_mode {
            continue;
        }
        if !event.description.trim().is_empty() {
            for line in event.description.trim_end().lines() {
                md.push_str(&format!("> {line}\n"));
            }
        }
        if !event.location_text.trim().is_empty() {
            md.push_str(&format!("> 📍 {}\n", event.location_text.trim()));
        }
        if let Some(photo) = &event.photo {
            md.push_str(&format!("> 📷 photo ({})\n", format_byte_size(photo.len())));
        }
    }
    md.push('\n');
    md
}
