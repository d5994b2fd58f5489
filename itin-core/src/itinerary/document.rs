//! The in-memory itinerary: trip title, both road legs and the day timeline.

use super::serde_utils::{hh_mm, photo_b64};
use crate::fuel::{FuelEstimate, estimate_fuel};
use crate::maps::{MapProvider, directions_url};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{ffi::OsStr, path::Path};
use strum_macros::{AsRefStr, EnumIter};

/// Time given to events created without one.
pub fn default_event_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("valid time")
}

/// Image extensions accepted for event photos.
pub const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_supported_photo(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| PHOTO_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// The whole persisted itinerary. Loaded and saved as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DocumentFile", into = "DocumentFile")]
pub struct ItineraryDocument {
    pub trip_title: String,
    pub outbound: TripLeg,
    pub return_leg: TripLeg,
    /// Unique by `Day::date`.
    pub days: Vec<Day>,
}

/// Which of the two road legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum LegKind {
    Outbound,
    Return,
}

impl ItineraryDocument {
    pub fn leg(&self, kind: LegKind) -> &TripLeg {
        match kind {
            LegKind::Outbound => &self.outbound,
            LegKind::Return => &self.return_leg,
        }
    }

    pub fn leg_mut(&mut self, kind: LegKind) -> &mut TripLeg {
        match kind {
            LegKind::Outbound => &mut self.outbound,
            LegKind::Return => &mut self.return_leg,
        }
    }
}

/// One directional segment of the trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripLeg {
    pub origin: String,
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub arrival_date: Option<NaiveDate>,
    pub arrival_time: Option<NaiveTime>,
    pub distance_km: f64,
    /// `0` means unknown and yields a zero estimate.
    pub fuel_efficiency_km_per_unit: f64,
    pub fuel_price_per_unit: f64,
    pub stops_notes: String,
}

impl TripLeg {
    pub fn fuel_estimate(&self) -> FuelEstimate {
        estimate_fuel(
            self.distance_km,
            self.fuel_efficiency_km_per_unit,
            self.fuel_price_per_unit,
        )
    }

    /// Driving directions from origin to destination, `None` while either is blank.
    pub fn directions_url(&self, provider: MapProvider) -> Option<String> {
        directions_url(provider, &self.origin, &self.destination)
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: TripLegPatch) {
        if let Some(origin) = patch.origin {
            self.origin = origin;
        }
        if let Some(destination) = patch.destination {
            self.destination = destination;
        }
        if let Some(date) = patch.departure_date {
            self.departure_date = Some(date);
        }
        if let Some(time) = patch.departure_time {
            self.departure_time = Some(time);
        }
        if let Some(date) = patch.arrival_date {
            self.arrival_date = Some(date);
        }
        if let Some(time) = patch.arrival_time {
            self.arrival_time = Some(time);
        }
        if let Some(distance) = patch.distance_km {
            self.distance_km = distance;
        }
        if let Some(efficiency) = patch.fuel_efficiency_km_per_unit {
            self.fuel_efficiency_km_per_unit = efficiency;
        }
        if let Some(price) = patch.fuel_price_per_unit {
            self.fuel_price_per_unit = price;
        }
        if let Some(stops) = patch.stops_notes {
            self.stops_notes = stops;
        }
    }
}

/// Properties to change on a `TripLeg`. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripLegPatch {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub arrival_date: Option<NaiveDate>,
    pub arrival_time: Option<NaiveTime>,
    pub distance_km: Option<f64>,
    pub fuel_efficiency_km_per_unit: Option<f64>,
    pub fuel_price_per_unit: Option<f64>,
    pub stops_notes: Option<String>,
}

/// A calendar entry of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// `DD/MM/YYYY`. Kept as written, even when it does not parse.
    #[serde(rename = "data")]
    pub date: String,
    /// Display order, not sorted by time.
    #[serde(rename = "eventos", default)]
    pub events: Vec<Event>,
}

impl Day {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            events: Vec::new(),
        }
    }
}

/// A single activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "hora", with = "hh_mm", default = "default_event_time")]
    pub time: NaiveTime,
    #[serde(rename = "local", default)]
    pub place: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    /// Free-text address used for the place-search link.
    #[serde(rename = "link", default)]
    pub location_text: String,
    #[serde(rename = "foto_b64", with = "photo_b64", default)]
    pub photo: Option<Vec<u8>>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            time: default_event_time(),
            place: String::new(),
            description: String::new(),
            location_text: String::new(),
            photo: None,
        }
    }
}

impl Event {
    pub fn set_photo(&mut self, bytes: Vec<u8>) {
        self.photo = Some(bytes);
    }

    pub fn clear_photo(&mut self) -> Option<Vec<u8>> {
        self.photo.take()
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(place) = patch.place {
            self.place = place;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(location) = patch.location_text {
            self.location_text = location;
        }
    }
}

/// Properties to change on an `Event`. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub time: Option<NaiveTime>,
    pub place: Option<String>,
    pub description: Option<String>,
    pub location_text: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.place.is_none()
            && self.description.is_none()
            && self.location_text.is_none()
    }
}

/// Flat on-disk shape. Leg fields carry a `_volta` suffix for the return leg.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DocumentFile {
    titulo_viagem: String,

    origem: String,
    destino: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_ida: Option<NaiveDate>,
    #[serde(with = "hh_mm::option", skip_serializing_if = "Option::is_none")]
    hora_saida: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_chegada: Option<NaiveDate>,
    #[serde(with = "hh_mm::option", skip_serializing_if = "Option::is_none")]
    hora_chegada: Option<NaiveTime>,
    distancia: f64,
    consumo: f64,
    preco: f64,
    paradas: String,

    origem_volta: String,
    destino_volta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_ida_volta: Option<NaiveDate>,
    #[serde(with = "hh_mm::option", skip_serializing_if = "Option::is_none")]
    hora_saida_volta: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_chegada_volta: Option<NaiveDate>,
    #[serde(with = "hh_mm::option", skip_serializing_if = "Option::is_none")]
    hora_chegada_volta: Option<NaiveTime>,
    distancia_volta: f64,
    consumo_volta: f64,
    preco_volta: f64,
    paradas_volta: String,

    dias: Vec<Day>,
}

impl From<DocumentFile> for ItineraryDocument {
    fn from(f: DocumentFile) -> Self {
        Self {
            trip_title: f.titulo_viagem,
            outbound: TripLeg {
                origin: f.origem,
                destination: f.destino,
                departure_date: f.data_ida,
                departure_time: f.hora_saida,
                arrival_date: f.data_chegada,
                arrival_time: f.hora_chegada,
                distance_km: f.distancia,
                fuel_efficiency_km_per_unit: f.consumo,
                fuel_price_per_unit: f.preco,
                stops_notes: f.paradas,
            },
            return_leg: TripLeg {
                origin: f.origem_volta,
                destination: f.destino_volta,
                departure_date: f.data_ida_volta,
                departure_time: f.hora_saida_volta,
                arrival_date: f.data_chegada_volta,
                arrival_time: f.hora_chegada_volta,
                distance_km: f.distancia_volta,
                fuel_efficiency_km_per_unit: f.consumo_volta,
                fuel_price_per_unit: f.preco_volta,
                stops_notes: f.paradas_volta,
            },
            days: f.dias,
        }
    }
}

impl From<ItineraryDocument> for DocumentFile {
    fn from(doc: ItineraryDocument) -> Self {
        let ItineraryDocument {
            trip_title,
            outbound: out,
            return_leg: ret,
            days,
        } = doc;
        Self {
            titulo_viagem: trip_title,
            origem: out.origin,
            destino: out.destination,
            data_ida: out.departure_date,
            hora_saida: out.departure_time,
            data_chegada: out.arrival_date,
            hora_chegada: out.arrival_time,
            distancia: out.distance_km,
            consumo: out.fuel_efficiency_km_per_unit,
            preco: out.fuel_price_per_unit,
            paradas: out.stops_notes,
            origem_volta: ret.origin,
            destino_volta: ret.destination,
            data_ida_volta: ret.departure_date,
            hora_saida_volta: ret.departure_time,
            data_chegada_volta: ret.arrival_date,
            hora_chegada_volta: ret.arrival_time,
            distancia_volta: ret.distance_km,
            consumo_volta: ret.fuel_efficiency_km_per_unit,
            preco_volta: ret.fuel_price_per_unit,
            paradas_volta: ret.stops_notes,
            dias: days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn new_event_defaults_to_eight_am() {
        let ev = Event::default();
        assert_eq!(ev.time, t(8, 0));
        assert!(ev.place.is_empty());
        assert!(ev.photo.is_none());
    }

    #[test]
    fn leg_patch_only_touches_given_fields() {
        let mut leg = TripLeg {
            origin: "Fazenda Rio Grande".to_string(),
            destination: "Gramado".to_string(),
            distance_km: 550.0,
            ..Default::default()
        };
        leg.apply(TripLegPatch {
            destination: Some("Canela".to_string()),
            departure_time: Some(t(6, 0)),
            ..Default::default()
        });
        assert_eq!(leg.origin, "Fazenda Rio Grande");
        assert_eq!(leg.destination, "Canela");
        assert_eq!(leg.departure_time, Some(t(6, 0)));
        assert_eq!(leg.distance_km, 550.0);
    }

    #[test]
    fn event_patch_keeps_photo() {
        let mut ev = Event::default();
        ev.set_photo(vec![1, 2, 3]);
        ev.apply(EventPatch {
            place: Some("Lago Negro".to_string()),
            ..Default::default()
        });
        assert_eq!(ev.place, "Lago Negro");
        assert_eq!(ev.photo.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(ev.clear_photo(), Some(vec![1, 2, 3]));
        assert!(ev.photo.is_none());
    }

    #[test]
    fn leg_kind_picks_the_right_leg() {
        let mut doc = ItineraryDocument::default();
        doc.leg_mut(LegKind::Return).origin = "Gramado".to_string();
        assert_eq!(doc.return_leg.origin, "Gramado");
        assert!(doc.leg(LegKind::Outbound).origin.is_empty());
        assert_eq!(LegKind::Return.as_ref(), "return");
    }

    #[test]
    fn deserializes_flat_legacy_shape() {
        let json = r#"{
            "titulo_viagem": "Serra Gaúcha",
            "origem": "Fazenda Rio Grande",
            "destino": "Gramado",
            "data_ida": "2025-07-21",
            "hora_saida": "06:00",
            "distancia": 550,
            "consumo": 12.0,
            "preco": 5.8,
            "origem_volta": "Gramado",
            "hora_chegada_volta": "17:00",
            "dias": [
                { "data": "21/07/2025", "eventos": [
                    { "hora": "14:30", "local": "Rua Coberta", "descricao": "",
                      "link": "Rua Coberta, Gramado", "foto_b64": null }
                ] },
                { "data": "22/07/2025", "eventos": [] }
            ]
        }"#;
        let doc: ItineraryDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.trip_title, "Serra Gaúcha");
        assert_eq!(doc.outbound.departure_date, NaiveDate::from_ymd_opt(2025, 7, 21));
        assert_eq!(doc.outbound.departure_time, Some(t(6, 0)));
        assert_eq!(doc.outbound.arrival_date, None);
        assert_eq!(doc.outbound.distance_km, 550.0);
        assert_eq!(doc.return_leg.origin, "Gramado");
        assert_eq!(doc.return_leg.arrival_time, Some(t(17, 0)));
        assert_eq!(doc.days.len(), 2);
        assert_eq!(doc.days[0].events[0].time, t(14, 30));
        assert_eq!(doc.days[0].events[0].location_text, "Rua Coberta, Gramado");
        assert!(doc.days[1].events.is_empty());
    }

    #[test]
    fn serializes_with_legacy_keys() {
        let mut doc = ItineraryDocument::default();
        doc.outbound.departure_date = NaiveDate::from_ymd_opt(2025, 7, 21);
        doc.outbound.departure_time = Some(t(6, 0));
        let mut day = Day::new("21/07/2025");
        day.events.push(Event {
            photo: Some(b"img".to_vec()),
            ..Default::default()
        });
        doc.days.push(day);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["data_ida"], "2025-07-21");
        assert_eq!(value["hora_saida"], "06:00");
        assert!(value.get("data_chegada").is_none());
        assert_eq!(value["paradas_volta"], "");
        assert_eq!(value["dias"][0]["data"], "21/07/2025");
        assert_eq!(value["dias"][0]["eventos"][0]["hora"], "08:00");
        assert_eq!(value["dias"][0]["eventos"][0]["foto_b64"], "aW1n");
    }

    #[test]
    fn missing_photo_serializes_as_null() {
        let value = serde_json::to_value(Event::default()).unwrap();
        assert!(value["foto_b64"].is_null());
    }

    #[test]
    fn invalid_time_is_rejected() {
        let json = r#"{ "dias": [ { "data": "01/01/2025", "eventos": [ { "hora": "late" } ] } ] }"#;
        assert!(serde_json::from_str::<ItineraryDocument>(json).is_err());
    }

    #[test]
    fn photo_extensions() {
        assert!(is_supported_photo(&PathBuf::from("/tmp/a.JPG")));
        assert!(is_supported_photo(&PathBuf::from("b.png")));
        assert!(!is_supported_photo(&PathBuf::from("c.gif")));
        assert!(!is_supported_photo(&PathBuf::from("noext")));
    }
}
