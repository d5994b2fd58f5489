//! Map-provider links: driving directions between two places, or a search for one.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use strum_macros::{AsRefStr, EnumIter};

/// Everything but unreserved characters and `/` gets `%XX`-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum MapProvider {
    #[strum(serialize = "Google Maps")]
    GoogleMaps,
    Waze,
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Driving directions from `origin` to `destination`.
/// Returns `None` if either place is blank.
pub fn directions_url(provider: MapProvider, origin: &str, destination: &str) -> Option<String> {
    if is_blank(origin) || is_blank(destination) {
        return None;
    }
    let (o, d) = (encode(origin), encode(destination));
    Some(match provider {
        MapProvider::GoogleMaps => {
            format!("https://www.google.com/maps/dir/?api=1&origin={o}&destination={d}")
        }
        MapProvider::Waze => format!("https://waze.com/ul?q={o}+to+{d}"),
    })
}

/// Search for a single place. Returns `None` if `location` is blank.
pub fn place_search_url(provider: MapProvider, location: &str) -> Option<String> {
    if is_blank(location) {
        return None;
    }
    let q = encode(location);
    Some(match provider {
        MapProvider::GoogleMaps => format!("https://www.google.com/maps/search/?api=1&query={q}"),
        MapProvider::Waze => format!("https://waze.com/ul?q={q}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn google_directions_encode_spaces_and_accents() {
        let url =
            directions_url(MapProvider::GoogleMaps, "Fazenda Rio Grande", "São Paulo").unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=Fazenda%20Rio%20Grande&destination=S%C3%A3o%20Paulo"
        );
    }

    #[test]
    fn waze_directions() {
        let url = directions_url(MapProvider::Waze, "Curitiba", "Gramado").unwrap();
        assert_eq!(url, "https://waze.com/ul?q=Curitiba+to+Gramado");
    }

    #[test]
    fn reserved_characters_are_escaped_but_slash_is_kept() {
        let url =
            place_search_url(MapProvider::GoogleMaps, "Av. Borges de Medeiros, 2/4 & co").unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=Av.%20Borges%20de%20Medeiros%2C%202/4%20%26%20co"
        );
    }

    #[test]
    fn blank_places_suppress_links() {
        for provider in MapProvider::iter() {
            assert!(directions_url(provider, "  ", "Gramado").is_none());
            assert!(directions_url(provider, "Curitiba", "").is_none());
            assert!(place_search_url(provider, "\t\n").is_none());
        }
    }

    #[test]
    fn provider_names() {
        let names: Vec<String> = MapProvider::iter().map(|p| p.as_ref().to_owned()).collect();
        assert_eq!(names, ["Google Maps", "Waze"]);
    }
}
