//! Fuel use and cost for a road leg.

/// Fuel needed for a distance and what it costs. Unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuelEstimate {
    /// Litres (or whatever unit the efficiency and price are expressed in).
    pub volume: f64,
    pub cost: f64,
}

/// `volume = distance / efficiency`, `cost = volume * price`.
///
/// A non-positive efficiency means "unknown" and gives a zero estimate.
pub fn estimate_fuel(
    distance_km: f64,
    efficiency_km_per_unit: f64,
    price_per_unit: f64,
) -> FuelEstimate {
    let volume = if efficiency_km_per_unit > 0.0 {
        distance_km / efficiency_km_per_unit
    } else {
        0.0
    };
    FuelEstimate {
        volume,
        cost: volume * price_per_unit,
    }
}
