//! Fuel cost and counter-offer heuristic.
//!
//! Converts a tour length in kilometres into an estimated fuel cost and a
//! monetary counter-offer capped by the vendor's asking price. This is the
//! downstream consumer of the search result: it only ever sees the best
//! tour's total length.

/// Pricing parameters for the counter-offer computation.
///
/// # Examples
///
/// ```
/// use tsp_evo::negotiation::CostModel;
///
/// let model = CostModel::default();
/// // 7.5 l/100 km at 1.5 $/l over 100 km
/// assert!((model.fuel_cost(100.0) - 11.25).abs() < 1e-10);
/// assert!((model.counter_offer(100.0) - 11.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Fuel burned per kilometre, in litres.
    pub fuel_consumption_per_km: f64,

    /// Fuel price per litre.
    pub fuel_cost_per_liter: f64,

    /// The vendor's asking price; the counter-offer never exceeds it.
    pub vendor_request: f64,
}

impl Default for CostModel {
    /// 7.5 l/100 km, 1.5 per litre, vendor asking 100.
    fn default() -> Self {
        Self {
            fuel_consumption_per_km: 7.5 / 100.0,
            fuel_cost_per_liter: 1.5,
            vendor_request: 100.0,
        }
    }
}

impl CostModel {
    /// Estimated fuel cost of driving the given distance.
    pub fn fuel_cost(&self, distance_km: f64) -> f64 {
        distance_km * self.fuel_consumption_per_km * self.fuel_cost_per_liter
    }

    /// The counter-offer for a route of the given length: the fuel cost
    /// when it undercuts the vendor's request, otherwise the request
    /// itself.
    pub fn counter_offer(&self, distance_km: f64) -> f64 {
        let cost = self.fuel_cost(distance_km);
        if cost < self.vendor_request {
            cost
        } else {
            self.vendor_request
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_cost() {
        let model = CostModel::default();
        assert!((model.fuel_cost(100.0) - 11.25).abs() < 1e-10);
        assert!(model.fuel_cost(0.0).abs() < 1e-10);
    }

    #[test]
    fn test_counter_offer_undercuts_request() {
        let model = CostModel::default();
        // 200 km -> 22.5, well below the 100 request
        assert!((model.counter_offer(200.0) - 22.5).abs() < 1e-10);
    }

    #[test]
    fn test_counter_offer_capped_at_request() {
        let model = CostModel::default();
        // 2000 km -> 225.0 fuel cost, capped at the vendor request
        assert!((model.counter_offer(2000.0) - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_model() {
        let model = CostModel {
            fuel_consumption_per_km: 0.1,
            fuel_cost_per_liter: 2.0,
            vendor_request: 50.0,
        };
        assert!((model.fuel_cost(100.0) - 20.0).abs() < 1e-10);
        assert!((model.counter_offer(300.0) - 50.0).abs() < 1e-10);
    }
}
