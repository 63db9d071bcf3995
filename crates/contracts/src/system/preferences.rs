use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Route-planning defaults edited on the Settings page. Stored locally in
/// the browser; the backend never sees these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteParameters {
    pub cost_per_km: f64,
    pub average_speed_kmh: u32,
    pub average_stop_minutes: u32,
}

impl Default for RouteParameters {
    fn default() -> Self {
        Self {
            cost_per_km: 0.50,
            average_speed_kmh: 50,
            average_stop_minutes: 10,
        }
    }
}

impl RouteParameters {
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse a stored value. Callers fall back to defaults on error, so a
    /// stale or hand-edited blob never breaks the Settings page.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid stored route parameters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let params = RouteParameters {
            cost_per_km: 0.75,
            average_speed_kmh: 60,
            average_stop_minutes: 8,
        };
        let parsed = RouteParameters::from_json_str(&params.to_json_string()).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn rejects_garbage() {
        assert!(RouteParameters::from_json_str("not json").is_err());
    }
}
