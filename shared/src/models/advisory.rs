//! Weather-derived farming advisories

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Temperature at or above which heat stress guidance applies (°C)
pub const HEAT_STRESS_CELSIUS: i64 = 35;
/// Temperature at or below which cold stress guidance applies (°C)
pub const COLD_STRESS_CELSIUS: i64 = 10;
/// Relative humidity at or above which heavy rain is expected (%)
pub const HEAVY_RAIN_HUMIDITY: i32 = 80;

/// The four canned advisory bundles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    HeatStress,
    ColdStress,
    HeavyRain,
    Optimal,
}

impl std::fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryKind::HeatStress => write!(f, "Heat Stress"),
            AdvisoryKind::ColdStress => write!(f, "Cold Stress"),
            AdvisoryKind::HeavyRain => write!(f, "Heavy Rain"),
            AdvisoryKind::Optimal => write!(f, "Optimal"),
        }
    }
}

/// A titled block of guidance with a bullet list of actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisoryNotice {
    pub title: String,
    pub message: String,
    pub actions: Vec<String>,
}

/// Weather alert (if any) plus crop advisory for one set of conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisoryBundle {
    pub kind: AdvisoryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AdvisoryNotice>,
    pub crop_advisory: AdvisoryNotice,
}

/// Pick the advisory bundle for a temperature/humidity pair.
///
/// Temperature extremes take precedence over humidity.
pub fn classify_advisory(temperature_celsius: Decimal, humidity_percent: i32) -> AdvisoryKind {
    if temperature_celsius >= Decimal::from(HEAT_STRESS_CELSIUS) {
        AdvisoryKind::HeatStress
    } else if temperature_celsius <= Decimal::from(COLD_STRESS_CELSIUS) {
        AdvisoryKind::ColdStress
    } else if humidity_percent >= HEAVY_RAIN_HUMIDITY {
        AdvisoryKind::HeavyRain
    } else {
        AdvisoryKind::Optimal
    }
}

fn notice(title: &str, message: &str, actions: &[&str]) -> AdvisoryNotice {
    AdvisoryNotice {
        title: title.to_string(),
        message: message.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// Canned guidance for an advisory kind
pub fn advisory_for(kind: AdvisoryKind) -> AdvisoryBundle {
    match kind {
        AdvisoryKind::HeatStress => AdvisoryBundle {
            kind,
            alert: Some(notice(
                "Weather Alert",
                "High temperatures expected. Crops are at risk of heat stress:",
                &[
                    "Irrigate early in the morning or late in the evening",
                    "Mulch around plants to retain soil moisture",
                    "Avoid spraying during the hottest hours",
                ],
            )),
            crop_advisory: notice(
                "Crop Advisory",
                "Current conditions are suitable for:",
                &[
                    "Harvesting mature crops early in the day",
                    "Providing shade for nurseries and seedlings",
                    "Checking livestock water supply",
                ],
            ),
        },
        AdvisoryKind::ColdStress => AdvisoryBundle {
            kind,
            alert: Some(notice(
                "Weather Alert",
                "Low temperatures expected. Protect crops from frost:",
                &[
                    "Cover sensitive plants overnight",
                    "Irrigate lightly before frost nights",
                    "Delay transplanting of seedlings",
                ],
            )),
            crop_advisory: notice(
                "Crop Advisory",
                "Current conditions are suitable for:",
                &[
                    "Growing cold-tolerant crops such as wheat and mustard",
                    "Preparing fields for spring sowing",
                    "Servicing farm equipment",
                ],
            ),
        },
        AdvisoryKind::HeavyRain => AdvisoryBundle {
            kind,
            alert: Some(notice(
                "Weather Alert",
                "Heavy rainfall expected in the next 48 hours. Consider these preventive measures:",
                &[
                    "Ensure proper drainage in fields",
                    "Delay pesticide application",
                    "Protect harvested crops",
                ],
            )),
            crop_advisory: notice(
                "Crop Advisory",
                "After the rain, watch for:",
                &[
                    "Fungal disease on leaves",
                    "Waterlogging in low-lying plots",
                    "Nutrient loss; top-dress if needed",
                ],
            ),
        },
        AdvisoryKind::Optimal => AdvisoryBundle {
            kind,
            alert: None,
            crop_advisory: notice(
                "Crop Advisory",
                "Current conditions are optimal for:",
                &[
                    "Sowing winter crops",
                    "Applying organic fertilizers",
                    "Pruning fruit trees",
                ],
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_advisory_boundaries() {
        assert_eq!(classify_advisory(Decimal::from(35), 50), AdvisoryKind::HeatStress);
        assert_eq!(classify_advisory(Decimal::from(34), 50), AdvisoryKind::Optimal);
        assert_eq!(classify_advisory(Decimal::from(10), 50), AdvisoryKind::ColdStress);
        assert_eq!(classify_advisory(Decimal::from(11), 50), AdvisoryKind::Optimal);
        assert_eq!(classify_advisory(Decimal::from(25), 80), AdvisoryKind::HeavyRain);
        assert_eq!(classify_advisory(Decimal::from(25), 79), AdvisoryKind::Optimal);
    }

    #[test]
    fn test_temperature_takes_precedence() {
        assert_eq!(classify_advisory(Decimal::from(40), 95), AdvisoryKind::HeatStress);
        assert_eq!(classify_advisory(Decimal::from(2), 95), AdvisoryKind::ColdStress);
    }

    #[test]
    fn test_optimal_has_no_alert() {
        let bundle = advisory_for(AdvisoryKind::Optimal);
        assert!(bundle.alert.is_none());
        assert_eq!(bundle.crop_advisory.actions[0], "Sowing winter crops");
    }

    #[test]
    fn test_heavy_rain_bundle() {
        let bundle = advisory_for(AdvisoryKind::HeavyRain);
        let alert = bundle.alert.unwrap();
        assert!(alert.message.starts_with("Heavy rainfall expected"));
        assert_eq!(alert.actions.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_bundle_kind_matches(temp in -20i64..50, humidity in 0i32..=100) {
            let kind = classify_advisory(Decimal::from(temp), humidity);
            let bundle = advisory_for(kind);
            prop_assert_eq!(bundle.kind, kind);
            prop_assert!(!bundle.crop_advisory.actions.is_empty());
            prop_assert_eq!(bundle.alert.is_none(), kind == AdvisoryKind::Optimal);
        }
    }
}
