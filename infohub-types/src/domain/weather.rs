//! Current weather conditions and the temperature advisory rule.

/// Current conditions reported by the forecast feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub weather_code: i64,
}

const HEAT_ADVISORY: &str = "High temperatures can cause heat exhaustion, dehydration, and discomfort. Stay hydrated, avoid prolonged sun exposure, and seek shade. Outdoor activities should be limited during peak hours.";

const COLD_ADVISORY: &str = "Cold weather can lead to hypothermia, frostbite risk, and joint stiffness. Dress in layers, stay warm, and be cautious of icy conditions. Heating systems will be in high demand.";

const MODERATE_ADVISORY: &str = "Moderate temperatures provide comfortable conditions for outdoor activities. This weather is generally pleasant for most daily activities and transportation.";

/// Health guidance derived from temperature alone.
///
/// Strictly above 30 °C is hot, strictly below 10 °C is cold; both
/// boundary values fall into the moderate branch.
pub fn advisory_for(temperature_c: f64) -> &'static str {
    if temperature_c > 30.0 {
        HEAT_ADVISORY
    } else if temperature_c < 10.0 {
        COLD_ADVISORY
    } else {
        MODERATE_ADVISORY
    }
}

/// One-line condition summary in the public response format.
pub fn condition_summary(conditions: &CurrentConditions) -> String {
    format!(
        "Temperature: {}°C, Weather code: {}",
        conditions.temperature_c, conditions.weather_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_boundaries_are_moderate() {
        assert_eq!(advisory_for(30.0), MODERATE_ADVISORY);
        assert_eq!(advisory_for(10.0), MODERATE_ADVISORY);
    }

    #[test]
    fn advisory_above_thirty_is_heat() {
        assert_eq!(advisory_for(30.1), HEAT_ADVISORY);
        assert_eq!(advisory_for(45.0), HEAT_ADVISORY);
    }

    #[test]
    fn advisory_below_ten_is_cold() {
        assert_eq!(advisory_for(9.9), COLD_ADVISORY);
        assert_eq!(advisory_for(-20.0), COLD_ADVISORY);
    }

    #[test]
    fn advisory_is_deterministic() {
        assert_eq!(advisory_for(21.5), advisory_for(21.5));
    }

    #[test]
    fn condition_summary_format() {
        let conditions = CurrentConditions {
            temperature_c: 24.3,
            weather_code: 2,
        };
        assert_eq!(
            condition_summary(&conditions),
            "Temperature: 24.3°C, Weather code: 2"
        );
    }
}
