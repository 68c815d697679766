use serde::{Deserialize, Serialize};

/// Timings and options for the widget, provided by the host page.
/// All durations are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Delay between an open/close request and the view swap (default: 0.4).
    pub transition_delay: f32,
    /// Fade-in of the newly displayed view after the swap (default: 0.8).
    pub fade_in_duration: f32,
    /// Delay before the customize modal hides after a selection (default: 0.5).
    pub modal_autohide_delay: f32,
    /// Period of the ambient scent cue while closed (default: 8.0).
    pub ambient_interval: f32,
    /// Length of the seal pulse before breathing resumes (default: 0.3).
    pub seal_pulse_duration: f32,
    /// Delay before the page-load entrance animation starts (default: 0.2).
    pub entrance_delay: f32,
    /// Length of the page-load entrance animation (default: 1.2).
    pub entrance_duration: f32,
    /// The fixed set of initials offered for the seal.
    pub initials: Vec<String>,
    /// Initial shown on the seal at startup.
    pub default_initial: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            transition_delay: 0.4,
            fade_in_duration: 0.8,
            modal_autohide_delay: 0.5,
            ambient_interval: 8.0,
            seal_pulse_duration: 0.3,
            entrance_delay: 0.2,
            entrance_duration: 1.2,
            initials: default_initials(),
            default_initial: "A".to_string(),
        }
    }
}

fn default_initials() -> Vec<String> {
    ('A'..='Z').map(|c| c.to_string()).collect()
}

impl WidgetConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::sanitized)
    }

    /// Whether `initial` is one of the offered options.
    pub fn offers(&self, initial: &str) -> bool {
        self.initials.iter().any(|i| i == initial)
    }

    /// Repair inconsistent timings and initial sets so the controller
    /// invariants hold.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.ambient_interval.is_finite() && self.ambient_interval > 0.0) {
            log::warn!(
                "config: ambient_interval {} must be positive, using {}",
                self.ambient_interval,
                defaults.ambient_interval
            );
            self.ambient_interval = defaults.ambient_interval;
        }
        let durations = [
            ("transition_delay", &mut self.transition_delay, defaults.transition_delay),
            ("fade_in_duration", &mut self.fade_in_duration, defaults.fade_in_duration),
            ("modal_autohide_delay", &mut self.modal_autohide_delay, defaults.modal_autohide_delay),
            ("seal_pulse_duration", &mut self.seal_pulse_duration, defaults.seal_pulse_duration),
            ("entrance_delay", &mut self.entrance_delay, defaults.entrance_delay),
            ("entrance_duration", &mut self.entrance_duration, defaults.entrance_duration),
        ];
        for (name, value, fallback) in durations {
            if !value.is_finite() {
                log::warn!("config: {} is not a number, using {}", name, fallback);
                *value = fallback;
            } else if *value < 0.0 {
                log::warn!("config: {} {} is negative, using 0", name, value);
                *value = 0.0;
            }
        }

        if self.initials.is_empty() {
            log::warn!("config: empty initial set, using A-Z");
            self.initials = default_initials();
        }
        if !self.offers(&self.default_initial) {
            let fallback = self.initials[0].clone();
            log::warn!(
                "config: default initial {:?} not offered, using {:?}",
                self.default_initial,
                fallback
            );
            self.default_initial = fallback;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_timings() {
        let config = WidgetConfig::default();
        assert_eq!(config.transition_delay, 0.4);
        assert_eq!(config.modal_autohide_delay, 0.5);
        assert_eq!(config.ambient_interval, 8.0);
        assert_eq!(config.initials.len(), 26);
        assert!(config.offers("A"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{ "ambient_interval": 4.0 }"#).unwrap();
        assert_eq!(config.ambient_interval, 4.0);
        assert_eq!(config.transition_delay, 0.4);
        assert_eq!(config.default_initial, "A");
    }

    #[test]
    fn unknown_default_initial_falls_back_to_first_option() {
        let json = r#"{ "initials": ["M", "R"], "default_initial": "Z" }"#;
        let config = WidgetConfig::from_json(json).unwrap();
        assert_eq!(config.default_initial, "M");
        assert!(!config.offers("Z"));
    }

    #[test]
    fn empty_initial_set_is_repaired() {
        let json = r#"{ "initials": [], "default_initial": "B" }"#;
        let config = WidgetConfig::from_json(json).unwrap();
        assert_eq!(config.initials.len(), 26);
        assert_eq!(config.default_initial, "B");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(WidgetConfig::from_json("{ initials: ").is_err());
    }

    #[test]
    fn bad_timings_are_repaired() {
        let json = r#"{ "ambient_interval": 0, "transition_delay": -0.4, "fade_in_duration": 0 }"#;
        let config = WidgetConfig::from_json(json).unwrap();
        assert_eq!(config.ambient_interval, 8.0);
        assert_eq!(config.transition_delay, 0.0);
        assert_eq!(config.fade_in_duration, 0.0);

        let mut config = WidgetConfig::default();
        config.ambient_interval = -3.0;
        assert_eq!(config.sanitized().ambient_interval, 8.0);

        let mut config = WidgetConfig::default();
        config.ambient_interval = f32::NAN;
        config.transition_delay = f32::INFINITY;
        config.entrance_duration = f32::NAN;
        let config = config.sanitized();
        assert_eq!(config.ambient_interval, 8.0);
        assert_eq!(config.transition_delay, 0.4);
        assert_eq!(config.entrance_duration, 1.2);
    }
}
