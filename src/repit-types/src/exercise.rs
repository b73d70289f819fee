use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The tracked exercises. String forms accept both the display name
/// ("Push ups") and the kebab-case CLI form ("push-ups").
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Exercise {
    #[strum(serialize = "push-ups", serialize = "pushups", to_string = "Push ups")]
    PushUps,
    #[strum(serialize = "sit-ups", serialize = "situps", to_string = "Sit ups")]
    SitUps,
    #[strum(serialize = "squats", to_string = "Squats")]
    Squats,
    #[strum(serialize = "pull-ups", serialize = "pullups", to_string = "Pull ups")]
    PullUps,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::Exercise;

    #[test]
    fn parses_cli_and_display_forms() {
        assert_eq!(Exercise::from_str("push-ups").unwrap(), Exercise::PushUps);
        assert_eq!(Exercise::from_str("Push ups").unwrap(), Exercise::PushUps);
        assert_eq!(Exercise::from_str("SQUATS").unwrap(), Exercise::Squats);
        assert!(Exercise::from_str("deadlift").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for exercise in Exercise::iter() {
            let parsed = Exercise::from_str(&exercise.to_string()).unwrap();
            assert_eq!(parsed, exercise);
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Exercise::PullUps).unwrap();
        assert_eq!(json, "\"pull-ups\"");
    }
}
