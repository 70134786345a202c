use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::schedule::category::{
    CategoryConfig, CategoryKind, SplitRatio, MAX_FIELDS, MAX_HALF_TIME_INTERVAL_MINUTES,
    MAX_LUNCH_BREAK_MINUTES, MAX_PARTICIPANTS, MIN_FIELDS, MIN_PARTICIPANTS,
};
use crate::schedule::slot_utils::parse_start_time;

fn default_start_time() -> String {
    "09:00".to_string()
}

/// One category as submitted by the organiser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySubmission {
    pub category: CategoryKind,
    pub participant_count: usize,
    pub field_count: usize,
    #[serde(default = "default_start_time")]
    pub start_time: String,
    #[serde(default)]
    pub participant_names: Vec<String>,
    #[serde(default)]
    pub half_time_interval_minutes: u32,
    #[serde(default)]
    pub lunch_break_minutes: u32,
    #[serde(default)]
    pub split_ratio: SplitRatio,
    #[serde(default)]
    pub total_game_time_minutes: Option<u32>,
}

/// Request body for a whole tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSubmission {
    #[serde(default)]
    pub categories: Vec<CategorySubmission>,
}

/// Range checks done before the scheduler is invoked
pub fn validate_submission(req: &CategorySubmission) -> Result<(), String> {
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&req.participant_count) {
        return Err(format!(
            "{}: number of teams must be between {} and {}",
            req.category, MIN_PARTICIPANTS, MAX_PARTICIPANTS
        ));
    }

    if !(MIN_FIELDS..=MAX_FIELDS).contains(&req.field_count) {
        return Err(format!(
            "{}: number of fields must be between {} and {}",
            req.category, MIN_FIELDS, MAX_FIELDS
        ));
    }

    if parse_start_time(&req.start_time).is_none() {
        return Err(format!("{}: invalid start time '{}'", req.category, req.start_time));
    }

    if req.half_time_interval_minutes > MAX_HALF_TIME_INTERVAL_MINUTES {
        return Err(format!(
            "{}: half-time interval must be at most {} min",
            req.category, MAX_HALF_TIME_INTERVAL_MINUTES
        ));
    }

    if req.lunch_break_minutes > MAX_LUNCH_BREAK_MINUTES {
        return Err(format!(
            "{}: lunch break must be at most {} min",
            req.category, MAX_LUNCH_BREAK_MINUTES
        ));
    }

    if !req.participant_names.is_empty() && req.participant_names.len() != req.participant_count {
        return Err(format!(
            "{}: {} team names given for {} teams",
            req.category,
            req.participant_names.len(),
            req.participant_count
        ));
    }

    Ok(())
}

impl CategorySubmission {
    /// Converts into a scheduler config. Blank names fall back to "Team N".
    pub fn into_config(self) -> Result<CategoryConfig, SchedulerError> {
        validate_submission(&self).map_err(SchedulerError::InvalidConfiguration)?;
        let start_time = parse_start_time(&self.start_time).ok_or_else(|| {
            SchedulerError::InvalidConfiguration(format!("invalid start time '{}'", self.start_time))
        })?;

        let mut config = CategoryConfig::new(self.category, self.participant_count, self.field_count, start_time)
            .with_half_time_interval(self.half_time_interval_minutes)
            .with_lunch_break(self.lunch_break_minutes, self.split_ratio);
        if !self.participant_names.is_empty() {
            config = config.with_participant_names(self.participant_names);
        }
        if let Some(minutes) = self.total_game_time_minutes {
            config = config.with_total_game_time(minutes);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(participant_count: usize, field_count: usize) -> CategorySubmission {
        CategorySubmission {
            category: CategoryKind::U10,
            participant_count,
            field_count,
            start_time: "09:00".to_string(),
            participant_names: Vec::new(),
            half_time_interval_minutes: 0,
            lunch_break_minutes: 0,
            split_ratio: SplitRatio::Half,
            total_game_time_minutes: None,
        }
    }

    #[test]
    fn test_accepts_valid_submission() {
        assert!(validate_submission(&submission(6, 2)).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_counts() {
        assert!(validate_submission(&submission(2, 1)).is_err());
        assert!(validate_submission(&submission(9, 1)).is_err());
        assert!(validate_submission(&submission(4, 0)).is_err());
        assert!(validate_submission(&submission(4, 5)).is_err());
    }

    #[test]
    fn test_rejects_bad_start_time() {
        let mut req = submission(4, 1);
        req.start_time = "9am".to_string();
        assert!(validate_submission(&req).unwrap_err().contains("start time"));
    }

    #[test]
    fn test_rejects_oversized_interval() {
        let req: CategorySubmission = serde_json::from_str(
            r#"{"category": "U8", "participant_count": 3, "field_count": 1, "half_time_interval_minutes": 4294967295}"#,
        )
        .unwrap();
        let err = req.into_config().unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfiguration(ref m) if m.contains("half-time interval")));
    }

    #[test]
    fn test_rejects_oversized_lunch_break() {
        let mut req = submission(4, 1);
        req.lunch_break_minutes = MAX_LUNCH_BREAK_MINUTES + 1;
        assert!(validate_submission(&req).unwrap_err().contains("lunch break"));
        req.lunch_break_minutes = MAX_LUNCH_BREAK_MINUTES;
        assert!(validate_submission(&req).is_ok());
    }

    #[test]
    fn test_rejects_name_count_mismatch() {
        let mut req = submission(3, 1);
        req.participant_names = vec!["A".into(), "B".into()];
        let err = req.into_config().unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_into_config_carries_options() {
        let mut req = submission(4, 1);
        req.participant_names = vec!["A".into(), "".into(), "C".into(), "D".into()];
        req.lunch_break_minutes = 45;
        req.split_ratio = SplitRatio::TwoThirds;
        req.total_game_time_minutes = Some(40);
        let config = req.into_config().unwrap();
        assert_eq!(config.participants()[1].name, "Team 2");
        assert_eq!(config.lunch_break.unwrap().split, SplitRatio::TwoThirds);
        assert_eq!(config.total_game_time_minutes, Some(40));
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let req: CategorySubmission = serde_json::from_str(
            r#"{"category": "U12", "participant_count": 5, "field_count": 2}"#,
        )
        .unwrap();
        assert_eq!(req.start_time, "09:00");
        assert_eq!(req.split_ratio, SplitRatio::Half);
        let config = req.into_config().unwrap();
        assert_eq!(config.slot_duration_minutes(), 17);
    }
}
