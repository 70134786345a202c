use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use super::types::Participant;

pub const MIN_PARTICIPANTS: usize = 3;
pub const MAX_PARTICIPANTS: usize = 8;
pub const MIN_FIELDS: usize = 1;
pub const MAX_FIELDS: usize = 4;
pub const MAX_HALF_TIME_INTERVAL_MINUTES: u32 = 30;
pub const MAX_LUNCH_BREAK_MINUTES: u32 = 240;

/// Age category. Each kind has a fixed match/break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    U8,
    U10,
    U12,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 3] = [CategoryKind::U8, CategoryKind::U10, CategoryKind::U12];

    pub fn match_duration_minutes(self) -> u32 {
        match self {
            CategoryKind::U8 | CategoryKind::U10 => 10,
            CategoryKind::U12 => 12,
        }
    }

    pub fn break_minutes(self) -> u32 {
        5
    }

    pub fn name(self) -> &'static str {
        match self {
            CategoryKind::U8 => "U8",
            CategoryKind::U10 => "U10",
            CategoryKind::U12 => "U12",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "U8" => Ok(CategoryKind::U8),
            "U10" => Ok(CategoryKind::U10),
            "U12" => Ok(CategoryKind::U12),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// How the slots are divided around the lunch break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRatio {
    #[default]
    Half,
    TwoThirds,
}

impl SplitRatio {
    /// Number of morning slots out of `slot_count`, rounded up.
    pub fn morning_slots(self, slot_count: usize) -> usize {
        match self {
            SplitRatio::Half => (slot_count + 1) / 2,
            SplitRatio::TwoThirds => (slot_count * 2 + 2) / 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchBreak {
    pub minutes: u32,
    pub split: SplitRatio,
}

/// Everything the scheduler needs to produce one category's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub kind: CategoryKind,
    pub participant_count: usize,
    pub field_count: usize,
    pub start_time: NaiveTime,
    pub participant_names: Option<Vec<String>>,
    pub half_time_interval_minutes: u32,
    pub lunch_break: Option<LunchBreak>,
    pub total_game_time_minutes: Option<u32>,
}

impl CategoryConfig {
    pub fn new(
        kind: CategoryKind,
        participant_count: usize,
        field_count: usize,
        start_time: NaiveTime,
    ) -> Self {
        Self {
            kind,
            participant_count,
            field_count,
            start_time,
            participant_names: None,
            half_time_interval_minutes: 0,
            lunch_break: None,
            total_game_time_minutes: None,
        }
    }

    pub fn with_participant_names(mut self, names: Vec<String>) -> Self {
        self.participant_names = Some(names);
        self
    }

    pub fn with_half_time_interval(mut self, minutes: u32) -> Self {
        self.half_time_interval_minutes = minutes;
        self
    }

    /// A zero-minute lunch break means no split at all
    pub fn with_lunch_break(mut self, minutes: u32, split: SplitRatio) -> Self {
        self.lunch_break = (minutes > 0).then_some(LunchBreak { minutes, split });
        self
    }

    pub fn with_total_game_time(mut self, minutes: u32) -> Self {
        self.total_game_time_minutes = Some(minutes);
        self
    }

    pub fn match_duration_minutes(&self) -> u32 {
        self.kind.match_duration_minutes()
    }

    pub fn break_minutes(&self) -> u32 {
        self.kind.break_minutes()
    }

    /// Minutes between two consecutive slot starts (outside the lunch break).
    pub fn slot_duration_minutes(&self) -> u32 {
        self.match_duration_minutes()
            .saturating_add(self.half_time_interval_minutes)
            .saturating_add(self.break_minutes())
    }

    pub fn validate(&self) -> Result<(), SchedulerError> {
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&self.participant_count) {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "participant count must be between {} and {}, got {}",
                MIN_PARTICIPANTS, MAX_PARTICIPANTS, self.participant_count
            )));
        }
        if !(MIN_FIELDS..=MAX_FIELDS).contains(&self.field_count) {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "field count must be between {} and {}, got {}",
                MIN_FIELDS, MAX_FIELDS, self.field_count
            )));
        }
        if self.half_time_interval_minutes > MAX_HALF_TIME_INTERVAL_MINUTES {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "half-time interval must be at most {} min, got {}",
                MAX_HALF_TIME_INTERVAL_MINUTES, self.half_time_interval_minutes
            )));
        }
        if let Some(lunch) = self.lunch_break.filter(|l| l.minutes > MAX_LUNCH_BREAK_MINUTES) {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "lunch break must be at most {} min, got {}",
                MAX_LUNCH_BREAK_MINUTES, lunch.minutes
            )));
        }
        if let Some(names) = &self.participant_names {
            if names.len() != self.participant_count {
                return Err(SchedulerError::InvalidConfiguration(format!(
                    "expected {} participant names, got {}",
                    self.participant_count,
                    names.len()
                )));
            }
        }
        Ok(())
    }

    /// Participants with their display names, falling back to "Team N".
    pub fn participants(&self) -> Vec<Participant> {
        (0..self.participant_count)
            .map(|index| {
                let name = self
                    .participant_names
                    .as_ref()
                    .and_then(|names| names.get(index))
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| Participant::default_name(index));
                Participant { index, name }
            })
            .collect()
    }
}
