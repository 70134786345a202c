use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::category::CategoryKind;
use super::slot_utils::hhmm;

/// A team taking part in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub index: usize,
    pub name: String,
}

impl Participant {
    pub fn default_name(index: usize) -> String {
        format!("Team {}", index + 1)
    }
}

/// Two distinct participants that meet once. Always stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    pub a: usize,
    pub b: usize,
}

impl Pair {
    pub fn new(x: usize, y: usize) -> Self {
        debug_assert_ne!(x, y);
        Self { a: x.min(y), b: x.max(y) }
    }
}

/// A placed match with its referee and wall-clock start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based running number in schedule order
    pub number: usize,
    pub slot_index: usize,
    pub field_index: usize,
    pub participant_a: usize,
    pub participant_b: usize,
    pub referee: usize,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
}

impl Match {
    pub fn field_number(&self) -> usize {
        self.field_index + 1
    }

    pub fn is_playing(&self, participant: usize) -> bool {
        self.participant_a == participant || self.participant_b == participant
    }

    pub fn involves(&self, participant: usize) -> bool {
        self.is_playing(participant) || self.referee == participant
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub matches_played: u32,
    pub referee_duties: u32,
    pub max_wait_minutes: u32,
}

/// Non-fatal findings attached to an otherwise valid schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleWarning {
    /// Participants whose first match is after slot 1
    LateStart { participants: Vec<usize> },
    /// Per-team playing time exceeds the category budget
    TimeOverrun { played_minutes: u32, budget_minutes: u32 },
}

/// Complete timetable for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub category: CategoryKind,
    pub participants: Vec<Participant>,
    pub matches: Vec<Match>, // ordered by slot, then field
    pub stats: Vec<ParticipantStats>, // indexed by participant
    pub resting_per_slot: Vec<Vec<usize>>,
    pub warnings: Vec<ScheduleWarning>,
    pub slot_count: usize,
    pub morning_slots: usize,
    pub match_duration_minutes: u32,
    pub break_minutes: u32,
    pub half_time_interval_minutes: u32,
    pub lunch_break_minutes: u32,
    pub total_duration_minutes: u32,
}

impl Schedule {
    pub fn name_of(&self, participant: usize) -> &str {
        self.participants
            .get(participant)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }

    pub fn matches_in_slot(&self, slot_index: usize) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.slot_index == slot_index)
    }

    pub fn total_referee_duties(&self) -> u32 {
        self.stats.iter().map(|s| s.referee_duties).sum()
    }

    pub fn has_lunch_break(&self) -> bool {
        self.morning_slots > 0
    }
}
