use chrono::{Duration, NaiveTime};

use super::category::CategoryConfig;

/// Parses a time string (HH:MM) to a time of day
pub fn parse_start_time(time_str: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time_str.trim(), "%H:%M").ok()
}

/// Formats a time of day as HH:MM
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Maps slot indices to wall-clock start times for one category.
///
/// Slot `s` starts `s * slot_duration` minutes after the category start. When a
/// lunch break is configured, every slot from `morning_slots` on is pushed back by
/// `lunch - break` minutes, so the lunch replaces the ordinary break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    start_time: NaiveTime,
    slot_duration_minutes: u32,
    match_length_minutes: u32,
    break_minutes: u32,
    morning_slots: usize,
    lunch_minutes: u32,
}

impl Timeline {
    pub fn new(config: &CategoryConfig, slot_count: usize) -> Self {
        let (morning_slots, lunch_minutes) = match config.lunch_break {
            Some(lunch) => (lunch.split.morning_slots(slot_count), lunch.minutes),
            None => (0, 0),
        };
        Self {
            start_time: config.start_time,
            slot_duration_minutes: config.slot_duration_minutes(),
            match_length_minutes: config.match_duration_minutes().saturating_add(config.half_time_interval_minutes),
            break_minutes: config.break_minutes(),
            morning_slots,
            lunch_minutes,
        }
    }

    pub fn morning_slots(&self) -> usize {
        self.morning_slots
    }

    /// Minutes from the category start to the start of `slot_index`
    pub fn slot_offset_minutes(&self, slot_index: usize) -> i64 {
        let base = slot_index as i64 * self.slot_duration_minutes as i64;
        if self.morning_slots > 0 && slot_index >= self.morning_slots {
            base + self.lunch_minutes as i64 - self.break_minutes as i64
        } else {
            base
        }
    }

    /// Minutes from the category start to the end of the match in `slot_index`
    pub fn slot_end_offset_minutes(&self, slot_index: usize) -> i64 {
        self.slot_offset_minutes(slot_index) + self.match_length_minutes as i64
    }

    /// Wall-clock start; wraps around midnight.
    pub fn slot_start(&self, slot_index: usize) -> NaiveTime {
        let (time, _) = self
            .start_time
            .overflowing_add_signed(Duration::minutes(self.slot_offset_minutes(slot_index)));
        time
    }
}

/// Serializes times as "HH:MM"
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_start_time(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::category::{CategoryKind, SplitRatio};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse_start_time("09:05"), Some(at(9, 5)));
        assert_eq!(parse_start_time(" 14:30 "), Some(at(14, 30)));
        assert_eq!(parse_start_time("25:00"), None);
        assert_eq!(parse_start_time("nine"), None);
        assert_eq!(format_time(at(7, 3)), "07:03");
    }

    #[test]
    fn test_fifteen_minute_cadence() {
        let config = CategoryConfig::new(CategoryKind::U8, 3, 1, at(9, 0));
        let timeline = Timeline::new(&config, 3);
        assert_eq!(timeline.slot_start(0), at(9, 0));
        assert_eq!(timeline.slot_start(1), at(9, 15));
        assert_eq!(timeline.slot_start(2), at(9, 30));
    }

    #[test]
    fn test_seventeen_minute_cadence() {
        let config = CategoryConfig::new(CategoryKind::U12, 3, 1, at(10, 0));
        let timeline = Timeline::new(&config, 3);
        assert_eq!(timeline.slot_start(1), at(10, 17));
        assert_eq!(timeline.slot_start(2), at(10, 34));
    }

    #[test]
    fn test_half_time_interval_cadence() {
        let config = CategoryConfig::new(CategoryKind::U12, 3, 1, at(9, 0)).with_half_time_interval(2);
        let timeline = Timeline::new(&config, 3);
        assert_eq!(timeline.slot_start(1), at(9, 19));
        assert_eq!(timeline.slot_start(2), at(9, 38));
    }

    #[test]
    fn test_lunch_break_shifts_afternoon() {
        let config = CategoryConfig::new(CategoryKind::U8, 3, 1, at(9, 0)).with_lunch_break(60, SplitRatio::Half);
        let timeline = Timeline::new(&config, 3);
        assert_eq!(timeline.morning_slots(), 2);
        assert_eq!(timeline.slot_start(1), at(9, 15));
        assert_eq!(timeline.slot_start(2), at(10, 25));
    }

    #[test]
    fn test_lunch_replaces_ordinary_break() {
        let config = CategoryConfig::new(CategoryKind::U8, 3, 1, at(9, 0)).with_lunch_break(30, SplitRatio::Half);
        let timeline = Timeline::new(&config, 3);
        let gap = timeline.slot_offset_minutes(2) - timeline.slot_offset_minutes(1);
        assert_eq!(gap, 10 + 30);
    }

    #[test]
    fn test_wraps_past_midnight() {
        let config = CategoryConfig::new(CategoryKind::U8, 3, 1, at(23, 50));
        let timeline = Timeline::new(&config, 3);
        assert_eq!(timeline.slot_start(1), at(0, 5));
    }
}
