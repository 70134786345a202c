use super::category::CategoryConfig;
use super::slot_utils::Timeline;
use super::types::{Match, Pair, ParticipantStats, Schedule, ScheduleWarning};

/// Turns refereed slots into the final, numbered match list.
pub fn build_matches(slots: &[Vec<(Pair, usize)>], timeline: &Timeline) -> Vec<Match> {
    let mut matches = Vec::new();
    for (slot_index, slot) in slots.iter().enumerate() {
        let start_time = timeline.slot_start(slot_index);
        for (field_index, (pair, referee)) in slot.iter().enumerate() {
            matches.push(Match {
                number: matches.len() + 1,
                slot_index,
                field_index,
                participant_a: pair.a,
                participant_b: pair.b,
                referee: *referee,
                start_time,
            });
        }
    }
    matches
}

/// Counts matches, referee duties and the longest idle gap per participant.
pub fn compute_stats(participant_count: usize, matches: &[Match], timeline: &Timeline) -> Vec<ParticipantStats> {
    (0..participant_count)
        .map(|participant| {
            let mut play_slots: Vec<usize> = matches
                .iter()
                .filter(|m| m.is_playing(participant))
                .map(|m| m.slot_index)
                .collect();
            play_slots.sort_unstable();

            let max_wait_minutes = play_slots
                .windows(2)
                .map(|w| timeline.slot_offset_minutes(w[1]) - timeline.slot_end_offset_minutes(w[0]))
                .max()
                .unwrap_or(0)
                .max(0) as u32;

            ParticipantStats {
                matches_played: play_slots.len() as u32,
                referee_duties: matches.iter().filter(|m| m.referee == participant).count() as u32,
                max_wait_minutes,
            }
        })
        .collect()
}

/// Participants that neither play nor referee, per slot
pub fn resting_per_slot(participant_count: usize, slot_count: usize, matches: &[Match]) -> Vec<Vec<usize>> {
    (0..slot_count)
        .map(|slot_index| {
            (0..participant_count)
                .filter(|&p| {
                    !matches
                        .iter()
                        .any(|m| m.slot_index == slot_index && m.involves(p))
                })
                .collect()
        })
        .collect()
}

/// Folds the finished matches into an immutable [`Schedule`].
pub fn assemble(
    config: &CategoryConfig,
    slots: &[Vec<(Pair, usize)>],
    timeline: &Timeline,
    warnings: Vec<ScheduleWarning>,
) -> Schedule {
    let participant_count = config.participant_count;
    let matches = build_matches(slots, timeline);
    let stats = compute_stats(participant_count, &matches, timeline);
    let resting = resting_per_slot(participant_count, slots.len(), &matches);

    let total_duration_minutes = slots
        .len()
        .checked_sub(1)
        .map(|last| u32::try_from(timeline.slot_end_offset_minutes(last).max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0);

    Schedule {
        category: config.kind,
        participants: config.participants(),
        matches,
        stats,
        resting_per_slot: resting,
        warnings,
        slot_count: slots.len(),
        morning_slots: timeline.morning_slots(),
        match_duration_minutes: config.match_duration_minutes(),
        break_minutes: config.break_minutes(),
        half_time_interval_minutes: config.half_time_interval_minutes,
        lunch_break_minutes: config.lunch_break.map_or(0, |l| l.minutes),
        total_duration_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::category::CategoryKind;
    use crate::schedule::slot_utils::format_time;
    use chrono::NaiveTime;

    fn timeline() -> Timeline {
        let config = CategoryConfig::new(CategoryKind::U8, 6, 2, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        Timeline::new(&config, 4)
    }

    fn placed(a: usize, b: usize, referee: usize) -> (Pair, usize) {
        (Pair::new(a, b), referee)
    }

    #[test]
    fn test_assigns_times_fields_and_numbers() {
        let slots = vec![
            vec![placed(0, 1, 2), placed(3, 4, 5)],
            vec![placed(0, 2, 1)],
        ];
        let matches = build_matches(&slots, &timeline());
        assert_eq!(matches.iter().map(|m| m.number).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(matches[1].field_number(), 2);
        assert_eq!(format_time(matches[0].start_time), "09:00");
        assert_eq!(format_time(matches[2].start_time), "09:15");
        assert_eq!(matches[2].slot_index, 1);
    }

    #[test]
    fn test_counts_played_and_refereed() {
        let slots = vec![
            vec![placed(0, 1, 2)],
            vec![placed(0, 2, 1)],
            vec![placed(1, 2, 0)],
        ];
        let timeline = timeline();
        let matches = build_matches(&slots, &timeline);
        for stat in compute_stats(3, &matches, &timeline) {
            assert_eq!(stat.matches_played, 2);
            assert_eq!(stat.referee_duties, 1);
        }
    }

    #[test]
    fn test_max_wait() {
        // A plays slots 0,1; B plays 0,3; C plays 1,3
        let slots = vec![
            vec![placed(0, 1, 2)],
            vec![placed(0, 2, 1)],
            vec![],
            vec![placed(1, 2, 0)],
        ];
        let timeline = timeline();
        let matches = build_matches(&slots, &timeline);
        let stats = compute_stats(3, &matches, &timeline);
        assert_eq!(stats[0].max_wait_minutes, 5);
        assert_eq!(stats[1].max_wait_minutes, 35);
        assert_eq!(stats[2].max_wait_minutes, 20);
    }

    #[test]
    fn test_resting_lists() {
        let slots = vec![vec![placed(0, 1, 2)], vec![placed(2, 3, 0)]];
        let matches = build_matches(&slots, &timeline());
        let resting = resting_per_slot(5, 2, &matches);
        assert_eq!(resting, vec![vec![3, 4], vec![1, 4]]);
    }

    #[test]
    fn test_total_duration_and_metadata() {
        let config = CategoryConfig::new(CategoryKind::U12, 3, 1, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        let slots = vec![
            vec![placed(1, 2, 0)],
            vec![placed(0, 2, 1)],
            vec![placed(0, 1, 2)],
        ];
        let timeline = Timeline::new(&config, slots.len());
        let schedule = assemble(&config, &slots, &timeline, Vec::new());
        // last slot starts at +34 and lasts 12 minutes
        assert_eq!(schedule.total_duration_minutes, 46);
        assert_eq!(schedule.slot_count, 3);
        assert_eq!(schedule.category, CategoryKind::U12);
        assert_eq!(schedule.total_referee_duties(), 3);
        assert!(!schedule.has_lunch_break());
    }
}
