use super::packer::EARLY_START_SLOTS;
use super::types::{Pair, ScheduleWarning};

/// Flags participants whose first match falls after the early-start window.
///
/// `slots` holds the placed pairs in final slot order.
pub fn check_early_start(participant_count: usize, slots: &[Vec<Pair>]) -> Option<ScheduleWarning> {
    let mut first_slot: Vec<Option<usize>> = vec![None; participant_count];
    for (slot_index, slot) in slots.iter().enumerate() {
        for pair in slot {
            for participant in [pair.a, pair.b] {
                first_slot[participant].get_or_insert(slot_index);
            }
        }
    }

    let late: Vec<usize> = first_slot
        .iter()
        .enumerate()
        .filter(|(_, first)| first.map_or(true, |s| s >= EARLY_START_SLOTS))
        .map(|(participant, _)| participant)
        .collect();

    (!late.is_empty()).then_some(ScheduleWarning::LateStart { participants: late })
}

/// Compares per-team playing time against the optional budget.
pub fn check_time_budget(
    participant_count: usize,
    match_duration_minutes: u32,
    budget_minutes: Option<u32>,
) -> Option<ScheduleWarning> {
    let budget_minutes = budget_minutes?;
    let played_minutes = participant_count.saturating_sub(1) as u32 * match_duration_minutes;
    (played_minutes > budget_minutes).then_some(ScheduleWarning::TimeOverrun {
        played_minutes,
        budget_minutes,
    })
}
