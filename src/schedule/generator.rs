use std::collections::HashSet;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::SchedulerError;
use super::assembler::assemble;
use super::category::CategoryConfig;
use super::fairness::{check_early_start, check_time_budget};
use super::packer::{
    compact_slots, early_start_order, max_simultaneous, remove_placed, select_slot_pairs,
    EARLY_START_SLOTS,
};
use super::pairing::ordered_pairs;
use super::referee::RefereeAllocator;
use super::slot_utils::Timeline;
use super::types::{Pair, Schedule};

/// Packs every pair into slots and referees each match, slot by slot.
///
/// Returned slots are already compacted (full slots first).
pub fn fill_slots(
    participant_count: usize,
    field_count: usize,
) -> Result<Vec<Vec<(Pair, usize)>>, SchedulerError> {
    let capacity = max_simultaneous(participant_count, field_count);
    let mut pending = ordered_pairs(participant_count)?;
    let mut referees = RefereeAllocator::new(participant_count);
    let mut has_played: HashSet<usize> = HashSet::new();
    let mut slots: Vec<Vec<(Pair, usize)>> = Vec::new();

    while !pending.is_empty() {
        let slot_index = slots.len();
        if slot_index < EARLY_START_SLOTS {
            early_start_order(&mut pending, &has_played, referees.duties());
        }

        let selected = select_slot_pairs(&pending, capacity);
        let placed = referees.assign_slot(slot_index, &selected)?;
        debug!("slot {}: {:?}", slot_index, placed);

        for (pair, _) in &placed {
            has_played.insert(pair.a);
            has_played.insert(pair.b);
        }
        remove_placed(&mut pending, &selected);
        slots.push(placed);
    }

    compact_slots(&mut slots);
    Ok(slots)
}

/// Generates the complete timetable for one category.
pub fn generate_schedule(config: &CategoryConfig) -> Result<Schedule, SchedulerError> {
    config.validate()?;

    let slots = fill_slots(config.participant_count, config.field_count)?;
    let timeline = Timeline::new(config, slots.len());

    let played: Vec<Vec<Pair>> = slots
        .iter()
        .map(|slot| slot.iter().map(|(pair, _)| *pair).collect())
        .collect();
    let warnings: Vec<_> = [
        check_early_start(config.participant_count, &played),
        check_time_budget(
            config.participant_count,
            config.match_duration_minutes(),
            config.total_game_time_minutes,
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    for warning in &warnings {
        warn!("{}: {:?}", config.kind, warning);
    }

    let schedule = assemble(config, &slots, &timeline, warnings);
    info!(
        "{}: {} participants, {} fields -> {} matches in {} slots",
        config.kind,
        config.participant_count,
        config.field_count,
        schedule.matches.len(),
        schedule.slot_count
    );
    Ok(schedule)
}

/// Generates every category independently; one failure never affects the others.
pub fn generate_all(configs: &[CategoryConfig]) -> Vec<Result<Schedule, SchedulerError>> {
    configs
        .par_iter()
        .map(|config| {
            generate_schedule(config).map_err(|e| {
                warn!("{}: schedule generation failed: {}", config.kind, e);
                e
            })
        })
        .collect()
}
