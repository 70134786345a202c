use std::cmp::Reverse;
use std::collections::HashSet;

use super::types::Pair;

/// Number of slots at the start of the day that get the early-start ordering
pub const EARLY_START_SLOTS: usize = 2;

/// Matches that can run at once.
///
/// Every match ties up three participants (two players and a referee), so with
/// `n` participants at most `n / 3` matches fit into one slot, however many fields
/// are available.
pub fn max_simultaneous(participant_count: usize, field_count: usize) -> usize {
    field_count.min(participant_count / 3).max(1)
}

/// Moves pairs with a participant that has not played yet to the front.
///
/// Among equals, pairs whose least-used participant has fewer referee duties come
/// first. The sort is stable, so generation order is kept otherwise.
pub fn early_start_order(pending: &mut [Pair], has_played: &HashSet<usize>, referee_duties: &[u32]) {
    pending.sort_by_key(|pair| {
        let both_played = has_played.contains(&pair.a) && has_played.contains(&pair.b);
        let fewest_duties = referee_duties[pair.a].min(referee_duties[pair.b]);
        (both_played, fewest_duties)
    });
}

/// Picks the pairs for one slot, first come first served.
///
/// A pair is skipped when one of its participants already plays in this slot; it
/// stays pending for a later slot.
pub fn select_slot_pairs(pending: &[Pair], capacity: usize) -> Vec<Pair> {
    let mut busy: HashSet<usize> = HashSet::new();
    let mut selected = Vec::with_capacity(capacity);

    for pair in pending {
        if selected.len() >= capacity {
            break;
        }
        if busy.contains(&pair.a) || busy.contains(&pair.b) {
            continue;
        }
        busy.insert(pair.a);
        busy.insert(pair.b);
        selected.push(*pair);
    }

    selected
}

/// Removes the placed pairs from the pending list, keeping the order of the rest
pub fn remove_placed(pending: &mut Vec<Pair>, placed: &[Pair]) {
    pending.retain(|pair| !placed.contains(pair));
}

/// Reorders slots so that full ones come before partial ones (stable).
pub fn compact_slots<T>(slots: &mut [Vec<T>]) {
    slots.sort_by_key(|slot| Reverse(slot.len()));
}
