use std::collections::HashSet;

use crate::error::SchedulerError;
use super::types::Pair;

/// Hands out referee duties slot by slot.
///
/// Greedy running minimum: each match gets the free participant with the fewest
/// duties so far, lowest index on ties. This keeps counts close together but is not
/// a globally balanced assignment.
#[derive(Debug, Clone)]
pub struct RefereeAllocator {
    duties: Vec<u32>,
}

impl RefereeAllocator {
    pub fn new(participant_count: usize) -> Self {
        Self {
            duties: vec![0; participant_count],
        }
    }

    pub fn duties(&self) -> &[u32] {
        &self.duties
    }

    /// Assigns a referee to every pair of one slot, in field order.
    pub fn assign_slot(
        &mut self,
        slot_index: usize,
        pairs: &[Pair],
    ) -> Result<Vec<(Pair, usize)>, SchedulerError> {
        let mut occupied: HashSet<usize> = pairs.iter().flat_map(|p| [p.a, p.b]).collect();
        let mut assigned = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let referee = (0..self.duties.len())
                .filter(|candidate| !occupied.contains(candidate))
                .min_by_key(|&candidate| (self.duties[candidate], candidate))
                .ok_or(SchedulerError::UnsatisfiableConstraint {
                    slot: slot_index,
                    player_a: pair.a,
                    player_b: pair.b,
                })?;

            occupied.insert(referee);
            self.duties[referee] += 1;
            assigned.push((*pair, referee));
        }

        Ok(assigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match_uses_the_resting_participant() {
        let mut allocator = RefereeAllocator::new(3);
        let assigned = allocator.assign_slot(0, &[Pair::new(1, 2)]).unwrap();
        assert_eq!(assigned, vec![(Pair::new(1, 2), 0)]);
        assert_eq!(allocator.duties(), &[1, 0, 0]);
    }

    #[test]
    fn test_lowest_count_then_lowest_index() {
        let mut allocator = RefereeAllocator::new(4);
        // 0 and 1 play; 2 and 3 tie at zero so 2 wins
        let assigned = allocator.assign_slot(0, &[Pair::new(0, 1)]).unwrap();
        assert_eq!(assigned[0].1, 2);
        // 2 now has a duty, so 3 is preferred
        let assigned = allocator.assign_slot(1, &[Pair::new(0, 1)]).unwrap();
        assert_eq!(assigned[0].1, 3);
    }

    #[test]
    fn test_referees_are_distinct_within_slot() {
        let mut allocator = RefereeAllocator::new(6);
        let assigned = allocator.assign_slot(0, &[Pair::new(0, 5), Pair::new(1, 4)]).unwrap();
        assert_eq!(assigned[0].1, 2);
        assert_eq!(assigned[1].1, 3);
    }

    #[test]
    fn test_unsatisfiable_when_everyone_is_busy() {
        let mut allocator = RefereeAllocator::new(4);
        let err = allocator
            .assign_slot(3, &[Pair::new(0, 1), Pair::new(2, 3)])
            .unwrap_err();
        assert_eq!(
            err,
            SchedulerError::UnsatisfiableConstraint { slot: 3, player_a: 0, player_b: 1 }
        );
    }
}
