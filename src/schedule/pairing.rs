use crate::error::SchedulerError;
use super::category::MIN_PARTICIPANTS;
use super::types::Pair;

/// Generates the round-robin rounds with the circle method.
///
/// Participant 0 stays fixed while the others rotate one position per round;
/// position `i` meets position `len - 1 - i`. Odd counts get a bye seat, so one
/// participant sits out each round. Every unordered pair appears exactly once.
pub fn round_robin_rounds(participant_count: usize) -> Result<Vec<Vec<Pair>>, SchedulerError> {
    if participant_count < MIN_PARTICIPANTS {
        return Err(SchedulerError::InvalidConfiguration(format!(
            "round robin needs at least {} participants, got {}",
            MIN_PARTICIPANTS, participant_count
        )));
    }

    let mut seats: Vec<Option<usize>> = (0..participant_count).map(Some).collect();
    if participant_count % 2 == 1 {
        seats.push(None); // bye
    }

    let seat_count = seats.len();
    let mut rounds = Vec::with_capacity(seat_count - 1);
    for _ in 0..seat_count - 1 {
        let round: Vec<Pair> = (0..seat_count / 2)
            .filter_map(|i| match (seats[i], seats[seat_count - 1 - i]) {
                (Some(x), Some(y)) => Some(Pair::new(x, y)),
                _ => None,
            })
            .collect();
        rounds.push(round);

        // Rotate everyone but seat 0
        seats[1..].rotate_right(1);
    }

    Ok(rounds)
}

/// Flattens the rounds into generation order
pub fn ordered_pairs(participant_count: usize) -> Result<Vec<Pair>, SchedulerError> {
    Ok(round_robin_rounds(participant_count)?.into_iter().flatten().collect())
}
