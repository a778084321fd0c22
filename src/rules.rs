//! The fixed transition rule of the automaton.
//!
//! The board evolves under standard Life rules: birth on exactly 3 live
//! neighbors, survival on 2 or 3.
//!
//! See: https://conwaylife.com/wiki/Rulestring

/// Next state of one cell under b3s23.
///
/// `neighbors` is the live count over the Moore neighborhood, 0 to 8. The
/// match is total: any combination not named keeps its current state, which
/// in particular keeps dead cells dead.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        // underpopulation
        (true, n) if n < 2 => false,

        // survival
        (true, 2) | (true, 3) => true,

        // overpopulation
        (true, _) => false,

        // birth
        (false, 3) => true,

        (state, _) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::next_state;

    #[test]
    fn full_transition_table() {
        // Indexed by neighbor count.
        let from_alive = [
            false, false, true, true, false, false, false, false, false,
        ];
        let from_dead = [
            false, false, false, true, false, false, false, false, false,
        ];

        for n in 0..=8u8 {
            assert_eq!(
                next_state(true, n),
                from_alive[n as usize],
                "alive cell with {n} neighbors"
            );
            assert_eq!(
                next_state(false, n),
                from_dead[n as usize],
                "dead cell with {n} neighbors"
            );
        }
    }
}
