// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The two-phase probe sequence shared by insertion and lookup.
//!
//! For a home slot `h` in a table of `n` slots the sequence is:
//!
//! 1. quadratic: `(h + c * c) % n` for `c` in `0..=n / 2`
//! 2. linear: `(h + i) % n` for `i` in `1..=n`, restarting from `h`
//!
//! The quadratic phase alone does not visit every slot for most `n`. The
//! linear phase does, and its fixed budget of `n` steps is what bounds every
//! walk.

use std::iter::FusedIterator;

/// Which half of the probe sequence a [`ProbeSequence`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbePhase {
    /// Offsets grow as `c * c`.
    Quadratic,
    /// Offsets grow by one from the home slot.
    Linear,
}

/// Iterator over the candidate slots for one key.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    home: usize,
    capacity: usize,
    phase: ProbePhase,
    /// `c` while quadratic, linear steps taken while linear.
    counter: usize,
    /// `(home + c * c) % capacity` for the current `c`.
    slot: usize,
}

impl ProbeSequence {
    /// Creates the probe sequence starting at `home` in a table of `capacity` slots.
    ///
    /// A zero-capacity table yields an empty sequence.
    pub fn new(home: usize, capacity: usize) -> Self {
        let home = if capacity == 0 { 0 } else { home % capacity };
        Self {
            home,
            capacity,
            phase: ProbePhase::Quadratic,
            counter: 0,
            slot: home,
        }
    }

    /// Total number of candidates a sequence over `capacity` slots yields.
    pub fn total_len(capacity: usize) -> usize {
        if capacity == 0 {
            0
        } else {
            capacity / 2 + 1 + capacity
        }
    }

    /// The home slot this sequence started from.
    pub fn home(&self) -> usize {
        self.home
    }

    /// The phase the next candidate will come from.
    pub fn phase(&self) -> ProbePhase {
        self.phase
    }

    fn remaining(&self) -> usize {
        if self.capacity == 0 {
            return 0;
        }
        match self.phase {
            ProbePhase::Quadratic => (self.capacity / 2 - self.counter) + 1 + self.capacity,
            ProbePhase::Linear => self.capacity - self.counter,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.capacity == 0 {
            return None;
        }

        match self.phase {
            ProbePhase::Quadratic => {
                let candidate = self.slot;
                if self.counter >= self.capacity / 2 {
                    self.phase = ProbePhase::Linear;
                    self.counter = 0;
                } else {
                    // c^2 = (c - 1)^2 + 2c - 1, kept reduced so it cannot overflow
                    self.counter += 1;
                    let step = (2 * self.counter - 1) % self.capacity;
                    self.slot = (self.slot + step) % self.capacity;
                }
                Some(candidate)
            }
            ProbePhase::Linear => {
                if self.counter >= self.capacity {
                    return None;
                }
                self.counter += 1;
                Some((self.home + self.counter) % self.capacity)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl FusedIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test_case(0, 0, &[] ; "empty table")]
    #[test_case(1, 0, &[0, 0] ; "single slot")]
    #[test_case(5, 2, &[2, 3, 1, 3, 4, 0, 1, 2] ; "odd capacity")]
    #[test_case(8, 3, &[3, 4, 7, 4, 3, 4, 5, 6, 7, 0, 1, 2, 3] ; "even capacity")]
    #[test_case(4, 0, &[0, 1, 0, 1, 2, 3, 0] ; "home at zero")]
    fn test_exact_sequence(capacity: usize, home: usize, expected: &[usize]) {
        let sequence: Vec<usize> = ProbeSequence::new(home, capacity).collect();
        assert_eq!(sequence, expected);
    }

    #[test]
    fn test_length_matches_total_len() {
        for capacity in 0..50 {
            for home in 0..capacity.max(1) {
                let sequence = ProbeSequence::new(home, capacity);
                assert_eq!(sequence.len(), ProbeSequence::total_len(capacity));
                assert_eq!(sequence.count(), ProbeSequence::total_len(capacity));
            }
        }
    }

    #[test]
    fn test_linear_phase_covers_every_slot() {
        for capacity in 1..50 {
            for home in 0..capacity {
                let visited: HashSet<usize> = ProbeSequence::new(home, capacity)
                    .skip(capacity / 2 + 1)
                    .collect();
                assert_eq!(visited.len(), capacity);
            }
        }
    }

    #[test]
    fn test_home_is_reduced_to_capacity() {
        let sequence = ProbeSequence::new(11, 8);
        assert_eq!(sequence.home(), 3);
        assert_eq!(sequence.collect::<Vec<_>>()[0], 3);

        assert_eq!(ProbeSequence::new(7, 0).home(), 0);
    }

    #[test]
    fn test_phase_switch() {
        let mut sequence = ProbeSequence::new(1, 6);
        for _ in 0..=3 {
            assert_eq!(sequence.phase(), ProbePhase::Quadratic);
            sequence.next();
        }
        assert_eq!(sequence.phase(), ProbePhase::Linear);
        assert_eq!(sequence.next(), Some(2));
    }

    #[test]
    fn test_quadratic_offsets_match_squares() {
        let capacity = 97;
        let home = 40;
        let quadratic: Vec<usize> = ProbeSequence::new(home, capacity)
            .take(capacity / 2 + 1)
            .collect();
        for (c, slot) in quadratic.into_iter().enumerate() {
            assert_eq!(slot, (home + c * c) % capacity);
        }
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut sequence = ProbeSequence::new(0, 2);
        while sequence.next().is_some() {}
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.size_hint(), (0, Some(0)));
    }
}
