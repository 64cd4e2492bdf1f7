use crate::bitplane::BitPlanes;
use crate::constants::*;
use crate::transform::transform;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpongeDirection {
    Absorbing,
    Squeezing,
}

/// Batched sponge state: the bit planes of all lanes and the current direction.
///
/// Cloning yields a deep copy that shares nothing with the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpongeState {
    planes: BitPlanes,
    direction: SpongeDirection,
}

impl SpongeState {
    pub fn new() -> SpongeState {
        SpongeState {
            planes: BitPlanes::zero(),
            direction: SpongeDirection::Absorbing,
        }
    }

    pub fn reset(&mut self) {
        self.planes.clear();
        self.direction = SpongeDirection::Absorbing;
    }

    pub fn direction(&self) -> SpongeDirection {
        self.direction
    }

    pub fn planes(&self) -> &BitPlanes {
        &self.planes
    }

    pub fn transform(&mut self, rounds: usize) {
        trace!(rounds, "transform");
        transform(&mut self.planes, rounds);
    }

    /// Absorbs `length` trits of every lane in `batch`, lane `i` taken from `batch[i]`.
    ///
    /// The caller guarantees that `batch` fits into a word, that `length` is a multiple of
    /// `HASH_LENGTH` and that every lane holds at least `length` trits.
    ///
    /// # Panics
    /// Panics if the sponge has already started squeezing.
    pub fn absorb<T: AsRef<[Trit]>>(&mut self, batch: &[T], length: usize, rounds: usize) {
        assert!(
            self.direction == SpongeDirection::Absorbing,
            "absorb after squeeze"
        );
        debug_assert!(batch.len() <= MAX_BATCH_SIZE);
        debug_assert_eq!(length % HASH_LENGTH, 0);

        for offset in (0..length).step_by(HASH_LENGTH) {
            for (lane, trits) in batch.iter().enumerate() {
                self.planes
                    .merge(lane, &trits.as_ref()[offset..offset + HASH_LENGTH]);
            }
            self.transform(rounds);
        }
    }

    /// Squeezes `length` trits into every lane of `out`, lane `i` written to `out[i]`.
    ///
    /// Only the first block after absorbing reuses the current state, every further block is
    /// preceded by a transform.
    pub fn squeeze<T: AsMut<[Trit]>>(&mut self, out: &mut [T], length: usize, rounds: usize) {
        debug_assert!(out.len() <= MAX_BATCH_SIZE);
        debug_assert_eq!(length % HASH_LENGTH, 0);

        for offset in (0..length).step_by(HASH_LENGTH) {
            if self.direction == SpongeDirection::Squeezing {
                self.transform(rounds);
            }
            self.direction = SpongeDirection::Squeezing;
            for (lane, trits) in out.iter_mut().enumerate() {
                self.planes
                    .extract(lane, &mut trits.as_mut()[offset..offset + HASH_LENGTH]);
            }
        }
    }
}

impl Default for SpongeState {
    fn default() -> SpongeState {
        SpongeState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(seed: usize) -> Vec<Trit> {
        (0..HASH_LENGTH)
            .map(|i| ((i * 7 + seed) % 3) as Trit - 1)
            .collect()
    }

    #[test]
    fn new_state_is_zeroed() {
        let state = SpongeState::new();
        assert_eq!(state.direction(), SpongeDirection::Absorbing);
        assert_eq!(state.planes(), &BitPlanes::zero());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = SpongeState::new();
        state.absorb(&[block(1), block(2)], HASH_LENGTH, NUM_ROUNDS);
        let mut out = [vec![0; HASH_LENGTH]];
        state.squeeze(&mut out, HASH_LENGTH, NUM_ROUNDS);
        assert_eq!(state.direction(), SpongeDirection::Squeezing);

        state.reset();
        assert_eq!(state, SpongeState::new());
    }

    #[test]
    fn clone_is_independent() {
        let mut state = SpongeState::new();
        state.absorb(&[block(3)], HASH_LENGTH, NUM_ROUNDS);
        let snapshot = state.clone();
        let mut fork = state.clone();

        fork.absorb(&[block(4)], HASH_LENGTH, NUM_ROUNDS);
        assert_ne!(fork, snapshot);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn first_squeeze_reads_current_state() {
        let mut state = SpongeState::new();
        state.absorb(&[block(5)], HASH_LENGTH, NUM_ROUNDS);
        let mut expected = vec![0; HASH_LENGTH];
        state.planes().extract(0, &mut expected);

        let mut out = [vec![0; 2 * HASH_LENGTH]];
        state.squeeze(&mut out, 2 * HASH_LENGTH, NUM_ROUNDS);
        assert_eq!(out[0][..HASH_LENGTH], expected[..]);
        assert_ne!(out[0][HASH_LENGTH..], expected[..]);
    }

    #[test]
    #[should_panic(expected = "absorb after squeeze")]
    fn absorb_after_squeeze_panics() {
        let mut state = SpongeState::new();
        let mut out = [vec![0; HASH_LENGTH]];
        state.squeeze(&mut out, HASH_LENGTH, NUM_ROUNDS);
        state.absorb(&[block(6)], HASH_LENGTH, NUM_ROUNDS);
    }
}
