use crate::constants::*;
use crate::mode::CurlMode;
use crate::state::SpongeState;
use crate::Sponge;

/// Single-lane Curl-P sponge running on lane 0 of the batched state.
#[derive(Clone, Debug)]
pub struct Curl {
    state: SpongeState,
    mode: CurlMode,
}

impl Curl {
    pub fn new(mode: CurlMode) -> Curl {
        Curl {
            state: SpongeState::new(),
            mode,
        }
    }

    pub fn mode(&self) -> CurlMode {
        self.mode
    }
}

impl Default for Curl {
    fn default() -> Curl {
        Curl::new(CurlMode::CurlP81)
    }
}

impl Sponge for Curl {
    type Item = Trit;

    /// # Panics
    /// Panics if `trits` is not a multiple of `HASH_LENGTH` or if the sponge is already squeezing.
    fn absorb(&mut self, trits: &[Self::Item]) {
        assert_eq!(trits.len() % HASH_LENGTH, 0);
        self.state.absorb(&[trits], trits.len(), self.mode.rounds());
    }

    fn squeeze(&mut self, out: &mut [Self::Item]) {
        assert_eq!(out.len() % HASH_LENGTH, 0);
        let length = out.len();
        self.state.squeeze(&mut [out], length, self.mode.rounds());
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
