//! Bit-plane encoding of batched trits.
//!
//! Every state cell is a pair of words `(p, n)`; bit `lane` of the pair holds the trit of that
//! lane: `1` sets the bit in `p`, `-1` sets it in `n`, and `0` leaves both clear.

use crate::constants::*;

/// The `p` and `n` planes of a whole sponge state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitPlanes {
    pub p: [Word; STATE_LENGTH],
    pub n: [Word; STATE_LENGTH],
}

impl BitPlanes {
    pub fn zero() -> BitPlanes {
        BitPlanes {
            p: [0; STATE_LENGTH],
            n: [0; STATE_LENGTH],
        }
    }

    pub fn clear(&mut self) {
        self.p = [0; STATE_LENGTH];
        self.n = [0; STATE_LENGTH];
    }

    /// Writes `trits` of a single lane into the leading cells.
    pub fn merge(&mut self, lane: usize, trits: &[Trit]) {
        for ((p, n), t) in self.p.iter_mut().zip(self.n.iter_mut()).zip(trits) {
            encode(p, n, lane, *t);
        }
    }

    /// Reads the leading cells of a single lane into `trits`.
    pub fn extract(&self, lane: usize, trits: &mut [Trit]) {
        for ((p, n), t) in self.p.iter().zip(self.n.iter()).zip(trits.iter_mut()) {
            *t = decode(*p, *n, lane);
        }
    }
}

/// Stores `trit` as bit `lane` of the cell.
///
/// Values other than `1` and `-1` are stored as `0`.
#[inline]
pub fn encode(p: &mut Word, n: &mut Word, lane: usize, trit: Trit) {
    debug_assert!(lane < MAX_BATCH_SIZE);
    let mask = !(1 << lane);
    *p = (*p & mask) | (((trit == 1) as Word) << lane);
    *n = (*n & mask) | (((trit == -1) as Word) << lane);
}

#[inline]
pub fn decode(p: Word, n: Word, lane: usize) -> Trit {
    debug_assert!(lane < MAX_BATCH_SIZE);
    let pos = ((p >> lane) & 1) as Trit;
    let neg = ((n >> lane) & 1) as Trit;
    pos - (neg & (pos ^ 1))
}
