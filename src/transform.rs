//! The Curl-P round function evaluated on bit planes.
//!
//! A round reads the whole state and writes a fresh one, so the transform alternates between the
//! caller's planes and a scratch buffer. All lanes of a word are mixed by the same instructions.

use crate::bitplane::BitPlanes;
use crate::constants::*;

/// Curl S-box on the bit-plane encoding of `x` and `y`.
///
/// Agrees with the truth table `[1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0]` indexed by `x + 4 * y + 5`.
#[inline(always)]
pub fn sbox(x_p: Word, x_n: Word, y_p: Word, y_n: Word) -> (Word, Word) {
    let tmp = x_n ^ y_p;
    (tmp & !x_p, !tmp & !(x_p ^ y_n))
}

/// One round: writes the permuted and substituted `from` into `to`.
pub fn round(from: &BitPlanes, to: &mut BitPlanes) {
    let outputs = to.p.chunks_exact_mut(3).zip(to.n.chunks_exact_mut(3));
    for ((p_out, n_out), t) in outputs.zip(INDICES.windows(4).step_by(3)) {
        unroll! {
            for k in 0..3 {
                let (p, n) = sbox(from.p[t[k]], from.n[t[k]], from.p[t[k + 1]], from.n[t[k + 1]]);
                p_out[k] = p;
                n_out[k] = n;
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Buffer {
    State,
    Scratch,
}

/// Applies `rounds` rounds to `planes` in place.
pub fn transform(planes: &mut BitPlanes, rounds: usize) {
    let mut scratch = BitPlanes::zero();
    let mut input = Buffer::State;

    for _ in 0..rounds {
        input = match input {
            Buffer::State => {
                round(planes, &mut scratch);
                Buffer::Scratch
            }
            Buffer::Scratch => {
                round(&scratch, planes);
                Buffer::State
            }
        };
    }

    if input == Buffer::Scratch {
        *planes = scratch;
    }
}
