#![allow(dead_code)]

use bct::constants::INDICES;
use bct::{CurlMode, Trit, HASH_LENGTH, STATE_LENGTH};

const TRUTH_TABLE: [Trit; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0];
const TRYTE_ALPHABET: &[u8] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Trit-at-a-time Curl-P, used as the reference for the batched sponge.
pub struct ScalarCurl {
    state: [Trit; STATE_LENGTH],
    rounds: usize,
}

impl ScalarCurl {
    pub fn new(mode: CurlMode) -> ScalarCurl {
        ScalarCurl {
            state: [0; STATE_LENGTH],
            rounds: mode.rounds(),
        }
    }

    pub fn absorb(&mut self, trits: &[Trit]) {
        for block in trits.chunks(HASH_LENGTH) {
            self.state[..HASH_LENGTH].copy_from_slice(block);
            self.transform();
        }
    }

    pub fn squeeze(&mut self, length: usize) -> Vec<Trit> {
        let mut out = Vec::with_capacity(length);
        for _ in 0..length / HASH_LENGTH {
            out.extend_from_slice(&self.state[..HASH_LENGTH]);
            self.transform();
        }
        out
    }

    fn transform(&mut self) {
        for _ in 0..self.rounds {
            let scratch = self.state;
            for (i, t) in self.state.iter_mut().enumerate() {
                let a = scratch[INDICES[i]];
                let b = scratch[INDICES[i + 1]];
                *t = TRUTH_TABLE[(a + (b << 2) + 5) as usize];
            }
        }
    }
}

pub fn scalar_hash(mode: CurlMode, input: &[Trit], length: usize) -> Vec<Trit> {
    let mut curl = ScalarCurl::new(mode);
    curl.absorb(input);
    curl.squeeze(length)
}

pub fn trits_from_trytes(trytes: &str) -> Vec<Trit> {
    let mut trits = Vec::with_capacity(3 * trytes.len());
    for c in trytes.bytes() {
        let index = TRYTE_ALPHABET
            .iter()
            .position(|a| *a == c)
            .expect("invalid tryte") as Trit;
        let mut value = if index > 13 { index - 27 } else { index };
        for _ in 0..3 {
            let trit = (value + 1).rem_euclid(3) - 1;
            trits.push(trit);
            value = (value - trit) / 3;
        }
    }
    trits
}

pub fn trytes_from_trits(trits: &[Trit]) -> String {
    trits
        .chunks(3)
        .map(|t| {
            let value = t.iter().rev().fold(0i32, |acc, t| 3 * acc + i32::from(*t));
            TRYTE_ALPHABET[value.rem_euclid(27) as usize] as char
        })
        .collect()
}
