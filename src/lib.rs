//! Batched Curl-P.
//!
//! Up to `MAX_BATCH_SIZE` trit sequences are hashed at once by storing the trits of each sequence
//! in one bit of two machine words per state cell, so that a single transform advances every
//! lane. See [`BctCurl`] for the batched sponge and [`Curl`] for a single-lane [`Sponge`].

#[macro_use]
extern crate crunchy;

pub mod bct;
pub mod bitplane;
pub mod constants;
pub mod curl;
pub mod error;
pub mod mode;
pub mod state;
pub mod transform;

pub use bct::{digest, Absorbing, BctCurl, Squeezing};
pub use constants::{Trit, HASH_LENGTH, MAX_BATCH_SIZE, NUM_ROUNDS, STATE_LENGTH};
pub use curl::Curl;
pub use error::BctError;
pub use mode::CurlMode;
pub use state::{SpongeDirection, SpongeState};

/// A sponge absorbing and squeezing whole blocks of `Item`s.
pub trait Sponge {
    type Item;

    fn absorb(&mut self, input: &[Self::Item]);
    fn squeeze(&mut self, out: &mut [Self::Item]);
    fn reset(&mut self);
}
