//! Batched Curl-P: up to `MAX_BATCH_SIZE` independent hashes computed by one sponge.
//!
//! The sponge direction is part of the type. `BctCurl<Absorbing>` accepts input and can be turned
//! into a `BctCurl<Squeezing>`, which only produces output, so absorbing after squeezing does not
//! compile.

use std::marker::PhantomData;

use tracing::{debug, instrument};

use crate::constants::*;
use crate::error::BctError;
use crate::mode::CurlMode;
use crate::state::{SpongeDirection, SpongeState};

/// Marker for a sponge that still accepts input.
#[derive(Clone, Copy, Debug)]
pub struct Absorbing;

/// Marker for a sponge that has been switched to output.
#[derive(Clone, Copy, Debug)]
pub struct Squeezing;

#[derive(Clone, Debug)]
pub struct BctCurl<D = Absorbing> {
    state: SpongeState,
    mode: CurlMode,
    _direction: PhantomData<D>,
}

impl BctCurl<Absorbing> {
    pub fn new(mode: CurlMode) -> BctCurl<Absorbing> {
        BctCurl {
            state: SpongeState::new(),
            mode,
            _direction: PhantomData,
        }
    }

    /// Absorbs the first `length` trits of every sequence in `batch`.
    ///
    /// `length` must be a multiple of `HASH_LENGTH`. Nothing is absorbed if any check fails.
    #[instrument(skip_all, level = "trace", fields(batch_size = batch.len(), length = length))]
    pub fn absorb<T: AsRef<[Trit]>>(
        &mut self,
        batch: &[T],
        length: usize,
    ) -> Result<(), BctError> {
        check_batch_size(batch.len())?;
        if length % HASH_LENGTH != 0 {
            debug!(length, "rejecting absorb length");
            return Err(BctError::InvalidAbsorbLength { length });
        }
        if let Some(lane) = batch.iter().position(|trits| trits.as_ref().len() < length) {
            debug!(lane, "rejecting short lane");
            return Err(BctError::InsufficientTrits {
                lane,
                available: batch[lane].as_ref().len(),
                required: length,
            });
        }

        self.state.absorb(batch, length, self.mode.rounds());
        Ok(())
    }

    /// Ends the absorbing phase. The first squeezed block is read from the current state.
    pub fn into_squeezing(self) -> BctCurl<Squeezing> {
        BctCurl {
            state: self.state,
            mode: self.mode,
            _direction: PhantomData,
        }
    }
}

impl BctCurl<Squeezing> {
    /// Squeezes `length` trits for each of the first `batch_size` lanes.
    #[instrument(skip_all, level = "trace", fields(batch_size = batch_size, length = length))]
    pub fn squeeze(
        &mut self,
        batch_size: usize,
        length: usize,
    ) -> Result<Vec<Vec<Trit>>, BctError> {
        check_batch_size(batch_size)?;
        if length % HASH_LENGTH != 0 {
            debug!(length, "rejecting squeeze length");
            return Err(BctError::InvalidSqueezeLength { length });
        }

        let mut out = vec![vec![0; length]; batch_size];
        self.state.squeeze(&mut out, length, self.mode.rounds());
        Ok(out)
    }
}

impl<D> BctCurl<D> {
    /// Returns a zeroed, absorbing sponge of the same mode.
    pub fn reset(mut self) -> BctCurl<Absorbing> {
        self.state.reset();
        BctCurl {
            state: self.state,
            mode: self.mode,
            _direction: PhantomData,
        }
    }

    pub fn mode(&self) -> CurlMode {
        self.mode
    }

    /// Runtime direction of the underlying sponge; it only turns to `Squeezing` once a block has
    /// been squeezed.
    pub fn direction(&self) -> SpongeDirection {
        self.state.direction()
    }
}

impl Default for BctCurl<Absorbing> {
    fn default() -> BctCurl<Absorbing> {
        BctCurl::new(CurlMode::CurlP81)
    }
}

fn check_batch_size(size: usize) -> Result<(), BctError> {
    if size < 1 || size > MAX_BATCH_SIZE {
        debug!(size, "rejecting batch size");
        return Err(BctError::InvalidBatchSize {
            size,
            max: MAX_BATCH_SIZE,
        });
    }
    Ok(())
}

/// Curl-P-81 digest of every sequence in `batch`, each absorbed up to `length` trits.
pub fn digest<T: AsRef<[Trit]>>(batch: &[T], length: usize) -> Result<Vec<Vec<Trit>>, BctError> {
    let mut curl = BctCurl::new(CurlMode::default());
    curl.absorb(batch, length)?;
    curl.into_squeezing().squeeze(batch.len(), HASH_LENGTH)
}
