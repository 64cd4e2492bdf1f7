use crate::constants::NUM_ROUNDS;

/// Curl-P variant, selected by the number of rounds per transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurlMode {
    CurlP27,
    CurlP81,
}

impl CurlMode {
    pub fn rounds(self) -> usize {
        match self {
            CurlMode::CurlP27 => 27,
            CurlMode::CurlP81 => NUM_ROUNDS,
        }
    }
}

impl Default for CurlMode {
    fn default() -> CurlMode {
        CurlMode::CurlP81
    }
}
