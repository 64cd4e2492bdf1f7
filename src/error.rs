use crate::constants::HASH_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BctError {
    #[error("Batch size must be between 1 and {max} (got {size})")]
    InvalidBatchSize { size: usize, max: usize },
    #[error("Absorb length {length} is not a multiple of {}", HASH_LENGTH)]
    InvalidAbsorbLength { length: usize },
    #[error("Squeeze length {length} is not a multiple of {}", HASH_LENGTH)]
    InvalidSqueezeLength { length: usize },
    #[error("Lane {lane} holds {available} trits but {required} are absorbed")]
    InsufficientTrits {
        lane: usize,
        available: usize,
        required: usize,
    },
}
