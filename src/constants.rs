pub type Trit = i8;
/// Machine word holding one bit per lane.
pub type Word = usize;
pub const HASH_LENGTH: usize = 243;
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;
pub const NUM_ROUNDS: usize = 81;
/// Number of lanes that fit into a single `Word`.
pub const MAX_BATCH_SIZE: usize = Word::BITS as usize;

/// State positions read by the round function, `INDICES[i] = 364 * i mod 729`.
pub static INDICES: [usize; STATE_LENGTH + 1] = indices();

const fn indices() -> [usize; STATE_LENGTH + 1] {
    let mut table = [0; STATE_LENGTH + 1];
    let mut i = 1;
    while i < STATE_LENGTH + 1 {
        let prev = table[i - 1];
        table[i] = if prev < 365 { prev + 364 } else { prev - 365 };
        i += 1;
    }
    table
}
