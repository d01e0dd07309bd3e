mod tally;

pub use tally::{LIST_NOT_FOUND, TallyError};
