pub mod error;
pub mod problem;
pub mod search;
pub mod state;

pub use error::{Error, Result};
pub use problem::{Clause, Problem};
pub use search::{SearchResult, SearchState};
pub use state::Assignment;
