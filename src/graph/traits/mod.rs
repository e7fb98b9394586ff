mod locate;
mod search;

pub use locate::Locate;
pub use search::Search;
