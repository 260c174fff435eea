mod root;
mod state;

pub(crate) use state::{ListingState, QueryState, Route};

pub use root::App;
