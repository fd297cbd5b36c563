pub mod placement;
mod state;

pub use state::*;
