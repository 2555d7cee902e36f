pub mod profile;
pub mod row;
pub mod state;

pub use profile::{Profile, ProfileConfig};
pub use row::{Row, Snapshot};
pub use state::State;
