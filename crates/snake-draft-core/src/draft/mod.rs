// Snake draft engine: pick order, roles, rosters, and the state machine that
// applies and reverts picks.

pub mod error;
pub mod order;
pub mod pick;
pub mod roster;
pub mod select;
pub mod state;

pub use error::DraftError;
pub use pick::{PickRecord, PickSlot, Role};
pub use roster::Team;
pub use state::{DraftSettings, DraftSnapshot, DraftState};
