pub mod engine;

pub use engine::{SyncCallback, SyncEngine, SyncEvent, SyncState};
