pub mod view;

pub use view::{ListEntry, SubtitleList};
