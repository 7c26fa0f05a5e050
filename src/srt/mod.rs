//! Разбор SRT и модель дорожки субтитров

pub mod models;
pub mod parser;

pub use models::{Subtitle, SubtitleTrack};
pub use parser::SrtParser;
