pub mod cli;
pub mod config;
mod db;
pub mod distance;
pub mod error;
pub mod record;
pub mod report;
pub mod selector;
pub mod source;
pub mod utils;

pub use config::Opts;
pub use distance::{Point, distance};
pub use record::{Record, ScoredRecord};
pub use selector::Selector;
