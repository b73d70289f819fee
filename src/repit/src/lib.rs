#[macro_use]
extern crate log;

mod events;
pub use events::{EventBus, LogEvent, LogEventKind};

mod repit;
pub use repit::RepIt;

pub mod helpers;

pub use repit_db::DatabaseHandler;
