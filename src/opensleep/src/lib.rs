#[macro_use]
extern crate log;

mod opensleep;
pub use opensleep::{OpenSleep, SleepReport};

pub mod helpers;

pub use opensleep_db::DatabaseHandler;
