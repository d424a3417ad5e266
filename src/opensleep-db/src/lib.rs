mod db;
pub use db::DatabaseHandler;

mod import;
pub use import::ImportOutcome;

mod progress;
pub use progress::ProgressBarSink;

mod queries;
