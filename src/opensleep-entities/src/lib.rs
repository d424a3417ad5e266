pub mod night_heart_rate;
pub mod sleep_segments;
pub mod sleep_sessions;
pub mod sleep_statistics;
