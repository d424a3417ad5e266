pub(crate) mod statistics;
pub use statistics::{
    SessionStatistics, SleepPhases, average_duration_hours, calculate_session_statistics,
    calories_burned, effective_bedtime, effective_wake_time,
};

pub(crate) mod cycles;
pub use cycles::completed_cycles;

pub(crate) mod chronotype;
pub use chronotype::{ChronotypeEstimate, estimate_chronotype};

pub(crate) mod regularity;
pub use regularity::{
    DEFAULT_REFERENCE_HOUR, RegularityMetrics, sleep_regularity, time_to_minutes,
};

pub mod helpers;
