#[macro_use]
extern crate serde;

mod stage;
pub use stage::SleepStage;

mod session;
pub use session::{HeartRateSample, SleepSegment, SleepSession};

mod profile;
pub use profile::{Sex, UserProfile};

mod chronotype;
pub use chronotype::{Chronotype, Language};

mod progress;
pub use progress::{NoProgress, ProgressSink};
