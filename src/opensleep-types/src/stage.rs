use std::fmt;

/// Sleep stage of one segment, using the numeric codes the device
/// writes into the export (`items[].state`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepStage {
    Light,
    Deep,
    Rem,
    Awake,
}

impl SleepStage {
    pub fn code(self) -> i16 {
        match self {
            SleepStage::Light => 2,
            SleepStage::Deep => 3,
            SleepStage::Rem => 4,
            SleepStage::Awake => 5,
        }
    }

    /// Codes outside the documented set have no representation and
    /// are dropped by the parser.
    pub fn from_code(code: i64) -> Option<SleepStage> {
        match code {
            2 => Some(SleepStage::Light),
            3 => Some(SleepStage::Deep),
            4 => Some(SleepStage::Rem),
            5 => Some(SleepStage::Awake),
            _ => None,
        }
    }

    /// Stages that count towards a sleep cycle.
    pub fn is_asleep(self) -> bool {
        !matches!(self, SleepStage::Awake)
    }
}

impl fmt::Display for SleepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SleepStage::Light => "light",
            SleepStage::Deep => "deep",
            SleepStage::Rem => "rem",
            SleepStage::Awake => "awake",
        };
        f.write_str(name)
    }
}
