use std::fmt;
use std::str::FromStr;

/// Circadian chronotype derived from the corrected mid-sleep point on
/// free days (MSF_sc).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chronotype {
    /// Early type, corrected midpoint before 03:00.
    Skylark,
    /// Intermediate type, corrected midpoint in [03:00, 05:00).
    Pigeon,
    /// Late type, corrected midpoint after 05:00.
    Owl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Ru,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(format!("unsupported language: `{other}`")),
        }
    }
}

impl Chronotype {
    pub fn name(self) -> &'static str {
        match self {
            Chronotype::Skylark => "skylark",
            Chronotype::Pigeon => "pigeon",
            Chronotype::Owl => "owl",
        }
    }

    pub fn description(self, language: Language) -> &'static str {
        match (self, language) {
            (Chronotype::Skylark, Language::En) => {
                "Early chronotype: you fall asleep and wake up early, with peak \
                 alertness in the morning hours."
            }
            (Chronotype::Pigeon, Language::En) => {
                "Intermediate chronotype: your sleep midpoint sits in the typical \
                 range and your alertness is spread evenly across the day."
            }
            (Chronotype::Owl, Language::En) => {
                "Late chronotype: you fall asleep and wake up late, with peak \
                 alertness in the evening hours."
            }
            (Chronotype::Skylark, Language::Ru) => {
                "Ранний хронотип: вы засыпаете и просыпаетесь рано, пик активности \
                 приходится на утренние часы."
            }
            (Chronotype::Pigeon, Language::Ru) => {
                "Промежуточный хронотип: середина сна находится в типичном \
                 диапазоне, активность распределена равномерно в течение дня."
            }
            (Chronotype::Owl, Language::Ru) => {
                "Поздний хронотип: вы засыпаете и просыпаетесь поздно, пик \
                 активности приходится на вечерние часы."
            }
        }
    }
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
