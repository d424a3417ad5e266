use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Sex-dependent constant of the Mifflin-St Jeor equation.
    pub fn bmr_offset(self) -> f64 {
        match self {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Sex::Female),
            "m" | "male" => Ok(Sex::Male),
            other => Err(format!("invalid sex: `{other}`, expected male or female")),
        }
    }
}

/// Demographic inputs of the calorie estimate, provided by an external
/// user-demographics collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserProfile {
    /// Age in months; the BMR formula divides by 12 itself.
    pub age_months: f64,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl UserProfile {
    /// Whole months elapsed between `date_of_birth` and `today`.
    pub fn age_months_at(date_of_birth: NaiveDate, today: NaiveDate) -> f64 {
        let years = today.year() - date_of_birth.year();
        let months = today.month() as i32 - date_of_birth.month() as i32;
        (years * 12 + months) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_in_months() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(UserProfile::age_months_at(dob, today), 420.0);
    }

    #[test]
    fn sex_from_str() {
        assert_eq!("male".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!("F".parse::<Sex>(), Ok(Sex::Female));
        assert!("other".parse::<Sex>().is_err());
    }
}
