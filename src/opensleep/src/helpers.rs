pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Hour-of-day fraction, e.g. `3.5` renders as `03:30`.
impl FormatHM for f64 {
    fn format_hm(&self) -> String {
        let total = ((self * 60.0).round() as i64).rem_euclid(1440);
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
