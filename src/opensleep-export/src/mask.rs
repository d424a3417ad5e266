use chrono::NaiveDateTime;

/// Indices of `times` falling inside one session's night window.
///
/// For `start < end` this is the half-open interval `[start, end)`.
/// For `start >= end` the window crosses midnight and the test wraps:
/// a sample matches when `time >= start` or `time < end`. Most sleep
/// windows cross midnight, so the wrap branch is the common case.
pub fn night_window(times: &[NaiveDateTime], start: NaiveDateTime, end: NaiveDateTime) -> Vec<usize> {
    times
        .iter()
        .enumerate()
        .filter(|&(_, &time)| {
            if start < end {
                time >= start && time < end
            } else {
                time >= start || time < end
            }
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn half_open_interval() {
        let times = vec![at(21, 59), at(22, 0), at(23, 30), at(2, 0)];
        let indices = night_window(&times, at(22, 0), at(2, 0));
        // 22:00 included, 02:00 (the end) excluded, 21:59 before start.
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn wraparound_window() {
        // start 23:00 > end 07:00 on the same date: the window wraps.
        let times = vec![at(23, 30), at(3, 0), at(6, 59), at(7, 0), at(12, 0), at(22, 59)];
        let indices = night_window(&times, at(23, 0), at(7, 0));
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn wraparound_excludes_daytime_gap() {
        // Everything in [end, start) is outside the wrapped window.
        let times = vec![at(7, 0), at(10, 0), at(15, 0), at(22, 59)];
        let indices = night_window(&times, at(23, 0), at(7, 0));
        assert!(indices.is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(night_window(&[], at(22, 0), at(6, 0)).is_empty());
    }
}
