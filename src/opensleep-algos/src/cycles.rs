use opensleep_types::{SleepSegment, SleepStage};

/// A cycle must run at least this long to count as completed.
const MIN_CYCLE_MINUTES: f64 = 90.0;

/// Number of completed sleep cycles in one session.
///
/// Segments are walked in chronological order, accumulating asleep
/// time (light/deep/REM) into the current cycle. An awake segment or
/// the end of the sequence closes the cycle: it counts when it ran for
/// at least 90 minutes and contained both a deep and a REM stage. The
/// running state resets on every close, qualified or not. A trailing
/// run that never hits an awake boundary is still closed and
/// evaluated, not dropped.
pub fn completed_cycles(segments: &[SleepSegment]) -> u32 {
    let mut ordered: Vec<&SleepSegment> = segments.iter().collect();
    ordered.sort_by_key(|segment| segment.start_time);

    let mut cycles = 0;
    let mut current_minutes = 0.0;
    let mut saw_deep = false;
    let mut saw_rem = false;

    for (i, segment) in ordered.iter().enumerate() {
        if segment.stage.is_asleep() {
            current_minutes += segment.duration_minutes();
            match segment.stage {
                SleepStage::Deep => saw_deep = true,
                SleepStage::Rem => saw_rem = true,
                _ => {}
            }
        }

        if segment.stage == SleepStage::Awake || i == ordered.len() - 1 {
            if current_minutes >= MIN_CYCLE_MINUTES && saw_deep && saw_rem {
                cycles += 1;
            }
            current_minutes = 0.0;
            saw_deep = false;
            saw_rem = false;
        }
    }

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn segments(stages: &[(SleepStage, i64)]) -> Vec<SleepSegment> {
        let mut start: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();

        stages
            .iter()
            .map(|&(stage, minutes)| {
                let end = start + TimeDelta::minutes(minutes);
                let segment = SleepSegment {
                    start_time: start,
                    end_time: end,
                    stage,
                };
                start = end;
                segment
            })
            .collect()
    }

    #[test]
    fn empty_sequence_has_no_cycles() {
        assert_eq!(completed_cycles(&[]), 0);
    }

    #[test]
    fn trailing_run_closes_at_end_of_sequence() {
        let segs = segments(&[
            (SleepStage::Light, 30),
            (SleepStage::Deep, 60),
            (SleepStage::Rem, 20),
        ]);
        assert_eq!(completed_cycles(&segs), 1);
    }

    #[test]
    fn no_deep_or_rem_never_counts() {
        let segs = segments(&[(SleepStage::Light, 200), (SleepStage::Light, 200)]);
        assert_eq!(completed_cycles(&segs), 0);

        let segs = segments(&[(SleepStage::Deep, 200)]);
        assert_eq!(completed_cycles(&segs), 0);

        let segs = segments(&[(SleepStage::Rem, 200)]);
        assert_eq!(completed_cycles(&segs), 0);
    }

    #[test]
    fn short_cycle_does_not_count() {
        let segs = segments(&[
            (SleepStage::Deep, 40),
            (SleepStage::Rem, 30),
            (SleepStage::Awake, 5),
        ]);
        assert_eq!(completed_cycles(&segs), 0);
    }

    #[test]
    fn awake_boundary_separates_cycles() {
        let segs = segments(&[
            (SleepStage::Light, 40),
            (SleepStage::Deep, 50),
            (SleepStage::Rem, 20),
            (SleepStage::Awake, 10),
            (SleepStage::Light, 60),
            (SleepStage::Deep, 30),
            (SleepStage::Rem, 15),
        ]);
        assert_eq!(completed_cycles(&segs), 2);
    }

    #[test]
    fn awake_resets_even_an_unqualified_cycle() {
        // 80 asleep minutes before the awake boundary do not carry
        // over into the next cycle.
        let segs = segments(&[
            (SleepStage::Deep, 80),
            (SleepStage::Awake, 5),
            (SleepStage::Rem, 85),
        ]);
        assert_eq!(completed_cycles(&segs), 0);
    }

    #[test]
    fn unsorted_input_is_ordered_first() {
        let mut segs = segments(&[
            (SleepStage::Light, 30),
            (SleepStage::Deep, 60),
            (SleepStage::Rem, 20),
        ]);
        segs.reverse();
        assert_eq!(completed_cycles(&segs), 1);
    }
}
