//! Tests for progress fractions and sinks

#[cfg(test)]
mod tests {
    use imagecollage::io::progress::{NoProgress, Progress, ProgressManager, ProgressSink};

    // Tests fractions from counts, clamped to complete
    #[test]
    fn test_from_counts() {
        let progress = Progress::from_counts(1, 4, 3, 6);
        assert!((progress.outer - 0.25).abs() < f64::EPSILON);
        assert!((progress.inner - 0.5).abs() < f64::EPSILON);

        let over = Progress::from_counts(9, 4, 7, 6);
        assert!((over.outer - 1.0).abs() < f64::EPSILON);
        assert!((over.inner - 1.0).abs() < f64::EPSILON);
    }

    // Tests zero totals count as complete
    #[test]
    fn test_zero_totals() {
        let progress = Progress::from_counts(0, 0, 0, 0);

        assert!((progress.outer - 1.0).abs() < f64::EPSILON);
        assert!((progress.inner - 1.0).abs() < f64::EPSILON);
    }

    // Tests closures act as sinks
    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |p: Progress| seen.push(p.outer);
            let sink: &mut dyn ProgressSink = &mut sink;
            sink.report(Progress::from_counts(1, 2, 0, 1));
            sink.report(Progress::from_counts(2, 2, 1, 1));
        }

        assert_eq!(seen, vec![0.5, 1.0]);
    }

    // Tests the silent sink accepts reports
    #[test]
    fn test_no_progress() {
        let mut sink = NoProgress;
        sink.report(Progress::default());
    }

    // Tests bar positions follow reported fractions
    #[test]
    fn test_progress_manager_positions() {
        let mut manager = ProgressManager::new();
        assert_eq!(manager.outer_position(), 0);

        manager.report(Progress::from_counts(1, 4, 1, 2));
        assert_eq!(manager.outer_position(), 250);
        assert_eq!(manager.inner_position(), 500);

        manager.report(Progress {
            outer: 3.0,
            inner: -1.0,
        });
        assert_eq!(manager.outer_position(), 1000);
        assert_eq!(manager.inner_position(), 0);

        manager.finish();
    }
}
