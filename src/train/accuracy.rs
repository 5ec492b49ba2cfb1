/// Running percent-correct over fixed-size groups of samples.
///
/// Each raw prediction is thresholded at 0.5 and compared to the label.
/// When a group fills up, its rounded percentage is recorded and the
/// counters reset; a trailing partial group is never reported.
#[derive(Debug, Clone)]
pub struct AccuracyTracker {
    group_size: usize,
    seen: usize,
    correct: usize,
    groups: Vec<f64>,
}

impl AccuracyTracker {
    pub fn new(group_size: usize) -> AccuracyTracker {
        AccuracyTracker {
            group_size,
            seen: 0,
            correct: 0,
            groups: Vec::new(),
        }
    }

    /// Records one prediction. Returns the group's percentage when this
    /// sample completes a group, `None` otherwise.
    pub fn record(&mut self, prediction: f64, label: f64) -> Option<f64> {
        if prediction.round() == label {
            self.correct += 1;
        }
        self.seen += 1;

        if self.seen == self.group_size {
            let percent = (self.correct as f64 / self.group_size as f64 * 100.0).round();
            self.groups.push(percent);
            self.seen = 0;
            self.correct = 0;
            return Some(percent);
        }
        None
    }

    pub fn completed_groups(&self) -> &[f64] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<f64> {
        self.groups
    }
}
