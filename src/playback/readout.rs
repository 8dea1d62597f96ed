use crate::Value;

/// What the display surface shows after a tick.
/// `index` is 1-based; zero means no sample has been processed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readout {
    pub index: usize,
    pub total: usize,
    pub truth: Option<Value>,
    pub predicted: Option<Value>,
}

impl Readout {
    pub fn idle(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }
    /// Signed error, predicted minus true.
    pub fn error(&self) -> Option<Value> {
        self.predicted.zip(self.truth).map(|(p, t)| p - t)
    }
}

impl Readout {
    /// The readout line, with the error column passed through `paint`.
    pub fn line<E: std::fmt::Display>(&self, paint: impl FnOnce(String) -> E) -> String {
        let show = |v: Option<Value>| v.map_or(String::from("-"), |v| format!("{:.4}", v));
        format!(
            "sample {}/{}  true {}  pred {}  err {}",
            self.index,
            self.total,
            show(self.truth),
            show(self.predicted),
            paint(self.error().map_or(String::from("-"), |e| format!("{:+.4}", e))),
        )
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line(|error| error))
    }
}

/// Running error statistics over processed samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    scored: usize,
    failed: usize,
    abs: Value,
    squares: Value,
}

impl Tally {
    pub fn record(&mut self, error: Value) {
        self.scored += 1;
        self.abs += error.abs();
        self.squares += error * error;
    }
    pub fn fail(&mut self) {
        self.failed += 1;
    }
    pub fn scored(&self) -> usize {
        self.scored
    }
    pub fn failed(&self) -> usize {
        self.failed
    }
    pub fn mae(&self) -> Option<Value> {
        (self.scored > 0).then(|| self.abs / self.scored as Value)
    }
    pub fn rmse(&self) -> Option<Value> {
        (self.scored > 0).then(|| (self.squares / self.scored as Value).sqrt())
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.mae(), self.rmse()) {
            (Some(mae), Some(rmse)) => write!(
                f,
                "{} scored, {} failed, MAE {:.4}, RMSE {:.4}",
                self.scored, self.failed, mae, rmse
            ),
            _ => write!(f, "{} scored, {} failed", self.scored, self.failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_readout_shows_zero() {
        let readout = Readout::idle(300);
        assert_eq!(readout.index, 0);
        assert_eq!(readout.error(), None);
        assert_eq!(readout.to_string(), "sample 0/300  true -  pred -  err -");
    }
    #[test]
    fn line_styles_only_the_error() {
        let readout = Readout {
            index: 2,
            total: 5,
            truth: Some(1.0),
            predicted: Some(2.5),
        };
        assert_eq!(
            readout.line(|e| format!("<{}>", e)),
            "sample 2/5  true 1.0000  pred 2.5000  err <+1.5000>"
        );
        assert_eq!(readout.line(|e| e), readout.to_string());
    }
    #[test]
    fn error_is_predicted_minus_true() {
        let readout = Readout {
            index: 1,
            total: 2,
            truth: Some(3.0),
            predicted: Some(2.5),
        };
        assert_eq!(readout.error(), Some(-0.5));
        assert!(readout.to_string().ends_with("err -0.5000"));
    }
    #[test]
    fn tally_statistics() {
        let mut tally = Tally::default();
        assert_eq!(tally.mae(), None);
        tally.record(3.0);
        tally.record(-4.0);
        tally.fail();
        assert_eq!(tally.mae(), Some(3.5));
        assert_eq!(tally.rmse(), Some(12.5f64.sqrt()));
        assert_eq!(tally.failed(), 1);
    }
}
