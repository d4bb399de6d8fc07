//! Wall-clock timing of kernel repetitions

use std::time::Instant;

/// Wall-clock stopwatch recording every lap
///
/// ```
/// use lazalg_mark::WcTimer;
///
/// let mut timer = WcTimer::new();
/// timer.start();
/// timer.end();
/// assert_eq!(timer.laps(), 1);
/// assert!(timer.min() <= timer.average());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WcTimer {
    started: Option<Instant>,
    laps: Vec<f64>,
}

impl WcTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop the running lap; does nothing if no lap was started
    pub fn end(&mut self) {
        if let Some(started) = self.started.take() {
            self.laps.push(started.elapsed().as_secs_f64());
        }
    }

    pub fn laps(&self) -> usize {
        self.laps.len()
    }

    /// Duration of the last lap in seconds
    pub fn last(&self) -> f64 {
        self.laps.last().copied().unwrap_or(0.0)
    }

    pub fn min(&self) -> f64 {
        self.laps.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.laps.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.laps.iter().sum()
    }

    pub fn average(&self) -> f64 {
        if self.laps.is_empty() {
            0.0
        } else {
            self.total() / self.laps.len() as f64
        }
    }

    pub fn reset(&mut self) {
        self.started = None;
        self.laps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_timer() {
        let timer = WcTimer::new();
        assert_eq!(timer.laps(), 0);
        assert_eq!(timer.min(), 0.0);
        assert_eq!(timer.average(), 0.0);
    }

    #[test]
    fn test_statistics() {
        let mut timer = WcTimer::new();
        for _ in 0..3 {
            timer.start();
            std::hint::black_box((0..1000).sum::<u64>());
            timer.end();
        }
        timer.end();
        assert_eq!(timer.laps(), 3);
        assert!(timer.min() <= timer.average());
        assert!(timer.average() <= timer.max());
        assert!((timer.total() - 3.0 * timer.average()).abs() < 1e-12);
        timer.reset();
        assert_eq!(timer.laps(), 0);
    }
}
