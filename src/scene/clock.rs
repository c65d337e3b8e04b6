use std::time::Instant;

/// Measures wall-clock time between frames.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last: Option<Instant>,
    elapsed: f64,
}

impl Clock {
    /// Creates a clock that starts on the first call to [`get_delta`](Self::get_delta).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call; `0.0` on the first call.
    pub fn get_delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = self
            .last
            .map_or(0.0, |last| now.duration_since(last).as_secs_f64());
        self.last = Some(now);
        self.elapsed += delta;
        delta
    }

    /// Total seconds accumulated by [`get_delta`](Self::get_delta).
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_is_zero() {
        let mut clock = Clock::new();
        assert!(clock.get_delta().abs() < f64::EPSILON);
    }

    #[test]
    fn deltas_accumulate() {
        let mut clock = Clock::new();
        clock.get_delta();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let delta = clock.get_delta();
        assert!(delta >= 0.004);
        assert!((clock.elapsed() - delta).abs() < 1e-12);
    }
}
