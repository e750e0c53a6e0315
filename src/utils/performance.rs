//! Timing helpers
//!
//! Uses `window.performance` when running in a browser; outside a browser
//! no clock is available and timings are skipped.

/// Milliseconds from `performance.now()`, if a window exists
pub fn now_ms() -> Option<f64> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}

/// Measures the duration of a single operation
pub struct RenderTimer {
    operation: &'static str,
    started: Option<f64>,
}

impl RenderTimer {
    pub fn start(operation: &'static str) -> Self {
        Self {
            operation,
            started: now_ms(),
        }
    }

    /// Elapsed milliseconds, `None` without a clock
    pub fn elapsed_ms(&self) -> Option<f64> {
        let started = self.started?;
        now_ms().map(|now| now - started)
    }

    /// Log the elapsed time at debug level
    pub fn finish(self) {
        if let Some(elapsed) = self.elapsed_ms() {
            log::debug!("{} took {:.2}ms", self.operation, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_without_clock() {
        let timer = RenderTimer::start("render");
        if !cfg!(target_arch = "wasm32") {
            assert_eq!(timer.elapsed_ms(), None);
        }
        timer.finish();
    }
}
