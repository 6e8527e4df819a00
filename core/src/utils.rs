use log::info;
use std::time::{Duration, Instant};

/// Log the duration of a named task.
pub struct Timer {
    task: String,
    start: Instant,
}

impl Timer {
    /// Log the start of a task and begin timing it.
    pub fn start(task: &str) -> Self {
        info!("{}...", task);
        Timer {
            task: task.to_owned(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log the time since the task started.
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "{} done in {}.{:03} seconds",
            self.task,
            elapsed.as_secs(),
            elapsed.subsec_millis()
        );
        elapsed
    }
}
