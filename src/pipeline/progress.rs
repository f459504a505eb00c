// file: src/pipeline/progress.rs
// description: stage progress reporting for a comparison run
// reference: uses indicatif spinners and tracks stage timings

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// Stages a CLI comparison moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareStage {
    Reading,
    Extracting,
    Comparing,
    Saving,
}

impl CompareStage {
    pub fn label(&self) -> &'static str {
        match self {
            CompareStage::Reading => "Reading documents",
            CompareStage::Extracting => "Extracting text",
            CompareStage::Comparing => "Comparing documents",
            CompareStage::Saving => "Saving results",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompareStats {
    pub stages_completed: usize,
    pub bytes_read: u64,
    pub duration: Duration,
}

impl CompareStats {
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.bytes_read as f64 / secs
    }
}

pub struct CompareProgress {
    spinner: ProgressBar,
    current: Option<CompareStage>,
    stages_completed: usize,
    bytes_read: u64,
    start_time: Instant,
}

impl CompareProgress {
    pub fn new(colored: bool) -> Self {
        Self::with_spinner(create_spinner(colored))
    }

    /// Progress that tracks stages without drawing anything.
    pub fn hidden() -> Self {
        Self::with_spinner(ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()))
    }

    fn with_spinner(spinner: ProgressBar) -> Self {
        Self {
            spinner,
            current: None,
            stages_completed: 0,
            bytes_read: 0,
            start_time: Instant::now(),
        }
    }

    pub fn stage(&mut self, stage: CompareStage) {
        if self.current.replace(stage).is_some() {
            self.stages_completed += 1;
        }
        self.spinner.set_message(stage.label());
    }

    pub fn current(&self) -> Option<CompareStage> {
        self.current
    }

    pub fn add_bytes_read(&mut self, bytes: u64) {
        self.bytes_read += bytes;
    }

    pub fn finish(&mut self) {
        if self.current.take().is_some() {
            self.stages_completed += 1;
        }
        self.spinner.finish_and_clear();
    }

    pub fn fail(&mut self, message: &str) {
        self.current = None;
        self.spinner
            .abandon_with_message(format!("{} {}", "failed:".red(), message));
    }

    pub fn get_stats(&self) -> CompareStats {
        CompareStats {
            stages_completed: self.stages_completed,
            bytes_read: self.bytes_read,
            duration: self.start_time.elapsed(),
        }
    }
}

impl Drop for CompareProgress {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

fn create_spinner(colored: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] {msg}"
    } else {
        "{spinner} [{elapsed_precise}] {msg}"
    };

    let style = ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
