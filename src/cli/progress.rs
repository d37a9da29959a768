// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phase progress on stderr.
//!
//! With the `progress` feature each running phase shows a spinner, replaced
//! by a `✓ phase  time` line when it finishes. indicatif hides the spinner
//! by itself when stderr is not a terminal; the finished lines are always
//! printed unless `--quiet` is given. A failed phase only clears its spinner.

use std::time::Duration;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
use repmeasure::{Observer, Phase};

use super::display;

pub struct Progress {
    quiet: bool,
    #[cfg(feature = "progress")]
    spinner: Option<ProgressBar>,
}

impl Progress {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            #[cfg(feature = "progress")]
            spinner: None,
        }
    }
}

#[cfg(feature = "progress")]
fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("  {spinner:.cyan} {prefix:<22}{elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}

impl Observer for Progress {
    fn phase_started(&mut self, phase: Phase) {
        if self.quiet {
            return;
        }
        #[cfg(feature = "progress")]
        {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(spinner_style());
            spinner.set_prefix(phase.label());
            spinner.enable_steady_tick(Duration::from_millis(80));
            self.spinner = Some(spinner);
        }
        #[cfg(not(feature = "progress"))]
        let _ = phase;
    }

    fn phase_finished(&mut self, phase: Phase, elapsed: Duration) {
        if self.quiet {
            return;
        }
        #[cfg(feature = "progress")]
        {
            if let Some(spinner) = self.spinner.take() {
                spinner.finish_and_clear();
            }
        }
        display::phase_done(phase.label(), elapsed);
    }

    fn phase_failed(&mut self, _phase: Phase) {
        // Clear the line before main prints the error
        #[cfg(feature = "progress")]
        {
            if let Some(spinner) = self.spinner.take() {
                spinner.finish_and_clear();
            }
        }
    }
}
