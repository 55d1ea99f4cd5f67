//! Boot sequence
//!
//! Plays the boot script one line at a time, then hands over to the HUD.
//! All timing is derived from the start instant, so the sequence is a pure
//! function of `now`. Skipping is the caller's business: it drops the
//! sequence.

use qpos_core::ShellConfig;
use std::time::{Duration, Instant};

pub const BOOT_SCRIPT: &[&str] = &[
    "[BOOT] Initializing quantum portfolio kernel...",
    "[OK] Video driver: NEON-MATRIX v4.2",
    "[OK] Input devices: KEYBOARD / MOUSE / GAMEPAD",
    "[OK] Network interface: DEV-NODE-01",
    "[MOUNT] Loading personal modules: about, projects, skills, experience, contact",
    "[SCAN] Calibrating UI sensors & typography engine",
    "[OK] AI co‑processor online",
    "[DONE] Secure channel established",
    "SYSTEM ONLINE — PRESS ANY KEY TO ENTER HUD",
];

/// Extra time budgeted per line on top of the print interval before auto-continue
const LINE_SETTLE: Duration = Duration::from_millis(30);

#[derive(Debug, Clone)]
pub struct BootSequence {
    started: Instant,
    line_interval: Duration,
    hold: Duration,
}

impl BootSequence {
    pub fn new(started: Instant, line_interval: Duration, hold: Duration) -> Self {
        Self {
            started,
            line_interval,
            hold,
        }
    }

    pub fn from_config(config: &ShellConfig, started: Instant) -> Self {
        Self::new(started, config.boot_line(), config.boot_hold())
    }

    /// Number of script lines printed so far
    pub fn printed(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let interval = self.line_interval.as_millis().max(1);
        let lines = elapsed.as_millis() / interval;
        usize::try_from(lines)
            .unwrap_or(usize::MAX)
            .min(BOOT_SCRIPT.len())
    }

    pub fn visible_lines(&self, now: Instant) -> &'static [&'static str] {
        &BOOT_SCRIPT[..self.printed(now)]
    }

    pub fn progress_percent(&self, now: Instant) -> u16 {
        let printed = self.printed(now) as f64;
        ((printed / BOOT_SCRIPT.len() as f64) * 100.0).round().min(100.0) as u16
    }

    /// When the HUD takes over without a key press
    pub fn finishes_at(&self) -> Instant {
        let per_line = self.line_interval + LINE_SETTLE;
        self.started + per_line * BOOT_SCRIPT.len() as u32 + self.hold
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.finishes_at()
    }
}
