//! HUD telemetry
//!
//! Decorative system readouts: a CPU load history, an endless optimization
//! sweep and the overdrive switch. Values advance on `tick`, driven by the
//! event loop.

use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of CPU samples kept for the sparkline
pub const CPU_SAMPLES: usize = 10;

const CPU_INTERVAL: Duration = Duration::from_secs(2);
const SWEEP_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Telemetry {
    cpu: VecDeque<u64>,
    sweep: u16,
    pub overdrive: bool,
    last_cpu: Instant,
    last_sweep: Instant,
}

impl Telemetry {
    pub fn new(now: Instant) -> Self {
        Self {
            cpu: VecDeque::from(vec![45, 52, 48, 55, 50, 58, 52, 49, 53, 51]),
            sweep: 0,
            overdrive: false,
            last_cpu: now,
            last_sweep: now,
        }
    }

    /// Advance using the thread RNG
    pub fn tick(&mut self, now: Instant) {
        self.tick_with(now, &mut rand::thread_rng());
    }

    /// Advance all readouts to `now`
    pub fn tick_with<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        while now.saturating_duration_since(self.last_cpu) >= CPU_INTERVAL {
            self.last_cpu += CPU_INTERVAL;
            self.cpu.push_back(rng.gen_range(40..70));
            while self.cpu.len() > CPU_SAMPLES {
                self.cpu.pop_front();
            }
        }
        while now.saturating_duration_since(self.last_sweep) >= SWEEP_INTERVAL {
            self.last_sweep += SWEEP_INTERVAL;
            self.sweep = if self.sweep >= 100 { 0 } else { self.sweep + 1 };
        }
    }

    pub fn cpu_samples(&self) -> Vec<u64> {
        self.cpu.iter().copied().collect()
    }

    pub fn cpu_now(&self) -> u64 {
        self.cpu.back().copied().unwrap_or(0)
    }

    /// Optimization sweep, 0..=100
    pub fn sweep(&self) -> u16 {
        self.sweep
    }

    pub fn toggle_overdrive(&mut self) -> bool {
        self.overdrive = !self.overdrive;
        self.overdrive
    }

    pub fn status_text(&self) -> &'static str {
        if self.overdrive {
            "OVERDRIVE MODE"
        } else {
            "SYSTEM ONLINE"
        }
    }
}

/// Wall clock for the header
pub fn clock_text() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cpu_samples_roll() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut hud = Telemetry::new(start);
        let before = hud.cpu_samples();

        hud.tick_with(start + Duration::from_millis(1999), &mut rng);
        assert_eq!(hud.cpu_samples(), before);

        hud.tick_with(start + Duration::from_secs(4), &mut rng);
        let after = hud.cpu_samples();
        assert_eq!(after.len(), CPU_SAMPLES);
        assert_eq!(after[..CPU_SAMPLES - 2], before[2..]);
        assert!(after[CPU_SAMPLES - 2..].iter().all(|v| (40..70).contains(v)));
    }

    #[test]
    fn test_sweep_wraps() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(1);
        let mut hud = Telemetry::new(start);
        hud.tick_with(start + Duration::from_millis(500), &mut rng);
        assert_eq!(hud.sweep(), 5);
        // 0 -> 100 takes 100 steps, the 101st wraps to 0
        hud.tick_with(start + Duration::from_millis(10_100), &mut rng);
        assert_eq!(hud.sweep(), 0);
    }

    #[test]
    fn test_overdrive_toggle() {
        let mut hud = Telemetry::new(Instant::now());
        assert_eq!(hud.status_text(), "SYSTEM ONLINE");
        assert!(hud.toggle_overdrive());
        assert_eq!(hud.status_text(), "OVERDRIVE MODE");
        assert!(!hud.toggle_overdrive());
    }

    #[test]
    fn test_clock_format() {
        let text = clock_text();
        assert_eq!(text.len(), 8);
        assert_eq!(text.matches(':').count(), 2);
    }
}
