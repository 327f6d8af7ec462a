//! Randomness for casting.
//!
//! Casts draw from a [`RandomSource`] so the cast functions stay
//! deterministic under test. The production source mixes an OS-seeded
//! generator with clock jitter and keeps a rolling window of draws for
//! a simple quality report.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// How many recent draws the quality report looks at.
const SAMPLE_WINDOW: usize = 256;

/// Summary statistics over the recent draw window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityReport {
    pub samples: usize,
    pub mean: f64,
    pub variance: f64,
}

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_float(&self) -> f64;

    /// Statistics over recent draws.
    fn quality_report(&self) -> QualityReport;

    /// Reseed and discard accumulated samples.
    fn refresh(&self);
}

struct PoolInner {
    rng: StdRng,
    samples: VecDeque<f64>,
}

impl PoolInner {
    fn record(&mut self, v: f64) {
        if self.samples.len() == SAMPLE_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(v);
    }

    fn report(&self) -> QualityReport {
        let n = self.samples.len();
        if n == 0 {
            return QualityReport {
                samples: 0,
                mean: 0.0,
                variance: 0.0,
            };
        }
        let mean = self.samples.iter().sum::<f64>() / n as f64;
        let variance = self.samples.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
        QualityReport {
            samples: n,
            mean,
            variance,
        }
    }
}

/// OS-seeded source with sub-second clock jitter folded into each draw.
pub struct EntropyPool {
    inner: Mutex<PoolInner>,
}

impl EntropyPool {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PoolInner {
                rng: StdRng::from_entropy(),
                samples: VecDeque::with_capacity(SAMPLE_WINDOW),
            }),
        }
    }

    fn jitter() -> f64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        nanos as f64 * 1e-9
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyPool {
    fn next_float(&self) -> f64 {
        let mut inner = self.inner.lock().expect("entropy pool poisoned");
        let v = (inner.rng.r#gen::<f64>() + Self::jitter()).fract();
        inner.record(v);
        v
    }

    fn quality_report(&self) -> QualityReport {
        self.inner.lock().expect("entropy pool poisoned").report()
    }

    fn refresh(&self) {
        let mut inner = self.inner.lock().expect("entropy pool poisoned");
        inner.rng = StdRng::from_entropy();
        inner.samples.clear();
    }
}

/// Deterministic source for tests; `refresh` restores the original seed.
pub struct SeededSource {
    seed: u64,
    inner: Mutex<PoolInner>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Mutex::new(PoolInner {
                rng: StdRng::seed_from_u64(seed),
                samples: VecDeque::with_capacity(SAMPLE_WINDOW),
            }),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_float(&self) -> f64 {
        let mut inner = self.inner.lock().expect("seeded source poisoned");
        let v = inner.rng.r#gen::<f64>();
        inner.record(v);
        v
    }

    fn quality_report(&self) -> QualityReport {
        self.inner.lock().expect("seeded source poisoned").report()
    }

    fn refresh(&self) {
        let mut inner = self.inner.lock().expect("seeded source poisoned");
        inner.rng = StdRng::seed_from_u64(self.seed);
        inner.samples.clear();
    }
}
