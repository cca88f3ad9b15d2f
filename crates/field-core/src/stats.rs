use std::time::Duration;

/// Aggregate over one reporting interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsReport {
    pub frames: u32,
    pub mean: Duration,
    pub worst: Duration,
    pub mean_links: f32,
}

impl StatsReport {
    #[inline]
    pub fn over_budget(&self, budget: Duration) -> bool {
        self.mean > budget
    }
}

/// Rolling frame-cost accumulator. Reports once every `interval` frames and
/// starts over.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: u32,
    frames: u32,
    busy: Duration,
    worst: Duration,
    links: usize,
}

impl FrameStats {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            busy: Duration::ZERO,
            worst: Duration::ZERO,
            links: 0,
        }
    }

    pub fn record(&mut self, elapsed: Duration, links: usize) -> Option<StatsReport> {
        self.frames += 1;
        self.busy += elapsed;
        self.worst = self.worst.max(elapsed);
        self.links += links;
        if self.frames < self.interval {
            return None;
        }
        let report = StatsReport {
            frames: self.frames,
            mean: self.busy / self.frames,
            worst: self.worst,
            mean_links: self.links as f32 / self.frames as f32,
        };
        *self = Self::new(self.interval);
        Some(report)
    }
}
