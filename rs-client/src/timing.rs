use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct Timing(Option<Instant>);

impl Timing {
    #[inline]
    pub fn start() -> Self {
        #[cfg(feature = "perf_timing")]
        {
            Self(Some(Instant::now()))
        }
        #[cfg(not(feature = "perf_timing"))]
        {
            Self(None)
        }
    }

    #[inline]
    pub fn ms(&self) -> f32 {
        self.0
            .map(|t| t.elapsed().as_secs_f32() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Shadow pass cost over a run. Stays at zero without `perf_timing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShadowPassTimings {
    pub frames: u32,
    pub total_ms: f32,
    pub worst_ms: f32,
}

impl ShadowPassTimings {
    pub fn record(&mut self, timing: Timing) -> f32 {
        let ms = timing.ms();
        self.frames += 1;
        self.total_ms += ms;
        self.worst_ms = self.worst_ms.max(ms);
        ms
    }

    pub fn mean_ms(&self) -> f32 {
        if self.frames == 0 {
            0.0
        } else {
            self.total_ms / self.frames as f32
        }
    }
}
