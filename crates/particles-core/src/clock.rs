use instant::Instant;

/// Timing handed to the animator for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the clock started; drives the idle jitter.
    pub elapsed: f32,
}

impl FrameTime {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }
}

#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.duration_since(self.last);
        self.last = now;
        FrameTime {
            delta: delta.as_secs_f32(),
            elapsed: now.duration_since(self.start).as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
