use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the loop started
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self {
            number,
            time,
            delta,
        }
    }

    /// Milliseconds since the loop started, for the render gate
    pub fn time_ms(&self) -> f64 {
        self.time as f64 * 1000.0
    }
}

/// Minimal tick clock - tracks delta time and frame numbers.
/// Systems manage their own internal state.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    ticks: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            ticks: 0,
        }
    }

    /// Advance the clock and describe the tick that just started
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo::new(
            self.ticks,
            now.duration_since(self.start).as_secs_f32(),
            now.duration_since(self.last_tick).as_secs_f32(),
        );
        self.ticks += 1;
        self.last_tick = now;
        info
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Decides which ticks get a render: a tick renders iff the time since the
/// last rendered tick is at least the target interval. The very first tick
/// always renders. The last-render mark advances only on ticks that render.
#[derive(Debug, Clone, Copy)]
pub struct RenderGate {
    interval_ms: f64,
    last_render_ms: Option<f64>,
}

impl RenderGate {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_render_ms: None,
        }
    }

    /// Attempt to pass the gate at time `now_ms`
    pub fn should_render(&mut self, now_ms: f64) -> bool {
        match self.last_render_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_render_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_render_ms(&self) -> Option<f64> {
        self.last_render_ms
    }
}

/// Cooperative stop flag shared between the tick loop and its owner
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Owns tick pacing. Each tick is followed by a delay of
/// (frame interval - tick processing time), floored at zero so an overrunning
/// tick reschedules immediately instead of in the past.
#[derive(Debug)]
pub struct TickLoop {
    frame_time: Duration,
    token: CancellationToken,
}

impl TickLoop {
    pub fn new(frame_time: Duration, token: CancellationToken) -> Self {
        Self { frame_time, token }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Deadline for the next tick given when the current one started
    pub fn next_deadline(&self, tick_start: Instant) -> Instant {
        let target = tick_start + self.frame_time;
        let now = Instant::now();
        if target < now {
            now
        } else {
            target
        }
    }

    /// Drive `tick` until the token is cancelled or `max_ticks` ticks ran.
    /// Used by the headless mode; the windowed app maps the same deadline
    /// math onto the event loop instead.
    pub fn run<F>(&self, mut tick: F, max_ticks: Option<u64>)
    where
        F: FnMut(&FrameInfo),
    {
        let mut clock = Clock::new();

        while !self.token.is_cancelled() {
            let tick_start = Instant::now();
            let frame = clock.tick();

            tick(&frame);

            if let Some(max) = max_ticks {
                if frame.number + 1 >= max {
                    break;
                }
            }

            let deadline = self.next_deadline(tick_start);
            std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
