/// Identity of one countdown run. Ticks carry the handle they were issued
/// for; a handle from a cancelled or replaced run no longer matches and its
/// ticks are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// What a delivered tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The tick belonged to a run that is no longer current.
    Stale,
    /// Still counting; seconds left.
    Running(u32),
    Expired,
}

/// Tick-driven countdown clock.
///
/// The engine never reads wall-clock time. Whoever drives the game delivers
/// one tick per second, and the clock only trusts ticks carrying the handle
/// of the current run.
#[derive(Debug, Default)]
pub struct Countdown {
    generation: u64,
    remaining: Option<u32>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock, revoking any previous handle.
    pub fn start(&mut self, seconds: u32) -> TimerHandle {
        self.generation += 1;
        self.remaining = Some(seconds);
        TimerHandle(self.generation)
    }

    /// Stop the clock. Ticks from the revoked handle become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.remaining = None;
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.remaining.map(|_| TimerHandle(self.generation))
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn tick(&mut self, handle: TimerHandle) -> Tick {
        let Some(remaining) = self.remaining else {
            return Tick::Stale;
        };
        if handle.0 != self.generation {
            return Tick::Stale;
        }

        let left = remaining.saturating_sub(1);
        if left == 0 {
            self.remaining = None;
            Tick::Expired
        } else {
            self.remaining = Some(left);
            Tick::Running(left)
        }
    }
}

/// Split a seconds count into the displayed minutes:seconds pair.
pub fn clock_display(seconds: u32) -> (u32, u32) {
    (seconds / 60, seconds % 60)
}
