/// Deferred effects the session knows how to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    RestoreInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    id: TimerId,
    due: f64,
    event: TimerEvent,
}

/// Fire-once timers on the session's own clock, which only moves when the
/// game loop feeds it frame time.
#[derive(Debug, Default)]
pub struct Timers {
    now: f64,
    pending: Vec<Scheduled>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn schedule_in(&mut self, delay: f32, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: self.now + delay as f64,
            event,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        before != self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Moves the clock forward and returns events that came due, earliest first.
    pub fn advance(&mut self, dt: f32) -> Vec<TimerEvent> {
        self.now += dt.max(0.0) as f64;

        let now = self.now;
        let mut due: Vec<Scheduled> =
            self.pending.iter().copied().filter(|t| t.due <= now).collect();
        if due.is_empty() {
            return Vec::new();
        }

        self.pending.retain(|t| t.due > now);
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|t| t.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_when_due() {
        let mut timers = Timers::new();
        let id = timers.schedule_in(15.0, TimerEvent::RestoreInterval);

        assert!(timers.advance(14.0).is_empty());
        assert!(timers.is_pending(id));
        assert_eq!(timers.advance(1.0), vec![TimerEvent::RestoreInterval]);
        assert!(!timers.is_pending(id));
        assert!(timers.advance(100.0).is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        let id = timers.schedule_in(1.0, TimerEvent::RestoreInterval);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(5.0).is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = Timers::new();
        timers.schedule_in(1.0, TimerEvent::RestoreInterval);
        timers.schedule_in(2.0, TimerEvent::RestoreInterval);

        assert_eq!(timers.cancel_all(), 2);
        assert!(timers.advance(5.0).is_empty());
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut timers = Timers::new();
        timers.advance(2.0);
        timers.advance(-1.0);
        assert_eq!(timers.now(), 2.0);
    }
}
