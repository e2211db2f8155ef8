//! Progress simulation state machine.
//!
//! `Idle -> Running -> Completed -> (reset) -> Idle`. While running, a
//! nominal 50ms tick adds one percent until the bar is full. The machine
//! owns its tick schedule as plain state: `start()` and `reset()` replace
//! the schedule outright and screen teardown drops the machine, so two live
//! tickers can never increment the same counter.

use std::time::{Duration, Instant};

use crate::core::observer::Observer;

/// Nominal spacing between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// One tick is one percent, so the run completes after 100 ticks.
const TOTAL_TICKS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    Running,
    Completed,
}

pub struct ProgressMachine {
    ticks: u32,
    phase: ProgressPhase,
    interval: Duration,
    next_tick: Option<Instant>,
    observer: Option<Observer>,
}

impl ProgressMachine {
    pub fn new(interval: Duration) -> Self {
        Self {
            ticks: 0,
            phase: ProgressPhase::Idle,
            interval,
            next_tick: None,
            observer: None,
        }
    }

    /// Register the single observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    pub fn is_completed(&self) -> bool {
        self.phase == ProgressPhase::Completed
    }

    /// Current progress in [0, 1].
    ///
    /// Derived from the tick count rather than accumulated as a float, which
    /// makes monotonicity and the percent display exact.
    pub fn current(&self) -> f32 {
        self.ticks as f32 / TOTAL_TICKS as f32
    }

    pub fn percent(&self) -> u32 {
        self.ticks
    }

    /// Start (or restart) the simulation from zero.
    ///
    /// Replacing the schedule here is what closes the duplicate-ticker bug:
    /// whatever deadline was pending is gone after this call.
    pub fn start(&mut self) {
        self.ticks = 0;
        self.phase = ProgressPhase::Running;
        self.next_tick = Some(Instant::now() + self.interval);
        self.notify("0%");
    }

    /// Cancel any pending tick and return to `Idle`. Safe to call twice;
    /// the second call has nothing left to cancel.
    pub fn reset(&mut self) {
        self.ticks = 0;
        self.phase = ProgressPhase::Idle;
        self.next_tick = None;
        self.notify("0%");
    }

    /// Drop the tick schedule without touching progress or notifying.
    /// Used on screen teardown.
    pub fn stop(&mut self) {
        self.next_tick = None;
        if self.phase == ProgressPhase::Running {
            self.phase = ProgressPhase::Idle;
        }
    }

    /// Apply one tick. No-op outside `Running`.
    pub fn tick(&mut self) {
        if self.phase != ProgressPhase::Running {
            return;
        }

        self.ticks = (self.ticks + 1).min(TOTAL_TICKS);

        if self.ticks >= TOTAL_TICKS {
            self.phase = ProgressPhase::Completed;
            self.next_tick = None;
            self.notify("Complete");
        } else {
            let text = format!("{}%", self.ticks);
            self.notify(&text);
        }
    }

    /// Deliver every tick whose deadline has passed.
    ///
    /// The host loop may be late or may coalesce wakeups; catching up one
    /// tick at a time keeps the counter monotonic regardless of how far
    /// behind `now` is.
    pub fn poll(&mut self, now: Instant) {
        while self.phase == ProgressPhase::Running {
            match self.next_tick {
                Some(deadline) if deadline <= now => {
                    self.next_tick = Some(deadline + self.interval);
                    self.tick();
                }
                _ => break,
            }
        }
    }

    fn notify(&mut self, text: &str) {
        // No observer registered is fine; the value is lossy by design.
        if let Some(observer) = self.observer.as_mut() {
            observer(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn machine_with_recorder() -> (ProgressMachine, Rc<RefCell<Vec<String>>>) {
        let mut machine = ProgressMachine::new(TICK_INTERVAL);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        machine.set_observer(Box::new(move |text| {
            sink.borrow_mut().push(text.to_string());
        }));
        (machine, seen)
    }

    #[test]
    fn test_full_run_completes() {
        let (mut machine, seen) = machine_with_recorder();

        machine.start();
        for _ in 0..100 {
            machine.tick();
        }

        assert_eq!(machine.phase(), ProgressPhase::Completed);
        assert_eq!(machine.current(), 1.0);
        assert!(!machine.is_running());
        assert_eq!(seen.borrow().last().unwrap(), "Complete");
    }

    #[test]
    fn test_intermediate_ticks_report_percent() {
        let (mut machine, seen) = machine_with_recorder();

        machine.start();
        assert_eq!(seen.borrow().last().unwrap(), "0%");

        for k in 1..=99u32 {
            machine.tick();
            assert_eq!(seen.borrow().last().unwrap(), &format!("{}%", k));
            assert_eq!(machine.phase(), ProgressPhase::Running);
        }
    }

    #[test]
    fn test_no_increments_after_completion() {
        let (mut machine, _) = machine_with_recorder();

        machine.start();
        for _ in 0..150 {
            machine.tick();
        }

        assert_eq!(machine.current(), 1.0);
        assert_eq!(machine.phase(), ProgressPhase::Completed);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut machine, seen) = machine_with_recorder();

        machine.start();
        for _ in 0..10 {
            machine.tick();
        }

        machine.reset();
        assert_eq!(machine.phase(), ProgressPhase::Idle);
        assert_eq!(machine.current(), 0.0);
        assert_eq!(seen.borrow().last().unwrap(), "0%");

        machine.reset();
        assert_eq!(machine.phase(), ProgressPhase::Idle);
        assert_eq!(machine.current(), 0.0);
    }

    #[test]
    fn test_restart_while_running_zeroes_progress() {
        let (mut machine, seen) = machine_with_recorder();

        machine.start();
        for _ in 0..40 {
            machine.tick();
        }
        assert_eq!(machine.percent(), 40);

        machine.start();
        assert_eq!(machine.percent(), 0);
        assert!(machine.is_running());
        assert_eq!(seen.borrow().last().unwrap(), "0%");
    }

    #[test]
    fn test_missing_observer_is_silent() {
        let mut machine = ProgressMachine::new(TICK_INTERVAL);
        machine.start();
        machine.tick();
        machine.reset();
        assert_eq!(machine.phase(), ProgressPhase::Idle);
    }

    #[test]
    fn test_poll_catches_up_on_delayed_ticks() {
        let (mut machine, _) = machine_with_recorder();

        machine.start();
        // Host was busy for 10 intervals; all of them are delivered at once
        // and progress stays monotonic.
        machine.poll(Instant::now() + TICK_INTERVAL * 10);
        assert_eq!(machine.percent(), 10);

        // Polling far past the end clamps at completion.
        machine.poll(Instant::now() + TICK_INTERVAL * 500);
        assert_eq!(machine.percent(), 100);
        assert_eq!(machine.phase(), ProgressPhase::Completed);
    }

    #[test]
    fn test_poll_before_deadline_does_nothing() {
        let (mut machine, _) = machine_with_recorder();

        machine.start();
        machine.poll(Instant::now());
        assert_eq!(machine.percent(), 0);
        assert!(machine.is_running());
    }
}
