//! Cooking Timer
//!
//! Count-up stopwatch with Idle / Running / Paused phases.
//! Ticks come from a `TickSource`; dropping the source's handle stops them.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Pure timer state; transitions report whether they changed the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    pub elapsed: u64,
    pub phase: TimerPhase,
}

impl TimerState {
    pub fn start(&mut self) -> bool {
        if self.phase == TimerPhase::Running {
            return false;
        }
        self.phase = TimerPhase::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        self.phase = TimerPhase::Paused;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tick(&mut self) {
        if self.phase == TimerPhase::Running {
            self.elapsed += 1;
        }
    }

    pub fn display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// `MM:SS`, minutes grow past two digits when needed
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Source of one-second ticks
pub trait TickSource {
    type Handle;
    fn every_second(&self, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser ticks via `setInterval`
pub struct IntervalTicks;

impl TickSource for IntervalTicks {
    type Handle = gloo_timers::callback::Interval;

    fn every_second(&self, mut on_tick: Box<dyn FnMut()>) -> Self::Handle {
        gloo_timers::callback::Interval::new(1_000, move || on_tick())
    }
}

/// Timer wired to a tick source and a display callback
pub struct CookingTimer<T: TickSource> {
    state: Rc<RefCell<TimerState>>,
    ticks: T,
    handle: Option<T::Handle>,
    on_change: Rc<dyn Fn(&TimerState)>,
}

impl<T: TickSource> CookingTimer<T> {
    pub fn new(ticks: T, on_change: impl Fn(&TimerState) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(TimerState::default())),
            ticks,
            handle: None,
            on_change: Rc::new(on_change),
        }
    }

    pub fn state(&self) -> TimerState {
        *self.state.borrow()
    }

    pub fn start(&mut self) {
        if !self.state.borrow_mut().start() {
            return;
        }
        let state = Rc::clone(&self.state);
        let on_change = Rc::clone(&self.on_change);
        self.handle = Some(self.ticks.every_second(Box::new(move || {
            let snapshot = {
                let mut s = state.borrow_mut();
                s.tick();
                *s
            };
            on_change(&snapshot);
        })));
        log::debug!("[timer] started at {}", self.state().display());
    }

    pub fn pause(&mut self) {
        if self.state.borrow_mut().pause() {
            self.handle = None;
            log::debug!("[timer] paused at {}", self.state().display());
        }
    }

    pub fn reset(&mut self) {
        self.handle = None;
        self.state.borrow_mut().reset();
        (self.on_change)(&self.state());
    }
}

#[cfg(test)]
pub use manual::ManualTicks;

#[cfg(test)]
mod manual {
    use super::*;

    type Slots = Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>;

    /// Test clock: `advance(n)` fires n ticks on every live handle
    #[derive(Clone, Default)]
    pub struct ManualTicks {
        slots: Slots,
    }

    pub struct ManualHandle {
        slots: Slots,
        index: usize,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.index] = None;
        }
    }

    impl ManualTicks {
        pub fn advance(&self, seconds: u64) {
            for _ in 0..seconds {
                let count = self.slots.borrow().len();
                for i in 0..count {
                    let taken = self.slots.borrow_mut()[i].take();
                    if let Some(mut f) = taken {
                        f();
                        self.slots.borrow_mut()[i] = Some(f);
                    }
                }
            }
        }

        pub fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.is_some()).count()
        }
    }

    impl TickSource for ManualTicks {
        type Handle = ManualHandle;

        fn every_second(&self, on_tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Some(on_tick));
            ManualHandle {
                slots: Rc::clone(&self.slots),
                index: slots.len() - 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> (CookingTimer<ManualTicks>, ManualTicks, Rc<RefCell<String>>) {
        let ticks = ManualTicks::default();
        let shown = Rc::new(RefCell::new(String::from("00:00")));
        let sink = Rc::clone(&shown);
        let t = CookingTimer::new(ticks.clone(), move |s: &TimerState| *sink.borrow_mut() = s.display());
        (t, ticks, shown)
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(6000), "100:00");
    }

    #[test]
    fn test_running_for_n_seconds_shows_n() {
        let (mut t, ticks, shown) = timer();
        t.start();
        ticks.advance(125);
        assert_eq!(*shown.borrow(), "02:05");
        assert_eq!(t.state().phase, TimerPhase::Running);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let (mut t, ticks, _) = timer();
        t.start();
        t.start();
        assert_eq!(ticks.live(), 1);
        ticks.advance(3);
        assert_eq!(t.state().elapsed, 3);
    }

    #[test]
    fn test_pause_then_start_resumes() {
        let (mut t, ticks, shown) = timer();
        t.start();
        ticks.advance(10);
        t.pause();
        ticks.advance(5);
        assert_eq!(t.state(), TimerState { elapsed: 10, phase: TimerPhase::Paused });
        assert_eq!(ticks.live(), 0);
        t.start();
        ticks.advance(2);
        assert_eq!(*shown.borrow(), "00:12");
    }

    #[test]
    fn test_pause_when_idle_is_noop() {
        let (mut t, _, _) = timer();
        t.pause();
        assert_eq!(t.state().phase, TimerPhase::Idle);
    }

    #[test]
    fn test_reset_from_any_phase() {
        let (mut t, ticks, shown) = timer();
        t.start();
        ticks.advance(42);
        t.reset();
        assert_eq!(*shown.borrow(), "00:00");
        assert_eq!(ticks.live(), 0);
        ticks.advance(3);
        assert_eq!(t.state(), TimerState::default());

        t.start();
        ticks.advance(4);
        t.pause();
        t.reset();
        assert_eq!(t.state().phase, TimerPhase::Idle);
        assert_eq!(*shown.borrow(), "00:00");
    }
}
