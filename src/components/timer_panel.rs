//! Cooking Timer Panel
//!
//! Binds the detail page's timer buttons to a `CookingTimer`.

use std::cell::RefCell;
use std::rc::Rc;

use dom_events::{on, Binding};
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::timer::{CookingTimer, IntervalTicks, TimerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    TogglePanel,
    Start,
    Pause,
    Reset,
}

pub const TIMER_EVENTS: &[Binding<TimerCommand>] = &[
    on("timerBtn", "click", TimerCommand::TogglePanel),
    on("startTimer", "click", TimerCommand::Start),
    on("pauseTimer", "click", TimerCommand::Pause),
    on("resetTimer", "click", TimerCommand::Reset),
];

/// Without these the timer has nothing to show or start
const REQUIRED_CONTROLS: &[&str] = &["timerDisplay", "startTimer"];

pub struct TimerPanel {
    timer: RefCell<CookingTimer<IntervalTicks>>,
    panel: Option<HtmlElement>,
}

impl TimerPanel {
    /// Active when the page has a `#timerDisplay` and a start button
    pub fn attach(doc: &Document) -> Option<Rc<Self>> {
        if let Some(id) = dom_events::first_missing(doc, REQUIRED_CONTROLS) {
            log::debug!("[timer] #{} not on page, timer inactive", id);
            return None;
        }
        let display: HtmlElement = dom::by_id(doc, "timerDisplay")?;

        let timer = CookingTimer::new(IntervalTicks, move |state: &TimerState| {
            display.set_text_content(Some(&state.display()));
        });
        let panel = Rc::new(Self {
            timer: RefCell::new(timer),
            panel: dom::by_id(doc, "cookingTimer"),
        });

        let p = Rc::clone(&panel);
        let bound = dom_events::bind_table(doc, TIMER_EVENTS, move |command, _| p.run(command));
        log::debug!("[timer] bound {} controls", bound);
        Some(panel)
    }

    pub fn run(&self, command: TimerCommand) {
        match command {
            TimerCommand::TogglePanel => self.toggle_panel(),
            TimerCommand::Start => self.timer.borrow_mut().start(),
            TimerCommand::Pause => self.timer.borrow_mut().pause(),
            TimerCommand::Reset => self.timer.borrow_mut().reset(),
        }
    }

    fn toggle_panel(&self) {
        let Some(panel) = &self.panel else { return };
        let hidden = panel.style().get_property_value("display").ok().as_deref() == Some("none");
        dom::show(panel, if hidden { "block" } else { "none" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_has_one_control() {
        for command in [TimerCommand::TogglePanel, TimerCommand::Start, TimerCommand::Pause, TimerCommand::Reset] {
            assert_eq!(TIMER_EVENTS.iter().filter(|b| b.action == command).count(), 1);
        }
        assert_eq!(dom_events::element_ids(TIMER_EVENTS).len(), TIMER_EVENTS.len());
    }

    #[test]
    fn test_required_controls_are_bound_or_displayed() {
        let bound = dom_events::element_ids(TIMER_EVENTS);
        let present = |id: &str| id == "timerDisplay" || bound.iter().any(|b| *b == id);
        assert_eq!(dom_events::first_missing_by(REQUIRED_CONTROLS, present), None);
        assert_eq!(dom_events::first_missing_by(REQUIRED_CONTROLS, |id| id != "startTimer"), Some("startTimer"));
    }
}
