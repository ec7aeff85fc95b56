// Player state machine
//
// Owns exactly one active state. Switching exits the old state, drops
// it, then enters the new one; a state's first tick always comes after
// its enter. With no active state, ticking is a no-op.

use log::debug;

use super::context::StateContext;
use super::state::{State, Transition};

#[derive(Default)]
pub struct StateMachine {
    current: Option<Box<dyn State>>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Id of the active state, if any
    pub fn current_id(&self) -> Option<super::state::StateId> {
        self.current.as_ref().map(|s| s.id())
    }

    /// Install `next` as the active state, exiting and dropping the
    /// previous one first. The host calls this once at initialization;
    /// afterwards states drive all transitions from their ticks.
    pub fn force_transition(&mut self, next: Box<dyn State>, cx: &mut StateContext<'_>) {
        self.switch(next, cx);
    }

    /// Run one frame of the active state, then apply whatever
    /// transition it requested.
    pub fn tick(&mut self, cx: &mut StateContext<'_>, dt: f32) {
        let Some(state) = self.current.as_mut() else {
            return;
        };

        if let Transition::To(id) = state.tick(cx, dt) {
            self.switch(id.spawn(), cx);
        }
    }

    fn switch(&mut self, mut next: Box<dyn State>, cx: &mut StateContext<'_>) {
        if let Some(mut previous) = self.current.take() {
            previous.exit(cx);
            debug!("state transition: {:?} -> {:?}", previous.id(), next.id());
        } else {
            debug!("state transition: (none) -> {:?}", next.id());
        }
        next.enter(cx);
        self.current = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::{StateId, Transition};
    use super::super::testing::TestRig;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DT: f32 = 1.0 / 60.0;

    /// Probe state that records its lifecycle calls into a shared log
    struct ProbeState {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        next: Transition,
    }

    impl ProbeState {
        fn new(label: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                label,
                log,
                next: Transition::Stay,
            }
        }

        fn note(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.label, event));
        }
    }

    impl State for ProbeState {
        fn id(&self) -> StateId {
            StateId::Locomotion
        }

        fn enter(&mut self, _cx: &mut StateContext<'_>) {
            self.note("enter");
        }

        fn tick(&mut self, _cx: &mut StateContext<'_>, _dt: f32) -> Transition {
            self.note("tick");
            self.next
        }

        fn exit(&mut self, _cx: &mut StateContext<'_>) {
            self.note("exit");
        }
    }

    #[test]
    fn test_tick_without_state_is_noop() {
        let mut rig = TestRig::new();
        let mut machine = StateMachine::new();
        machine.tick(&mut rig.context(), DT);
        assert_eq!(machine.current_id(), None);
    }

    #[test]
    fn test_first_transition_has_no_exit() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rig = TestRig::new();
        let mut machine = StateMachine::new();

        let probe = Box::new(ProbeState::new("a", log.clone()));
        machine.force_transition(probe, &mut rig.context());

        assert_eq!(*log.borrow(), vec!["a:enter"]);
    }

    #[test]
    fn test_exit_runs_before_enter() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rig = TestRig::new();
        let mut machine = StateMachine::new();

        machine.force_transition(Box::new(ProbeState::new("a", log.clone())), &mut rig.context());
        machine.force_transition(Box::new(ProbeState::new("b", log.clone())), &mut rig.context());

        assert_eq!(*log.borrow(), vec!["a:enter", "a:exit", "b:enter"]);
    }

    #[test]
    fn test_enter_precedes_first_tick() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rig = TestRig::new();
        let mut machine = StateMachine::new();

        machine.force_transition(Box::new(ProbeState::new("a", log.clone())), &mut rig.context());
        machine.tick(&mut rig.context(), DT);
        machine.tick(&mut rig.context(), DT);

        assert_eq!(*log.borrow(), vec!["a:enter", "a:tick", "a:tick"]);
    }

    #[test]
    fn test_requested_transition_is_applied() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut rig = TestRig::new();
        let mut machine = StateMachine::new();

        let mut probe = ProbeState::new("a", log.clone());
        probe.next = Transition::To(StateId::Dash);
        machine.force_transition(Box::new(probe), &mut rig.context());
        machine.tick(&mut rig.context(), DT);

        assert_eq!(machine.current_id(), Some(StateId::Dash));
        assert_eq!(*log.borrow(), vec!["a:enter", "a:tick", "a:exit"]);
    }
}
