use super::State;

/// Play/pause/step/reset state machine over an ordered sample sequence.
///
/// `index` is the next sample to process. It only grows during a session
/// and returns to zero on reset. Reaching `total` finishes playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controller {
    state: State,
    index: usize,
    total: usize,
}

impl Controller {
    pub fn new(total: usize) -> Self {
        Self {
            state: State::Idle,
            index: 0,
            total,
        }
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.index)
    }
    /// Starts continuous playback. Returns true only on a transition
    /// into Running; an exhausted sequence finishes instead.
    pub fn play(&mut self) -> bool {
        match self.state {
            State::Running => false,
            _ if self.total == 0 => false,
            _ if self.index >= self.total => {
                self.state = State::Finished;
                false
            }
            _ => {
                self.state = State::Running;
                true
            }
        }
    }
    pub fn pause(&mut self) -> bool {
        match self.state {
            State::Running => {
                self.state = State::Paused;
                true
            }
            _ => false,
        }
    }
    /// Periodic advance. Ignored unless Running.
    pub fn tick(&mut self) -> Option<usize> {
        match self.state {
            State::Running => self.advance(),
            _ => None,
        }
    }
    /// One synchronous advance in any state. Pauses continuous playback.
    pub fn step(&mut self) -> Option<usize> {
        self.pause();
        self.advance()
    }
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.index = 0;
    }
}

impl Controller {
    fn advance(&mut self) -> Option<usize> {
        if self.index >= self.total {
            if self.total > 0 {
                self.state = State::Finished;
            }
            return None;
        }
        let current = self.index;
        self.index += 1;
        if self.index >= self.total {
            self.state = State::Finished;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_runs_until_exhausted() {
        let mut ctrl = Controller::new(2);
        assert!(ctrl.play());
        assert_eq!(ctrl.state(), State::Running);
        assert_eq!(ctrl.tick(), Some(0));
        assert_eq!(ctrl.state(), State::Running);
        assert_eq!(ctrl.tick(), Some(1));
        assert_eq!(ctrl.state(), State::Finished);
        assert_eq!(ctrl.tick(), None);
        assert_eq!(ctrl.index(), 2);
    }
    #[test]
    fn play_is_idempotent_while_running() {
        let mut ctrl = Controller::new(3);
        assert!(ctrl.play());
        assert!(!ctrl.play());
        assert_eq!(ctrl.state(), State::Running);
    }
    #[test]
    fn play_when_exhausted_finishes() {
        let mut ctrl = Controller::new(1);
        ctrl.step();
        ctrl.reset();
        ctrl.step();
        assert_eq!(ctrl.state(), State::Finished);
        assert!(!ctrl.play());
        assert_eq!(ctrl.state(), State::Finished);
    }
    #[test]
    fn pause_stops_ticks() {
        let mut ctrl = Controller::new(5);
        ctrl.play();
        ctrl.tick();
        assert!(ctrl.pause());
        assert_eq!(ctrl.tick(), None);
        assert_eq!(ctrl.index(), 1);
        assert!(!ctrl.pause());
        assert!(ctrl.play());
        assert_eq!(ctrl.tick(), Some(1));
    }
    #[test]
    fn step_advances_exactly_one() {
        let mut ctrl = Controller::new(3);
        assert_eq!(ctrl.step(), Some(0));
        assert_eq!(ctrl.index(), 1);
        assert_eq!(ctrl.state(), State::Idle);
        ctrl.play();
        assert_eq!(ctrl.step(), Some(1));
        assert_eq!(ctrl.state(), State::Paused);
        assert_eq!(ctrl.index(), 2);
    }
    #[test]
    fn step_at_end_does_nothing() {
        let mut ctrl = Controller::new(1);
        assert_eq!(ctrl.step(), Some(0));
        assert_eq!(ctrl.state(), State::Finished);
        assert_eq!(ctrl.step(), None);
        assert_eq!(ctrl.index(), 1);
        assert_eq!(ctrl.state(), State::Finished);
    }
    #[test]
    fn reset_from_any_state() {
        for setup in [0, 1, 2, 3] {
            let mut ctrl = Controller::new(2);
            match setup {
                0 => {}
                1 => {
                    ctrl.play();
                    ctrl.tick();
                }
                2 => {
                    ctrl.play();
                    ctrl.pause();
                }
                _ => {
                    ctrl.step();
                    ctrl.step();
                }
            }
            ctrl.reset();
            assert_eq!(ctrl.index(), 0);
            assert_eq!(ctrl.state(), State::Idle);
        }
    }
    #[test]
    fn empty_sequence_is_inert() {
        let mut ctrl = Controller::new(0);
        assert!(!ctrl.play());
        assert_eq!(ctrl.step(), None);
        assert_eq!(ctrl.tick(), None);
        assert_eq!(ctrl.state(), State::Idle);
        assert_eq!(ctrl.index(), 0);
    }
}
