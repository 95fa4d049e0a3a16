use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Failed,
}

#[derive(Default)]
pub struct ControllerState {
    submitting: AtomicBool,
    history_generation: AtomicU64,
    history_rendered: AtomicU64,
    last_outcome: Mutex<Option<Outcome>>,
    input: Mutex<String>,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.submitting.load(Ordering::Acquire) {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    pub fn try_begin_submit(&self) -> bool {
        self.submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn end_submit(&self) {
        self.submitting.store(false, Ordering::Release);
    }

    pub fn record_outcome(&self, outcome: Outcome) {
        *lock(&self.last_outcome) = Some(outcome);
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        *lock(&self.last_outcome)
    }

    pub fn next_history_ticket(&self) -> u64 {
        self.history_generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    // false once a newer ticket has rendered; a failed newer refresh never claims
    pub fn claim_history_render(&self, ticket: u64) -> bool {
        self.history_rendered.fetch_max(ticket, Ordering::AcqRel) < ticket
    }

    pub fn input(&self) -> String {
        lock(&self.input).clone()
    }

    pub fn set_input(&self, text: &str) {
        *lock(&self.input) = text.to_string();
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_flag_admits_one_submission() {
        let state = ControllerState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.try_begin_submit());
        assert!(!state.try_begin_submit());
        assert_eq!(state.phase(), Phase::Submitting);
        state.end_submit();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.try_begin_submit());
    }

    #[test]
    fn older_ticket_cannot_render_after_newer_one() {
        let state = ControllerState::new();
        let first = state.next_history_ticket();
        let second = state.next_history_ticket();
        assert!(state.claim_history_render(second));
        assert!(!state.claim_history_render(first));
    }

    #[test]
    fn older_ticket_renders_when_newer_one_never_did() {
        let state = ControllerState::new();
        let first = state.next_history_ticket();
        let _failed = state.next_history_ticket();
        assert!(state.claim_history_render(first));
    }
}
