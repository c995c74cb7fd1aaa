//! Deferred work triggered by UI events
//!
//! The clipboard read behind the "Add Clip" row can lag the menu opening, so
//! the menu is reconciled twice: once immediately and once after a short
//! settle delay. Timers themselves live in the UI layer; this module only
//! decides when they fire and whether a fired timer is still wanted.
use std::time::Duration;

/// Re-poll delays to run after the menu opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    delays: [Duration; 2],
}

impl RefreshPlan {
    pub fn after_menu_opened(settle: Duration) -> Self {
        Self {
            delays: [Duration::ZERO, settle],
        }
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }
}

/// Single pending-timer slot: arming again supersedes whatever was pending
#[derive(Debug, Default, Clone)]
pub struct TimerSlot {
    generation: u64,
    pending: bool,
}

/// Identifies one arming of a `TimerSlot`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot, invalidating every token handed out before
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        self.pending = true;
        TimerToken(self.generation)
    }

    /// Consume a fired timer; true only for the latest token, and only once
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending && token.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop the pending timer without arming a new one
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_plan_polls_now_and_after_settle() {
        let plan = RefreshPlan::after_menu_opened(Duration::from_millis(80));
        assert_eq!(plan.delays(), &[Duration::ZERO, Duration::from_millis(80)]);
    }

    #[test]
    fn test_latest_token_fires_once() {
        let mut slot = TimerSlot::new();
        let token = slot.arm();
        assert!(slot.is_pending());
        assert!(slot.fire(token));
        assert!(!slot.fire(token));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_rearming_replaces_pending_timer() {
        let mut slot = TimerSlot::new();
        let first = slot.arm();
        let second = slot.arm();
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
    }

    #[test]
    fn test_cancel() {
        let mut slot = TimerSlot::new();
        let token = slot.arm();
        slot.cancel();
        assert!(!slot.fire(token));
    }
}
