/// Two-step confirmation guarding the destructive reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetGate {
    #[default]
    Idle,
    PendingConfirm,
}

impl ResetGate {
    /// Arm the gate; the reset itself still needs [`ResetGate::confirm`]
    pub fn request(&mut self) {
        *self = ResetGate::PendingConfirm;
    }

    /// Returns true if a pending request was confirmed, disarming the gate
    pub fn confirm(&mut self) -> bool {
        let was_pending = self.is_pending();
        *self = ResetGate::Idle;
        was_pending
    }

    pub fn cancel(&mut self) {
        *self = ResetGate::Idle;
    }

    pub fn is_pending(&self) -> bool {
        *self == ResetGate::PendingConfirm
    }
}
