use std::time::{Duration, Instant};

use crate::core::Category;

/// Short-lived message shown after a tally change
#[derive(Default)]
pub struct ToastState {
    /// Text of the current toast
    pub message: Option<String>,
    /// Whether the toast reports a problem (e.g. a failed save)
    pub is_warning: bool,
    /// When the current toast stops being shown
    expires_at: Option<Instant>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current toast for `duration`. A visible warning is not
    /// overwritten by a plain message until it expires or is dismissed.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        is_warning: bool,
        now: Instant,
        duration: Duration,
    ) {
        if self.is_warning && !is_warning && self.is_visible(now) {
            return;
        }
        self.message = Some(message.into());
        self.is_warning = is_warning;
        self.expires_at = Some(now + duration);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match (self.message.as_ref(), self.expires_at) {
            (Some(_), Some(expires_at)) => now < expires_at,
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
        self.is_warning = false;
        self.expires_at = None;
    }
}

/// Visual cue flashed on increment and reset
#[derive(Default)]
pub struct CueState {
    started_at: Option<Instant>,
    /// Category that was hit, or `None` for a reset
    pub category: Option<Category>,
}

impl CueState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, category: Option<Category>, now: Instant) {
        self.started_at = Some(now);
        self.category = category;
    }

    /// Flash strength in `0.0..=1.0`, fading linearly over `duration`
    pub fn intensity(&self, now: Instant, duration: Duration) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.duration_since(started_at).as_secs_f32();
        (1.0 - elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_active(&self, now: Instant, duration: Duration) -> bool {
        self.intensity(now, duration) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(400);

    #[test]
    fn test_toast_expires() {
        let start = Instant::now();
        let mut toast = ToastState::new();
        toast.show("Ontopic General +1", false, start, SHORT);

        assert!(toast.is_visible(start));
        assert!(!toast.is_visible(start + SHORT));
    }

    #[test]
    fn test_warning_is_not_overwritten_by_plain_message() {
        let start = Instant::now();
        let mut toast = ToastState::new();
        toast.show("Could not save counts", true, start, SHORT);
        toast.show("Ontopic General +1", false, start, SHORT);

        assert_eq!(toast.message.as_deref(), Some("Could not save counts"));
        assert!(toast.is_warning);

        toast.dismiss();
        toast.show("Ontopic General +1", false, start, SHORT);
        assert!(!toast.is_warning);
    }

    #[test]
    fn test_expired_warning_gives_way_to_plain_message() {
        let start = Instant::now();
        let mut toast = ToastState::new();
        toast.show("Counts not saved: disk full", true, start, SHORT);

        let later = start + Duration::from_secs(10);
        assert!(!toast.is_visible(later));

        toast.show("Ontopic General → 1", false, later, SHORT);

        assert_eq!(toast.message.as_deref(), Some("Ontopic General → 1"));
        assert!(!toast.is_warning);
        assert!(toast.is_visible(later));
    }

    #[test]
    fn test_cue_fades_out() {
        let start = Instant::now();
        let mut cue = CueState::new();
        assert_eq!(cue.intensity(start, SHORT), 0.0);

        cue.trigger(Some(Category::OntopicGeneral), start);

        assert_eq!(cue.intensity(start, SHORT), 1.0);
        let halfway = cue.intensity(start + SHORT / 2, SHORT);
        assert!(halfway > 0.4 && halfway < 0.6);
        assert!(!cue.is_active(start + SHORT, SHORT));
    }
}
