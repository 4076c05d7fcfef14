use std::time::{Duration, Instant};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-times-circle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_LIFETIME
    }
}

/// Loading indicator, error banner and toasts. These overlay whichever
/// surface is visible and never decide which one that is.
#[derive(Debug, Default)]
pub struct Feedback {
    loading: bool,
    error: Option<String>,
    toasts: Vec<Toast>,
}

impl Feedback {
    pub fn show_loading(&mut self) {
        self.loading = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.show_toast_at(message, kind, Instant::now());
    }

    fn show_toast_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.toasts.retain(|toast| !toast.expired(now));
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Toasts still on screen.
    pub fn toasts(&self) -> Vec<&Toast> {
        self.toasts_at(Instant::now())
    }

    fn toasts_at(&self, now: Instant) -> Vec<&Toast> {
        self.toasts.iter().filter(|toast| !toast.expired(now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_and_error_are_independent() {
        let mut feedback = Feedback::default();
        feedback.show_loading();
        feedback.show_error("bad sheet");
        assert!(feedback.is_loading());
        assert_eq!(feedback.error(), Some("bad sheet"));

        feedback.hide_loading();
        assert_eq!(feedback.error(), Some("bad sheet"));
        feedback.clear_error();
        assert!(feedback.error().is_none());
    }

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let mut feedback = Feedback::default();
        let start = Instant::now();
        feedback.show_toast_at("saved", ToastKind::Success, start);

        assert_eq!(feedback.toasts_at(start + Duration::from_secs(1)).len(), 1);
        assert!(feedback.toasts_at(start + TOAST_LIFETIME).is_empty());
    }

    #[test]
    fn expired_toasts_are_dropped_on_next_show() {
        let mut feedback = Feedback::default();
        let start = Instant::now();
        feedback.show_toast_at("first", ToastKind::Info, start);
        feedback.show_toast_at("second", ToastKind::Error, start + Duration::from_secs(5));

        assert_eq!(feedback.toasts.len(), 1);
        assert_eq!(feedback.toasts[0].message, "second");
        assert_eq!(feedback.toasts[0].kind.icon(), "fas fa-times-circle");
    }
}
