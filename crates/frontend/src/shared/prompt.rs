//! User-facing affordances: blocking confirm/alert dialogs and toasts.

use crate::layout::toasts::ToastService;
use contracts::shared::logger::Severity;

pub trait UserPrompt: Send + Sync {
    /// `false` when the user declines or no window is available
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
    fn toast(&self, message: &str, severity: Severity);
}

/// `window.confirm` / `window.alert` plus the in-page toast stack
#[derive(Clone, Copy)]
pub struct BrowserPrompt {
    toasts: ToastService,
}

impl BrowserPrompt {
    pub fn new(toasts: ToastService) -> Self {
        Self { toasts }
    }
}

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn toast(&self, message: &str, severity: Severity) {
        self.toasts.show(message, severity);
    }
}
