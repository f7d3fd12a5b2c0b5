//! Dialog Capability
//!
//! `window.confirm` / `window.alert` are blocking singleton primitives, so
//! they are wrapped in a capability provided via Leptos context. Components
//! ask the context for dialogs; tests (or a future non-blocking UI) can
//! provide a substitute.

use std::sync::Arc;

use leptos::prelude::*;

pub trait DialogProvider: Send + Sync {
    /// Ask the user a yes/no question. `false` on dismissal.
    fn confirm(&self, message: &str) -> bool;
    /// Show a blocking notice.
    fn alert(&self, message: &str);
}

/// Shared handle to the active dialog provider.
#[derive(Clone)]
pub struct Dialogs(Arc<dyn DialogProvider>);

impl Dialogs {
    pub fn new(provider: impl DialogProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn confirm(&self, message: &str) -> bool {
        self.0.confirm(message)
    }

    pub fn alert(&self, message: &str) {
        self.0.alert(message);
    }
}

/// Browser-native dialogs. Missing `window` (never the case in a mounted
/// app) degrades to "declined" / no-op.
pub struct BrowserDialogs;

impl DialogProvider for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}

/// Dialogs from context, falling back to the browser implementation.
pub fn use_dialogs() -> Dialogs {
    use_context::<Dialogs>().unwrap_or_else(|| Dialogs::new(BrowserDialogs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Scripted provider recording every prompt it is shown.
    struct RecordingDialogs {
        answer: bool,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl DialogProvider for RecordingDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.log.lock().unwrap().push(format!("confirm: {}", message));
            self.answer
        }

        fn alert(&self, message: &str) {
            self.log.lock().unwrap().push(format!("alert: {}", message));
        }
    }

    #[test]
    fn test_recording_double_scripts_answers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dialogs = Dialogs::new(RecordingDialogs { answer: true, log: log.clone() });

        assert!(dialogs.confirm("Delete?"));
        dialogs.alert("Done");

        let entries = log.lock().unwrap();
        assert_eq!(entries.as_slice(), ["confirm: Delete?", "alert: Done"]);
    }

    #[test]
    fn test_declined_confirmation() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dialogs = Dialogs::new(RecordingDialogs { answer: false, log });
        assert!(!dialogs.confirm("Delete?"));
    }
}
