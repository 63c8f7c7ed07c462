//! The results panel boundary.
//!
//! The panel is the one shared mutable resource of the system. It is
//! injected into the flow rather than looked up globally, so the flow
//! runs headless in tests and behind any display a consumer provides.

use std::sync::Mutex;

/// The results area the flow renders into.
///
/// `show` replaces the panel's entire contents. That replace-everything
/// contract is what guarantees the loading markup is removed on every
/// exit path: whichever terminal view is shown, nothing of the previous
/// state survives.
pub trait ResultsPanel: Send + Sync {
    fn show(&self, html: &str);
}

/// In-memory panel that records every frame it is shown.
///
/// The default panel for headless use: the CLI reads its final frame, and
/// tests assert on the whole frame sequence.
#[derive(Debug, Default)]
pub struct MemoryPanel {
    frames: Mutex<Vec<String>>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame shown so far, oldest first.
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().expect("panel lock poisoned").clone()
    }

    /// The panel's current contents, if anything was shown yet.
    pub fn current(&self) -> Option<String> {
        self.frames
            .lock()
            .expect("panel lock poisoned")
            .last()
            .cloned()
    }
}

impl ResultsPanel for MemoryPanel {
    fn show(&self, html: &str) {
        self.frames
            .lock()
            .expect("panel lock poisoned")
            .push(html.to_string());
    }
}
