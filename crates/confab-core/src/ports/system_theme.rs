//! OS theme signal port.
//!
//! This port exposes the OS-level "prefers dark" signal: a current reading
//! plus a change subscription. Unlike the other ports, the subscription
//! channel type is part of the contract here - observers need both the
//! current value and a wakeup, which is exactly what a watch receiver is.

use tokio::sync::watch;

/// Port for the OS dark/light preference signal.
pub trait SystemThemePort: Send + Sync {
    /// Current OS reading.
    ///
    /// `None` means the signal cannot be read (headless session, no display
    /// environment); callers decide the fallback.
    fn prefers_dark(&self) -> Option<bool>;

    /// Subscribe to change notifications.
    ///
    /// The receiver yields the new reading whenever the OS preference
    /// changes. The subscription is process-scoped; it ends when the
    /// implementation is dropped.
    fn subscribe(&self) -> watch::Receiver<Option<bool>>;
}

/// A `SystemThemePort` backed by an in-process value.
///
/// Used by tests and by headless contexts with no OS signal to observe. The
/// value can be changed through [`FixedSystemTheme::set`], which notifies
/// subscribers; real adapters wire an OS callback to the same mechanism.
#[derive(Debug)]
pub struct FixedSystemTheme {
    value: watch::Sender<Option<bool>>,
}

impl FixedSystemTheme {
    /// Create a signal with a fixed initial reading.
    #[must_use]
    pub fn new(prefers_dark: Option<bool>) -> Self {
        let (value, _) = watch::channel(prefers_dark);
        Self { value }
    }

    /// Change the reading and notify subscribers.
    pub fn set(&self, prefers_dark: Option<bool>) {
        self.value.send_replace(prefers_dark);
    }
}

impl Default for FixedSystemTheme {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SystemThemePort for FixedSystemTheme {
    fn prefers_dark(&self) -> Option<bool> {
        *self.value.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<Option<bool>> {
        self.value.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_notifies_subscribers() {
        let signal = FixedSystemTheme::new(Some(false));
        let mut rx = signal.subscribe();

        signal.set(Some(true));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some(true));
        assert_eq!(signal.prefers_dark(), Some(true));
    }

    #[test]
    fn test_default_is_unreadable() {
        assert_eq!(FixedSystemTheme::default().prefers_dark(), None);
    }
}
