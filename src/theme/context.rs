//! Observable holder for the active design variant.
//!
//! One instance lives in the application state; it is deliberately not a
//! process-wide global so independent server instances (tests in particular)
//! never share variant state.

use tokio::sync::watch;

use super::{resolve, ThemeDescriptor, VariantKey};

/// Mutable cell for the currently active variant with change notification.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    tx: watch::Sender<VariantKey>,
}

impl ThemeContext {
    /// Create a context with the given initial variant.
    pub fn new(initial: VariantKey) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// The currently active variant key.
    pub fn active(&self) -> VariantKey {
        *self.tx.borrow()
    }

    /// The descriptor for the currently active variant.
    pub fn active_theme(&self) -> &'static ThemeDescriptor {
        resolve(self.active())
    }

    /// Switch the active variant. Returns whether the value actually changed;
    /// re-setting the current key produces no change notification.
    pub fn set(&self, key: VariantKey) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == key {
                false
            } else {
                *current = key;
                true
            }
        })
    }

    /// Subscribe to variant changes. Each effective `set` wakes subscribers
    /// exactly once.
    pub fn subscribe(&self) -> watch::Receiver<VariantKey> {
        self.tx.subscribe()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(VariantKey::A)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value() {
        let ctx = ThemeContext::default();
        assert_eq!(ctx.active(), VariantKey::A);
        assert_eq!(ctx.active_theme().name, "Premium Classical");
    }

    #[test]
    fn test_set_and_read_back() {
        let ctx = ThemeContext::default();
        assert!(ctx.set(VariantKey::C));
        assert_eq!(ctx.active(), VariantKey::C);
    }

    #[test]
    fn test_set_same_key_is_noop() {
        let ctx = ThemeContext::default();
        assert!(ctx.set(VariantKey::B));
        assert!(!ctx.set(VariantKey::B));
        assert_eq!(ctx.active(), VariantKey::B);
    }

    #[tokio::test]
    async fn test_subscriber_sees_one_notification_per_change() {
        let ctx = ThemeContext::default();
        let mut rx = ctx.subscribe();

        ctx.set(VariantKey::B);
        ctx.set(VariantKey::B);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), VariantKey::B);
        // The duplicate set must not have queued a second notification.
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_contexts_are_independent() {
        let a = ThemeContext::default();
        let b = ThemeContext::default();
        a.set(VariantKey::C);
        assert_eq!(b.active(), VariantKey::A);
    }
}
