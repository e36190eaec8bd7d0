//! Scoped event-listener subscriptions.
//!
//! The viewer listens on the window, not on its own canvas, so nothing
//! removes those handlers when the canvas leaves the page. Every listener is
//! therefore held by a [`Subscription`] whose release runs exactly once,
//! either explicitly or on drop. A viewer keeps its subscriptions in a
//! [`Subscriptions`] set and drops them all when it closes.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// Handle for one attached listener. Releasing it detaches the listener.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a release action.
    #[must_use]
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Detach now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

/// A set of subscriptions released together.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<Subscription>,
}

impl Subscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.active.push(subscription);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Release every subscription in attach order.
    pub fn release_all(&mut self) {
        for subscription in self.active.drain(..) {
            subscription.release();
        }
    }
}

/// Attach `handler` for `event` on `target`.
///
/// Events that cannot be cast to `E` are skipped. The returned subscription
/// removes the listener and frees the JS closure when released.
///
/// # Errors
///
/// Returns `Err` if the browser rejects the listener registration.
pub fn listen<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Result<Subscription, JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
        if let Ok(typed) = raw.dyn_into::<E>() {
            handler(typed);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    let target = target.clone();
    Ok(Subscription::new(move || {
        if let Err(err) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::warn!("failed to detach {event} listener: {err:?}");
        }
        drop(closure);
    }))
}
