//! Event registry: event keys bound to ordered callback lists.
//!
//! An event is identified by an [`EventKey`], either an integer action code
//! (key presses, remote buttons, mouse actions) or the [`ControlId`] of a
//! control that was activated. Any number of [`Callback`]s may be bound to a
//! key; dispatching the key invokes them in registration order.
//!
//! # Identity
//!
//! Keys compare by value, so a control key matches any handle reporting the
//! same id. Callbacks compare by handle identity: clones of one `Callback`
//! are equal, two `Callback`s built from identical closures are not.
//!
//! # Example
//!
//! ```
//! use trellis_core::{Callback, EventKey, EventRegistry};
//!
//! let mut registry = EventRegistry::new();
//! let close = registry.connect(EventKey::Action(10), Callback::new(|| println!("closing")));
//!
//! assert_eq!(registry.dispatch(EventKey::Action(10)), 1);
//! registry.disconnect(EventKey::Action(10), Some(&close)).unwrap();
//! assert!(!registry.is_connected(EventKey::Action(10)));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::registry::ControlId;

/// The key an event is registered and dispatched under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKey {
    /// An integer action code.
    Action(i32),
    /// Activation of the control with this id.
    Control(ControlId),
}

impl From<i32> for EventKey {
    fn from(code: i32) -> Self {
        Self::Action(code)
    }
}

impl From<ControlId> for EventKey {
    fn from(id: ControlId) -> Self {
        Self::Control(id)
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(code) => write!(f, "action {code}"),
            Self::Control(id) => write!(f, "control {id}"),
        }
    }
}

/// A shareable, identity-compared callback handle.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wrap a closure in a new handle.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    #[inline]
    pub fn call(&self) {
        (self.0)()
    }

    /// Whether both handles refer to the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

/// Verdict of a control's pre-connect hook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectDecision {
    /// Connect the callback unchanged.
    #[default]
    Approve,
    /// Do not connect anything.
    Veto,
    /// Connect this callback instead of the one offered.
    Substitute(Callback),
}

impl From<bool> for ConnectDecision {
    fn from(approve: bool) -> Self {
        if approve { Self::Approve } else { Self::Veto }
    }
}

impl From<Callback> for ConnectDecision {
    fn from(callback: Callback) -> Self {
        Self::Substitute(callback)
    }
}

/// Maps event keys to ordered callback lists.
///
/// Entries are created on first connection and pruned once their list is
/// empty, so [`is_connected`](Self::is_connected) is exactly "has at least one
/// callback".
#[derive(Debug, Default)]
pub struct EventRegistry {
    entries: HashMap<EventKey, Vec<Callback>>,
}

static_assertions::assert_not_impl_any!(EventRegistry: Send, Sync);

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Append `callback` to the list for `key`.
    ///
    /// Returns the handle that was registered, for later use with
    /// [`disconnect`](Self::disconnect).
    pub fn connect(&mut self, key: impl Into<EventKey>, callback: Callback) -> Callback {
        let key = key.into();
        self.entries.entry(key).or_default().push(callback.clone());
        tracing::trace!(target: targets::EVENTS, %key, "connected callback");
        callback
    }

    /// Connect after consulting a pre-connect hook.
    ///
    /// `hook` sees the offered callback and decides whether it is connected
    /// as-is, replaced for this registration only, or not connected at all.
    /// Returns the registered handle, or `None` on veto.
    pub fn connect_with(
        &mut self,
        key: impl Into<EventKey>,
        callback: Callback,
        hook: impl FnOnce(&Callback) -> ConnectDecision,
    ) -> Option<Callback> {
        let key = key.into();
        match hook(&callback) {
            ConnectDecision::Approve => Some(self.connect(key, callback)),
            ConnectDecision::Substitute(replacement) => {
                tracing::debug!(target: targets::EVENTS, %key, "pre-connect hook substituted callback");
                Some(self.connect(key, replacement))
            }
            ConnectDecision::Veto => {
                tracing::debug!(target: targets::EVENTS, %key, "pre-connect hook vetoed connection");
                None
            }
        }
    }

    /// Connect the same callback to several keys.
    pub fn connect_all<K, I>(&mut self, keys: I, callback: &Callback)
    where
        K: Into<EventKey>,
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.connect(key, callback.clone());
        }
    }

    /// Remove callbacks bound to `key`.
    ///
    /// With `callback == None` the whole entry goes. Otherwise only the first
    /// matching handle is removed, and the entry is pruned if that empties it.
    ///
    /// # Errors
    ///
    /// [`Error::NotConnected`] if `key` has no entry, or if `callback` is not
    /// in the entry's list.
    pub fn disconnect(&mut self, key: impl Into<EventKey>, callback: Option<&Callback>) -> Result<()> {
        let key = key.into();
        let Some(list) = self.entries.get_mut(&key) else {
            return Err(Error::NotConnected {
                key,
                callback: false,
            });
        };

        match callback {
            None => {
                self.entries.remove(&key);
                tracing::trace!(target: targets::EVENTS, %key, "disconnected all callbacks");
            }
            Some(callback) => {
                let Some(index) = list.iter().position(|bound| bound == callback) else {
                    return Err(Error::NotConnected {
                        key,
                        callback: true,
                    });
                };
                list.remove(index);
                if list.is_empty() {
                    self.entries.remove(&key);
                }
                tracing::trace!(target: targets::EVENTS, %key, "disconnected callback");
            }
        }
        Ok(())
    }

    /// Apply [`disconnect`](Self::disconnect) to each key in turn.
    ///
    /// Stops at the first failure; keys before it stay disconnected.
    pub fn disconnect_all<K, I>(&mut self, keys: I, callback: Option<&Callback>) -> Result<()>
    where
        K: Into<EventKey>,
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.disconnect(key, callback)?;
        }
        Ok(())
    }

    /// Invoke every callback bound to `key`, in registration order.
    ///
    /// Unknown keys are ignored. Returns the number of callbacks invoked.
    pub fn dispatch(&self, key: impl Into<EventKey>) -> usize {
        let key = key.into();
        let callbacks = self.snapshot(key);
        if callbacks.is_empty() {
            tracing::trace!(target: targets::EVENTS, %key, "no callbacks for dispatched key");
        }
        for callback in &callbacks {
            callback.call();
        }
        callbacks.len()
    }

    /// A copy of the callback list for `key`, for dispatching outside a borrow.
    pub fn snapshot(&self, key: impl Into<EventKey>) -> Vec<Callback> {
        self.callbacks(key).to_vec()
    }

    /// The callbacks bound to `key`, in registration order.
    pub fn callbacks(&self, key: impl Into<EventKey>) -> &[Callback] {
        self.entries
            .get(&key.into())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `key` has at least one callback.
    pub fn is_connected(&self, key: impl Into<EventKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Number of keys with at least one callback.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is connected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over connected keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = EventKey> + '_ {
        self.entries.keys().copied()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
