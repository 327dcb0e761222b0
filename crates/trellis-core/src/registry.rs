//! Control identity.
//!
//! Every control carries a [`ControlId`] allocated from a process-wide
//! registry when the control is constructed. The id is the control's
//! identity: event keys, navigation links and host child lists all refer to
//! controls by id, never by reference, so two handles that report the same id
//! denote the same control.
//!
//! # Key Types
//!
//! - [`ControlId`] - Stable identifier, valid for the lifetime of the control
//! - [`Identity`] - Owning handle that allocates an id and releases it on drop
//! - [`ControlRegistry`] - Arena of live ids with debug names and type names
//! - [`SharedControlRegistry`] - Lock-protected wrapper used by [`global_registry`]

use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{Key, SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a control.
    ///
    /// Ids are stable for as long as the owning [`Identity`] is alive and are
    /// never reused while it is. Ordering follows allocation slot order and is
    /// only meaningful as a deterministic tie-breaker.
    pub struct ControlId;
}

impl ControlId {
    /// Convert the id to a raw `u64`, e.g. for a native control handle.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.data().as_ffi()
    }

    /// Rebuild an id from a raw value produced by [`as_raw`](Self::as_raw).
    ///
    /// This does not check that the id is still registered.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.data())
    }
}

/// Debug data kept for each live control.
struct ControlRecord {
    name: String,
    type_name: &'static str,
}

/// Arena of live control ids.
pub struct ControlRegistry {
    controls: SlotMap<ControlId, ControlRecord>,
}

impl ControlRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            controls: SlotMap::with_key(),
        }
    }

    /// Allocate an id for a control of type `T`.
    pub fn register<T: 'static>(&mut self) -> ControlId {
        let type_name = std::any::type_name::<T>();
        let id = self.controls.insert(ControlRecord {
            name: String::new(),
            type_name,
        });
        tracing::trace!(target: targets::REGISTRY, %id, type_name, "registered control");
        id
    }

    /// Release an id. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: ControlId) -> bool {
        let removed = self.controls.remove(id).is_some();
        if removed {
            tracing::trace!(target: targets::REGISTRY, %id, "unregistered control");
        }
        removed
    }

    /// Whether `id` refers to a live control.
    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(id)
    }

    /// The debug name of a control, if it is registered.
    pub fn name(&self, id: ControlId) -> Option<&str> {
        self.controls.get(id).map(|record| record.name.as_str())
    }

    /// Set the debug name of a control. Returns `false` for unknown ids.
    pub fn set_name(&mut self, id: ControlId, name: String) -> bool {
        match self.controls.get_mut(id) {
            Some(record) => {
                record.name = name;
                true
            }
            None => false,
        }
    }

    /// The concrete Rust type the id was allocated for.
    pub fn type_name(&self, id: ControlId) -> Option<&'static str> {
        self.controls.get(id).map(|record| record.type_name)
    }

    /// Number of live controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether no controls are registered.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl Default for ControlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A lock-protected [`ControlRegistry`].
pub struct SharedControlRegistry {
    inner: RwLock<ControlRegistry>,
}

impl SharedControlRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ControlRegistry::new()),
        }
    }

    /// Allocate an id for a control of type `T`.
    pub fn register<T: 'static>(&self) -> ControlId {
        self.inner.write().register::<T>()
    }

    /// Release an id. Returns `false` if it was not registered.
    pub fn unregister(&self, id: ControlId) -> bool {
        self.inner.write().unregister(id)
    }

    /// Whether `id` refers to a live control.
    pub fn contains(&self, id: ControlId) -> bool {
        self.inner.read().contains(id)
    }

    /// The debug name of a control, if it is registered.
    pub fn name(&self, id: ControlId) -> Option<String> {
        self.inner.read().name(id).map(str::to_owned)
    }

    /// Set the debug name of a control. Returns `false` for unknown ids.
    pub fn set_name(&self, id: ControlId, name: impl Into<String>) -> bool {
        self.inner.write().set_name(id, name.into())
    }

    /// The concrete Rust type the id was allocated for.
    pub fn type_name(&self, id: ControlId) -> Option<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Number of live controls.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no controls are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run a closure with shared access to the registry.
    pub fn with_read<R>(&self, f: impl FnOnce(&ControlRegistry) -> R) -> R {
        f(&self.inner.read())
    }
}

impl Default for SharedControlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide control registry, created on first use.
pub fn global_registry() -> &'static SharedControlRegistry {
    static REGISTRY: OnceLock<SharedControlRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SharedControlRegistry::new)
}

/// Owning handle for a control id.
///
/// Constructing an `Identity` registers a fresh id; dropping it releases the
/// id. Controls embed one (usually through their base struct) so that their
/// identity lives exactly as long as they do.
pub struct Identity {
    id: ControlId,
}

impl Identity {
    /// Allocate an identity for a control of type `T`.
    pub fn new<T: 'static>() -> Self {
        Self {
            id: global_registry().register::<T>(),
        }
    }

    /// The allocated id.
    #[inline]
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The debug name, empty if none was set.
    pub fn name(&self) -> String {
        global_registry().name(self.id).unwrap_or_default()
    }

    /// Set the debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        global_registry().set_name(self.id, name);
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity").field("id", &self.id).finish()
    }
}

impl Drop for Identity {
    fn drop(&mut self) {
        global_registry().unregister(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    #[test]
    fn test_identity_is_released_on_drop() {
        let identity = Identity::new::<Dummy>();
        let id = identity.id();
        assert!(global_registry().contains(id));
        assert!(global_registry().type_name(id).unwrap().ends_with("Dummy"));

        drop(identity);
        assert!(!global_registry().contains(id));
    }

    #[test]
    fn test_identities_are_distinct() {
        let a = Identity::new::<Dummy>();
        let b = Identity::new::<Dummy>();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_raw_round_trip() {
        let identity = Identity::new::<Dummy>();
        assert_eq!(ControlId::from_raw(identity.id().as_raw()), identity.id());
    }

    #[test]
    fn test_names() {
        let identity = Identity::new::<Dummy>();
        assert_eq!(identity.name(), "");
        identity.set_name("ok_button");
        assert_eq!(identity.name(), "ok_button");
    }

    #[test]
    fn test_local_registry() {
        let mut registry = ControlRegistry::new();
        let id = registry.register::<Dummy>();
        assert_eq!(registry.len(), 1);
        assert!(registry.set_name(id, "x".into()));
        assert_eq!(registry.name(id), Some("x"));
        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }
}
