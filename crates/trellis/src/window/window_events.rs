//! Event wiring, focus and input entry points of a [`Window`].

use trellis_core::logging::targets;
use trellis_core::{Callback, ControlId, Error, EventKey, EventRegistry, Result};

use super::host_window::Window;
use crate::actions::ACTION_PREVIOUS_MENU;
use crate::group::Group;
use crate::host::{HostId, HostPrimitive};

impl<P: HostPrimitive> Window<P> {
    // =========================================================================
    // Connections
    // =========================================================================

    /// Connect a callback to an action code or a control.
    ///
    /// If the key is a control with hooks, its `pre_connect` hook decides
    /// first: it may veto the connection or substitute another callback.
    /// Returns the callback actually connected, if any.
    pub fn connect(&mut self, key: impl Into<EventKey>, callback: Callback) -> Option<Callback> {
        let key = key.into();
        let hooks = match key {
            EventKey::Control(id) => self
                .controls
                .get_mut(id)
                .and_then(|slot| slot.control.hooks()),
            EventKey::Action(_) => None,
        };
        match hooks {
            Some(hooks) => self.events.connect_with(key, callback, |callback| {
                hooks.pre_connect(callback, HostId::Window)
            }),
            None => Some(self.events.connect(key, callback)),
        }
    }

    /// Connect one callback to several keys, consulting each control's
    /// `pre_connect` hook separately.
    pub fn connect_event_list<K, I>(&mut self, keys: I, callback: &Callback)
    where
        K: Into<EventKey>,
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.connect(key, callback.clone());
        }
    }

    /// Disconnect `callback` from `key`, or every callback if `None`.
    ///
    /// Fails with [`NotConnected`](Error::NotConnected) if the key has no
    /// callbacks, or does not hold the given one.
    pub fn disconnect(&mut self, key: impl Into<EventKey>, callback: Option<&Callback>) -> Result<()> {
        self.events.disconnect(key, callback)
    }

    /// Disconnect several keys, stopping at the first failure.
    pub fn disconnect_event_list<K, I>(&mut self, keys: I, callback: Option<&Callback>) -> Result<()>
    where
        K: Into<EventKey>,
        I: IntoIterator<Item = K>,
    {
        self.events.disconnect_all(keys, callback)
    }

    /// Invoke every callback bound to `key`. Returns how many ran.
    pub fn dispatch(&self, key: impl Into<EventKey>) -> usize {
        self.events.dispatch(key)
    }

    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    // =========================================================================
    // Input entry points
    // =========================================================================

    /// Handle an input action from the native layer.
    ///
    /// [`ACTION_PREVIOUS_MENU`] closes the window; anything else dispatches
    /// the action's callbacks.
    pub fn on_action(&mut self, code: i32) {
        if code == ACTION_PREVIOUS_MENU {
            self.close();
        } else {
            self.dispatch(code);
        }
    }

    /// Handle activation of a control by the native layer.
    pub fn on_control(&mut self, id: ControlId) {
        if self.close_control == Some(id) {
            self.close();
        } else {
            self.dispatch(id);
        }
    }

    /// Handle focus having moved to `id` in the native layer.
    ///
    /// A non-empty group passes focus on to its first child. Other controls
    /// get their `on_focused` hook run; its answer is ignored since focus
    /// already moved.
    pub fn on_focus(&mut self, id: ControlId) {
        let Some(slot) = self.controls.get_mut(id) else {
            tracing::trace!(target: targets::WINDOW, control = %id, "focus on unknown control");
            return;
        };
        if let Some(first) = slot.control.as_group().and_then(Group::first_child) {
            if let Err(err) = self.set_focus(first) {
                tracing::warn!(target: targets::WINDOW, group = %id, child = %first, %err, "focus diversion failed");
            }
            return;
        }
        if let Some(hooks) = slot.control.hooks() {
            hooks.on_focused();
        }
        self.focused = Some(id);
    }

    /// Give `id` input focus.
    ///
    /// A group with children diverts focus to its first child. Otherwise
    /// the control's `on_focused` hook may refuse, in which case nothing
    /// changes and `false` is returned.
    ///
    /// Fails with [`NotPlaced`](Error::NotPlaced) for a control that is not
    /// shown.
    pub fn set_focus(&mut self, id: ControlId) -> Result<bool> {
        let slot = self.controls.get_mut(id).ok_or(Error::InvalidControl(id))?;
        if slot.owner.is_none() {
            return Err(Error::NotPlaced(id));
        }
        if let Some(first) = slot.control.as_group().and_then(Group::first_child) {
            return self.set_focus(first);
        }
        let accepted = slot.control.hooks().is_none_or(|hooks| hooks.on_focused());
        if !accepted {
            tracing::debug!(target: targets::WINDOW, control = %id, "focus refused");
            return Ok(false);
        }
        self.primitive.set_focus(id);
        self.focused = Some(id);
        Ok(true)
    }

    /// The control that last received focus.
    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    // =========================================================================
    // Closing
    // =========================================================================

    /// Designate the control whose activation closes the window.
    pub fn set_close_control(&mut self, id: Option<ControlId>) {
        self.close_control = id;
    }

    pub fn close_control(&self) -> Option<ControlId> {
        self.close_control
    }

    pub fn close(&mut self) {
        tracing::debug!(target: targets::WINDOW, title = %self.title, "window closed");
        self.closed = true;
        self.primitive.close();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell as Counter;
    use std::rc::Rc;

    use super::*;
    use crate::actions::ACTION_NAV_BACK;
    use crate::control::{BasicControl, ControlHooks};
    use crate::placement::Cell;
    use crate::window::WindowConfig;
    use trellis_core::ConnectDecision;

    fn setup() -> Window {
        let mut window = Window::new();
        window.set_geometry(&WindowConfig::new(800, 600, 3, 3)).unwrap();
        window
    }

    fn counter() -> (Rc<Counter<u32>>, Callback) {
        let count = Rc::new(Counter::new(0));
        let handle = count.clone();
        (count, Callback::new(move || handle.set(handle.get() + 1)))
    }

    struct Decide(Option<ConnectDecision>);

    impl ControlHooks for Decide {
        fn pre_connect(&mut self, _callback: &Callback, host: HostId) -> ConnectDecision {
            assert_eq!(host, HostId::Window);
            self.0.take().unwrap_or_default()
        }
    }

    struct RefuseFocus;

    impl ControlHooks for RefuseFocus {
        fn on_focused(&mut self) -> bool {
            false
        }
    }

    #[test]
    fn test_pre_connect_veto() {
        let mut window = setup();
        let label =
            window.insert(BasicControl::label().with_hooks(Decide(Some(ConnectDecision::Veto))));
        let (count, callback) = counter();

        assert!(window.connect(label, callback.clone()).is_none());
        window.on_control(label);
        assert_eq!(count.get(), 0);
        assert!(window.disconnect(label, Some(&callback)).unwrap_err().is_not_connected());
    }

    #[test]
    fn test_pre_connect_substitute() {
        let mut window = setup();
        let (original_count, original) = counter();
        let (substitute_count, substitute) = counter();
        let decision = ConnectDecision::Substitute(substitute.clone());
        let label = window.insert(BasicControl::label().with_hooks(Decide(Some(decision))));

        assert_eq!(window.connect(label, original), Some(substitute.clone()));
        window.on_control(label);
        assert_eq!(original_count.get(), 0);
        assert_eq!(substitute_count.get(), 1);
        window.disconnect(label, Some(&substitute)).unwrap();
    }

    #[test]
    fn test_connect_event_list() {
        let mut window = setup();
        let a = window.insert(BasicControl::button());
        let b = window.insert(BasicControl::button());
        let (count, callback) = counter();

        window.connect_event_list([a, b], &callback);
        window.on_control(a);
        window.on_control(b);
        assert_eq!(count.get(), 2);

        window.disconnect_event_list([a, b], Some(&callback)).unwrap();
        window.on_control(a);
        assert_eq!(count.get(), 2);
        assert!(window.events().is_empty());
    }

    #[test]
    fn test_actions() {
        let mut window = setup();
        let (count, callback) = counter();
        window.connect(ACTION_NAV_BACK, callback);

        window.on_action(ACTION_NAV_BACK);
        assert_eq!(count.get(), 1);
        assert!(!window.is_closed());

        window.on_action(ACTION_PREVIOUS_MENU);
        assert!(window.is_closed());
        assert!(window.primitive().is_closed());
    }

    #[test]
    fn test_close_control() {
        let mut window = setup();
        let close = window.insert(BasicControl::button());
        window.set_close_control(Some(close));
        window.on_control(close);
        assert!(window.is_closed());
    }

    #[test]
    fn test_focus() {
        let mut window = setup();
        let button = window.insert(BasicControl::button());
        let stubborn = window.insert(BasicControl::button().with_hooks(RefuseFocus));
        let hidden = window.insert(BasicControl::button());
        window.place_control(button, Cell::new(0, 0)).unwrap();
        window.place_control(stubborn, Cell::new(0, 1)).unwrap();

        assert_eq!(window.set_focus(hidden), Err(Error::NotPlaced(hidden)));
        assert_eq!(window.primitive().focused(), None);

        assert_eq!(window.set_focus(button), Ok(true));
        assert_eq!(window.primitive().focused(), Some(button));

        assert_eq!(window.set_focus(stubborn), Ok(false));
        assert_eq!(window.focused(), Some(button));
    }

    #[test]
    fn test_group_diverts_focus() {
        let mut window = setup();
        let group = window.insert(Group::new(1, 2).unwrap());
        let first = window.insert(BasicControl::button());
        let second = window.insert(BasicControl::button());

        window.place_control(group, Cell::new(0, 0)).unwrap();
        assert_eq!(window.set_focus(group), Ok(true));
        assert_eq!(window.focused(), Some(group));

        window.place_control_in(HostId::Group(group), first, Cell::new(0, 0)).unwrap();
        window.place_control_in(HostId::Group(group), second, Cell::new(0, 1)).unwrap();
        assert_eq!(window.set_focus(group), Ok(true));
        assert_eq!(window.primitive().focused(), Some(first));

        window.on_focus(group);
        assert_eq!(window.focused(), Some(first));
    }

    #[test]
    fn test_group_focus_respects_child_refusal() {
        let mut window = setup();
        let group = window.insert(Group::new(1, 2).unwrap());
        let stubborn = window.insert(BasicControl::button().with_hooks(RefuseFocus));
        let other = window.insert(BasicControl::button());
        window.place_control(other, Cell::new(1, 0)).unwrap();
        window.place_control(group, Cell::new(0, 0)).unwrap();
        window.place_control_in(HostId::Group(group), stubborn, Cell::new(0, 0)).unwrap();

        assert_eq!(window.set_focus(other), Ok(true));
        assert_eq!(window.set_focus(group), Ok(false));
        window.on_focus(group);
        assert_eq!(window.focused(), Some(other));
        assert_eq!(window.primitive().focused(), Some(other));
    }
}
