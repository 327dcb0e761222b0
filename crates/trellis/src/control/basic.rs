use std::fmt;

use super::hooks::borrow_hooks;
use super::{Control, ControlBase, ControlHooks, ControlKind};

/// A plain control of any kind, optionally carrying hooks.
///
/// Content such as label text or images lives in the native layer; this type
/// only tracks what layout, navigation and event wiring need.
pub struct BasicControl {
    base: ControlBase,
    hooks: Option<Box<dyn ControlHooks>>,
}

impl BasicControl {
    pub fn new(kind: ControlKind) -> Self {
        Self {
            base: ControlBase::new::<Self>(kind),
            hooks: None,
        }
    }

    pub fn label() -> Self {
        Self::new(ControlKind::Label)
    }

    pub fn fade_label() -> Self {
        Self::new(ControlKind::FadeLabel)
    }

    pub fn text_box() -> Self {
        Self::new(ControlKind::TextBox)
    }

    pub fn image() -> Self {
        Self::new(ControlKind::Image)
    }

    pub fn button() -> Self {
        Self::new(ControlKind::Button)
    }

    pub fn radio_button() -> Self {
        Self::new(ControlKind::RadioButton)
    }

    pub fn edit() -> Self {
        Self::new(ControlKind::Edit)
    }

    pub fn list() -> Self {
        Self::new(ControlKind::List)
    }

    pub fn slider() -> Self {
        Self::new(ControlKind::Slider)
    }

    /// Set a debug name, shown in logs and tree dumps.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.base.set_name(name);
        self
    }

    /// Attach lifecycle hooks.
    pub fn with_hooks(mut self, hooks: impl ControlHooks) -> Self {
        self.hooks = Some(Box::new(hooks));
        self
    }
}

impl Control for BasicControl {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn hooks(&mut self) -> Option<&mut dyn ControlHooks> {
        borrow_hooks(&mut self.hooks)
    }
}

impl fmt::Debug for BasicControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicControl")
            .field("base", &self.base)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Refuse;

    impl ControlHooks for Refuse {
        fn on_focused(&mut self) -> bool {
            false
        }
    }

    #[test]
    fn test_without_hooks() {
        let mut label = BasicControl::label();
        assert!(label.hooks().is_none());
        assert_eq!(label.kind(), ControlKind::Label);
    }

    #[test]
    fn test_with_hooks() {
        let mut button = BasicControl::button().with_name("ok").with_hooks(Refuse);
        assert_eq!(button.base().name(), "ok");
        let hooks = button.hooks().unwrap();
        assert!(!hooks.on_focused());
    }
}
