//! Input action codes delivered to [`Window::on_action`](crate::Window::on_action).

/// Escape. Closes the window.
pub const ACTION_PREVIOUS_MENU: i32 = 10;
/// Backspace.
pub const ACTION_NAV_BACK: i32 = 92;
/// Left arrow.
pub const ACTION_MOVE_LEFT: i32 = 1;
/// Right arrow.
pub const ACTION_MOVE_RIGHT: i32 = 2;
/// Up arrow.
pub const ACTION_MOVE_UP: i32 = 3;
/// Down arrow.
pub const ACTION_MOVE_DOWN: i32 = 4;
pub const ACTION_MOUSE_WHEEL_UP: i32 = 104;
pub const ACTION_MOUSE_WHEEL_DOWN: i32 = 105;
pub const ACTION_MOUSE_DRAG: i32 = 106;
pub const ACTION_MOUSE_MOVE: i32 = 107;
pub const ACTION_MOUSE_LEFT_CLICK: i32 = 100;
