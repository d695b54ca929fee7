// Browser-side names used when mounting onto a page.

pub const CONTEXT_2D: &str = "2d";

// Event names
pub const EV_MOUSE_ENTER: &str = "mouseenter";
pub const EV_MOUSE_MOVE: &str = "mousemove";
pub const EV_MOUSE_LEAVE: &str = "mouseleave";
pub const EV_TOUCH_START: &str = "touchstart";
pub const EV_TOUCH_MOVE: &str = "touchmove";
pub const EV_TOUCH_END: &str = "touchend";
