//! State Module - Host-driven state shared by all sections
//!
//! - **Resolution** - Computed-once high pixel density flag
//! - **Viewport** - Viewport width signal and resize subscriptions

pub mod resolution;
pub mod viewport;

pub use resolution::{detect_device_pixel_ratio, is_hi_res, ResolutionDetector};
pub use viewport::{
    dispatch_resize, reset_viewport_state, set_viewport_width, subscribe, subscriber_count,
    viewport_width, viewport_width_signal, ResizeSubscription,
};
