//! Narrow wrappers around the browser APIs the page depends on.
//!
//! Each capability is a trait with one browser-backed implementation, so
//! components can be handed a fake in tests.

pub mod gestures;
pub mod haptics;
pub mod motion;
pub mod network;
pub mod opener;
pub mod scroll;
pub mod viewport;
pub mod vitals;

pub use gestures::{classify_swipe, SwipeDirection};
pub use haptics::{HapticFeedback, HapticIntensity, VibrationHaptics};
pub use motion::{MediaQueryMotion, MotionPreference};
pub use network::{ConnectionWatch, NetworkInfo, NetworkSpeed};
pub use opener::{BrowserOpener, ChannelStatus, ExternalOpener, OpenError};
pub use scroll::scroll_progress;
pub use viewport::{IntersectionViewport, ViewportObserver, ViewportOptions};

/// Milliseconds since page load, or 0 outside a browser.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
