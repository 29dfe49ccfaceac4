const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

/// Reads the `prefers-reduced-motion` media query.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaQueryMotion;

impl MotionPreference for MediaQueryMotion {
    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}
