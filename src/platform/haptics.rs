use log::debug;
use web_sys::js_sys::Array;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

impl HapticIntensity {
    /// Vibration pattern in milliseconds, alternating on/off.
    pub fn pattern(&self) -> &'static [u32] {
        match self {
            HapticIntensity::Light => &[10],
            HapticIntensity::Medium => &[20],
            HapticIntensity::Heavy => &[30, 10, 30],
        }
    }
}

pub trait HapticFeedback {
    fn pulse(&self, intensity: HapticIntensity);
}

/// `navigator.vibrate` backed feedback. Silently does nothing where the
/// API is missing (desktop browsers, iOS).
#[derive(Debug, Default, Clone, Copy)]
pub struct VibrationHaptics;

impl HapticFeedback for VibrationHaptics {
    fn pulse(&self, intensity: HapticIntensity) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pattern: Array = intensity
            .pattern()
            .iter()
            .map(|ms| JsValue::from(*ms))
            .collect();
        if !window.navigator().vibrate_with_pattern(&pattern) {
            debug!("vibration not available");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavier_pulses_last_longer() {
        let total = |i: HapticIntensity| i.pattern().iter().sum::<u32>();
        assert!(total(HapticIntensity::Light) < total(HapticIntensity::Medium));
        assert!(total(HapticIntensity::Medium) < total(HapticIntensity::Heavy));
        assert_eq!(HapticIntensity::Heavy.pattern(), &[30, 10, 30]);
    }
}
