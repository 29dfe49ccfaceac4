use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::EventTarget;

/// `navigator.connection`, where the browser has one.
fn connection() -> Option<JsValue> {
    let navigator = web_sys::window()?.navigator();
    Reflect::get(&navigator, &JsValue::from_str("connection"))
        .ok()
        .filter(|c| c.is_object())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkSpeed {
    Slow,
    Medium,
    Fast,
}

impl NetworkSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkSpeed::Slow => "slow",
            NetworkSpeed::Medium => "medium",
            NetworkSpeed::Fast => "fast",
        }
    }

    pub fn from_effective_type(effective_type: Option<&str>) -> Self {
        match effective_type {
            Some("slow-2g") => NetworkSpeed::Slow,
            Some("2g") | Some("3g") => NetworkSpeed::Medium,
            _ => NetworkSpeed::Fast,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    TwoG,
    ThreeG,
    FourG,
    FiveG,
    Wifi,
    Unknown,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::TwoG => "2g",
            ConnectionType::ThreeG => "3g",
            ConnectionType::FourG => "4g",
            ConnectionType::FiveG => "5g",
            ConnectionType::Wifi => "wifi",
            ConnectionType::Unknown => "unknown",
        }
    }

    /// `effective_type` wins over the physical `kind` except for wifi.
    pub fn classify(effective_type: Option<&str>, kind: Option<&str>) -> Self {
        match effective_type.or(kind) {
            Some("slow-2g") | Some("2g") => ConnectionType::TwoG,
            Some("3g") => ConnectionType::ThreeG,
            Some("4g") => ConnectionType::FourG,
            Some("5g") => ConnectionType::FiveG,
            _ if kind == Some("wifi") => ConnectionType::Wifi,
            _ => ConnectionType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    pub online: bool,
    pub speed: NetworkSpeed,
    pub kind: ConnectionType,
    pub save_data: bool,
}

impl Default for NetworkInfo {
    fn default() -> Self {
        Self {
            online: true,
            speed: NetworkSpeed::Fast,
            kind: ConnectionType::Unknown,
            save_data: false,
        }
    }
}

impl NetworkInfo {
    /// Reads `navigator.onLine` and the non-standard `navigator.connection`.
    pub fn current() -> Self {
        let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
            return Self::default();
        };
        let connection = connection();
        let read = |key: &str| -> Option<JsValue> {
            connection
                .as_ref()
                .and_then(|c| Reflect::get(c, &JsValue::from_str(key)).ok())
        };
        let effective_type = read("effectiveType").and_then(|v| v.as_string());
        let kind = read("type").and_then(|v| v.as_string());
        let save_data = read("saveData").and_then(|v| v.as_bool()).unwrap_or(false);

        Self::from_readings(
            navigator.on_line(),
            effective_type.as_deref(),
            kind.as_deref(),
            save_data,
        )
    }

    pub fn from_readings(
        online: bool,
        effective_type: Option<&str>,
        kind: Option<&str>,
        save_data: bool,
    ) -> Self {
        Self {
            online,
            speed: NetworkSpeed::from_effective_type(effective_type),
            kind: ConnectionType::classify(effective_type, kind),
            save_data,
        }
    }

    /// Whether heavy media should be skipped.
    pub fn should_save_data(&self) -> bool {
        !self.online || self.speed == NetworkSpeed::Slow || self.save_data
    }
}

/// A `change` listener on `navigator.connection`, removed on drop.
pub struct ConnectionWatch {
    target: EventTarget,
    listener: Closure<dyn FnMut(JsValue)>,
}

impl ConnectionWatch {
    /// `None` where the Network Information API is missing (Firefox, Safari).
    pub fn start(on_change: impl Fn() + 'static) -> Option<Self> {
        let target: EventTarget = connection()?.unchecked_into();
        let listener = Closure::wrap(Box::new(move |_: JsValue| on_change()) as Box<dyn FnMut(JsValue)>);
        if let Err(e) = target.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            warn!("could not watch the connection: {:?}", e);
            return None;
        }
        Some(Self { target, listener })
    }
}

impl Drop for ConnectionWatch {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_from_effective_type() {
        assert_eq!(NetworkSpeed::from_effective_type(Some("slow-2g")), NetworkSpeed::Slow);
        assert_eq!(NetworkSpeed::from_effective_type(Some("2g")), NetworkSpeed::Medium);
        assert_eq!(NetworkSpeed::from_effective_type(Some("3g")), NetworkSpeed::Medium);
        assert_eq!(NetworkSpeed::from_effective_type(Some("4g")), NetworkSpeed::Fast);
        assert_eq!(NetworkSpeed::from_effective_type(None), NetworkSpeed::Fast);
    }

    #[test]
    fn connection_type_classification() {
        assert_eq!(ConnectionType::classify(Some("slow-2g"), None), ConnectionType::TwoG);
        assert_eq!(ConnectionType::classify(Some("4g"), Some("wifi")), ConnectionType::FourG);
        assert_eq!(ConnectionType::classify(None, Some("wifi")), ConnectionType::Wifi);
        assert_eq!(ConnectionType::classify(None, Some("ethernet")), ConnectionType::Unknown);
        assert_eq!(ConnectionType::classify(None, None), ConnectionType::Unknown);
    }

    #[test]
    fn readings_map_onto_speed_and_type() {
        let info = NetworkInfo::from_readings(true, Some("slow-2g"), Some("cellular"), false);
        assert_eq!(info.speed, NetworkSpeed::Slow);
        assert_eq!(info.kind, ConnectionType::TwoG);
        assert!(info.should_save_data());
    }

    #[test]
    fn save_data_when_offline_or_slow() {
        let online = NetworkInfo::default();
        assert!(!online.should_save_data());
        assert!(NetworkInfo { online: false, ..online }.should_save_data());
        assert!(NetworkInfo { speed: NetworkSpeed::Slow, ..online }.should_save_data());
        assert!(NetworkInfo { save_data: true, ..online }.should_save_data());
    }
}
