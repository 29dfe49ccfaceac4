use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Object, Reflect};
use web_sys::{PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList, PerformanceObserverInit};

/// A `PerformanceObserver` for one entry type. Disconnects on drop.
pub struct PerformanceWatch {
    observer: PerformanceObserver,
    _callback: Closure<dyn FnMut(PerformanceObserverEntryList)>,
}

impl PerformanceWatch {
    /// Buffered, so entries recorded before the call are delivered as well.
    /// `None` where `PerformanceObserver` is missing.
    pub fn start(entry_type: &str, on_entries: impl Fn(Vec<PerformanceEntry>) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |list: PerformanceObserverEntryList| {
            let entries = list
                .get_entries()
                .iter()
                .filter_map(|entry| entry.dyn_into::<PerformanceEntry>().ok())
                .collect();
            on_entries(entries);
        }) as Box<dyn FnMut(PerformanceObserverEntryList)>);

        let observer = match PerformanceObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("PerformanceObserver unavailable: {:?}", err);
                return None;
            }
        };

        // `buffered` is only honoured together with the single `type` key.
        let init: PerformanceObserverInit = Object::new().unchecked_into();
        if let Err(err) = Reflect::set(&init, &JsValue::from_str("type"), &JsValue::from_str(entry_type)) {
            warn!("could not configure {} observer: {:?}", entry_type, err);
            return None;
        }
        init.set_buffered(true);
        observer.observe(&init);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for PerformanceWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn number(entry: &PerformanceEntry, key: &str) -> Option<f64> {
    Reflect::get(entry, &JsValue::from_str(key)).ok()?.as_f64()
}

/// Render time of the latest `largest-contentful-paint` candidate.
pub fn largest_paint(entries: &[PerformanceEntry]) -> Option<f64> {
    entries.last().map(|entry| entry.start_time())
}

/// Delay between a `first-input` entry and the start of its handler.
pub fn input_delay(entry: &PerformanceEntry) -> Option<f64> {
    number(entry, "processingStart").map(|start| start - entry.start_time())
}

/// Score of a `layout-shift` entry, skipping shifts caused by user input.
pub fn layout_shift(entry: &PerformanceEntry) -> Option<f64> {
    let recent_input = Reflect::get(entry, &JsValue::from_str("hadRecentInput"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if recent_input {
        return None;
    }
    number(entry, "value")
}
