use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Keeps an observation alive; dropping it stops the notifications.
pub struct ViewportSubscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl ViewportSubscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn inert() -> Self {
        Self { teardown: None }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

pub trait ViewportObserver {
    /// Calls `on_change` with `true` when `element` enters the viewport and
    /// `false` when it leaves.
    fn observe(
        &self,
        element: &Element,
        options: &ViewportOptions,
        on_change: Callback<bool>,
    ) -> ViewportSubscription;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionViewport;

impl ViewportObserver for IntersectionViewport {
    fn observe(
        &self,
        element: &Element,
        options: &ViewportOptions,
        on_change: Callback<bool>,
    ) -> ViewportSubscription {
        let fallback = on_change.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: JsValue| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_change.emit(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array, JsValue)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                fallback.emit(true);
                return ViewportSubscription::inert();
            }
        };
        observer.observe(element);

        ViewportSubscription::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_slightly_before_the_bottom_edge() {
        let options = ViewportOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}
