use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::platform::{scroll_progress, ViewportOptions};
use crate::services::use_services;

/// Read once on mount; toggling the OS setting takes effect on reload.
#[hook]
pub fn use_reduced_motion() -> bool {
    let services = use_services();
    let reduced = use_state(move || services.motion.prefers_reduced_motion());
    *reduced
}

/// Whether the element behind `node` is on screen. With `trigger_once` the
/// value latches to `true` the first time the element shows up.
#[hook]
pub fn use_in_view(node: NodeRef, options: ViewportOptions, trigger_once: bool) -> bool {
    let services = use_services();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let subscription = node.cast::<Element>().map(|element| {
                    let on_change = Callback::from(move |in_view: bool| {
                        if in_view || !trigger_once {
                            visible.set(in_view);
                        }
                    });
                    services.viewport.observe(&element, options, on_change)
                });
                move || drop(subscription)
            },
            (node, options),
        );
    }

    *visible
}

const SCROLL_THROTTLE_MS: u32 = 16;

/// Page scroll position in percent, updated at most every 16 ms.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0_f64);

    let update = {
        let progress = progress.clone();
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(root) = window.document().and_then(|d| d.document_element()) else {
                return;
            };
            let scroll_top = window.scroll_y().unwrap_or(0.0);
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            progress.set(scroll_progress(scroll_top, f64::from(root.scroll_height()), viewport));
        }
    };

    let throttled = use_throttle(update, SCROLL_THROTTLE_MS);

    {
        let throttled = throttled.clone();
        use_effect_with_deps(
            move |_| {
                throttled.run();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| throttled.run());

    *progress
}
