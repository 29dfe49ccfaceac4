use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::PerformanceEntry;
use yew::prelude::*;

use crate::analytics::{performance_score, score_rating, AnalyticsEvent, Metric, ScrollDepthTracker, VitalSamples};
use crate::config;
use crate::hooks::use_scroll_progress;
use crate::platform::vitals::{input_delay, largest_paint, layout_shift, PerformanceWatch};
use crate::services::{use_services, Services};

/// Layout shifts are summed for this long before CLS and the overall score
/// are reported.
const VITALS_REPORT_MS: u32 = 5_000;

fn first_contentful_paint() -> Option<f64> {
    let performance = web_sys::window()?.performance()?;
    performance
        .get_entries_by_type("paint")
        .iter()
        .filter_map(|entry| entry.dyn_into::<PerformanceEntry>().ok())
        .find(|entry| entry.name() == "first-contentful-paint")
        .map(|entry| entry.start_time())
}

fn report_vital(services: &Services, metric: Metric, value: f64) {
    services.track(AnalyticsEvent::WebVital {
        metric,
        value,
        rating: metric.rate(value),
    });
}

/// Records a reading and reports it if it is the first for its metric.
fn record(services: &Services, vitals: &RefCell<VitalSamples>, metric: Metric, value: f64) {
    if vitals.borrow_mut().record(metric, value) {
        report_vital(services, metric, value);
    }
}

fn watch_vitals(services: &Services, vitals: &Rc<RefCell<VitalSamples>>) -> Vec<PerformanceWatch> {
    let lcp = {
        let services = services.clone();
        let vitals = vitals.clone();
        PerformanceWatch::start("largest-contentful-paint", move |entries| {
            if let Some(value) = largest_paint(&entries) {
                record(&services, &vitals, Metric::Lcp, value);
            }
        })
    };
    let fid = {
        let services = services.clone();
        let vitals = vitals.clone();
        PerformanceWatch::start("first-input", move |entries| {
            if let Some(value) = entries.first().and_then(input_delay) {
                record(&services, &vitals, Metric::Fid, value);
            }
        })
    };
    let cls = {
        let services = services.clone();
        let vitals = vitals.clone();
        PerformanceWatch::start("layout-shift", move |entries| {
            for value in entries.iter().filter_map(layout_shift) {
                record(&services, &vitals, Metric::Cls, value);
            }
        })
    };
    [lcp, fid, cls].into_iter().flatten().collect()
}

/// Reports page views, scroll depth and web vitals. Renders nothing.
#[function_component(AnalyticsTracker)]
pub fn analytics_tracker() -> Html {
    let services = use_services();
    let progress = use_scroll_progress();
    let depth = use_mut_ref(ScrollDepthTracker::default);
    let vitals = use_mut_ref(VitalSamples::default);

    {
        let services = services.clone();
        let depth = depth.clone();
        use_effect_with_deps(
            move |_| {
                depth.borrow_mut().reset();
                let path = web_sys::window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string());
                services.track(AnalyticsEvent::PageView { path });

                let watches = watch_vitals(&services, &vitals);
                let report = Timeout::new(VITALS_REPORT_MS, move || {
                    if let Some(fcp) = first_contentful_paint() {
                        record(&services, &vitals, Metric::Fcp, fcp);
                    }
                    let samples = vitals.borrow().samples();
                    if let Some(cls) = vitals.borrow().get(Metric::Cls) {
                        report_vital(&services, Metric::Cls, (cls * 1000.0).round() / 1000.0);
                    }
                    let score = performance_score(&samples);
                    services.track(AnalyticsEvent::PerformanceScore {
                        score,
                        rating: score_rating(score),
                    });
                    if config::is_dev() {
                        log!(format!(
                            "Performance: {:?}, score {} ({})",
                            samples,
                            score,
                            score_rating(score)
                        ));
                    }
                });
                move || {
                    drop(report);
                    drop(watches);
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        move |progress| {
            for percent in depth.borrow_mut().observe(*progress) {
                services.track(AnalyticsEvent::ScrollDepth { percent });
            }
            || ()
        },
        progress,
    );

    html! {}
}
