use std::rc::Rc;

use yew::prelude::*;

use crate::analytics::{AnalyticsEvent, AnalyticsReporter, ConsoleReporter, NoopReporter};
use crate::components::error_fallback::PageFault;
use crate::config;
use crate::platform::{
    BrowserOpener, ExternalOpener, HapticFeedback, IntersectionViewport, MediaQueryMotion,
    MotionPreference, ViewportObserver, VibrationHaptics,
};

/// Browser capabilities handed to every component through a context.
#[derive(Clone)]
pub struct Services {
    pub analytics: Rc<dyn AnalyticsReporter>,
    pub opener: Rc<dyn ExternalOpener>,
    pub viewport: Rc<dyn ViewportObserver>,
    pub motion: Rc<dyn MotionPreference>,
    pub haptics: Rc<dyn HapticFeedback>,
    /// Hands an unexpected failure to the page level recovery screen.
    pub report_fault: Callback<PageFault>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.analytics, &other.analytics)
            && Rc::ptr_eq(&self.opener, &other.opener)
            && Rc::ptr_eq(&self.viewport, &other.viewport)
            && Rc::ptr_eq(&self.motion, &other.motion)
            && Rc::ptr_eq(&self.haptics, &other.haptics)
            && self.report_fault == other.report_fault
    }
}

impl Services {
    pub fn browser(report_fault: Callback<PageFault>) -> Self {
        // Events are only printed while developing; forwarding them to a
        // tracker is left to whoever embeds the page.
        let analytics: Rc<dyn AnalyticsReporter> = if config::is_dev() {
            Rc::new(ConsoleReporter)
        } else {
            Rc::new(NoopReporter)
        };
        Self {
            analytics,
            opener: Rc::new(BrowserOpener),
            viewport: Rc::new(IntersectionViewport),
            motion: Rc::new(MediaQueryMotion),
            haptics: Rc::new(VibrationHaptics),
            report_fault,
        }
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.analytics.report(&event);
    }
}

#[hook]
pub fn use_services() -> Services {
    let fallback = use_memo(|_| Services::browser(Callback::from(|_| ())), ());
    use_context::<Services>().unwrap_or_else(|| (*fallback).clone())
}
