//! Fire-and-forget event reporting.
//!
//! Components report through an injected [`AnalyticsReporter`]; a missing
//! reporter is represented by [`NoopReporter`] so nothing ever has to check.

use std::collections::{BTreeSet, HashMap};

use log::info;
use serde::Serialize;

use crate::form::Field;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView { path: String },
    CtaClick { location: String },
    FaqOpened { id: String },
    FormStepViewed { step: usize },
    FormValidationFailed { step: usize, fields: Vec<Field> },
    FormSubmitted { channel_opened: bool },
    ScrollDepth { percent: u8 },
    SectionTime { section: String, seconds: f64 },
    WebVital { metric: Metric, value: f64, rating: Rating },
    PerformanceScore { score: u8, rating: &'static str },
    ErrorRetry { error_id: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::FaqOpened { .. } => "faq_opened",
            AnalyticsEvent::FormStepViewed { .. } => "form_step_viewed",
            AnalyticsEvent::FormValidationFailed { .. } => "form_validation_failed",
            AnalyticsEvent::FormSubmitted { .. } => "form_submitted",
            AnalyticsEvent::ScrollDepth { .. } => "scroll_depth",
            AnalyticsEvent::SectionTime { .. } => "section_time",
            AnalyticsEvent::WebVital { .. } => "web_vital",
            AnalyticsEvent::PerformanceScore { .. } => "performance_score",
            AnalyticsEvent::ErrorRetry { .. } => "error_retry",
        }
    }
}

pub trait AnalyticsReporter {
    fn report(&self, event: &AnalyticsEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl AnalyticsReporter for NoopReporter {
    fn report(&self, _event: &AnalyticsEvent) {}
}

/// Writes every event to the browser console as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl AnalyticsReporter for ConsoleReporter {
    fn report(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => info!("[analytics] {}", json),
            Err(e) => info!("[analytics] {} (unserializable: {})", event.name(), e),
        }
    }
}

pub const SCROLL_MILESTONES: [u8; 5] = [25, 50, 75, 90, 100];

/// Remembers which scroll depth milestones were already reported.
#[derive(Debug, Default, Clone)]
pub struct ScrollDepthTracker {
    reached: BTreeSet<u8>,
}

impl ScrollDepthTracker {
    /// Returns the milestones crossed for the first time at `percent`.
    pub fn observe(&mut self, percent: f64) -> Vec<u8> {
        let mut crossed = Vec::new();
        for milestone in SCROLL_MILESTONES {
            if percent >= f64::from(milestone) && self.reached.insert(milestone) {
                crossed.push(milestone);
            }
        }
        crossed
    }

    pub fn reset(&mut self) {
        self.reached.clear();
    }
}

pub const MIN_SECTION_MS: f64 = 2000.0;

/// Measures how long each section stays on screen.
#[derive(Debug, Default, Clone)]
pub struct SectionTimer {
    entered: HashMap<String, f64>,
}

impl SectionTimer {
    pub fn enter(&mut self, section: &str, now_ms: f64) {
        self.entered.insert(section.to_string(), now_ms);
    }

    /// Seconds spent in `section`, if it was entered and the visit lasted
    /// long enough to count.
    pub fn leave(&mut self, section: &str, now_ms: f64) -> Option<f64> {
        let entered = self.entered.remove(section)?;
        let spent = now_ms - entered;
        (spent >= MIN_SECTION_MS).then(|| (spent / 100.0).round() / 10.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Fcp,
    Lcp,
    Fid,
    Cls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Metric {
    /// Upper bounds for "good" and "needs improvement".
    fn thresholds(&self) -> (f64, f64) {
        match self {
            Metric::Fcp => (1800.0, 3000.0),
            Metric::Lcp => (2500.0, 4000.0),
            Metric::Fid => (100.0, 300.0),
            Metric::Cls => (0.1, 0.25),
        }
    }

    pub fn rate(&self, value: f64) -> Rating {
        let (good, fair) = self.thresholds();
        if value <= good {
            Rating::Good
        } else if value <= fair {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

/// Web vitals gathered during a page view. FCP, LCP and FID keep their
/// first reading; CLS sums every layout shift.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VitalSamples {
    fcp: Option<f64>,
    lcp: Option<f64>,
    fid: Option<f64>,
    cls: Option<f64>,
}

impl VitalSamples {
    /// Stores a reading. Returns true when it is the first one for a metric
    /// that is reported as soon as it is known (everything but CLS).
    pub fn record(&mut self, metric: Metric, value: f64) -> bool {
        let slot = match metric {
            Metric::Fcp => &mut self.fcp,
            Metric::Lcp => &mut self.lcp,
            Metric::Fid => &mut self.fid,
            Metric::Cls => {
                *self.cls.get_or_insert(0.0) += value;
                return false;
            }
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Fcp => self.fcp,
            Metric::Lcp => self.lcp,
            Metric::Fid => self.fid,
            Metric::Cls => self.cls,
        }
    }

    /// Every metric measured so far, for [`performance_score`].
    pub fn samples(&self) -> Vec<(Metric, f64)> {
        [Metric::Fcp, Metric::Lcp, Metric::Fid, Metric::Cls]
            .into_iter()
            .filter_map(|metric| self.get(metric).map(|value| (metric, value)))
            .collect()
    }
}

/// Mean of 100 / 50 / 0 per rated metric, 0 when nothing was measured.
pub fn performance_score(samples: &[(Metric, f64)]) -> u8 {
    if samples.is_empty() {
        return 0;
    }
    let total: f64 = samples
        .iter()
        .map(|(metric, value)| match metric.rate(*value) {
            Rating::Good => 100.0,
            Rating::NeedsImprovement => 50.0,
            Rating::Poor => 0.0,
        })
        .sum();
    (total / samples.len() as f64).round() as u8
}

pub fn score_rating(score: u8) -> &'static str {
    match score {
        90.. => "excellent",
        75..=89 => "good",
        50..=74 => "needs-improvement",
        _ => "poor",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_serialize_with_their_name() {
        let event = AnalyticsEvent::FormValidationFailed {
            step: 1,
            fields: vec![Field::Name, Field::PreferredTime],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "form_validation_failed",
                "step": 1,
                "fields": ["name", "preferredTime"],
            })
        );
        assert_eq!(json["event"], event.name());
    }

    #[test]
    fn scroll_milestones_fire_once() {
        let mut tracker = ScrollDepthTracker::default();
        assert_eq!(tracker.observe(10.0), Vec::<u8>::new());
        assert_eq!(tracker.observe(60.0), vec![25, 50]);
        assert_eq!(tracker.observe(55.0), Vec::<u8>::new());
        assert_eq!(tracker.observe(100.0), vec![75, 90, 100]);
        tracker.reset();
        assert_eq!(tracker.observe(30.0), vec![25]);
    }

    #[test]
    fn short_section_visits_are_ignored() {
        let mut timer = SectionTimer::default();
        timer.enter("faq", 1000.0);
        assert_eq!(timer.leave("faq", 2500.0), None);
        timer.enter("faq", 1000.0);
        assert_eq!(timer.leave("faq", 4250.0), Some(3.3));
        assert_eq!(timer.leave("faq", 9000.0), None);
        assert_eq!(timer.leave("never-entered", 9000.0), None);
    }

    #[test]
    fn vitals_are_rated_against_thresholds() {
        assert_eq!(Metric::Fcp.rate(1800.0), Rating::Good);
        assert_eq!(Metric::Fcp.rate(2000.0), Rating::NeedsImprovement);
        assert_eq!(Metric::Lcp.rate(4001.0), Rating::Poor);
        assert_eq!(Metric::Fid.rate(50.0), Rating::Good);
        assert_eq!(Metric::Cls.rate(0.2), Rating::NeedsImprovement);
    }

    #[test]
    fn vital_samples_keep_first_readings_and_sum_shifts() {
        let mut vitals = VitalSamples::default();
        assert!(vitals.samples().is_empty());

        assert!(vitals.record(Metric::Lcp, 2100.0));
        assert!(!vitals.record(Metric::Lcp, 3900.0));
        assert!(vitals.record(Metric::Fid, 12.0));
        assert!(!vitals.record(Metric::Cls, 0.05));
        assert!(!vitals.record(Metric::Cls, 0.1));

        assert_eq!(vitals.get(Metric::Lcp), Some(2100.0));
        let cls = vitals.get(Metric::Cls).unwrap();
        assert!((cls - 0.15).abs() < 1e-9);
        assert_eq!(
            vitals.samples().iter().map(|(m, _)| *m).collect::<Vec<_>>(),
            vec![Metric::Lcp, Metric::Fid, Metric::Cls]
        );
    }

    #[test]
    fn score_covers_every_collected_vital() {
        let mut vitals = VitalSamples::default();
        vitals.record(Metric::Fcp, 1000.0);
        vitals.record(Metric::Lcp, 5000.0);
        vitals.record(Metric::Fid, 50.0);
        vitals.record(Metric::Cls, 0.2);
        // 100 + 0 + 100 + 50
        assert_eq!(performance_score(&vitals.samples()), 63);
    }

    #[test]
    fn score_averages_ratings() {
        assert_eq!(performance_score(&[]), 0);
        assert_eq!(performance_score(&[(Metric::Fcp, 1000.0)]), 100);
        let mixed = [
            (Metric::Fcp, 1000.0),
            (Metric::Lcp, 3000.0),
            (Metric::Cls, 0.5),
        ];
        assert_eq!(performance_score(&mixed), 50);
        assert_eq!(score_rating(100), "excellent");
        assert_eq!(score_rating(80), "good");
        assert_eq!(score_rating(50), "needs-improvement");
        assert_eq!(score_rating(10), "poor");
    }
}
