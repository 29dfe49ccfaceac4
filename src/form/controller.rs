use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};
use thiserror::Error;

use crate::analytics::{AnalyticsEvent, AnalyticsReporter, NoopReporter};
use crate::platform::{ChannelStatus, ExternalOpener, OpenError};

use super::answers::{Field, FormAnswers, PreferredTime, UnknownOption, Urgency};
use super::message::{compose_message, outbound_url};
use super::phone::format_phone;
use super::steps::Step;
use super::validation::{validate, ValidationErrors};

/// Empty means "not chosen"; anything else must be a known option value.
fn parse_option<T: FromStr<Err = UnknownOption>>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    value.parse().map_err(|e| warn!("{}", e)).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing(Step),
    /// The outbound message is being built and the channel opened.
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Step 3 failed validation; errors are in [`FormController::errors`].
    Invalid,
    /// Reached the terminal state. `fallback_url` is set when the channel
    /// could not be opened automatically.
    Submitted { fallback_url: Option<String> },
    /// Submit was called outside the last step, or after submitting.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the outbound channel: {0}")]
    Channel(#[from] OpenError),
}

/// State machine behind the multi-step form.
///
/// Every intent reads and writes the answers held here, so validation always
/// sees the latest edits.
pub struct FormController {
    answers: FormAnswers,
    errors: ValidationErrors,
    phase: Phase,
    fallback_url: Option<String>,
    reporter: Rc<dyn AnalyticsReporter>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Rc::new(NoopReporter))
    }
}

impl FormController {
    pub fn new(reporter: Rc<dyn AnalyticsReporter>) -> Self {
        Self {
            answers: FormAnswers::default(),
            errors: ValidationErrors::default(),
            phase: Phase::Editing(Step::Personal),
            fallback_url: None,
            reporter,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_step(&self) -> Option<Step> {
        match self.phase {
            Phase::Editing(step) => Some(step),
            Phase::Submitting => Some(Step::Scheduling),
            Phase::Submitted => None,
        }
    }

    pub fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// True only for the duration of [`FormController::submit`]. The browser
    /// opener is synchronous, so a view never renders this state today; it
    /// is kept for an opener that resolves asynchronously.
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    pub fn fallback_url(&self) -> Option<&str> {
        self.fallback_url.as_deref()
    }

    /// Only the step on screen may change its own fields. Earlier steps were
    /// validated when the user left them and must stay that way until submit.
    fn editable(&self, field: Field) -> bool {
        match self.phase {
            Phase::Editing(step) if step.fields().contains(&field) => true,
            Phase::Editing(step) => {
                warn!("{} is not on step {}, edit ignored", field, step.number());
                false
            }
            _ => false,
        }
    }

    /// Updates a field of the current step. Phone input is re-formatted as
    /// typed; option fields accept their wire values and are cleared by
    /// unknown ones.
    pub fn edit_field(&mut self, field: Field, value: &str) {
        if field == Field::Symptoms {
            self.toggle_symptom(value);
            return;
        }
        if !self.editable(field) {
            return;
        }
        match field {
            Field::Name => self.answers.name = value.to_string(),
            Field::Email => self.answers.email = value.to_string(),
            Field::Phone => self.answers.phone = format_phone(value),
            Field::Age => self.answers.age = value.to_string(),
            Field::Symptoms => {}
            Field::Urgency => self.answers.urgency = parse_option(value),
            Field::PreferredTime => self.answers.preferred_time = parse_option(value),
        }
    }

    pub fn toggle_symptom(&mut self, symptom: &str) {
        if self.editable(Field::Symptoms) {
            self.answers.toggle_symptom(symptom);
        }
    }

    pub fn set_urgency(&mut self, urgency: Urgency) {
        if self.editable(Field::Urgency) {
            self.answers.urgency = Some(urgency);
        }
    }

    pub fn set_preferred_time(&mut self, preferred_time: PreferredTime) {
        if self.editable(Field::PreferredTime) {
            self.answers.preferred_time = Some(preferred_time);
        }
    }

    /// Validates `step`, replacing the previous errors. Reports the failure.
    fn check(&mut self, step: Step) -> bool {
        self.errors = validate(step, &self.answers);
        if self.errors.is_empty() {
            return true;
        }
        debug!("step {} invalid: {:?}", step.number(), self.errors);
        self.reporter.report(&AnalyticsEvent::FormValidationFailed {
            step: step.number(),
            fields: self.errors.fields().collect(),
        });
        false
    }

    /// Moves forward when the current step validates. Returns whether the
    /// step changed.
    pub fn next(&mut self) -> bool {
        let Phase::Editing(step) = self.phase else {
            return false;
        };
        let Some(next) = step.next() else {
            return false;
        };
        if !self.check(step) {
            return false;
        }
        self.phase = Phase::Editing(next);
        self.reporter.report(&AnalyticsEvent::FormStepViewed {
            step: next.number(),
        });
        true
    }

    /// Moves back one step without validating.
    pub fn previous(&mut self) -> bool {
        let Phase::Editing(step) = self.phase else {
            return false;
        };
        match step.previous() {
            Some(previous) => {
                self.phase = Phase::Editing(previous);
                true
            }
            None => false,
        }
    }

    /// Validates the last step, sends the answers to the clinic through
    /// `opener` and enters the terminal state.
    ///
    /// A blocked popup still counts as submitted; only an error raised by the
    /// open primitive itself is returned, leaving the form on the last step.
    pub fn submit(&mut self, opener: &dyn ExternalOpener) -> Result<SubmitOutcome, SubmitError> {
        let Phase::Editing(step) = self.phase else {
            return Ok(SubmitOutcome::Ignored);
        };
        if !step.is_last() {
            return Ok(SubmitOutcome::Ignored);
        }
        if !self.check(step) {
            return Ok(SubmitOutcome::Invalid);
        }

        self.phase = Phase::Submitting;
        let message = compose_message(&self.answers);
        let url = outbound_url(&message);
        debug!("outbound url: {}", url);

        let status = match opener.open(&url) {
            Ok(status) => status,
            Err(e) => {
                self.phase = Phase::Editing(step);
                return Err(e.into());
            }
        };
        if status == ChannelStatus::Blocked {
            warn!("popup blocked, offering fallback link");
            self.fallback_url = Some(url);
        } else {
            info!("whatsapp opened");
        }

        self.phase = Phase::Submitted;
        self.reporter.report(&AnalyticsEvent::FormSubmitted {
            channel_opened: status == ChannelStatus::Opened,
        });
        Ok(SubmitOutcome::Submitted {
            fallback_url: self.fallback_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        events: RefCell<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsReporter for RecordingReporter {
        fn report(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    struct FakeOpener {
        result: Result<ChannelStatus, OpenError>,
        opened: RefCell<Vec<String>>,
    }

    impl FakeOpener {
        fn new(result: Result<ChannelStatus, OpenError>) -> Self {
            Self {
                result,
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl ExternalOpener for FakeOpener {
        fn open(&self, url: &str) -> Result<ChannelStatus, OpenError> {
            self.opened.borrow_mut().push(url.to_string());
            self.result.clone()
        }
    }

    fn fill_personal(form: &mut FormController) {
        form.edit_field(Field::Name, "Jo");
        form.edit_field(Field::Email, "a@b.com");
        form.edit_field(Field::Phone, "11999999999");
        form.edit_field(Field::Age, "35");
    }

    fn at_scheduling() -> FormController {
        let mut form = FormController::default();
        fill_personal(&mut form);
        assert!(form.next());
        form.toggle_symptom("dor nas pernas");
        assert!(form.next());
        form.edit_field(Field::Urgency, "media");
        form.edit_field(Field::PreferredTime, "manha");
        form
    }

    #[test]
    fn valid_personal_data_advances() {
        let mut form = FormController::default();
        fill_personal(&mut form);
        assert_eq!(form.answers().phone, "(11) 99999-9999");
        assert!(form.next());
        assert_eq!(form.phase(), Phase::Editing(Step::Symptoms));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_name_blocks_the_first_step() {
        let mut form = FormController::default();
        fill_personal(&mut form);
        form.edit_field(Field::Name, "");
        assert!(!form.next());
        assert_eq!(form.current_step(), Some(Step::Personal));
        assert_eq!(form.errors().get(Field::Name), Some("Nome é obrigatório"));
    }

    #[test]
    fn errors_are_replaced_not_merged() {
        let mut form = FormController::default();
        assert!(!form.next());
        assert_eq!(form.errors().len(), 4);
        fill_personal(&mut form);
        form.edit_field(Field::Age, "12");
        assert!(!form.next());
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![Field::Age]);
    }

    #[test]
    fn symptoms_step_needs_a_selection() {
        let mut form = FormController::default();
        fill_personal(&mut form);
        form.next();
        assert!(!form.next());
        assert!(form.errors().get(Field::Symptoms).is_some());
        form.toggle_symptom("dor nas pernas");
        assert!(form.next());
        assert_eq!(form.current_step(), Some(Step::Scheduling));
    }

    #[test]
    fn previous_ignores_validity() {
        let mut form = at_scheduling();
        form.edit_field(Field::Urgency, "");
        assert!(form.previous());
        assert_eq!(form.current_step(), Some(Step::Symptoms));
        form.toggle_symptom("dor nas pernas");
        assert!(form.previous());
        assert_eq!(form.current_step(), Some(Step::Personal));
        assert!(!form.previous());
        assert_eq!(form.current_step(), Some(Step::Personal));
    }

    #[test]
    fn next_validates_the_latest_edits() {
        let mut form = FormController::default();
        fill_personal(&mut form);
        form.edit_field(Field::Email, "broken");
        assert!(!form.next());
        form.edit_field(Field::Email, "ok@site.com.br");
        assert!(form.next());
    }

    #[test]
    fn submit_opens_the_channel_once() {
        let mut form = at_scheduling();
        let opener = FakeOpener::new(Ok(ChannelStatus::Opened));
        let outcome = form.submit(&opener).unwrap();

        assert_eq!(outcome, SubmitOutcome::Submitted { fallback_url: None });
        assert!(form.is_submitted());
        assert_eq!(form.fallback_url(), None);

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        let text = urlencoding::decode(opened[0].split("text=").nth(1).unwrap())
            .unwrap()
            .into_owned();
        assert!(text.contains("Gostaria de ser atendida em breve"));
        assert!(text.contains("Manhã (8h às 12h)"));
        assert!(text.contains("• dor nas pernas"));
    }

    #[test]
    fn blocked_popup_keeps_a_fallback_link() {
        let mut form = at_scheduling();
        let opener = FakeOpener::new(Ok(ChannelStatus::Blocked));
        let outcome = form.submit(&opener).unwrap();

        let url = form.fallback_url().unwrap().to_string();
        assert!(url.starts_with("https://wa.me/5515991159866?text="));
        assert_eq!(outcome, SubmitOutcome::Submitted { fallback_url: Some(url) });
        assert!(form.is_submitted());
    }

    #[test]
    fn open_errors_leave_the_form_editable() {
        let mut form = at_scheduling();
        let opener = FakeOpener::new(Err(OpenError::NoWindow));
        let err = form.submit(&opener).unwrap_err();
        assert_eq!(err, SubmitError::Channel(OpenError::NoWindow));
        assert_eq!(form.phase(), Phase::Editing(Step::Scheduling));
        assert_eq!(form.fallback_url(), None);
    }

    #[test]
    fn invalid_scheduling_is_not_submitted() {
        let mut form = at_scheduling();
        form.edit_field(Field::PreferredTime, "");
        let opener = FakeOpener::new(Ok(ChannelStatus::Opened));
        assert_eq!(form.submit(&opener).unwrap(), SubmitOutcome::Invalid);
        assert!(opener.opened.borrow().is_empty());
        assert_eq!(
            form.errors().get(Field::PreferredTime),
            Some("Selecione um horário preferido")
        );
    }

    #[test]
    fn submit_before_the_last_step_is_ignored() {
        let mut form = FormController::default();
        let opener = FakeOpener::new(Ok(ChannelStatus::Opened));
        assert_eq!(form.submit(&opener).unwrap(), SubmitOutcome::Ignored);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submitted_state_is_terminal() {
        let mut form = at_scheduling();
        let opener = FakeOpener::new(Ok(ChannelStatus::Opened));
        form.submit(&opener).unwrap();
        let frozen = form.answers().clone();

        assert!(!form.next());
        assert!(!form.previous());
        form.edit_field(Field::Name, "Outra");
        form.toggle_symptom("nova");
        form.set_urgency(Urgency::High);
        assert_eq!(form.submit(&opener).unwrap(), SubmitOutcome::Ignored);

        assert!(form.is_submitted());
        assert_eq!(form.current_step(), None);
        assert_eq!(form.answers(), &frozen);
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn earlier_steps_are_locked_while_scheduling() {
        let mut form = at_scheduling();
        form.toggle_symptom("dor nas pernas");
        form.edit_field(Field::Symptoms, "dor nas pernas");
        form.edit_field(Field::Name, "");
        form.edit_field(Field::Phone, "");
        form.set_preferred_time(PreferredTime::Evening);

        assert!(form.answers().has_symptom("dor nas pernas"));
        assert_eq!(form.answers().name, "Jo");
        assert_eq!(form.answers().phone, "(11) 99999-9999");

        let opener = FakeOpener::new(Ok(ChannelStatus::Opened));
        assert_eq!(
            form.submit(&opener).unwrap(),
            SubmitOutcome::Submitted { fallback_url: None }
        );
        assert!(!form.answers().symptoms.is_empty());
        assert!(!form.answers().name.is_empty());
    }

    #[test]
    fn fields_of_the_current_step_stay_editable() {
        let mut form = FormController::default();
        fill_personal(&mut form);
        form.set_urgency(Urgency::High);
        form.toggle_symptom("dor nas pernas");
        assert_eq!(form.answers().urgency, None);
        assert!(form.answers().symptoms.is_empty());

        form.next();
        form.toggle_symptom("dor nas pernas");
        form.toggle_symptom("dor nas pernas");
        assert!(!form.answers().has_symptom("dor nas pernas"));
    }

    #[test]
    fn reports_form_events() {
        let reporter = Rc::new(RecordingReporter::default());
        let mut form = FormController::new(reporter.clone());
        form.next();
        fill_personal(&mut form);
        form.next();

        let events = reporter.events.borrow();
        assert_eq!(
            *events,
            vec![
                AnalyticsEvent::FormValidationFailed {
                    step: 1,
                    fields: vec![Field::Name, Field::Email, Field::Phone, Field::Age],
                },
                AnalyticsEvent::FormStepViewed { step: 2 },
            ]
        );
    }

    #[test]
    fn unknown_option_values_leave_the_field_unset() {
        let mut form = at_scheduling();
        form.edit_field(Field::Urgency, "urgentissimo");
        assert_eq!(form.answers().urgency, None);
        form.edit_field(Field::PreferredTime, "");
        assert_eq!(form.answers().preferred_time, None);
    }
}
