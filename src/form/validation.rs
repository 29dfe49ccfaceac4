use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::answers::{Field, FormAnswers};
use super::steps::Step;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$").unwrap());

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

/// Messages for the fields that failed the last validation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Checks the fields owned by `step` and nothing else.
pub fn validate(step: Step, answers: &FormAnswers) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for &field in step.fields() {
        if let Some(message) = check_field(field, answers) {
            errors.insert(field, message);
        }
    }
    errors
}

fn check_field(field: Field, answers: &FormAnswers) -> Option<&'static str> {
    match field {
        Field::Name => {
            let name = answers.name.trim();
            if name.is_empty() {
                Some("Nome é obrigatório")
            } else if name.chars().count() < 2 {
                Some("Nome deve ter pelo menos 2 caracteres")
            } else {
                None
            }
        }
        Field::Email => {
            if answers.email.trim().is_empty() {
                Some("Email é obrigatório")
            } else if !EMAIL_RE.is_match(&answers.email) {
                Some("Email inválido")
            } else {
                None
            }
        }
        Field::Phone => {
            if answers.phone.trim().is_empty() {
                Some("Telefone é obrigatório")
            } else if !PHONE_RE.is_match(&answers.phone) {
                Some("Telefone inválido. Use o formato (11) 99999-9999")
            } else {
                None
            }
        }
        Field::Age => {
            let age = answers.age.trim();
            if age.is_empty() {
                return Some("Idade é obrigatória");
            }
            match age.parse::<u32>() {
                Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => None,
                Ok(_) => Some("Idade deve estar entre 18 e 100 anos"),
                Err(_) => Some("Idade inválida"),
            }
        }
        Field::Symptoms => answers
            .symptoms
            .is_empty()
            .then_some("Selecione pelo menos um sintoma"),
        Field::Urgency => answers
            .urgency
            .is_none()
            .then_some("Selecione o nível de urgência"),
        Field::PreferredTime => answers
            .preferred_time
            .is_none()
            .then_some("Selecione um horário preferido"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::answers::{PreferredTime, Urgency};
    use pretty_assertions::assert_eq;

    fn personal() -> FormAnswers {
        FormAnswers {
            name: "Jo".into(),
            email: "a@b.com".into(),
            phone: "(11) 99999-9999".into(),
            age: "35".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_personal_data_has_no_errors() {
        assert!(validate(Step::Personal, &personal()).is_empty());
    }

    #[test]
    fn empty_name_is_required() {
        let answers = FormAnswers {
            name: "   ".into(),
            ..personal()
        };
        let errors = validate(Step::Personal, &answers);
        assert_eq!(errors.get(Field::Name), Some("Nome é obrigatório"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn single_character_name_is_too_short() {
        let answers = FormAnswers {
            name: " J ".into(),
            ..personal()
        };
        assert_eq!(
            validate(Step::Personal, &answers).get(Field::Name),
            Some("Nome deve ter pelo menos 2 caracteres")
        );
    }

    #[test]
    fn email_shape() {
        for bad in ["ana", "ana@", "ana@site", "a b@c.com", "@c.com"] {
            let answers = FormAnswers {
                email: bad.into(),
                ..personal()
            };
            assert_eq!(
                validate(Step::Personal, &answers).get(Field::Email),
                Some("Email inválido"),
                "{bad}"
            );
        }
    }

    #[test]
    fn phone_accepts_eight_and_nine_digit_numbers() {
        for good in ["(11) 99999-9999", "(15) 3222-1234"] {
            let answers = FormAnswers {
                phone: good.into(),
                ..personal()
            };
            assert_eq!(validate(Step::Personal, &answers).get(Field::Phone), None);
        }
        let answers = FormAnswers {
            phone: "11999999999".into(),
            ..personal()
        };
        assert_eq!(
            validate(Step::Personal, &answers).get(Field::Phone),
            Some("Telefone inválido. Use o formato (11) 99999-9999")
        );
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let check = |age: &str| {
            let answers = FormAnswers {
                age: age.into(),
                ..personal()
            };
            validate(Step::Personal, &answers)
                .get(Field::Age)
                .map(str::to_string)
        };
        assert_eq!(check("18"), None);
        assert_eq!(check("100"), None);
        assert_eq!(check("17").as_deref(), Some("Idade deve estar entre 18 e 100 anos"));
        assert_eq!(check("101").as_deref(), Some("Idade deve estar entre 18 e 100 anos"));
        assert_eq!(check("").as_deref(), Some("Idade é obrigatória"));
        assert_eq!(check("trinta").as_deref(), Some("Idade inválida"));
    }

    #[test]
    fn only_the_requested_step_is_checked() {
        let empty = FormAnswers::default();

        let personal_errors: Vec<_> = validate(Step::Personal, &empty).fields().collect();
        assert_eq!(
            personal_errors,
            vec![Field::Name, Field::Email, Field::Phone, Field::Age]
        );

        let symptom_errors: Vec<_> = validate(Step::Symptoms, &empty).fields().collect();
        assert_eq!(symptom_errors, vec![Field::Symptoms]);

        let scheduling_errors: Vec<_> = validate(Step::Scheduling, &empty).fields().collect();
        assert_eq!(scheduling_errors, vec![Field::Urgency, Field::PreferredTime]);
    }

    #[test]
    fn validation_is_idempotent() {
        let samples = [
            FormAnswers::default(),
            personal(),
            FormAnswers {
                urgency: Some(Urgency::High),
                preferred_time: Some(PreferredTime::Any),
                ..Default::default()
            },
        ];
        for answers in samples.iter() {
            for step in [Step::Personal, Step::Symptoms, Step::Scheduling] {
                assert_eq!(validate(step, answers), validate(step, answers));
            }
        }
    }

    #[test]
    fn symptoms_need_one_selection() {
        let mut answers = FormAnswers::default();
        assert_eq!(
            validate(Step::Symptoms, &answers).get(Field::Symptoms),
            Some("Selecione pelo menos um sintoma")
        );
        answers.toggle_symptom("dor nas pernas");
        assert!(validate(Step::Symptoms, &answers).is_empty());
    }
}
