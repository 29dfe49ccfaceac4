use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Every input the form collects, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Age,
    Symptoms,
    Urgency,
    PreferredTime,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::Symptoms => "symptoms",
            Field::Urgency => "urgency",
            Field::PreferredTime => "preferredTime",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} option: {value:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    /// Value used in the radio inputs.
    pub fn value(&self) -> &'static str {
        match self {
            Urgency::Low => "baixa",
            Urgency::Medium => "media",
            Urgency::High => "alta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Posso aguardar algumas semanas",
            Urgency::Medium => "Gostaria de ser atendida em breve",
            Urgency::High => "Preciso de atendimento urgente",
        }
    }

    /// CSS modifier for the selected radio.
    pub fn tone(&self) -> &'static str {
        match self {
            Urgency::Low => "success",
            Urgency::Medium => "accent",
            Urgency::High => "destructive",
        }
    }
}

impl FromStr for Urgency {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.value() == s)
            .ok_or_else(|| UnknownOption {
                kind: "urgency",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
    Any,
}

impl PreferredTime {
    pub const ALL: [PreferredTime; 4] = [
        PreferredTime::Morning,
        PreferredTime::Afternoon,
        PreferredTime::Evening,
        PreferredTime::Any,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PreferredTime::Morning => "manha",
            PreferredTime::Afternoon => "tarde",
            PreferredTime::Evening => "noite",
            PreferredTime::Any => "qualquer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreferredTime::Morning => "Manhã (8h às 12h)",
            PreferredTime::Afternoon => "Tarde (12h às 18h)",
            PreferredTime::Evening => "Noite (18h às 20h)",
            PreferredTime::Any => "Qualquer horário",
        }
    }
}

impl FromStr for PreferredTime {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreferredTime::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| UnknownOption {
                kind: "preferred time",
                value: s.to_string(),
            })
    }
}

/// What the lead typed so far. Owned by exactly one controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormAnswers {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub symptoms: BTreeSet<String>,
    pub urgency: Option<Urgency>,
    pub preferred_time: Option<PreferredTime>,
}

impl FormAnswers {
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    /// Adds the symptom when absent, removes it otherwise.
    pub fn toggle_symptom(&mut self, symptom: &str) {
        if !self.symptoms.remove(symptom) {
            self.symptoms.insert(symptom.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn urgency_parses_its_own_values() {
        for urgency in Urgency::ALL {
            assert_eq!(urgency.value().parse::<Urgency>(), Ok(urgency));
        }
    }

    #[test]
    fn unknown_option_is_an_error() {
        let err = "amanha".parse::<PreferredTime>().unwrap_err();
        assert_eq!(err.value, "amanha");
        assert_eq!(err.to_string(), "unknown preferred time option: \"amanha\"");
        assert!("".parse::<Urgency>().is_err());
    }

    #[test]
    fn toggle_symptom_adds_then_removes() {
        let mut answers = FormAnswers::default();
        answers.toggle_symptom("Inchaço");
        assert!(answers.has_symptom("Inchaço"));
        answers.toggle_symptom("Inchaço");
        assert!(answers.symptoms.is_empty());
    }
}
