use super::answers::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Personal,
    Symptoms,
    Scheduling,
}

impl Step {
    pub const COUNT: usize = 3;

    /// 1-based position, as shown in "Etapa N de 3".
    pub fn number(&self) -> usize {
        match self {
            Step::Personal => 1,
            Step::Symptoms => 2,
            Step::Scheduling => 3,
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Personal => Some(Step::Symptoms),
            Step::Symptoms => Some(Step::Scheduling),
            Step::Scheduling => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Personal => None,
            Step::Symptoms => Some(Step::Personal),
            Step::Scheduling => Some(Step::Symptoms),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn definition(&self) -> &'static StepDefinition {
        &STEPS[self.number() - 1]
    }

    pub fn fields(&self) -> &'static [Field] {
        self.definition().fields
    }

    /// Completion percentage once this step is showing.
    pub fn progress(&self) -> u32 {
        (self.number() * 100 / Self::COUNT) as u32
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [Field],
}

pub static STEPS: [StepDefinition; Step::COUNT] = [
    StepDefinition {
        id: 1,
        title: "Dados Pessoais",
        description: "Vamos começar com suas informações básicas",
        fields: &[Field::Name, Field::Email, Field::Phone, Field::Age],
    },
    StepDefinition {
        id: 2,
        title: "Sintomas",
        description: "Nos conte sobre o que você está sentindo",
        fields: &[Field::Symptoms],
    },
    StepDefinition {
        id: 3,
        title: "Agendamento",
        description: "Quando podemos conversar com você?",
        fields: &[Field::Urgency, Field::PreferredTime],
    },
];

pub const SYMPTOM_OPTIONS: [&str; 8] = [
    "Dores nas pernas que pioram durante o dia",
    "Inchaço que não melhora com repouso",
    "Pernas com aspecto desproporcional",
    "Facilidade para formar hematomas",
    "Sensação de peso constante nas pernas",
    "Pele com textura irregular nas pernas",
    "Dificuldade para encontrar roupas que sirvam",
    "Limitação para atividades físicas",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_exactly_one_step() {
        let all = [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Age,
            Field::Symptoms,
            Field::Urgency,
            Field::PreferredTime,
        ];
        for field in all {
            let owners = STEPS.iter().filter(|s| s.fields.contains(&field)).count();
            assert_eq!(owners, 1, "{field} owned by {owners} steps");
        }
    }

    #[test]
    fn step_order_matches_table() {
        let mut step = Step::Personal;
        for def in STEPS.iter() {
            assert_eq!(step.definition().id, def.id);
            match step.next() {
                Some(next) => {
                    assert_eq!(next.previous(), Some(step));
                    step = next;
                }
                None => assert!(step.is_last()),
            }
        }
        assert_eq!(Step::Scheduling.progress(), 100);
        assert_eq!(Step::Personal.progress(), 33);
    }
}
