use std::fmt::Write;

use crate::config;

use super::answers::FormAnswers;

const UNSET_LABEL: &str = "Não informado";

/// Builds the WhatsApp text sent to the clinic staff.
pub fn compose_message(answers: &FormAnswers) -> String {
    debug_assert!(
        answers.urgency.is_some() && answers.preferred_time.is_some(),
        "scheduling answers must be validated before composing the message"
    );
    let urgency = answers.urgency.map_or(UNSET_LABEL, |u| u.label());
    let preferred_time = answers.preferred_time.map_or(UNSET_LABEL, |t| t.label());

    let mut message = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(message, "*SOLICITAÇÃO DE CONSULTA - INTEGRA LIPECARE*");
    let _ = writeln!(message);
    let _ = writeln!(message, "*Dados Pessoais:*");
    let _ = writeln!(message, "• Nome: {}", answers.name.trim());
    let _ = writeln!(message, "• Idade: {} anos", answers.age.trim());
    let _ = writeln!(message, "• Email: {}", answers.email.trim());
    let _ = writeln!(message, "• Telefone: {}", answers.phone);
    let _ = writeln!(message);
    let _ = writeln!(message, "*Sintomas Relatados:*");
    for symptom in answers.symptoms.iter() {
        let _ = writeln!(message, "• {}", symptom);
    }
    let _ = writeln!(message);
    let _ = writeln!(message, "*Informações do Agendamento:*");
    let _ = writeln!(message, "• Urgência: {}", urgency);
    let _ = writeln!(message, "• Horário Preferido: {}", preferred_time);
    let _ = writeln!(message);
    let _ = write!(
        message,
        "*Observação:* Mensagem enviada através do formulário do site. Favor entrar em contato para agendar a primeira consulta especializada."
    );
    message
}

/// Deep link that opens a chat with the clinic pre-filled with `message`.
pub fn outbound_url(message: &str) -> String {
    config::whatsapp_url(&format!("text={}", urlencoding::encode(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::answers::{PreferredTime, Urgency};
    use pretty_assertions::assert_eq;

    fn complete() -> FormAnswers {
        let mut answers = FormAnswers {
            name: "Maria Silva".into(),
            email: "maria@example.com".into(),
            phone: "(15) 99999-0000".into(),
            age: "42".into(),
            urgency: Some(Urgency::Medium),
            preferred_time: Some(PreferredTime::Morning),
            ..Default::default()
        };
        answers.toggle_symptom("Inchaço que não melhora com repouso");
        answers.toggle_symptom("Facilidade para formar hematomas");
        answers
    }

    #[test]
    fn message_lists_sections_in_order() {
        let message = compose_message(&complete());
        let expected = "*SOLICITAÇÃO DE CONSULTA - INTEGRA LIPECARE*

*Dados Pessoais:*
• Nome: Maria Silva
• Idade: 42 anos
• Email: maria@example.com
• Telefone: (15) 99999-0000

*Sintomas Relatados:*
• Facilidade para formar hematomas
• Inchaço que não melhora com repouso

*Informações do Agendamento:*
• Urgência: Gostaria de ser atendida em breve
• Horário Preferido: Manhã (8h às 12h)

*Observação:* Mensagem enviada através do formulário do site. Favor entrar em contato para agendar a primeira consulta especializada.";
        assert_eq!(message, expected);
    }

    #[test]
    fn every_option_has_a_label() {
        for urgency in Urgency::ALL {
            for preferred_time in PreferredTime::ALL {
                let answers = FormAnswers {
                    urgency: Some(urgency),
                    preferred_time: Some(preferred_time),
                    ..complete()
                };
                let message = compose_message(&answers);
                assert!(!urgency.label().is_empty());
                assert!(!preferred_time.label().is_empty());
                assert!(message.contains(urgency.label()));
                assert!(message.contains(preferred_time.label()));
                assert!(!message.contains(UNSET_LABEL));
            }
        }
    }

    #[test]
    fn outbound_url_encodes_the_message() {
        let url = outbound_url("Olá & até logo\n");
        assert_eq!(
            url,
            "https://wa.me/5515991159866?text=Ol%C3%A1%20%26%20at%C3%A9%20logo%0A"
        );
    }
}
