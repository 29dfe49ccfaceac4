use log::info;
use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::services::use_services;

pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ITEMS: [FaqItem; 6] = [
    FaqItem {
        id: "item-1",
        question: "O que é lipedema?",
        answer: "É uma doença crônica do tecido adiposo que causa acúmulo desproporcional de gordura, principalmente nas pernas, acompanhado de dor e fácil formação de hematomas. Afeta 11% das mulheres e é frequentemente confundida com obesidade ou linfedema.",
    },
    FaqItem {
        id: "item-2",
        question: "Lipedema tem cura?",
        answer: "Não existe cura, mas com tratamento adequado é possível controlar os sintomas, melhorar significativamente a qualidade de vida e evitar a progressão. O diagnóstico precoce é fundamental para melhores resultados.",
    },
    FaqItem {
        id: "item-3",
        question: "O tratamento é coberto por convênio?",
        answer: "Sim, trabalhamos com os principais convênios médicos. Nossa equipe auxilia com toda documentação necessária para reembolso e autorização dos procedimentos. Entre em contato para verificar sua cobertura específica.",
    },
    FaqItem {
        id: "item-4",
        question: "Quanto tempo dura o tratamento?",
        answer: "O tratamento é contínuo e personalizado para cada paciente. Os primeiros resultados aparecem entre 30-60 dias. Criamos um plano de tratamento específico baseado no estágio da doença e nas necessidades individuais.",
    },
    FaqItem {
        id: "item-5",
        question: "Preciso de cirurgia?",
        answer: "A maioria dos casos responde bem ao tratamento clínico conservador (drenagem linfática, compressão, fisioterapia, nutrição). A cirurgia (lipoaspiração específica para lipedema) é indicada apenas em casos selecionados e estágios mais avançados.",
    },
    FaqItem {
        id: "item-6",
        question: "Como é feito o diagnóstico?",
        answer: "O diagnóstico é principalmente clínico, baseado no histórico da paciente e exame físico detalhado. Utilizamos ultrassom para complementar a avaliação e diferenciar de outras condições. Nossa equipe tem experiência específica em lipedema.",
    },
];

/// At most one item is open; clicking the open one closes it.
pub fn toggle(open: Option<&'static str>, clicked: &'static str) -> Option<&'static str> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let services = use_services();
    let open = use_state(|| None::<&'static str>);

    html! {
        <div class="faq">
            { for FAQ_ITEMS.iter().enumerate().map(|(index, item)| {
                let is_open = *open == Some(item.id);
                let onclick = {
                    let open = open.clone();
                    let services = services.clone();
                    let id = item.id;
                    Callback::from(move |_: MouseEvent| {
                        let next = toggle(*open, id);
                        if next.is_some() {
                            info!("FAQ opened: {}", id);
                            services.track(AnalyticsEvent::FaqOpened { id: id.to_string() });
                        }
                        open.set(next);
                    })
                };
                html! {
                    <div
                        key={item.id}
                        class="faq-item animate-fade-in-up"
                        style={format!("animation-delay: {}ms;", (index + 1) * 100)}
                    >
                        <button
                            class="faq-trigger"
                            {onclick}
                            aria-expanded={is_open.to_string()}
                            aria-controls={format!("faq-{}", item.id)}
                        >
                            <span>{item.question}</span>
                            <span class={classes!("faq-chevron", is_open.then_some("faq-chevron-open"))}>{"⌄"}</span>
                        </button>
                        if is_open {
                            <div id={format!("faq-{}", item.id)} class="faq-answer" role="region">
                                {item.answer}
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_closes_the_first() {
        let open = toggle(None, "item-1");
        assert_eq!(open, Some("item-1"));
        assert_eq!(toggle(open, "item-3"), Some("item-3"));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle(Some("item-2"), "item-2"), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = FAQ_ITEMS.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), FAQ_ITEMS.len());
    }
}
