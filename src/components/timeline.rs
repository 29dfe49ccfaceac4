use log::debug;
use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Animation};

pub struct TimelinePhase {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub results: [&'static str; 3],
}

pub static PHASES: [TimelinePhase; 4] = [
    TimelinePhase {
        id: 1,
        title: "Avaliação Inicial Completa",
        description: "Consulta detalhada com nossa equipe multidisciplinar, incluindo anamnese completa, exame físico e definição do estágio do lipedema.",
        duration: "1ª semana",
        results: [
            "Diagnóstico preciso do estágio",
            "Plano de tratamento personalizado",
            "Orientações iniciais",
        ],
    },
    TimelinePhase {
        id: 2,
        title: "Início do Protocolo Integrado",
        description: "Começamos com drenagem linfática manual especializada, orientações nutricionais e suporte psicológico.",
        duration: "2ª - 4ª semana",
        results: [
            "Redução inicial do inchaço",
            "Alívio das dores",
            "Melhora da mobilidade",
        ],
    },
    TimelinePhase {
        id: 3,
        title: "Intensificação do Tratamento",
        description: "Ajustes no protocolo baseados na resposta inicial, introdução de novos métodos e acompanhamento nutricional avançado.",
        duration: "2º - 3º mês",
        results: [
            "Resultados mais visíveis",
            "Melhora na qualidade do sono",
            "Aumento da disposição",
        ],
    },
    TimelinePhase {
        id: 4,
        title: "Consolidação dos Resultados",
        description: "Manutenção dos ganhos obtidos, ajustes finos no tratamento e preparação para a fase de manutenção.",
        duration: "4º - 6º mês",
        results: [
            "Estabilização dos resultados",
            "Melhora significativa na autoestima",
            "Retorno às atividades normais",
        ],
    },
];

/// Node classes for a phase given the selection and hover state.
pub fn node_class(id: u8, active: u8, hovered: Option<u8>) -> &'static str {
    if id == active || hovered == Some(id) {
        "timeline-node timeline-node-highlighted"
    } else {
        "timeline-node"
    }
}

#[function_component(InteractiveTimeline)]
pub fn interactive_timeline() -> Html {
    let active = use_state(|| 1_u8);
    let hovered = use_state(|| None::<u8>);

    let phases = PHASES.iter().map(|phase| {
        let id = phase.id;
        let is_active = *active == id;
        let select = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("timeline phase {} selected", id);
                active.set(id);
            })
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <div key={id} class="timeline-step" {onmouseenter} {onmouseleave}>
                <button
                    class={node_class(id, *active, *hovered)}
                    onclick={select.clone()}
                    aria-label={format!("Fase {}: {}", id, phase.title)}
                    aria-pressed={is_active.to_string()}
                >
                    {id.to_string()}
                </button>
                <div
                    class={classes!("timeline-card", is_active.then_some("timeline-card-active"))}
                    onclick={select}
                >
                    <div class="timeline-card-header">
                        <h4>{phase.title}</h4>
                        <span class="timeline-duration">{phase.duration}</span>
                    </div>
                    <p>{phase.description}</p>
                    if is_active {
                        <div class="timeline-results">
                            <h5>{"Resultados Esperados:"}</h5>
                            <ul>
                                { for phase.results.iter().map(|result| html! { <li>{*result}</li> }) }
                            </ul>
                        </div>
                    }
                </div>
            </div>
        }
    });

    html! {
        <AnimatedSection animation={Animation::FadeUp} class={classes!("timeline")}>
            <div class="timeline-header">
                <h3>{"Sua Jornada de Transformação"}</h3>
                <p>{"Acompanhe cada etapa do seu tratamento e veja como cada fase contribui para sua recuperação"}</p>
            </div>
            <div class="timeline-steps">
                { for phases }
            </div>
            <style>
                {r#"
                .timeline-steps { position: relative; display: flex; flex-direction: column; gap: 2rem; }
                .timeline-step { position: relative; padding-left: 3rem; }
                .timeline-node {
                    position: absolute;
                    left: 0;
                    top: 1.5rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 4px solid #e5e7eb;
                    background: #fff;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .timeline-node-highlighted { background: #7c3aed; border-color: #7c3aed; color: #fff; }
                .timeline-card { border: 1px solid #e5e7eb; border-radius: 1rem; padding: 1.5rem; cursor: pointer; }
                .timeline-card-active { border-color: rgba(124, 58, 237, 0.5); background: rgba(124, 58, 237, 0.05); }
                .timeline-card-header { display: flex; justify-content: space-between; align-items: baseline; }
                .timeline-duration { font-size: 0.875rem; color: #6b7280; }
                "#}
            </style>
        </AnimatedSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_numbered_in_order() {
        let ids: Vec<u8> = PHASES.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn hover_and_selection_both_highlight() {
        assert_eq!(node_class(2, 2, None), "timeline-node timeline-node-highlighted");
        assert_eq!(node_class(3, 1, Some(3)), "timeline-node timeline-node-highlighted");
        assert_eq!(node_class(4, 1, Some(3)), "timeline-node");
    }
}
