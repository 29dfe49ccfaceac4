use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::animated_section::{AnimatedSection, Animation};
use crate::components::micro_interaction::{Effect, MicroInteraction};
use crate::hooks::use_reduced_motion;
use crate::platform::{classify_swipe, HapticIntensity, SwipeDirection};
use crate::services::use_services;

const AUTOPLAY_MS: u32 = 6_000;

pub struct Testimonial {
    pub name: &'static str,
    pub age: u8,
    pub location: &'static str,
    pub condition: &'static str,
    pub text: &'static str,
    pub treatment_duration: &'static str,
    pub key_results: [&'static str; 3],
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Maria Silva",
        age: 42,
        location: "Sorocaba, SP",
        condition: "Lipedema Estágio 2",
        text: "Após anos de sofrimento e diagnósticos incorretos, finalmente encontrei na Integra Lipecare o tratamento que mudou minha vida. Em 6 meses, as dores diminuíram drasticamente e recuperei minha autoestima.",
        treatment_duration: "6 meses",
        key_results: ["90% redução das dores", "Melhora na mobilidade", "Autoestima recuperada"],
    },
    Testimonial {
        name: "Ana Carolina",
        age: 35,
        location: "Votorantim, SP",
        condition: "Lipedema Estágio 1",
        text: "O atendimento humanizado e a expertise da equipe fizeram toda diferença. Hoje consigo usar roupas que não vestia há anos e voltar a fazer atividades que amava.",
        treatment_duration: "4 meses",
        key_results: ["Redução do inchaço", "Melhora estética", "Volta às atividades"],
    },
    Testimonial {
        name: "Juliana Costa",
        age: 38,
        location: "Itu, SP",
        condition: "Lipedema Estágio 2",
        text: "Ser atendida por profissionais que realmente entendem o lipedema fez toda diferença. O protocolo personalizado e o acompanhamento contínuo foram fundamentais para meus resultados.",
        treatment_duration: "8 meses",
        key_results: [
            "Controle da progressão",
            "Melhora na qualidade de vida",
            "Suporte emocional",
        ],
    },
    Testimonial {
        name: "Patricia Oliveira",
        age: 45,
        location: "Sorocaba, SP",
        condition: "Lipedema Estágio 3",
        text: "Depois de anos visitando médicos que não entendiam meu problema, encontrei na Integra uma equipe que mudou minha perspectiva. Hoje tenho esperança e resultados reais.",
        treatment_duration: "10 meses",
        key_results: [
            "Estabilização do quadro",
            "Redução significativa das dores",
            "Melhora emocional",
        ],
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

fn dot_classes(dot: usize, active: usize) -> Classes {
    classes!("testimonial-dot", (dot == active).then_some("testimonial-dot-active"))
}

fn touch_point(e: &TouchEvent) -> Option<(f64, f64)> {
    e.changed_touches()
        .get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel() -> Html {
    let services = use_services();
    let reduced_motion = use_reduced_motion();
    let index = use_state(|| 0_usize);
    let playing = use_state(|| true);
    let touch_start = use_mut_ref(|| None::<(f64, f64)>);
    let len = TESTIMONIALS.len();

    {
        let index = index.clone();
        let millis = if *playing && !reduced_motion { AUTOPLAY_MS } else { 0 };
        use_interval(move || index.set(next_index(*index, len)), millis);
    }

    let go_next = {
        let index = index.clone();
        Callback::from(move |_: ()| index.set(next_index(*index, len)))
    };
    let go_prev = {
        let index = index.clone();
        Callback::from(move |_: ()| index.set(prev_index(*index, len)))
    };

    let onmouseenter = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(false))
    };
    let onmouseleave = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| playing.set(true))
    };

    let ontouchstart = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| *touch_start.borrow_mut() = touch_point(&e))
    };
    let ontouchend = {
        let go_next = go_next.clone();
        let go_prev = go_prev.clone();
        Callback::from(move |e: TouchEvent| {
            let Some((x0, y0)) = touch_start.borrow_mut().take() else {
                return;
            };
            let Some((x1, y1)) = touch_point(&e) else {
                return;
            };
            let direction = classify_swipe(x1 - x0, y1 - y0);
            debug!("testimonial swipe: {:?}", direction);
            match direction {
                Some(SwipeDirection::Left) => {
                    services.haptics.pulse(HapticIntensity::Light);
                    go_next.emit(());
                }
                Some(SwipeDirection::Right) => {
                    services.haptics.pulse(HapticIntensity::Light);
                    go_prev.emit(());
                }
                _ => {}
            }
        })
    };

    let active = *index % len;
    let current = &TESTIMONIALS[active];
    let autoplay_active = *playing && !reduced_motion;

    html! {
        <AnimatedSection animation={Animation::FadeUp} class={classes!("testimonials")}>
            <div class="testimonial-card" {onmouseenter} {onmouseleave} {ontouchstart} {ontouchend}>
                <div class="testimonial-rating" aria-label="5 de 5 estrelas">
                    {"★★★★★"}<span>{"5.0"}</span>
                </div>
                <blockquote class="testimonial-text">{format!("\"{}\"", current.text)}</blockquote>
                <div class="testimonial-author">
                    <div class="testimonial-name">{format!("{}, {} anos", current.name, current.age)}</div>
                    <div class="testimonial-meta">{format!("{} • {}", current.location, current.condition)}</div>
                </div>
                <div class="testimonial-results">
                    <h4>{"Principais Resultados:"}</h4>
                    <ul>
                        { for current.key_results.iter().map(|r| html! { <li>{*r}</li> }) }
                    </ul>
                    <div class="testimonial-duration">
                        <strong>{current.treatment_duration}</strong>
                        <span>{"Tempo de tratamento"}</span>
                    </div>
                </div>
            </div>

            <div class="testimonial-controls">
                <MicroInteraction effect={Effect::Elastic} onclick={go_prev.clone()}>
                    <button class="testimonial-arrow" aria-label="Depoimento anterior">{"‹"}</button>
                </MicroInteraction>
                <div class="testimonial-dots">
                    { for (0..len).map(|i| {
                        let select = {
                            let index = index.clone();
                            Callback::from(move |_: ()| index.set(i))
                        };
                        html! {
                            <MicroInteraction key={i} effect={Effect::Elastic} onclick={select}>
                                <button
                                    class={dot_classes(i, active)}
                                    aria-label={format!("Ir para depoimento {}", i + 1)}
                                />
                            </MicroInteraction>
                        }
                    }) }
                </div>
                <MicroInteraction effect={Effect::Elastic} onclick={go_next}>
                    <button class="testimonial-arrow" aria-label="Próximo depoimento">{"›"}</button>
                </MicroInteraction>
            </div>

            <div class="testimonial-autoplay">
                <span class={classes!("autoplay-dot", autoplay_active.then_some("autoplay-dot-on"))} />
                <span>
                    { if autoplay_active { "Reprodução automática ativa" } else { "Reprodução pausada" } }
                </span>
            </div>
        </AnimatedSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_around() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn only_the_shown_testimonial_has_an_active_dot() {
        let active: Vec<bool> = (0..TESTIMONIALS.len())
            .map(|dot| dot_classes(dot, 2).contains("testimonial-dot-active"))
            .collect();
        assert_eq!(active, vec![false, false, true, false]);
        assert!(dot_classes(0, 2).contains("testimonial-dot"));
    }
}
