use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::components::gradient_button::{ButtonSize, ButtonVariant, GradientButton};
use crate::config;
use crate::services::use_services;

const TOOLTIP_DELAY_MS: u32 = 3_000;
const TOOLTIP_VISIBLE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Call to action inside a section.
    #[default]
    Inline,
    /// Round bubble pinned to the corner of the screen.
    Floating,
}

impl Placement {
    fn utm_medium(&self) -> &'static str {
        match self {
            Placement::Inline => "cta",
            Placement::Floating => "whatsapp-fixed",
        }
    }
}

/// Chat link tagged with the page location it was clicked from.
pub fn cta_url(location: &str, placement: Placement) -> String {
    config::whatsapp_url(&format!(
        "text={}&utm_source={}&utm_medium={}&utm_campaign={}&utm_content={}",
        urlencoding::encode(config::CTA_MESSAGE),
        config::UTM_SOURCE,
        placement.utm_medium(),
        config::UTM_CAMPAIGN,
        urlencoding::encode(location),
    ))
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub location: AttrValue,
    #[prop_or_default]
    pub placement: Placement,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let services = use_services();
    let href = cta_url(&props.location, props.placement);

    let onclick = {
        let location = props.location.clone();
        Callback::from(move |_: MouseEvent| {
            info!("WhatsApp CTA clicked: {}", location);
            services.track(AnalyticsEvent::CtaClick {
                location: location.to_string(),
            });
        })
    };

    match props.placement {
        Placement::Inline => {
            let label = if props.children.is_empty() {
                html! { {"Quero entender meu caso agora"} }
            } else {
                html! { { for props.children.iter() } }
            };
            html! {
                <GradientButton
                    variant={props.variant}
                    size={props.size}
                    class={props.class.clone()}
                    href={AttrValue::from(href)}
                    aria_label={AttrValue::from(format!("Conversar no WhatsApp - {}", props.location))}
                    onclick={onclick}
                >
                    <span>{label}</span>
                </GradientButton>
            }
        }
        Placement::Floating => html! {
            <FloatingBubble href={AttrValue::from(href)} onclick={onclick} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct FloatingBubbleProps {
    href: AttrValue,
    onclick: Callback<MouseEvent>,
}

#[function_component(FloatingBubble)]
fn floating_bubble(props: &FloatingBubbleProps) -> Html {
    let tooltip = use_state(|| false);

    {
        let tooltip = tooltip.clone();
        use_effect_with_deps(
            move |_| {
                let hide: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let hide_slot = hide.clone();
                let show = Timeout::new(TOOLTIP_DELAY_MS, move || {
                    tooltip.set(true);
                    *hide_slot.borrow_mut() = Some(Timeout::new(TOOLTIP_VISIBLE_MS, move || {
                        tooltip.set(false);
                    }));
                });
                move || {
                    drop(show);
                    hide.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="whatsapp-fixed">
            <a
                href={props.href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-bubble"
                onclick={props.onclick.clone()}
                aria-label="Conversar no WhatsApp"
            >
                <svg width="32" height="32" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347M12.05 21.785h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884M20.464 3.488A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893A11.821 11.821 0 0020.464 3.488" />
                </svg>
            </a>
            if *tooltip {
                <div class="whatsapp-tooltip">
                    <p class="whatsapp-tooltip-title">{"Olá! Posso ajudar? 😊"}</p>
                    <p class="whatsapp-tooltip-note">{"Primeira consulta com 30% de desconto"}</p>
                </div>
            }
            <style>
                {r#"
                .whatsapp-fixed {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 60;
                }
                .whatsapp-bubble {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 60px;
                    height: 60px;
                    border-radius: 50%;
                    background: #25D366;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(37, 211, 102, 0.4);
                }
                .whatsapp-tooltip {
                    position: absolute;
                    bottom: 100%;
                    right: 0;
                    margin-bottom: 1rem;
                    width: 12rem;
                    padding: 0.75rem;
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.15);
                    animation: fadeInUp 0.4s ease-out;
                }
                .whatsapp-tooltip-title { font-weight: 600; color: #374151; }
                .whatsapp-tooltip-note { margin-top: 0.25rem; font-size: 0.75rem; color: #4b5563; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_link_carries_location() {
        let url = cta_url("hero", Placement::Inline);
        assert!(url.starts_with("https://wa.me/5515991159866?text=Ol%C3%A1%21%20Vi"));
        assert!(url.ends_with(
            "&utm_source=landing&utm_medium=cta&utm_campaign=lipedema&utm_content=hero"
        ));
    }

    #[test]
    fn floating_bubble_uses_its_own_medium() {
        let url = cta_url("fixed", Placement::Floating);
        assert!(url.contains("utm_medium=whatsapp-fixed"));
        assert!(url.contains("utm_content=fixed"));
    }
}
