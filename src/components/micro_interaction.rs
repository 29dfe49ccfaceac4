use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_reduced_motion;
use crate::platform::HapticIntensity;
use crate::services::use_services;

const RIPPLE_MS: u32 = 600;
const RIPPLE_SIZE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    Ripple,
    Glow,
    Morphing,
    Elastic,
    Magnetic,
}

pub fn effect_classes(effect: Effect, hovering: bool, reduced_motion: bool, disabled: bool) -> &'static str {
    if reduced_motion || disabled {
        return "";
    }
    match effect {
        Effect::Glow if hovering => "shadow-glow animate-pulse-glow",
        Effect::Morphing if hovering => "animate-morph-hover",
        Effect::Elastic => "micro-elastic",
        Effect::Magnetic => "micro-magnetic",
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ripples {
    next_id: u32,
    pub items: Vec<Ripple>,
}

pub enum RippleAction {
    Spawn { x: f64, y: f64 },
    Expire(u32),
}

impl Ripples {
    pub fn is_live(&self, id: u32) -> bool {
        self.items.iter().any(|r| r.id == id)
    }
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Spawn { x, y } => {
                next.items.push(Ripple {
                    id: next.next_id,
                    x,
                    y,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            RippleAction::Expire(id) => next.items.retain(|r| r.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct MicroInteractionProps {
    #[prop_or_default]
    pub effect: Effect,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a hover/click effect.
#[function_component(MicroInteraction)]
pub fn micro_interaction(props: &MicroInteractionProps) -> Html {
    let services = use_services();
    let reduced_motion = use_reduced_motion();
    let hovering = use_state(|| false);
    let ripples = use_reducer(Ripples::default);
    // Pending expiry timers; dropped with the component.
    let expiries = use_mut_ref(Vec::<(u32, Timeout)>::new);

    let onclick = {
        let ripples = ripples.clone();
        let effect = props.effect;
        let disabled = props.disabled;
        let on_activate = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if !disabled {
                services.haptics.pulse(HapticIntensity::Light);
            }
            if effect == Effect::Ripple && !disabled && !reduced_motion {
                let origin = e
                    .current_target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map(|el| el.get_bounding_client_rect());
                if let Some(rect) = origin {
                    let id = ripples.next_id;
                    ripples.dispatch(RippleAction::Spawn {
                        x: f64::from(e.client_x()) - rect.left() - RIPPLE_SIZE / 2.0,
                        y: f64::from(e.client_y()) - rect.top() - RIPPLE_SIZE / 2.0,
                    });
                    let mut expiries = expiries.borrow_mut();
                    expiries.retain(|(pending, _)| ripples.is_live(*pending));
                    let ripples = ripples.clone();
                    let timer = Timeout::new(RIPPLE_MS, move || ripples.dispatch(RippleAction::Expire(id)));
                    expiries.push((id, timer));
                }
            }
            if let Some(on_activate) = &on_activate {
                on_activate.emit(());
            }
        })
    };

    let onmouseenter = {
        let hovering = hovering.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled && !reduced_motion {
                hovering.set(true);
            }
        })
    };
    let onmouseleave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };

    let class = classes!(
        "micro-interaction",
        effect_classes(props.effect, *hovering, reduced_motion, props.disabled),
        props.disabled.then_some("micro-disabled"),
        props.class.clone()
    );

    html! {
        <div {class} {onclick} {onmouseenter} {onmouseleave}>
            { for props.children.iter() }
            if props.effect == Effect::Ripple && !reduced_motion {
                <div class="micro-ripples">
                    { for ripples.items.iter().map(|r| html! {
                        <span
                            key={r.id}
                            class="micro-ripple"
                            style={format!("left: {}px; top: {}px; width: {RIPPLE_SIZE}px; height: {RIPPLE_SIZE}px;", r.x, r.y)}
                        />
                    }) }
                </div>
            }
            if props.effect == Effect::Glow && *hovering && !reduced_motion {
                <div class="micro-glow" />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ripples_expire_by_id() {
        let state = Rc::new(Ripples::default());
        let state = state.reduce(RippleAction::Spawn { x: 1.0, y: 2.0 });
        let state = state.reduce(RippleAction::Spawn { x: 3.0, y: 4.0 });
        assert_eq!(state.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1]);

        let state = state.reduce(RippleAction::Expire(0));
        assert_eq!(state.items, vec![Ripple { id: 1, x: 3.0, y: 4.0 }]);

        let state = state.reduce(RippleAction::Expire(7));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn expired_ripples_release_their_timers() {
        let state = Rc::new(Ripples::default());
        let state = state.reduce(RippleAction::Spawn { x: 0.0, y: 0.0 });
        let state = state.reduce(RippleAction::Spawn { x: 5.0, y: 5.0 });
        let state = state.reduce(RippleAction::Expire(0));

        let mut pending = vec![0_u32, 1];
        pending.retain(|id| state.is_live(*id));
        assert_eq!(pending, vec![1]);
    }

    #[test]
    fn effects_switch_off_under_reduced_motion() {
        assert_eq!(effect_classes(Effect::Elastic, false, false, false), "micro-elastic");
        assert_eq!(effect_classes(Effect::Glow, false, false, false), "");
        assert_eq!(effect_classes(Effect::Glow, true, false, false), "shadow-glow animate-pulse-glow");
        assert_eq!(effect_classes(Effect::Glow, true, true, false), "");
        assert_eq!(effect_classes(Effect::Magnetic, true, false, true), "");
    }
}
