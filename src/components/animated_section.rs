use yew::prelude::*;

use crate::analytics::{AnalyticsEvent, SectionTimer};
use crate::hooks::{use_in_view, use_reduced_motion};
use crate::platform::{now_ms, ViewportOptions};
use crate::services::use_services;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    FadeUp,
    FadeIn,
    SlideLeft,
    SlideRight,
    Scale,
    /// Children appear one after another.
    Stagger,
}

impl Animation {
    fn hidden(&self) -> &'static str {
        match self {
            Animation::FadeUp => "reveal reveal-hidden reveal-offset-up",
            Animation::FadeIn => "reveal reveal-hidden",
            Animation::SlideLeft => "reveal reveal-hidden reveal-offset-left",
            Animation::SlideRight => "reveal reveal-hidden reveal-offset-right",
            Animation::Scale => "reveal reveal-hidden reveal-shrunk",
            Animation::Stagger => "reveal reveal-hidden reveal-stagger",
        }
    }
}

/// Classes for a section that fades in once it was seen. Under reduced
/// motion the content is always shown as is.
pub fn animation_classes(animation: Animation, revealed: bool, reduced_motion: bool) -> &'static str {
    if reduced_motion {
        ""
    } else if revealed && animation == Animation::Stagger {
        "reveal reveal-shown reveal-stagger"
    } else if revealed {
        "reveal reveal-shown"
    } else {
        animation.hidden()
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    /// Also used as the section name when reporting time spent.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let services = use_services();
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let in_view = use_in_view(node.clone(), ViewportOptions::default(), false);
    let revealed = use_state(|| false);
    let timer = use_mut_ref(SectionTimer::default);

    {
        let revealed = revealed.clone();
        let section = props.id.clone();
        use_effect_with_deps(
            move |in_view| {
                if *in_view && !*revealed {
                    revealed.set(true);
                }
                if let Some(section) = section {
                    let mut timer = timer.borrow_mut();
                    if *in_view {
                        timer.enter(&section, now_ms());
                    } else if let Some(seconds) = timer.leave(&section, now_ms()) {
                        services.track(AnalyticsEvent::SectionTime {
                            section: section.to_string(),
                            seconds,
                        });
                    }
                }
                || ()
            },
            in_view,
        );
    }

    let style = (!reduced_motion && props.delay_ms > 0)
        .then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(animation_classes(props.animation, *revealed, reduced_motion), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_until_revealed() {
        assert_eq!(
            animation_classes(Animation::FadeUp, false, false),
            "reveal reveal-hidden reveal-offset-up"
        );
        assert_eq!(
            animation_classes(Animation::Scale, false, false),
            "reveal reveal-hidden reveal-shrunk"
        );
        assert_eq!(animation_classes(Animation::SlideLeft, true, false), "reveal reveal-shown");
    }

    #[test]
    fn reduced_motion_never_hides_content() {
        for animation in [
            Animation::FadeUp,
            Animation::FadeIn,
            Animation::SlideLeft,
            Animation::SlideRight,
            Animation::Scale,
            Animation::Stagger,
        ] {
            assert_eq!(animation_classes(animation, false, true), "");
        }
    }
}
