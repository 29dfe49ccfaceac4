use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    WhatsApp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Large,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "gradient-button-primary",
        ButtonVariant::Secondary => "gradient-button-secondary",
        ButtonVariant::Accent => "gradient-button-accent",
        ButtonVariant::WhatsApp => "gradient-button-whatsapp",
    };
    let size = match size {
        ButtonSize::Default => "gradient-button-md",
        ButtonSize::Small => "gradient-button-sm",
        ButtonSize::Large => "gradient-button-lg",
    };
    format!("gradient-button {} {}", variant, size)
}

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Renders a link opening in a new tab instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    let class = classes!(button_classes(props.variant, props.size), props.class.clone());

    match &props.href {
        Some(href) => html! {
            <a
                class={class}
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button
                class={class}
                disabled={props.disabled}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_combine_variant_and_size() {
        let classes = button_classes(ButtonVariant::WhatsApp, ButtonSize::Large);
        assert_eq!(
            classes,
            "gradient-button gradient-button-whatsapp gradient-button-lg"
        );
        let defaults = button_classes(ButtonVariant::default(), ButtonSize::default());
        assert_eq!(defaults, "gradient-button gradient-button-primary gradient-button-md");
    }
}
