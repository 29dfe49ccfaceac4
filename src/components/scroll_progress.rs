use yew::prelude::*;

use crate::hooks::{use_reduced_motion, use_scroll_progress};

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_scroll_progress();
    let reduced_motion = use_reduced_motion();

    let background = if reduced_motion {
        "#7c3aed"
    } else {
        "linear-gradient(90deg, #7c3aed, #ec4899, #7c3aed)"
    };
    let transition = if reduced_motion { "none" } else { "width 0.3s ease-out" };

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", progress)}
            style="position: fixed; top: 0; left: 0; right: 0; z-index: 50; height: 4px;"
        >
            <div style={format!("height: 100%; width: {progress}%; background: {background}; transition: {transition};")} />
        </div>
    }
}
