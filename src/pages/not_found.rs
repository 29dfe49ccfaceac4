use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    use_effect_with_deps(
        move |path| {
            warn!("404: no page at {}", path);
            || ()
        },
        path,
    );

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Ops! Página não encontrada"}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Voltar para o início"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #f3f4f6;
                }
                .not-found h1 { font-size: 2.25rem; font-weight: 700; }
                .not-found-link { color: #2563eb; text-decoration: underline; }
                "#}
            </style>
        </div>
    }
}
