use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod form;
mod hooks;
mod platform;
mod services;

mod components {
    pub mod analytics_tracker;
    pub mod animated_section;
    pub mod error_fallback;
    pub mod faq;
    pub mod gradient_button;
    pub mod micro_interaction;
    pub mod network_status;
    pub mod scroll_progress;
    pub mod smart_form;
    pub mod testimonials;
    pub mod timeline;
    pub mod whatsapp_button;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::error_fallback::{ErrorFallback, PageFault};
use pages::{landing::Landing, not_found::NotFound};
use services::Services;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let fault = use_state(|| None::<PageFault>);

    let services = {
        let fault = fault.clone();
        use_memo(
            move |_| Services::browser(Callback::from(move |f: PageFault| fault.set(Some(f)))),
            (),
        )
    };

    let on_retry = {
        let fault = fault.clone();
        Callback::from(move |_: ()| fault.set(None))
    };

    // The routed page stays mounted under the recovery screen so a retry
    // finds the form where it was left.
    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            if let Some(fault) = (*fault).clone() {
                <ErrorFallback {fault} {on_retry} />
            }
            <div hidden={fault.is_some()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </div>
        </ContextProvider<Services>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
