use chrono::{DateTime, Utc};
use log::{error, info};
use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::components::whatsapp_button::{cta_url, Placement};
use crate::config;
use crate::services::use_services;

/// An unexpected failure that replaces the page with the recovery screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFault {
    pub id: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl PageFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, Utc::now())
    }

    pub fn at(message: impl Into<String>, at: DateTime<Utc>) -> Self {
        let fault = Self {
            id: format!("ERR_{}", at.timestamp_millis()),
            message: message.into(),
            at,
        };
        error!("page fault {}: {}", fault.id, fault.message);
        fault
    }
}

/// Pre-filled e-mail to the clinic describing `fault`.
pub fn report_mailto(fault: &PageFault, page_url: &str) -> String {
    let subject = format!("Erro no site - ID: {}", fault.id);
    let body = format!(
        "Olá! Encontrei um erro no site da {}.\n\n\
         ID do Erro: {}\n\
         Página: {}\n\
         Horário: {}\n\n\
         Descrição do que estava fazendo:\n\
         [Descreva o que você estava fazendo quando o erro ocorreu]\n\n\
         Detalhes técnicos:\n{}\n",
        config::CLINIC_NAME,
        fault.id,
        page_url,
        fault.at.format("%d/%m/%Y %H:%M:%S UTC"),
        fault.message,
    );
    format!(
        "mailto:{}?subject={}&body={}",
        config::SUPPORT_EMAIL,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(Properties, PartialEq)]
pub struct ErrorFallbackProps {
    pub fault: PageFault,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorFallback)]
pub fn error_fallback(props: &ErrorFallbackProps) -> Html {
    let services = use_services();

    let retry = {
        let id = props.fault.id.clone();
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| {
            info!("retrying after {}", id);
            services.track(AnalyticsEvent::ErrorRetry { error_id: id.clone() });
            on_retry.emit(());
        })
    };

    let go_home = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/") {
                error!("could not navigate home: {:?}", e);
            }
        }
    });

    let page_url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let mailto = report_mailto(&props.fault, &page_url);

    html! {
        <div class="error-fallback" role="alert">
            <div class="error-fallback-card">
                <div class="error-fallback-icon">{"⚠"}</div>
                <h1>{"Ops! Algo deu errado"}</h1>
                <p>
                    {"Encontramos um problema técnico inesperado. Tente novamente ou fale com a nossa equipe."}
                </p>
                <div class="error-fallback-id">{format!("ID do Erro: {}", props.fault.id)}</div>
                <div class="error-fallback-actions">
                    <button class="error-retry" onclick={retry}>{"Tentar Novamente"}</button>
                    <button class="error-home" onclick={go_home}>{"Voltar ao Início"}</button>
                    <a class="error-report" href={mailto}>{"Reportar Problema"}</a>
                </div>
                <p class="error-fallback-contact">
                    {"Precisa de ajuda imediata? "}
                    <a href={cta_url("error", Placement::Inline)} target="_blank" rel="noopener noreferrer">
                        {format!("WhatsApp {}", config::CLINIC_PHONE_DISPLAY)}
                    </a>
                </p>
            </div>
            <style>
                {r#"
                .error-fallback {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .error-fallback-card { max-width: 40rem; text-align: center; }
                .error-fallback-icon { font-size: 3rem; color: #dc2626; }
                .error-fallback-id {
                    margin: 1rem 0;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: #f3f4f6;
                    font-family: monospace;
                    font-size: 0.875rem;
                }
                .error-fallback-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .error-fallback-actions > * { padding: 0.75rem 1.5rem; border-radius: 0.75rem; font-weight: 500; }
                .error-retry { background: #7c3aed; color: #fff; }
                .error-report { background: #ec4899; color: #fff; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fault() -> PageFault {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        PageFault::at("popup failed", at)
    }

    #[test]
    fn id_is_derived_from_the_timestamp() {
        assert_eq!(fault().id, "ERR_1700000000123");
    }

    #[test]
    fn report_link_is_prefilled() {
        let link = report_mailto(&fault(), "https://example.com/");
        assert!(link.starts_with(
            "mailto:contato@integralipecare.com.br?subject=Erro%20no%20site%20-%20ID%3A%20ERR_1700000000123&body="
        ));
        assert!(link.contains("popup%20failed"));
        assert!(link.contains("https%3A%2F%2Fexample.com%2F"));
        assert!(!link.contains('\n'));
    }
}
