use log::Level;

/// Clinic number in international format, as used by wa.me links.
pub const WHATSAPP_NUMBER: &str = "5515991159866";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

pub const CTA_MESSAGE: &str = "Olá! Vi a página da Integra Lipecare e quero entender meu caso";

pub const UTM_SOURCE: &str = "landing";
pub const UTM_CAMPAIGN: &str = "lipedema";

pub const CLINIC_NAME: &str = "Integra Lipecare";
pub const CLINIC_PHONE_DISPLAY: &str = "(15) 99115-9866";
pub const CLINIC_EMAIL: &str = "contato@integralipecare.com.br";
pub const CLINIC_INSTAGRAM: &str = "@integralipecare";
pub const CLINIC_ADDRESS: &str = "Avenida Gisele Constantino, 1850 - Sala 1313, Votorantim - SP, 18110-150";
pub const OPENING_HOURS: &str = "Seg a Sex 8h às 18h, Sáb 8h às 13h";

pub const SUPPORT_EMAIL: &str = "contato@integralipecare.com.br";

pub fn whatsapp_url(query: &str) -> String {
    format!("{}/{}?{}", WHATSAPP_BASE_URL, WHATSAPP_NUMBER, query)
}

#[cfg(debug_assertions)]
pub fn is_dev() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn is_dev() -> bool {
    false
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
