use thiserror::Error;
use wasm_bindgen::JsValue;

/// What happened to an attempt to open the outbound channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    Opened,
    /// The browser handed back no usable window, usually a popup blocker.
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window.open failed: {0}")]
    Js(String),
}

impl From<JsValue> for OpenError {
    fn from(value: JsValue) -> Self {
        OpenError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub trait ExternalOpener {
    /// Opens `url` in a new browsing context. Fire and forget: the opened
    /// context is not tracked after this returns.
    fn open(&self, url: &str) -> Result<ChannelStatus, OpenError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl ExternalOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<ChannelStatus, OpenError> {
        let window = web_sys::window().ok_or(OpenError::NoWindow)?;
        let handle = window.open_with_url_and_target(url, "_blank")?;
        Ok(match handle {
            Some(opened) if !opened.closed().unwrap_or(true) => ChannelStatus::Opened,
            _ => ChannelStatus::Blocked,
        })
    }
}
