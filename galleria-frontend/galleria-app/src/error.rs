use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Server returned no data")]
    NoData,
}

/// Wraps the transport errors, which differ between the server and the browser build
/// and aren't `Clone`.
#[derive(Clone, Debug)]
pub enum SystemError {
    #[cfg(feature = "ssr")]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(not(feature = "ssr"))]
    GlooError(Rc<gloo_net::Error>),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(not(feature = "ssr"))]
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(not(feature = "ssr"))]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_errors_keep_their_message() {
        let err: AppError = serde_json::from_str::<Vec<u32>>("{")
            .map_err(AppError::from)
            .unwrap_err();
        assert!(matches!(&err, AppError::Json(message) if !message.is_empty()));
        assert!(err.to_string().starts_with("JSON "));
    }
}
