use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use cc_boundary::FieldError;

mod filter;
mod public;

pub use self::{filter::*, public::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Invalid input: {0:?}")]
    Invalid(Vec<FieldError>),

    #[error("{0:?}")]
    Api(#[from] cc_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        let text = response.text().await?;
        // Rejected payloads carry field-level complaints instead
        // of the generic error body
        if let Ok(field_errors) = serde_json::from_str::<Vec<FieldError>>(&text) {
            return Err(Error::Invalid(field_errors));
        }
        match serde_json::from_str::<cc_boundary::Error>(&text) {
            Ok(err) => Err(err.into()),
            Err(_) => Err(Error::Fetch(text)),
        }
    }
}
