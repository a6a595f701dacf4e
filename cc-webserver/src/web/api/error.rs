use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use cc_application::error::{AppError, BError};
use cc_core::gateways::places::Error as GatewayError;
pub use cc_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::{field_errors_response, json_error_response};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        AppError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(param_err) => {
                            return match param_err {
                                ParameterError::Validation(field_errors) => {
                                    field_errors_response(req, field_errors)
                                }
                                ParameterError::Repo(RepoError::NotFound) => {
                                    json_error_response(req, param_err, Status::NotFound)
                                }
                                ParameterError::Repo(_) => {
                                    error!("Error: {param_err}");
                                    Err(Status::InternalServerError)
                                }
                            };
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(req, err, Status::NotFound);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::Gateway(err) => match &err {
                GatewayError::Upstream { .. } => json_error_response(req, &err, Status::BadRequest),
                GatewayError::NotConfigured => {
                    error!("Error: {err}");
                    json_error_response(req, &err, Status::InternalServerError)
                }
                GatewayError::Transport(_) => {
                    error!("Error: {err}");
                    Err(Status::InternalServerError)
                }
            },
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
