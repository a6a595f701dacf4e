use thiserror::Error;

use crate::{repositories, util::validate::FieldError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Self::Validation(vec![err])
    }
}
