use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use tg_application::error::AppError;
pub use tg_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
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

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

fn parameter_status(err: &ParameterError) -> Option<Status> {
    let status = match err {
        ParameterError::InvalidValue(_) | ParameterError::DuplicateVenue(_) => Status::BadRequest,
        ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Conflict | ParameterError::Repo(RepoError::AlreadyExists) => {
            Status::Conflict
        }
        ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
        ParameterError::Repo(RepoError::Other(_)) => return None,
    };
    Some(status)
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                match &err {
                    AppError::Business(err) => {
                        if let Some(status) = parameter_status(err) {
                            return json_error_response(req, err, status);
                        }
                    }
                    AppError::Timeout(_) | AppError::Unavailable(_) => {
                        warn!("{err}");
                        return json_error_response(req, &err, Status::ServiceUnavailable);
                    }
                }
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &"Internal server error", Status::InternalServerError)
            }
        }
    }
}
