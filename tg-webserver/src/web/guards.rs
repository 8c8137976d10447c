use core::ops::Deref;

use rocket::{
    self,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use tg_application::error::AppError;
use tg_core::{entities::ReporterId, gateways::identity::IdentityGateway, usecases::Error as ParameterError};

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The reporter behind the bearer token of a request, if any.
#[derive(Debug)]
pub struct Auth {
    has_bearer_token: bool,
    reporter: Option<ReporterId>,
}

impl Auth {
    /// `None` for anonymous requests.
    ///
    /// Fails if a token has been presented that the identity
    /// provider did not accept.
    pub fn reporter(&self) -> Result<Option<&ReporterId>> {
        if self.has_bearer_token && self.reporter.is_none() {
            return Err(ParameterError::Unauthorized.into());
        }
        Ok(self.reporter.as_ref())
    }

    pub fn authenticated_reporter(&self) -> Result<&ReporterId> {
        self.reporter()?
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens: Vec<_> = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .collect();
        let identity = try_outcome!(request.guard::<&State<Identity>>().await);
        let reporter = bearer_tokens
            .iter()
            .find_map(|token| identity.authenticate(token));
        Outcome::Success(Self {
            has_bearer_token: !bearer_tokens.is_empty(),
            reporter,
        })
    }
}

pub struct Identity(pub Box<dyn IdentityGateway + Send + Sync>);

impl Deref for Identity {
    type Target = dyn IdentityGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_from_header_value() {
        assert_eq!(get_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(get_bearer_token("Basic abc"), None);
        assert_eq!(get_bearer_token("Bearer"), None);
        assert_eq!(get_bearer_token("Bearer a b"), None);
    }
}
