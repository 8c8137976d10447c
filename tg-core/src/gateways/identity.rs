use crate::entities::ReporterId;

/// Resolves opaque credentials issued by an external identity provider.
pub trait IdentityGateway {
    /// Returns `None` if the token is unknown or no longer valid.
    fn authenticate(&self, token: &str) -> Option<ReporterId>;
}
