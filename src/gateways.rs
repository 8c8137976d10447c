use std::collections::HashMap;

use crate::config;
use tg_core::{entities::ReporterId, gateways::identity::IdentityGateway};

/// Resolves bearer tokens from a fixed table.
pub struct StaticTokens {
    tokens: HashMap<String, ReporterId>,
}

impl IdentityGateway for StaticTokens {
    fn authenticate(&self, token: &str) -> Option<ReporterId> {
        self.tokens.get(token).cloned()
    }
}

pub fn identity_gateway(cfg: config::Identity) -> StaticTokens {
    let config::Identity { tokens } = cfg;
    if tokens.is_empty() {
        log::warn!("No identity tokens configured: all reports are anonymous");
    } else {
        log::info!("Accept {} identity tokens", tokens.len());
    }
    StaticTokens { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_known_tokens_only() {
        let gw = identity_gateway(config::Identity {
            tokens: [("secret".to_string(), ReporterId::from("alice"))].into(),
        });
        assert_eq!(gw.authenticate("secret"), Some(ReporterId::from("alice")));
        assert_eq!(gw.authenticate("alice"), None);
        assert_eq!(gw.authenticate(""), None);
    }
}
