//! Access-token handling.
//!
//! Every request to the open API must carry exactly one `access_token`
//! parameter. [`Credential`] owns the token for the lifetime of a client
//! instance and injects it into an outbound parameter set.

use secrecy::{ExposeSecret, SecretString};

use crate::client::Params;

/// Parameter key the API expects the token under.
pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";

/// An OAuth2 access token for the Weibo open API.
///
/// The token is kept behind [`SecretString`] so it is redacted from debug
/// output and never cloned around as plain text.
#[derive(Clone)]
pub struct Credential {
    token: SecretString,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    /// Set the `access_token` parameter, replacing any prior value.
    ///
    /// Idempotent: applying the same credential twice leaves a single
    /// entry with the same value.
    pub fn apply(&self, params: &mut Params) {
        params.retain(|(k, _)| k != ACCESS_TOKEN_KEY);
        params.push((
            ACCESS_TOKEN_KEY.to_string(),
            self.token.expose_secret().to_string(),
        ));
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_injects_token() {
        let cred = Credential::new("2.00abc");
        let mut params: Params = vec![("uid".into(), "42".into())];
        cred.apply(&mut params);
        assert_eq!(
            params,
            vec![
                ("uid".to_string(), "42".to_string()),
                ("access_token".to_string(), "2.00abc".to_string()),
            ]
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let cred = Credential::new("2.00abc");
        let mut params: Params = Vec::new();
        cred.apply(&mut params);
        cred.apply(&mut params);
        let tokens: Vec<_> = params.iter().filter(|(k, _)| k == "access_token").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1, "2.00abc");
    }

    #[test]
    fn apply_overwrites_stale_token() {
        let mut params: Params = vec![("access_token".into(), "stale".into())];
        Credential::new("fresh").apply(&mut params);
        assert_eq!(params, vec![("access_token".to_string(), "fresh".to_string())]);
    }

    #[test]
    fn debug_does_not_leak_token() {
        let cred = Credential::new("2.00secret");
        assert!(!format!("{cred:?}").contains("secret"));
    }
}
