//! API configuration.
//!
//! Nothing here performs I/O. [`ApiConfig`] records the settings a transport
//! needs to send requests built from these models, and
//! [`ApiConfig::request_headers`] turns them into the headers to attach.

use serde::{Deserialize, Serialize};

use crate::form::FormConfig;
use crate::params::RequestOptions;

/// The API version these models mirror.
pub const API_VERSION: &str = "2024-12-18.acacia";

/// Settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Value of the `Stripe-Version` header (default: [`API_VERSION`]).
    pub api_version: String,

    /// Connected account used when a request does not name one.
    pub stripe_account: Option<String>,

    /// Prefix for generated idempotency keys.
    pub idempotency_prefix: Option<String>,

    /// Form encoding options.
    pub form: FormConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            stripe_account: None,
            idempotency_prefix: None,
            form: FormConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the default connected account.
    #[must_use]
    pub fn with_stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Set the idempotency key prefix.
    #[must_use]
    pub fn with_idempotency_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.idempotency_prefix = Some(prefix.into());
        self
    }

    /// Set the form encoding options.
    #[must_use]
    pub const fn with_form(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    /// Headers to attach to a request carrying `options`.
    ///
    /// A per-request account overrides the configured one. Custom headers
    /// come last.
    #[must_use]
    pub fn request_headers(&self, options: &RequestOptions) -> Vec<(String, String)> {
        let mut headers = vec![("Stripe-Version".to_string(), self.api_version.clone())];

        if let Some(account) = options.stripe_account.as_ref().or(self.stripe_account.as_ref()) {
            headers.push(("Stripe-Account".to_string(), account.clone()));
        }
        if let Some(key) = &options.idempotency_key {
            headers.push(("Idempotency-Key".to_string(), key.clone()));
        }
        headers.extend(options.headers.iter().cloned());

        headers
    }

    /// Give `options` an idempotency key if it has none, using the
    /// configured prefix.
    pub fn ensure_idempotency_key(&self, options: &mut RequestOptions) {
        options.idempotency_key_or_new(self.idempotency_prefix.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pin_the_api_version() {
        let config = ApiConfig::new();
        assert_eq!(config.api_version, API_VERSION);
        assert_eq!(config.form.float_decimals, Some(4));
    }

    #[test]
    fn builders_match_deserialized_config() {
        let built = ApiConfig::new()
            .with_api_version("2024-06-20")
            .with_stripe_account("acct_123")
            .with_idempotency_prefix("zb-")
            .with_form(FormConfig { float_decimals: None });
        let parsed: ApiConfig = serde_json::from_str(
            r#"{"api_version":"2024-06-20","stripe_account":"acct_123",
                "idempotency_prefix":"zb-","form":{"float_decimals":null}}"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn request_headers_prefer_per_request_account() {
        let config = ApiConfig::new().with_stripe_account("acct_default");
        let options = RequestOptions {
            idempotency_key: Some("key-1".into()),
            stripe_account: Some("acct_override".into()),
            headers: vec![("X-Trace".into(), "abc".into())],
        };
        assert_eq!(
            config.request_headers(&options),
            vec![
                ("Stripe-Version".to_string(), API_VERSION.to_string()),
                ("Stripe-Account".to_string(), "acct_override".to_string()),
                ("Idempotency-Key".to_string(), "key-1".to_string()),
                ("X-Trace".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn ensure_idempotency_key_uses_prefix() {
        let config = ApiConfig::new().with_idempotency_prefix("zb-");
        let mut options = RequestOptions::default();
        config.ensure_idempotency_key(&mut options);
        assert!(options.idempotency_key.as_deref().unwrap().starts_with("zb-"));
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ApiConfig = serde_json::from_str(r#"{"stripe_account": "acct_9"}"#).unwrap();
        assert_eq!(config.api_version, API_VERSION);
        assert_eq!(config.stripe_account.as_deref(), Some("acct_9"));
    }
}
