use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::ticker::POLL_INTERVAL;

pub const OWNER: &str = "Govindam Vats";

pub const DEFAULT_CONTACT_EMAIL: &str = "govindamvats.32@gmail.com";
const DEFAULT_PRICE_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price\
    ?ids=bitcoin,ethereum,solana&vs_currencies=usd&include_24hr_change=true";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must use http or https, got {scheme}")]
    UnsupportedScheme { key: &'static str, scheme: String },
    #[error("{0} is not an email address")]
    InvalidEmail(String),
}

/// Build-time overrides, read with `option_env!` so the wasm bundle and the
/// server binary agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides<'a> {
    pub contact_email: Option<&'a str>,
    pub form_relay: Option<&'a str>,
    pub price_endpoint: Option<&'a str>,
}

impl Overrides<'static> {
    pub fn from_build_env() -> Self {
        Self {
            contact_email: option_env!("PORTFOLIO_CONTACT_EMAIL"),
            form_relay: option_env!("PORTFOLIO_FORM_RELAY"),
            price_endpoint: option_env!("PORTFOLIO_PRICE_ENDPOINT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub contact_email: String,
    pub form_relay: Url,
    pub price_endpoint: Url,
    pub ticker_interval: Duration,
}

impl SiteConfig {
    pub fn resolve(overrides: Overrides<'_>) -> Result<Self, ConfigError> {
        let contact_email = overrides
            .contact_email
            .unwrap_or(DEFAULT_CONTACT_EMAIL)
            .trim()
            .to_string();
        if !is_email(&contact_email) {
            return Err(ConfigError::InvalidEmail(contact_email));
        }
        let relay = match overrides.form_relay {
            Some(relay) => relay.to_string(),
            None => format!("https://formsubmit.co/ajax/{contact_email}"),
        };
        Ok(Self {
            owner: OWNER,
            form_relay: parse_endpoint("PORTFOLIO_FORM_RELAY", &relay)?,
            price_endpoint: parse_endpoint(
                "PORTFOLIO_PRICE_ENDPOINT",
                overrides.price_endpoint.unwrap_or(DEFAULT_PRICE_ENDPOINT),
            )?,
            contact_email,
            ticker_interval: POLL_INTERVAL,
        })
    }

    /// Site config from build-time overrides. A malformed override is logged
    /// and the defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(Overrides::from_build_env()).or_else(|err| {
            log::error!("{err}; using default site config");
            Self::resolve(Overrides::default())
        })
    }
}

fn parse_endpoint(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { key, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            key,
            scheme: other.to_string(),
        }),
    }
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !value.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let config = SiteConfig::resolve(Overrides::default()).unwrap();
        assert_eq!(config.owner, OWNER);
        assert_eq!(
            config.form_relay.as_str(),
            "https://formsubmit.co/ajax/govindamvats.32@gmail.com"
        );
        assert_eq!(config.price_endpoint.host_str(), Some("api.coingecko.com"));
        assert!(config
            .price_endpoint
            .query_pairs()
            .any(|(k, v)| k == "include_24hr_change" && v == "true"));
        assert_eq!(config.ticker_interval, Duration::from_millis(3000));
    }

    #[test]
    fn test_email_override_moves_relay() {
        let config = SiteConfig::resolve(Overrides {
            contact_email: Some("me@example.org"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.contact_email, "me@example.org");
        assert_eq!(config.form_relay.path(), "/ajax/me@example.org");
    }

    #[test]
    fn test_bad_overrides_rejected() {
        let err = SiteConfig::resolve(Overrides {
            form_relay: Some("not a url"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: "PORTFOLIO_FORM_RELAY", .. }));

        let err = SiteConfig::resolve(Overrides {
            price_endpoint: Some("ftp://prices.example.com/"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));

        let err = SiteConfig::resolve(Overrides {
            contact_email: Some("nobody"),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidEmail("nobody".to_string()));
    }
}
