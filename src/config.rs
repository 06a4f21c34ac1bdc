//! Client configuration.

use crate::{
    constants,
    error::{Error, Result},
    properties::Region,
};
use std::time::Duration;

/// URLs of the three endpoints the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub voice_list_url: String,
    pub synthesis_url: String,
}

impl Endpoints {
    /// Public Azure endpoints serving `region`.
    pub fn for_region(region: &Region) -> Self {
        let fill = |template: &str| template.replace("{region}", region.as_str());
        Self {
            token_url: fill(constants::TOKEN_URL_TEMPLATE),
            voice_list_url: fill(constants::VOICE_LIST_URL_TEMPLATE),
            synthesis_url: fill(constants::SYNTHESIS_URL_TEMPLATE),
        }
    }
}

/// Client Config
///
/// Create one with [ClientConfig::new] or [ClientConfig::from_env] and adjust it
/// with the `with_*` methods.
#[derive(Clone)]
pub struct ClientConfig {
    pub subscription_key: String,
    pub region: Region,
    /// Outbound proxy applied to every request, e.g. `http://localhost:10809`.
    pub proxy: Option<String>,
    /// Overrides the endpoints derived from `region`.
    pub endpoints: Option<Endpoints>,
    pub user_agent: String,
    /// Must stay below the 10 minute token lifetime.
    pub refresh_interval: Duration,
    /// Per-request timeout for token and voice list requests.
    pub token_timeout: Duration,
    /// Deadline [synthesize](crate::tts::client::AzureTTSClient::synthesize) applies.
    pub synthesize_timeout: Duration,
    /// XML-escape the text before embedding it into SSML. Disable to pass SSML fragments through.
    pub escape_text: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("subscription_key", &"<redacted>")
            .field("region", &self.region)
            .field("proxy", &self.proxy)
            .field("endpoints", &self.endpoints)
            .field("user_agent", &self.user_agent)
            .field("refresh_interval", &self.refresh_interval)
            .field("token_timeout", &self.token_timeout)
            .field("synthesize_timeout", &self.synthesize_timeout)
            .field("escape_text", &self.escape_text)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(subscription_key: impl Into<String>, region: Region) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            region,
            proxy: None,
            endpoints: None,
            user_agent: constants::USER_AGENT.to_string(),
            refresh_interval: constants::TOKEN_REFRESH_INTERVAL,
            token_timeout: constants::TOKEN_REQUEST_TIMEOUT,
            synthesize_timeout: constants::SYNTHESIZE_TIMEOUT,
            escape_text: true,
        }
    }

    /// Build a config from `AZURE_SPEECH_KEY` (or `AZUREKEY`), `AZURE_SPEECH_REGION`
    /// and `AZURE_SPEECH_PROXY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let subscription_key = non_empty(constants::ENV_SUBSCRIPTION_KEY)
            .or_else(|| non_empty(constants::ENV_SUBSCRIPTION_KEY_LEGACY))
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "please set the {} environment variable",
                    constants::ENV_SUBSCRIPTION_KEY
                ))
            })?;
        let region = match non_empty(constants::ENV_REGION) {
            Some(region) => region.parse::<Region>().map_err(|e| {
                Error::InvalidConfig(format!("{}: {e}", constants::ENV_REGION))
            })?,
            None => Region::default(),
        };

        let mut config = Self::new(subscription_key.trim(), region);
        config.proxy = non_empty(constants::ENV_PROXY);
        Ok(config)
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn with_token_timeout(mut self, timeout: Duration) -> Self {
        self.token_timeout = timeout;
        self
    }

    pub fn with_synthesize_timeout(mut self, timeout: Duration) -> Self {
        self.synthesize_timeout = timeout;
        self
    }

    pub fn with_escape_text(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    /// Endpoints in effect: the override if set, else those of `region`.
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
            .clone()
            .unwrap_or_else(|| Endpoints::for_region(&self.region))
    }

    pub fn validate(&self) -> Result<()> {
        if self.subscription_key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "subscription key must not be empty".to_string(),
            ));
        }
        if self.refresh_interval.is_zero() || self.refresh_interval >= constants::TOKEN_LIFETIME {
            return Err(Error::InvalidConfig(format!(
                "refresh interval must be between 0 and {:?}, got {:?}",
                constants::TOKEN_LIFETIME,
                self.refresh_interval
            )));
        }
        if self.token_timeout.is_zero() || self.synthesize_timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "request timeouts must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// HTTP client carrying the configured user agent and proxy.
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn region_endpoints() {
        let endpoints = Endpoints::for_region(&Region::EastUS2);
        assert_eq!(
            endpoints.token_url,
            "https://eastus2.api.cognitive.microsoft.com/sts/v1.0/issueToken"
        );
        assert_eq!(
            endpoints.voice_list_url,
            "https://eastus2.tts.speech.microsoft.com/cognitiveservices/voices/list"
        );
        assert_eq!(
            endpoints.synthesis_url,
            "https://eastus2.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn endpoint_override_wins() {
        let custom = Endpoints {
            token_url: "http://127.0.0.1:1/token".to_string(),
            voice_list_url: "http://127.0.0.1:1/voices".to_string(),
            synthesis_url: "http://127.0.0.1:1/tts".to_string(),
        };
        let config = ClientConfig::new("key", Region::WestUS).with_endpoints(custom.clone());
        assert_eq!(config.endpoints(), custom);
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new("key", Region::WestUS2);
        assert_eq!(config.refresh_interval, Duration::from_secs(540));
        assert_eq!(config.token_timeout, Duration::from_secs(15));
        assert_eq!(config.synthesize_timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "azuretts");
        assert!(config.escape_text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_bad_values() {
        assert!(ClientConfig::new(" ", Region::EastUS).validate().is_err());
        assert!(
            ClientConfig::new("key", Region::EastUS)
                .with_refresh_interval(Duration::from_secs(600))
                .validate()
                .is_err()
        );
        assert!(
            ClientConfig::new("key", Region::EastUS)
                .with_refresh_interval(Duration::ZERO)
                .validate()
                .is_err()
        );
        assert!(
            ClientConfig::new("key", Region::EastUS)
                .with_synthesize_timeout(Duration::ZERO)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn env_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("AZURE_SPEECH_KEY", "secret"),
            ("AZURE_SPEECH_REGION", "westeurope"),
            ("AZURE_SPEECH_PROXY", "http://localhost:10809"),
        ]))
        .unwrap();
        assert_eq!(config.subscription_key, "secret");
        assert_eq!(config.region, Region::WestEurope);
        assert_eq!(config.proxy.as_deref(), Some("http://localhost:10809"));

        let legacy = ClientConfig::from_lookup(lookup(&[("AZUREKEY", "old")])).unwrap();
        assert_eq!(legacy.subscription_key, "old");
        assert_eq!(legacy.region, Region::EastUS);
        assert_eq!(legacy.proxy, None);

        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[])),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[
                ("AZURE_SPEECH_KEY", "secret"),
                ("AZURE_SPEECH_REGION", "not a region"),
            ])),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn debug_redacts_key() {
        let config = ClientConfig::new("super-secret", Region::EastUS);
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
