//! TTS Client module

use {
    super::{
        SynthesizedAudio, build_ssml, escape_xml,
        token::{RefreshHandle, TokenManager, spawn_refresher},
    },
    crate::{
        config::{ClientConfig, Endpoints},
        constants,
        error::{Api, Error, Result},
        properties::{AudioOutput, Gender, Locale},
        voice::{VoiceCatalog, get_voices_list},
    },
    chrono::{DateTime, Utc},
    http::{StatusCode, header},
    std::{sync::Arc, time::Duration},
    tracing::{debug, info},
};

/// Async Client
///
/// Owns the bearer token, the neural voice catalog and the background token
/// refresher. Share it behind an [Arc] to synthesize concurrently.
#[derive(Debug)]
pub struct AzureTTSClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    tokens: Arc<TokenManager>,
    voices: VoiceCatalog,
    refresher: RefreshHandle,
    synthesize_timeout: Duration,
    escape_text: bool,
}

impl AzureTTSClient {
    /// Fetch the first token, build the voice catalog, then start refreshing
    /// the token in the background. Any failure aborts construction, including
    /// a voice list without a single usable neural voice.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = config.build_http_client()?;
        let endpoints = config.endpoints();

        let tokens = TokenManager::connect(
            http.clone(),
            endpoints.token_url.as_str(),
            config.subscription_key.as_str(),
            config.token_timeout,
        )
        .await?;

        let token = tokens.current();
        let voices = get_voices_list(
            &http,
            &endpoints.voice_list_url,
            token.as_str(),
            config.token_timeout,
        )
        .await?;
        let listed = voices.len();
        let voices = VoiceCatalog::from_voices(&voices);
        if voices.is_empty() {
            return Err(Error::EmptyCatalog { listed });
        }
        info!(
            region = %config.region,
            neural_voices = voices.len(),
            "voice catalog ready"
        );

        let tokens = Arc::new(tokens);
        let refresher = spawn_refresher(Arc::clone(&tokens), config.refresh_interval);

        Ok(Self {
            http,
            endpoints,
            tokens,
            voices,
            refresher,
            synthesize_timeout: config.synthesize_timeout,
            escape_text: config.escape_text,
        })
    }

    /// Synthesize `text` with the neural voice for `gender` and `locale`,
    /// giving up after the configured synthesize timeout (30 seconds by default).
    pub async fn synthesize(
        &self,
        text: &str,
        locale: Locale,
        gender: Gender,
        audio_format: AudioOutput,
    ) -> Result<SynthesizedAudio> {
        self.synthesize_with_timeout(text, locale, gender, audio_format, self.synthesize_timeout)
            .await
    }

    /// Synthesize with a caller supplied deadline.
    ///
    /// Dropping the returned future aborts the request.
    pub async fn synthesize_with_timeout(
        &self,
        text: &str,
        locale: Locale,
        gender: Gender,
        audio_format: AudioOutput,
        timeout: Duration,
    ) -> Result<SynthesizedAudio> {
        let voice_name = self.resolve_voice(gender, locale)?;
        let text = if self.escape_text {
            escape_xml(text)
        } else {
            text.into()
        };
        let ssml = build_ssml(&text, voice_name, locale, gender);

        tokio::time::timeout(timeout, self.post_ssml(ssml, audio_format))
            .await
            .map_err(|_| Error::Timeout(timeout))?
            .map(|audio_bytes| SynthesizedAudio {
                audio_format,
                voice_name: voice_name.to_string(),
                audio_bytes,
            })
    }

    async fn post_ssml(&self, ssml: String, audio_format: AudioOutput) -> Result<Vec<u8>> {
        let token = self.tokens.current();
        let response = self
            .http
            .post(&self.endpoints.synthesis_url)
            .header(header::AUTHORIZATION, token.bearer())
            .header(header::CONTENT_TYPE, constants::SSML_CONTENT_TYPE)
            .header(constants::OUTPUT_FORMAT_HEADER, audio_format.as_str())
            .body(ssml)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let audio = response.bytes().await?;
                debug!(bytes = audio.len(), format = %audio_format, "synthesized audio");
                Ok(audio.to_vec())
            }
            status => Err(Error::from_status(Api::Synthesis, status)),
        }
    }

    /// Short name of the neural voice used for `gender` and `locale`.
    pub fn resolve_voice(&self, gender: Gender, locale: Locale) -> Result<&str> {
        self.voices
            .get(gender, locale)
            .ok_or(Error::VoiceNotFound { gender, locale })
    }

    pub fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }

    /// Refresh the token now instead of waiting for the next tick.
    pub async fn refresh_token(&self) -> Result<()> {
        self.tokens.refresh().await
    }

    pub fn token_refreshed_at(&self) -> DateTime<Utc> {
        self.tokens.current().issued_at()
    }

    /// Stop the background token refresher and wait for it to exit.
    ///
    /// Safe to call more than once. Synthesis keeps working until the current
    /// token expires.
    pub async fn shutdown(&self) {
        self.refresher.shutdown().await;
    }

    pub fn is_shut_down(&self) -> bool {
        self.refresher.is_cancelled()
    }
}
