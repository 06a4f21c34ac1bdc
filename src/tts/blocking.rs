//! Blocking TTS Client
//!
//! Runs the [async client](super::client::AzureTTSClient) on a private tokio
//! runtime so the token keeps refreshing between calls. Do not use it from
//! within an async context.

use {
    super::{SynthesizedAudio, client},
    crate::{
        config::ClientConfig,
        error::Result,
        properties::{AudioOutput, Gender, Locale},
        voice::VoiceCatalog,
    },
    std::time::Duration,
};

/// Sync Client
#[derive(Debug)]
pub struct AzureTTSClient {
    inner: client::AzureTTSClient,
    runtime: tokio::runtime::Runtime,
}

impl AzureTTSClient {
    /// Blocks until the first token and the voice catalog are fetched.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("azure-tts-refresh")
            .enable_all()
            .build()?;
        let inner = runtime.block_on(client::AzureTTSClient::connect(config))?;
        Ok(Self { inner, runtime })
    }

    pub fn synthesize(
        &self,
        text: &str,
        locale: Locale,
        gender: Gender,
        audio_format: AudioOutput,
    ) -> Result<SynthesizedAudio> {
        self.runtime
            .block_on(self.inner.synthesize(text, locale, gender, audio_format))
    }

    pub fn synthesize_with_timeout(
        &self,
        text: &str,
        locale: Locale,
        gender: Gender,
        audio_format: AudioOutput,
        timeout: Duration,
    ) -> Result<SynthesizedAudio> {
        self.runtime.block_on(
            self.inner
                .synthesize_with_timeout(text, locale, gender, audio_format, timeout),
        )
    }

    pub fn resolve_voice(&self, gender: Gender, locale: Locale) -> Result<&str> {
        self.inner.resolve_voice(gender, locale)
    }

    pub fn voices(&self) -> &VoiceCatalog {
        self.inner.voices()
    }

    pub fn refresh_token(&self) -> Result<()> {
        self.runtime.block_on(self.inner.refresh_token())
    }

    /// Stop the background token refresher. Safe to call more than once.
    pub fn shutdown(&self) {
        self.runtime.block_on(self.inner.shutdown());
    }
}

impl Drop for AzureTTSClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}
