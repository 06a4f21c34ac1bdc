//! This library is a client for the **Azure Cognitive Services text-to-speech** REST API.
//! Give it text, a locale, a gender and an audio format and it returns the rendered speech.
//!
//! # Features
//! + `blocking`: a synchronous [AzureTTSClient](tts::blocking::AzureTTSClient) driving its own runtime.
//!
//! # How it works
//! 1. Build a [ClientConfig](config::ClientConfig) from your subscription key and
//!    [Region](properties::Region), or load one with
//!    [ClientConfig::from_env](config::ClientConfig::from_env).
//!
//! 2. Connect. [connect](tts::client::AzureTTSClient::connect) fetches a bearer token, downloads the
//!    voice list of the region and keeps one **neural** voice per [Gender](properties::Gender) and
//!    [Locale](properties::Locale) in a [VoiceCatalog](voice::VoiceCatalog). A background task then
//!    refreshes the token every 9 minutes, inside its 10 minute lifetime.
//!
//! 3. Synthesize. [synthesize](tts::client::AzureTTSClient::synthesize) returns
//!    [SynthesizedAudio](tts::SynthesizedAudio), you can get
//!    [audio_bytes](tts::SynthesizedAudio::audio_bytes) in the requested
//!    [AudioOutput](properties::AudioOutput). A missing voice fails with
//!    [VoiceNotFound](error::Error::VoiceNotFound) before any request is sent.
//!
//! 4. Call [shutdown](tts::client::AzureTTSClient::shutdown) to stop the refresher. Dropping the
//!    client stops it too.
//!
//!     ### Async Client
//!     ```rust,no_run
//!     use azure_tts::{
//!         config::ClientConfig,
//!         properties::{AudioOutput, Gender, Locale, Region},
//!         tts::client::AzureTTSClient,
//!     };
//!
//!     #[tokio::main]
//!     async fn main() -> azure_tts::error::Result<()> {
//!         let config = ClientConfig::new("your-subscription-key", Region::WestUS2);
//!         let tts = AzureTTSClient::connect(config).await?;
//!         let audio = tts
//!             .synthesize(
//!                 "Hello, World!",
//!                 Locale::EnUs,
//!                 Gender::Female,
//!                 AudioOutput::Audio16khz32kbitrateMonoMp3,
//!             )
//!             .await?;
//!         std::fs::write("hello.mp3", &audio.audio_bytes)?;
//!         tts.shutdown().await;
//!         Ok(())
//!     }
//!     ```
//!     ### Sync Client
//!     ```rust,ignore
//!     use azure_tts::{
//!         config::ClientConfig,
//!         properties::{AudioOutput, Gender, Locale},
//!         tts::blocking::AzureTTSClient,
//!     };
//!
//!     fn main() {
//!         let tts = AzureTTSClient::connect(ClientConfig::from_env().unwrap()).unwrap();
//!         let audio = tts
//!             .synthesize("Hallo Welt!", Locale::DeDe, Gender::Male, AudioOutput::Riff24khz16bitMonoPcm)
//!             .unwrap();
//!         println!("{} bytes from {}", audio.audio_bytes.len(), audio.voice_name);
//!     }
//!     ```
//!
//! The text is XML-escaped before it is embedded in SSML. Set
//! [escape_text](config::ClientConfig::escape_text) to `false` to send SSML fragments such as
//! `<break time='500ms'/>` through unchanged; the caller is then responsible for the markup.

mod constants;

pub mod config;
pub mod error;
pub mod properties;
pub mod tts;
pub mod voice;
