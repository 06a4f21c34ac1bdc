#![allow(dead_code)]

use azure_tts::{
    config::{ClientConfig, Endpoints},
    properties::Region,
};
use mockito::{Mock, ServerGuard};
use std::time::Duration;

pub const SUBSCRIPTION_KEY: &str = "test-subscription-key";
pub const TOKEN_PATH: &str = "/sts/v1.0/issueToken";
pub const VOICES_PATH: &str = "/cognitiveservices/voices/list";
pub const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";

pub const VOICES_JSON: &str = r#"[
  {"Name": "Microsoft Server Speech Text to Speech Voice (en-US, JennyNeural)", "ShortName": "en-US-JennyNeural",
   "Gender": "Female", "Locale": "en-US", "SampleRateHertz": "24000", "VoiceType": "Neural"},
  {"Name": "Microsoft Server Speech Text to Speech Voice (en-US, GuyNeural)", "ShortName": "en-US-GuyNeural",
   "Gender": "Male", "Locale": "en-US", "SampleRateHertz": "24000", "VoiceType": "Neural"},
  {"Name": "Microsoft Server Speech Text to Speech Voice (de-DE, KatjaNeural)", "ShortName": "de-DE-KatjaNeural",
   "Gender": "Female", "Locale": "de-DE", "SampleRateHertz": "24000", "VoiceType": "Neural"},
  {"Name": "Microsoft Server Speech Text to Speech Voice (de-DE, Stefan, Apollo)", "ShortName": "de-DE-Stefan-Apollo",
   "Gender": "Male", "Locale": "de-DE", "SampleRateHertz": "16000", "VoiceType": "Standard"},
  {"Name": "Microsoft Server Speech Text to Speech Voice (ja-JP, KeitaNeural)", "ShortName": "ja-JP-KeitaNeural",
   "Gender": "Male", "Locale": "ja-JP", "SampleRateHertz": "24000", "VoiceType": "Neural"}
]"#;

pub fn endpoints(base_url: &str) -> Endpoints {
    Endpoints {
        token_url: format!("{base_url}{TOKEN_PATH}"),
        voice_list_url: format!("{base_url}{VOICES_PATH}"),
        synthesis_url: format!("{base_url}{SYNTHESIS_PATH}"),
    }
}

pub fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(SUBSCRIPTION_KEY, Region::WestUS2)
        .with_endpoints(endpoints(base_url))
        .with_token_timeout(Duration::from_secs(5))
}

pub async fn mock_token(server: &mut ServerGuard, token: &str) -> Mock {
    server
        .mock("POST", TOKEN_PATH)
        .match_header("Ocp-Apim-Subscription-Key", SUBSCRIPTION_KEY)
        .with_status(200)
        .with_body(token)
        .create_async()
        .await
}

pub async fn mock_voices(server: &mut ServerGuard, token: &str) -> Mock {
    server
        .mock("GET", VOICES_PATH)
        .match_header("Authorization", format!("Bearer {token}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(VOICES_JSON)
        .create_async()
        .await
}
