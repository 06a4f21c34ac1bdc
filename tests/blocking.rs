#![cfg(feature = "blocking")]

mod common;

use azure_tts::{
    error::{Error, ErrorKind},
    properties::{AudioOutput, Gender, Locale},
    tts::blocking::AzureTTSClient,
};
use common::{SUBSCRIPTION_KEY, SYNTHESIS_PATH, TOKEN_PATH, VOICES_JSON, VOICES_PATH, config};
use mockito::Server;

#[test]
fn blocking_client_synthesizes() {
    let mut server = Server::new();
    let _token = server
        .mock("POST", TOKEN_PATH)
        .match_header("Ocp-Apim-Subscription-Key", SUBSCRIPTION_KEY)
        .with_status(200)
        .with_body("abc123")
        .create();
    let _voices = server
        .mock("GET", VOICES_PATH)
        .with_status(200)
        .with_body(VOICES_JSON)
        .create();
    let synthesis = server
        .mock("POST", SYNTHESIS_PATH)
        .match_header("Authorization", "Bearer abc123")
        .with_status(200)
        .with_body("RIFF")
        .create();

    let tts = AzureTTSClient::connect(config(&server.url())).unwrap();
    assert_eq!(
        tts.resolve_voice(Gender::Male, Locale::JaJp).unwrap(),
        "ja-JP-KeitaNeural"
    );
    let audio = tts
        .synthesize(
            "こんにちは",
            Locale::JaJp,
            Gender::Male,
            AudioOutput::Riff24khz16bitMonoPcm,
        )
        .unwrap();
    synthesis.assert();
    assert_eq!(audio.audio_bytes, b"RIFF");

    let err = tts
        .synthesize(
            "Hola",
            Locale::EsEs,
            Gender::Female,
            AudioOutput::Riff24khz16bitMonoPcm,
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VoiceNotFound);

    tts.shutdown();
    tts.shutdown();
}

#[test]
fn blocking_connect_rejects_empty_catalog() {
    let mut server = Server::new();
    let _token = server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_body("abc123")
        .create();
    let _voices = server
        .mock("GET", VOICES_PATH)
        .with_status(200)
        .with_body("[]")
        .create();

    let err = AzureTTSClient::connect(config(&server.url())).unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog { listed: 0 }));
}
