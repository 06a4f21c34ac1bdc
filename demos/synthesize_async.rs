use azure_tts::{
    config::ClientConfig,
    properties::{AudioOutput, Gender, Locale},
    tts::client::AzureTTSClient,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// export AZURE_SPEECH_KEY=<key> AZURE_SPEECH_REGION=westus2
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("connecting...");
    let config = ClientConfig::from_env().unwrap();
    let tts = AzureTTSClient::connect(config).await.unwrap();
    println!("{} neural voices available", tts.voices().len());

    let start = Instant::now();
    let audio = tts
        .synthesize(
            "Hello, World!",
            Locale::EnUs,
            Gender::Female,
            AudioOutput::Audio16khz32kbitrateMonoMp3,
        )
        .await
        .unwrap();
    println!(
        "'{}' rendered {} bytes",
        audio.voice_name,
        audio.audio_bytes.len()
    );
    println!("{:?}", Instant::now() - start);

    std::fs::write("hello.mp3", &audio.audio_bytes).unwrap();
    tts.shutdown().await;
}
