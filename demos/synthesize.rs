use azure_tts::{
    config::ClientConfig,
    properties::{AudioOutput, Gender, Locale},
    tts::blocking::AzureTTSClient,
};
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt::init();

    println!("connecting...");
    let mut config = ClientConfig::from_env().unwrap();
    if let Some(proxy) = std::env::args().nth(1) {
        println!("using proxy {proxy}");
        config = config.with_proxy(proxy);
    }
    let tts = AzureTTSClient::connect(config).unwrap();

    for (locale, gender, text) in [
        (Locale::EnGb, Gender::Male, "Hello, World!"),
        (Locale::ZhCn, Gender::Female, "你好，世界！"),
    ] {
        match tts.resolve_voice(gender, locale) {
            Ok(voice) => println!("choose '{voice}' to synthesize..."),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
        let start = Instant::now();
        let audio = tts
            .synthesize(text, locale, gender, AudioOutput::Riff24khz16bitMonoPcm)
            .unwrap();
        println!("{} bytes in {:?}", audio.audio_bytes.len(), Instant::now() - start);
        std::fs::write(format!("{locale}.wav"), &audio.audio_bytes).unwrap();
    }
}
