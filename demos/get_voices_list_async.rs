use azure_tts::{config::ClientConfig, tts::token::TokenManager, voice::get_voices_list};
use std::time::Instant;

#[tokio::main]
async fn main() {
    let config = ClientConfig::from_env().unwrap();
    let endpoints = config.endpoints();
    let http = config.build_http_client().unwrap();

    let start = Instant::now();
    let tokens = TokenManager::connect(
        http.clone(),
        endpoints.token_url,
        config.subscription_key,
        config.token_timeout,
    )
    .await
    .unwrap();
    let voices = get_voices_list(
        &http,
        &endpoints.voice_list_url,
        tokens.current().as_str(),
        config.token_timeout,
    )
    .await
    .unwrap();
    for voice in &voices {
        println!(
            "{:<40} {:<8} {:<8} {:<7} {}",
            voice.short_name, voice.locale, voice.gender, voice.sample_rate_hertz, voice.voice_type
        );
    }
    println!("{} voices", voices.len());
    println!("{:?}", Instant::now() - start);
}
