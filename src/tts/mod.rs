//! Client, Token refresh, SSML payload, Response Type.
pub mod client;
pub mod token;

#[cfg(feature = "blocking")]
pub mod blocking;

use crate::properties::{AudioOutput, Gender, Locale};

/// Synthesized Audio
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_format: AudioOutput,
    /// Short name of the neural voice that rendered the audio.
    pub voice_name: String,
    pub audio_bytes: Vec<u8>,
}

/// Render the SSML document posted to the synthesis endpoint.
///
/// `text` is embedded as given; escape it first with [escape_xml] unless it is
/// meant to carry SSML markup.
pub fn build_ssml(text: &str, voice_name: &str, locale: Locale, gender: Gender) -> String {
    format!(
        "<speak version='1.0' xml:lang='{locale}'><voice xml:lang='{locale}' xml:gender='{gender}' name='{voice_name}'>{text}</voice></speak>"
    )
}

/// Replace the five XML special characters with their entities.
pub fn escape_xml(text: &str) -> std::borrow::Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return std::borrow::Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    std::borrow::Cow::Owned(escaped)
}
