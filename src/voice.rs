//! Voice Type, Voice Catalog and Get function
//!
//! Use [get_voices_list] to fetch every voice the region offers, then
//! [VoiceCatalog::from_voices] to reduce it to the neural voice per
//! [Gender] and [Locale].

use crate::{
    error::{Api, Error, Result},
    properties::{Gender, Locale},
};
use http::{StatusCode, header};
use std::{collections::HashMap, time::Duration};
use tracing::{debug, trace};

/// Voice family tag of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceType {
    Standard,
    Neural,
}

/// Voice get from the Azure voice list API.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Voice {
    #[serde(rename = "Name")]
    pub name: String,
    /// Synthesis-ready identifier, e.g. `en-US-JennyNeural`.
    #[serde(rename = "ShortName")]
    pub short_name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Locale")]
    pub locale: String,
    #[serde(rename = "SampleRateHertz", default)]
    pub sample_rate_hertz: String,
    #[serde(rename = "VoiceType", default)]
    pub voice_type: String,
}

impl Voice {
    pub fn voice_type(&self) -> Option<VoiceType> {
        match self.voice_type.as_str() {
            "Neural" => Some(VoiceType::Neural),
            "Standard" => Some(VoiceType::Standard),
            _ => None,
        }
    }

    /// Catalog key of this voice, if its gender and locale are known.
    pub fn key(&self) -> Option<VoiceKey> {
        Some(VoiceKey {
            gender: self.gender.parse().ok()?,
            locale: self.locale.parse().ok()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceKey {
    pub gender: Gender,
    pub locale: Locale,
}

/// Neural voice short name per [VoiceKey].
///
/// Built once and never updated. When the provider lists several neural voices
/// for one key the last one listed wins; the provider gives no ordering
/// guarantee, so which voice that is may change between responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalog(HashMap<VoiceKey, String>);

impl VoiceCatalog {
    pub fn from_voices(voices: &[Voice]) -> Self {
        let mut map = HashMap::new();
        for voice in voices {
            if voice.voice_type() != Some(VoiceType::Neural) {
                continue;
            }
            let Some(key) = voice.key() else {
                trace!(
                    voice = %voice.short_name,
                    gender = %voice.gender,
                    locale = %voice.locale,
                    "skipping voice with unknown gender or locale"
                );
                continue;
            };
            if let Some(previous) = map.insert(key, voice.short_name.clone()) {
                if previous != voice.short_name {
                    debug!(
                        gender = %key.gender,
                        locale = %key.locale,
                        replaced = %previous,
                        voice = %voice.short_name,
                        "duplicate neural voice, keeping the last one listed"
                    );
                }
            }
        }
        Self(map)
    }

    pub fn get(&self, gender: Gender, locale: Locale) -> Option<&str> {
        self.0
            .get(&VoiceKey { gender, locale })
            .map(String::as_str)
    }

    pub fn contains(&self, gender: Gender, locale: Locale) -> bool {
        self.0.contains_key(&VoiceKey { gender, locale })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VoiceKey, &str)> {
        self.0.iter().map(|(key, name)| (key, name.as_str()))
    }
}

impl FromIterator<(VoiceKey, String)> for VoiceCatalog {
    fn from_iter<I: IntoIterator<Item = (VoiceKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Get all voices listed at `url`, authenticated with a bearer `token`.
pub async fn get_voices_list(
    client: &reqwest::Client,
    url: &str,
    token: &str,
    timeout: Duration,
) -> Result<Vec<Voice>> {
    let response = client
        .get(url)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .timeout(timeout)
        .send()
        .await?;

    match response.status() {
        StatusCode::OK => {
            let body = response.bytes().await?;
            let voices: Vec<Voice> = serde_json::from_slice(&body).map_err(Error::Decode)?;
            debug!(count = voices.len(), "fetched voice list");
            Ok(voices)
        }
        status => Err(Error::from_status(Api::VoiceList, status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(short_name: &str, gender: &str, locale: &str, voice_type: &str) -> Voice {
        Voice {
            name: format!("Microsoft Server Speech Text to Speech Voice ({short_name})"),
            short_name: short_name.to_string(),
            gender: gender.to_string(),
            locale: locale.to_string(),
            sample_rate_hertz: "24000".to_string(),
            voice_type: voice_type.to_string(),
        }
    }

    #[test]
    fn decodes_provider_json() {
        let body = r#"[
            {"Name": "Microsoft Server Speech Text to Speech Voice (en-US, JennyNeural)",
             "DisplayName": "Jenny", "ShortName": "en-US-JennyNeural", "Gender": "Female",
             "Locale": "en-US", "SampleRateHertz": "24000", "VoiceType": "Neural"}
        ]"#;
        let voices: Vec<Voice> = serde_json::from_str(body).unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].short_name, "en-US-JennyNeural");
        assert_eq!(voices[0].voice_type(), Some(VoiceType::Neural));
        assert_eq!(
            voices[0].key(),
            Some(VoiceKey {
                gender: Gender::Female,
                locale: Locale::EnUs
            })
        );
    }

    #[test]
    fn catalog_keeps_only_neural_voices() {
        let catalog = VoiceCatalog::from_voices(&[
            voice("en-US-JennyNeural", "Female", "en-US", "Neural"),
            voice("en-US-BenjaminRUS", "Male", "en-US", "Standard"),
            voice("de-DE-ConradNeural", "Male", "de-DE", "Neural"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(Gender::Female, Locale::EnUs),
            Some("en-US-JennyNeural")
        );
        assert_eq!(catalog.get(Gender::Male, Locale::EnUs), None);
        assert_eq!(
            catalog.get(Gender::Male, Locale::DeDe),
            Some("de-DE-ConradNeural")
        );
    }

    #[test]
    fn catalog_last_duplicate_wins() {
        let catalog = VoiceCatalog::from_voices(&[
            voice("en-US-JennyNeural", "Female", "en-US", "Neural"),
            voice("en-US-AriaNeural", "Female", "en-US", "Neural"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(Gender::Female, Locale::EnUs),
            Some("en-US-AriaNeural")
        );
    }

    #[test]
    fn catalog_skips_unknown_entries() {
        let catalog = VoiceCatalog::from_voices(&[
            voice("en-US-AvaMultilingualNeural", "Neutral", "en-US", "Neural"),
            voice("xx-XX-SomeNeural", "Female", "xx-XX", "Neural"),
            voice("en-GB-SoniaNeural", "Female", "en-GB", ""),
        ]);
        assert!(catalog.is_empty());
        assert!(!catalog.contains(Gender::Female, Locale::EnGb));
    }
}
