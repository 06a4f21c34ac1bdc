//! Provider lookup tables: audio output formats, genders, locales and regions.
//!
//! Every type renders to the string the Azure speech service documents for it
//! through [Display](std::fmt::Display) and parses back through [FromStr].

use std::{fmt, str::FromStr};

/// Error returned when a string names no entry of a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Audio encoding requested through the `X-Microsoft-OutputFormat` header.
///
/// See <https://docs.microsoft.com/en-us/azure/cognitive-services/speech-service/rest-text-to-speech#audio-outputs>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioOutput {
    Riff8Bit8kHzMonoMulaw,
    Riff16Bit16kHzMonoPcm,
    Riff16khz16kbpsMonoSiren,
    Riff24khz16bitMonoPcm,
    Raw8Bit8kHzMonoMulaw,
    Raw16Bit16kHzMonoPcm,
    Raw24khz16bitMonoPcm,
    Ssml16khz16bitMonoTts,
    Audio16khz16kbpsMonoSiren,
    Audio16khz32kbitrateMonoMp3,
    Audio16khz64kbitrateMonoMp3,
    Audio16khz128kbitrateMonoMp3,
    Audio24khz48kbitrateMonoMp3,
    Audio24khz96kbitrateMonoMp3,
}

impl AudioOutput {
    pub const ALL: [AudioOutput; 14] = [
        AudioOutput::Riff8Bit8kHzMonoMulaw,
        AudioOutput::Riff16Bit16kHzMonoPcm,
        AudioOutput::Riff16khz16kbpsMonoSiren,
        AudioOutput::Riff24khz16bitMonoPcm,
        AudioOutput::Raw8Bit8kHzMonoMulaw,
        AudioOutput::Raw16Bit16kHzMonoPcm,
        AudioOutput::Raw24khz16bitMonoPcm,
        AudioOutput::Ssml16khz16bitMonoTts,
        AudioOutput::Audio16khz16kbpsMonoSiren,
        AudioOutput::Audio16khz32kbitrateMonoMp3,
        AudioOutput::Audio16khz64kbitrateMonoMp3,
        AudioOutput::Audio16khz128kbitrateMonoMp3,
        AudioOutput::Audio24khz48kbitrateMonoMp3,
        AudioOutput::Audio24khz96kbitrateMonoMp3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioOutput::Riff8Bit8kHzMonoMulaw => "riff-8khz-8bit-mono-mulaw",
            AudioOutput::Riff16Bit16kHzMonoPcm => "riff-16khz-16bit-mono-pcm",
            AudioOutput::Riff16khz16kbpsMonoSiren => "riff-16khz-16kbps-mono-siren",
            AudioOutput::Riff24khz16bitMonoPcm => "riff-24khz-16bit-mono-pcm",
            AudioOutput::Raw8Bit8kHzMonoMulaw => "raw-8khz-8bit-mono-mulaw",
            AudioOutput::Raw16Bit16kHzMonoPcm => "raw-16khz-16bit-mono-pcm",
            AudioOutput::Raw24khz16bitMonoPcm => "raw-24khz-16bit-mono-pcm",
            AudioOutput::Ssml16khz16bitMonoTts => "ssml-16khz-16bit-mono-tts",
            AudioOutput::Audio16khz16kbpsMonoSiren => "audio-16khz-16kbps-mono-siren",
            AudioOutput::Audio16khz32kbitrateMonoMp3 => "audio-16khz-32kbitrate-mono-mp3",
            AudioOutput::Audio16khz64kbitrateMonoMp3 => "audio-16khz-64kbitrate-mono-mp3",
            AudioOutput::Audio16khz128kbitrateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            AudioOutput::Audio24khz48kbitrateMonoMp3 => "audio-24khz-48kbitrate-mono-mp3",
            AudioOutput::Audio24khz96kbitrateMonoMp3 => "audio-24khz-96kbitrate-mono-mp3",
        }
    }
}

impl fmt::Display for AudioOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioOutput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AudioOutput::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("audio output", s))
    }
}

/// Voice gender as reported by the voice list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(ParseError::new("gender", s))
        }
    }
}

macro_rules! locales {
    ($($variant:ident => $tag:literal,)*) => {
        /// Language and region of a voice, e.g. `en-US`.
        ///
        /// See "locale" in <https://docs.microsoft.com/en-us/azure/cognitive-services/speech-service/language-support>
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Locale {
            $($variant,)*
        }

        impl Locale {
            pub const ALL: &'static [Locale] = &[$(Locale::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Locale::$variant => $tag,)*
                }
            }
        }
    };
}

locales! {
    AfZa => "af-ZA",
    AmEt => "am-ET",
    ArAe => "ar-AE",
    ArBh => "ar-BH",
    ArDz => "ar-DZ",
    ArEg => "ar-EG",
    ArIq => "ar-IQ",
    ArJo => "ar-JO",
    ArKw => "ar-KW",
    ArLy => "ar-LY",
    ArMa => "ar-MA",
    ArQa => "ar-QA",
    ArSa => "ar-SA",
    ArSy => "ar-SY",
    ArTn => "ar-TN",
    ArYe => "ar-YE",
    BgBg => "bg-BG",
    BnBd => "bn-BD",
    CaEs => "ca-ES",
    CsCz => "cs-CZ",
    CyGb => "cy-GB",
    DaDk => "da-DK",
    DeAt => "de-AT",
    DeCh => "de-CH",
    DeDe => "de-DE",
    ElGr => "el-GR",
    EnAu => "en-AU",
    EnCa => "en-CA",
    EnGb => "en-GB",
    EnHk => "en-HK",
    EnIe => "en-IE",
    EnIn => "en-IN",
    EnKe => "en-KE",
    EnNg => "en-NG",
    EnNz => "en-NZ",
    EnPh => "en-PH",
    EnSg => "en-SG",
    EnTz => "en-TZ",
    EnUs => "en-US",
    EnZa => "en-ZA",
    EsAr => "es-AR",
    EsBo => "es-BO",
    EsCl => "es-CL",
    EsCo => "es-CO",
    EsCr => "es-CR",
    EsCu => "es-CU",
    EsDo => "es-DO",
    EsEc => "es-EC",
    EsEs => "es-ES",
    EsGq => "es-GQ",
    EsGt => "es-GT",
    EsHn => "es-HN",
    EsMx => "es-MX",
    EsNi => "es-NI",
    EsPa => "es-PA",
    EsPe => "es-PE",
    EsPr => "es-PR",
    EsPy => "es-PY",
    EsSv => "es-SV",
    EsUs => "es-US",
    EsUy => "es-UY",
    EsVe => "es-VE",
    EtEe => "et-EE",
    FaIr => "fa-IR",
    FiFi => "fi-FI",
    FilPh => "fil-PH",
    FrBe => "fr-BE",
    FrCa => "fr-CA",
    FrCh => "fr-CH",
    FrFr => "fr-FR",
    GaIe => "ga-IE",
    GlEs => "gl-ES",
    GuIn => "gu-IN",
    HeIl => "he-IL",
    HiIn => "hi-IN",
    HrHr => "hr-HR",
    HuHu => "hu-HU",
    IdId => "id-ID",
    ItIt => "it-IT",
    JaJp => "ja-JP",
    JvId => "jv-ID",
    KmKh => "km-KH",
    KoKr => "ko-KR",
    LtLt => "lt-LT",
    LvLv => "lv-LV",
    MrIn => "mr-IN",
    MsMy => "ms-MY",
    MtMt => "mt-MT",
    MyMm => "my-MM",
    NbNo => "nb-NO",
    NlBe => "nl-BE",
    NlNl => "nl-NL",
    PlPl => "pl-PL",
    PtBr => "pt-BR",
    PtPt => "pt-PT",
    RoRo => "ro-RO",
    RuRu => "ru-RU",
    SkSk => "sk-SK",
    SlSi => "sl-SI",
    SoSo => "so-SO",
    SuId => "su-ID",
    SvSe => "sv-SE",
    SwKe => "sw-KE",
    SwTz => "sw-TZ",
    TaIn => "ta-IN",
    TaLk => "ta-LK",
    TaSg => "ta-SG",
    TeIn => "te-IN",
    ThTh => "th-TH",
    TrTr => "tr-TR",
    UkUa => "uk-UA",
    UrIn => "ur-IN",
    UrPk => "ur-PK",
    UzUz => "uz-UZ",
    ViVn => "vi-VN",
    ZhCn => "zh-CN",
    ZhHk => "zh-HK",
    ZhTw => "zh-TW",
    ZuZa => "zu-ZA",
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("locale", s))
    }
}

/// Azure region hosting the speech resource.
///
/// See <https://docs.microsoft.com/en-us/azure/cognitive-services/speech-service/regions>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Region {
    AustraliaEast,
    BrazilSouth,
    CanadaCentral,
    CentralUS,
    EastAsia,
    #[default]
    EastUS,
    EastUS2,
    FranceCentral,
    IndiaCentral,
    JapanEast,
    JapanWest,
    KoreaCentral,
    NorthCentralUS,
    NorthEurope,
    SouthCentralUS,
    SoutheastAsia,
    UKSouth,
    WestEurope,
    WestUS,
    WestUS2,
    /// Region identifier not listed above, used verbatim in endpoint hosts.
    Custom(String),
}

impl Region {
    pub const KNOWN: [Region; 20] = [
        Region::AustraliaEast,
        Region::BrazilSouth,
        Region::CanadaCentral,
        Region::CentralUS,
        Region::EastAsia,
        Region::EastUS,
        Region::EastUS2,
        Region::FranceCentral,
        Region::IndiaCentral,
        Region::JapanEast,
        Region::JapanWest,
        Region::KoreaCentral,
        Region::NorthCentralUS,
        Region::NorthEurope,
        Region::SouthCentralUS,
        Region::SoutheastAsia,
        Region::UKSouth,
        Region::WestEurope,
        Region::WestUS,
        Region::WestUS2,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Region::AustraliaEast => "australiaeast",
            Region::BrazilSouth => "brazilsouth",
            Region::CanadaCentral => "canadacentral",
            Region::CentralUS => "centralus",
            Region::EastAsia => "eastasia",
            Region::EastUS => "eastus",
            Region::EastUS2 => "eastus2",
            Region::FranceCentral => "francecentral",
            Region::IndiaCentral => "indiacentral",
            Region::JapanEast => "japaneast",
            Region::JapanWest => "japanwest",
            Region::KoreaCentral => "koreacentral",
            Region::NorthCentralUS => "northcentralus",
            Region::NorthEurope => "northeurope",
            Region::SouthCentralUS => "southcentralus",
            Region::SoutheastAsia => "southeastasia",
            Region::UKSouth => "uksouth",
            Region::WestEurope => "westeurope",
            Region::WestUS => "westus",
            Region::WestUS2 => "westus2",
            Region::Custom(region) => region,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ParseError;

    /// Known identifiers map to their variant, any other bare identifier
    /// becomes [Region::Custom].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseError::new("region", s));
        }
        let lower = s.to_ascii_lowercase();
        Ok(Region::KNOWN
            .into_iter()
            .find(|region| region.as_str() == lower)
            .unwrap_or(Region::Custom(lower)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_output_strings() {
        assert_eq!(
            AudioOutput::Audio24khz96kbitrateMonoMp3.to_string(),
            "audio-24khz-96kbitrate-mono-mp3"
        );
        assert_eq!(
            "riff-16khz-16bit-mono-pcm".parse::<AudioOutput>(),
            Ok(AudioOutput::Riff16Bit16kHzMonoPcm)
        );
        assert!("audio-8khz-mp3".parse::<AudioOutput>().is_err());
    }

    #[test]
    fn every_table_entry_parses_back() {
        for format in AudioOutput::ALL {
            assert_eq!(format.as_str().parse::<AudioOutput>(), Ok(format));
        }
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(*locale));
        }
        for region in Region::KNOWN {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region.clone()));
        }
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::EnUs.to_string(), "en-US");
        assert_eq!(Locale::FilPh.as_str(), "fil-PH");
        assert_eq!("zh-cn".parse::<Locale>(), Ok(Locale::ZhCn));
        assert!("xx-YY".parse::<Locale>().is_err());
    }

    #[test]
    fn gender_parsing() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("MALE".parse::<Gender>(), Ok(Gender::Male));
        assert!("Neutral".parse::<Gender>().is_err());
    }

    #[test]
    fn region_parsing() {
        assert_eq!("eastus2".parse::<Region>(), Ok(Region::EastUS2));
        assert_eq!("WestEurope".parse::<Region>(), Ok(Region::WestEurope));
        assert_eq!(
            "swedencentral".parse::<Region>(),
            Ok(Region::Custom("swedencentral".to_string()))
        );
        assert!("east us".parse::<Region>().is_err());
        assert!("".parse::<Region>().is_err());
        assert_eq!(Region::default().as_str(), "eastus");
    }
}
