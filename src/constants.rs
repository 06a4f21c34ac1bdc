use std::time::Duration;

pub static TOKEN_URL_TEMPLATE: &str = "https://{region}.api.cognitive.microsoft.com/sts/v1.0/issueToken";
pub static VOICE_LIST_URL_TEMPLATE: &str =
    "https://{region}.tts.speech.microsoft.com/cognitiveservices/voices/list";
pub static SYNTHESIS_URL_TEMPLATE: &str =
    "https://{region}.tts.speech.microsoft.com/cognitiveservices/v1";

pub static SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub static OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
pub static SSML_CONTENT_TYPE: &str = "application/ssml+xml";
pub static USER_AGENT: &str = "azuretts";

/// Lifetime the token endpoint grants each token.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(10 * 60);
/// One minute inside [TOKEN_LIFETIME].
pub const TOKEN_REFRESH_INTERVAL: Duration = Duration::from_secs(9 * 60);
pub const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const SYNTHESIZE_TIMEOUT: Duration = Duration::from_secs(30);

pub static ENV_SUBSCRIPTION_KEY: &str = "AZURE_SPEECH_KEY";
pub static ENV_SUBSCRIPTION_KEY_LEGACY: &str = "AZUREKEY";
pub static ENV_REGION: &str = "AZURE_SPEECH_REGION";
pub static ENV_PROXY: &str = "AZURE_SPEECH_PROXY";
