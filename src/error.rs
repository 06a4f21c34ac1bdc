use crate::properties::{Gender, Locale};
use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Endpoint a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Token,
    VoiceList,
    Synthesis,
}

impl std::fmt::Display for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Api::Token => "token endpoint",
            Api::VoiceList => "voice list endpoint",
            Api::Synthesis => "synthesis endpoint",
        })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error(
        "{api}: 400 - A required parameter is missing, empty, or null. Or, the value passed to either a required or optional parameter is invalid. A common issue is a header that is too long"
    )]
    BadRequest { api: Api },
    #[error(
        "{api}: 401 - The request is not authorized. Check to make sure your subscription key or token is valid and in the correct region"
    )]
    Unauthorized { api: Api },
    #[error("{api}: 413 - The SSML input is longer than 1024 characters")]
    PayloadTooLarge { api: Api },
    #[error(
        "{api}: 415 - It's possible that the wrong Content-Type was provided. Content-Type should be set to application/ssml+xml"
    )]
    UnsupportedMediaType { api: Api },
    #[error(
        "{api}: 429 - You have exceeded the quota or rate of requests allowed for your subscription"
    )]
    TooManyRequests { api: Api },
    #[error("{api}: 502 - Network or server-side issue. May also indicate invalid headers")]
    BadGateway { api: Api },
    #[error("{api}: {status} - received unexpected HTTP status code")]
    UnexpectedStatus { api: Api, status: u16 },
    #[error("token endpoint returned an empty token")]
    EmptyToken,
    #[error("unable to decode voice list response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("voice list has no usable neural voice ({listed} entries listed)")]
    EmptyCatalog { listed: usize },
    #[error("no neural voice for gender={gender}, locale={locale}")]
    VoiceNotFound { gender: Gender, locale: Locale },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Coarse grouping of [Error] variants for callers that branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Timeout,
    Auth,
    Request,
    RateLimit,
    Server,
    Decode,
    VoiceNotFound,
    UnexpectedStatus,
    Config,
}

impl Error {
    /// Map a non-200 status returned by `api` to its documented cause.
    pub(crate) fn from_status(api: Api, status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Error::BadRequest { api },
            StatusCode::UNAUTHORIZED => Error::Unauthorized { api },
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge { api },
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Error::UnsupportedMediaType { api },
            StatusCode::TOO_MANY_REQUESTS => Error::TooManyRequests { api },
            StatusCode::BAD_GATEWAY => Error::BadGateway { api },
            status => Error::UnexpectedStatus {
                api,
                status: status.as_u16(),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(e) if e.is_timeout() => ErrorKind::Timeout,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::Unauthorized { .. } | Error::EmptyToken => ErrorKind::Auth,
            Error::BadRequest { .. }
            | Error::PayloadTooLarge { .. }
            | Error::UnsupportedMediaType { .. } => ErrorKind::Request,
            Error::TooManyRequests { .. } => ErrorKind::RateLimit,
            Error::BadGateway { .. } => ErrorKind::Server,
            Error::UnexpectedStatus { status, .. } if *status >= 500 => ErrorKind::Server,
            Error::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Error::Decode(_) | Error::EmptyCatalog { .. } => ErrorKind::Decode,
            Error::VoiceNotFound { .. } => ErrorKind::VoiceNotFound,
            Error::InvalidConfig(_) | Error::Runtime(_) => ErrorKind::Config,
        }
    }

    /// HTTP status carried by the error, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest { .. } => Some(400),
            Error::Unauthorized { .. } => Some(401),
            Error::PayloadTooLarge { .. } => Some(413),
            Error::UnsupportedMediaType { .. } => Some(415),
            Error::TooManyRequests { .. } => Some(429),
            Error::BadGateway { .. } => Some(502),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
