//! Bearer token lifecycle
//!
//! [TokenManager] holds the token issued for a subscription key and replaces it
//! on [refresh](TokenManager::refresh). [spawn_refresher] keeps it fresh in the
//! background until the returned [RefreshHandle] is cancelled.

use crate::{
    constants,
    error::{Api, Error, Result},
};
use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use http::{StatusCode, header};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Access token issued by the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    issued_at: DateTime<Utc>,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &format_args!("<{} bytes>", self.value.len()))
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Holds the current token and fetches new ones.
///
/// Readers get a whole token through [current](Self::current) while a
/// refresh swaps in its replacement.
pub struct TokenManager {
    http: reqwest::Client,
    url: String,
    subscription_key: String,
    timeout: Duration,
    token: ArcSwap<Token>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("url", &self.url)
            .field("token", &self.token.load())
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Fetch the first token. Fails if the endpoint does not issue one.
    pub async fn connect(
        http: reqwest::Client,
        url: impl Into<String>,
        subscription_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let url = url.into();
        let subscription_key = subscription_key.into();
        let token = issue_token(&http, &url, &subscription_key, timeout).await?;
        Ok(Self {
            http,
            url,
            subscription_key,
            timeout,
            token: ArcSwap::from_pointee(token),
        })
    }

    pub fn current(&self) -> Arc<Token> {
        self.token.load_full()
    }

    /// Replace the token with a freshly issued one.
    ///
    /// On any failure the previous token stays in place.
    pub async fn refresh(&self) -> Result<()> {
        let token = issue_token(&self.http, &self.url, &self.subscription_key, self.timeout).await?;
        debug!(issued_at = %token.issued_at, "access token refreshed");
        self.token.store(Arc::new(token));
        Ok(())
    }
}

async fn issue_token(
    client: &reqwest::Client,
    url: &str,
    subscription_key: &str,
    timeout: Duration,
) -> Result<Token> {
    let response = client
        .post(url)
        .header(constants::SUBSCRIPTION_KEY_HEADER, subscription_key)
        .header(header::CONTENT_LENGTH, "0")
        .timeout(timeout)
        .send()
        .await?;

    match response.status() {
        StatusCode::OK => {
            let value = response.text().await?;
            if value.trim().is_empty() {
                return Err(Error::EmptyToken);
            }
            Ok(Token {
                value,
                issued_at: Utc::now(),
            })
        }
        status => Err(Error::from_status(Api::Token, status)),
    }
}

/// Stops the background refresher.
///
/// Cancelling is idempotent; dropping the handle cancels as well.
#[derive(Debug)]
pub struct RefreshHandle {
    cancel: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl RefreshHandle {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel and wait for the loop to exit. A refresh already in flight
    /// completes first. Concurrent callers all return after the loop is gone.
    pub async fn shutdown(&self) {
        self.cancel();
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            if let Err(err) = handle.await {
                warn!("token refresher ended abnormally: {err}");
            }
        }
    }

    /// Whether the refresher loop has exited.
    pub fn is_finished(&self) -> bool {
        match self.task.try_lock() {
            Ok(task) => task.as_ref().is_none_or(JoinHandle::is_finished),
            Err(_) => false,
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Refresh `manager` every `period`, starting one period from now.
///
/// A failed refresh is logged and retried on the next tick; the current token
/// may still be valid. Must be called from within a tokio runtime.
pub fn spawn_refresher(manager: Arc<TokenManager>, period: Duration) -> RefreshHandle {
    let cancel = CancellationToken::new();
    let cancelled = cancel.clone();
    let task = tokio::spawn(async move {
        info!(?period, "token refresher started");
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => break,
                _ = ticker.tick() => {
                    if let Err(err) = manager.refresh().await {
                        warn!("failed to refresh token, {err}");
                    }
                }
            }
        }
        info!("token refresher stopped");
    });
    RefreshHandle {
        cancel,
        task: Mutex::new(Some(task)),
    }
}
