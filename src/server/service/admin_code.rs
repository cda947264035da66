//! One-time codes that grant admin rights on login.
//!
//! At startup, if no user holds the admin flag, a code is generated and a login link carrying it
//! is written to the log. Whoever signs in through that link within the code's lifetime becomes
//! the first administrator.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const CODE_TTL: Duration = Duration::from_secs(60);
const CODE_LENGTH: usize = 32;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

struct IssuedCode {
    value: String,
    expires_at: Instant,
}

/// In-memory holder for at most one live admin code.
#[derive(Clone)]
pub struct AdminCodeService {
    current: Arc<RwLock<Option<IssuedCode>>>,
    ttl: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(CODE_TTL)
    }

    fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Issues a fresh code, replacing any code issued before.
    pub async fn generate(&self) -> String {
        let mut rng = rand::rng();
        let value: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();

        *self.current.write().await = Some(IssuedCode {
            value: value.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        value
    }

    /// Returns `true` when `input` matches the live code, consuming it.
    ///
    /// An expired code is discarded on inspection. A wrong guess leaves the live code in place.
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut current = self.current.write().await;

        match current.as_ref() {
            Some(code) if Instant::now() >= code.expires_at => {
                *current = None;
                false
            }
            Some(code) if code.value == input => {
                *current = None;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    async fn is_live(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(|code| Instant::now() < code.expires_at)
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}
