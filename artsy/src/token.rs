use chrono::{DateTime, Duration, Utc};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tokens are treated as valid for a week after they were issued to us.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XappToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl XappToken {
    pub fn issued_at(token: String, now: DateTime<Utc>) -> Self {
        Self {
            token,
            expires_at: now + Duration::days(TOKEN_LIFETIME_DAYS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Clone, Default, Debug)]
pub(crate) struct TokenCache {
    token: Arc<RwLock<Option<XappToken>>>,
}

impl TokenCache {
    pub(crate) async fn valid_token(&self, now: DateTime<Utc>) -> Option<String> {
        let token = self.token.read().await;
        token
            .as_ref()
            .filter(|t| !t.is_expired(now))
            .map(|t| t.token.clone())
    }

    /// Returns the cached token, or runs `refresh` while holding the write lock so
    /// that concurrent callers wait for a single refresh instead of racing.
    pub(crate) async fn get_or_refresh<F, Fut, E>(
        &self,
        now: DateTime<Utc>,
        refresh: F,
    ) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<XappToken, E>>,
    {
        if let Some(token) = self.valid_token(now).await {
            return Ok(token);
        }
        let mut slot = self.token.write().await;
        if let Some(token) = slot.as_ref().filter(|t| !t.is_expired(now)) {
            return Ok(token.token.clone());
        }
        let token = refresh().await?;
        let value = token.token.clone();
        *slot = Some(token);
        Ok(value)
    }

    #[cfg(test)]
    pub(crate) async fn current(&self) -> Option<XappToken> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn token_expires_after_a_week() {
        let now = Utc::now();
        let token = XappToken::issued_at("abc".to_string(), now);
        assert!(!token.is_expired(now));
        assert!(!token.is_expired(now + Duration::days(6)));
        assert!(token.is_expired(now + Duration::days(7)));
    }

    #[tokio::test]
    async fn refreshes_only_when_missing_or_expired() {
        let cache = TokenCache::default();
        let now = Utc::now();
        assert_eq!(cache.valid_token(now).await, None);

        let first = cache
            .get_or_refresh(now, || async {
                Ok::<_, Infallible>(XappToken::issued_at("first".to_string(), now))
            })
            .await
            .unwrap();
        assert_eq!(first, "first");

        let cached = cache
            .get_or_refresh(now + Duration::days(1), || async {
                Ok::<_, Infallible>(XappToken::issued_at("second".to_string(), now))
            })
            .await
            .unwrap();
        assert_eq!(cached, "first");

        let later = now + Duration::days(8);
        let refreshed = cache
            .get_or_refresh(later, || async {
                Ok::<_, Infallible>(XappToken::issued_at("third".to_string(), later))
            })
            .await
            .unwrap();
        assert_eq!(refreshed, "third");
        assert_eq!(cache.current().await.unwrap().token, "third");
    }

    #[tokio::test]
    async fn failed_refresh_leaves_cache_empty() {
        let cache = TokenCache::default();
        let now = Utc::now();
        let result = cache
            .get_or_refresh(now, || async { Err::<XappToken, _>("no token") })
            .await;
        assert_eq!(result, Err("no token"));
        assert!(cache.current().await.is_none());
    }
}
