//! Cache Population
//!
//! Fills the avatar cache on miss. A request's misses are fetched
//! concurrently and joined before the handler reads anything back.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::avatar::AvatarSource;
use crate::cache::SharedCache;
use crate::error::Result;

/// Returns the avatar for `account`, fetching and caching it on a miss.
///
/// The cache lock is released while the avatar is fetched, so two requests
/// missing on the same account may both fetch it; the later write wins.
pub async fn conditionally_populate(
    account: &str,
    cache: &SharedCache,
    source: &dyn AvatarSource,
) -> Result<String> {
    let cached = cache.write().await.lookup(account);
    if let Some(avatar) = cached {
        debug!("Avatar cache hit for {}", account);
        return Ok(avatar);
    }

    debug!("Avatar cache miss for {}", account);
    let avatar = source.fetch_avatar(account).await?;

    let len = cache.write().await.set(account.to_string(), avatar.clone());
    debug!("Cached avatar for {} ({} entries)", account, len);
    Ok(avatar)
}

/// Populates every account concurrently and waits for all of them.
///
/// The result holds one avatar per account. Failed lookups do not abort the
/// batch: nothing is cached for those accounts and they map to `placeholder`.
pub async fn populate_all(
    accounts: &[String],
    cache: &SharedCache,
    source: &dyn AvatarSource,
    placeholder: &str,
) -> HashMap<String, String> {
    let lookups = accounts.iter().map(|account| async move {
        (account, conditionally_populate(account, cache, source).await)
    });

    join_all(lookups)
        .await
        .into_iter()
        .map(|(account, result)| {
            let avatar = result.unwrap_or_else(|err| {
                warn!("Avatar lookup for {} failed: {}", account, err);
                placeholder.to_string()
            });
            (account.clone(), avatar)
        })
        .collect()
}
