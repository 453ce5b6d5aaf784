//! The user-agent strings shipped with this crate.

use fake_useragent_utils::collections::{NonEmptyVec, non_empty_vec};
use std::sync::{Arc, LazyLock};

use crate::{Category, UserAgent, UserAgentPool};

/// Builtin Google Chrome user-agents.
pub const CHROME_AGENTS: [&str; 2] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/91.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Chrome/91.0",
];

/// Builtin Mozilla Firefox user-agents.
pub const FIREFOX_AGENTS: [&str; 2] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Firefox/89.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Firefox/89.0",
];

pub(crate) static BUILTIN: LazyLock<UserAgent> = LazyLock::new(|| {
    let chrome: NonEmptyVec<Arc<str>> =
        non_empty_vec![CHROME_AGENTS[0], CHROME_AGENTS[1]].map(Arc::from);
    let firefox: NonEmptyVec<Arc<str>> =
        non_empty_vec![FIREFOX_AGENTS[0], FIREFOX_AGENTS[1]].map(Arc::from);

    let (mut pool, chrome) = UserAgentPool::seed(Category::Chrome, chrome);
    let firefox = pool.insert(Category::Firefox, firefox);

    tracing::debug!(agents = pool.len(), "builtin user-agent pool built");

    UserAgent::from_parts(Arc::new(pool), chrome, firefox)
});
