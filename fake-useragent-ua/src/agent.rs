use fake_useragent_utils::collections::NonEmptyVec;
use std::sync::Arc;

use crate::{Category, UnknownCategory, UserAgentPool, builtin::BUILTIN};

/// Hands out random user-agent strings.
///
/// Every accessor call picks a fresh random string,
/// nothing is memoized between calls.
///
/// ```
/// use fake_useragent_ua::UserAgent;
///
/// let ua = UserAgent::new();
/// assert!(ua.chrome().contains("Chrome"));
/// assert!(ua.firefox().contains("Firefox"));
/// assert!(!ua.random().is_empty());
/// ```
///
/// [`UserAgent::new`] uses the builtin pool, which is built once per process
/// and shared by all [`UserAgent`] values created that way.
/// Use [`UserAgent::try_from_pool`] to hand out strings from your own pool.
#[derive(Debug, Clone)]
pub struct UserAgent {
    pool: Arc<UserAgentPool>,
    chrome: NonEmptyVec<usize>,
    firefox: NonEmptyVec<usize>,
}

impl UserAgent {
    /// Create a new [`UserAgent`] backed by the builtin pool.
    #[must_use]
    pub fn new() -> Self {
        BUILTIN.clone()
    }

    /// Create a new [`UserAgent`] backed by a custom pool.
    ///
    /// The pool has to contain both chrome and firefox agents,
    /// an [`UnknownCategory`] error is returned otherwise.
    pub fn try_from_pool(pool: impl Into<Arc<UserAgentPool>>) -> Result<Self, UnknownCategory> {
        let pool = pool.into();
        let chrome = pool.category_indices(Category::Chrome)?.clone();
        let firefox = pool.category_indices(Category::Firefox)?.clone();
        Ok(Self::from_parts(pool, chrome, firefox))
    }

    pub(crate) fn from_parts(
        pool: Arc<UserAgentPool>,
        chrome: NonEmptyVec<usize>,
        firefox: NonEmptyVec<usize>,
    ) -> Self {
        Self {
            pool,
            chrome,
            firefox,
        }
    }

    /// A random Google Chrome user-agent.
    #[must_use]
    pub fn chrome(&self) -> &str {
        self.chrome_with_rng(&mut rand::rng())
    }

    /// A random Google Chrome user-agent, using the given rng.
    pub fn chrome_with_rng<R>(&self, rng: &mut R) -> &str
    where
        R: rand::Rng + ?Sized,
    {
        self.pool.pick(&self.chrome, rng)
    }

    /// A random Mozilla Firefox user-agent.
    #[must_use]
    pub fn firefox(&self) -> &str {
        self.firefox_with_rng(&mut rand::rng())
    }

    /// A random Mozilla Firefox user-agent, using the given rng.
    pub fn firefox_with_rng<R>(&self, rng: &mut R) -> &str
    where
        R: rand::Rng + ?Sized,
    {
        self.pool.pick(&self.firefox, rng)
    }

    /// A random user-agent of any category.
    ///
    /// See [`UserAgentPool::random`].
    #[must_use]
    pub fn random(&self) -> &str {
        self.pool.random()
    }

    /// A random user-agent of any category, using the given rng.
    pub fn random_with_rng<R>(&self, rng: &mut R) -> &str
    where
        R: rand::Rng + ?Sized,
    {
        self.pool.random_with_rng(rng)
    }

    /// A random user-agent of the given category.
    pub fn get(&self, category: Category) -> Result<&str, UnknownCategory> {
        self.pool.get(category)
    }

    /// A random user-agent of the given category, using the given rng.
    pub fn get_with_rng<R>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> Result<&str, UnknownCategory>
    where
        R: rand::Rng + ?Sized,
    {
        self.pool.get_with_rng(category, rng)
    }

    /// The pool backing this [`UserAgent`].
    #[must_use]
    pub fn pool(&self) -> &UserAgentPool {
        &self.pool
    }
}

impl Default for UserAgent {
    fn default() -> Self {
        Self::new()
    }
}
