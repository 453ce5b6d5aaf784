use fake_useragent_utils::{collections::NonEmptyVec, info};
use std::{collections::BTreeMap, sync::Arc};

use crate::{AgentTable, Category, UnknownCategory};

/// A read-only pool of user-agent strings to randomly select from.
///
/// All strings are stored once, flattened in table order,
/// with an index per [`Category`] pointing into that flat list.
/// Random selection across the whole pool samples that flat list directly,
/// so every string has the same `1/N` chance of being picked,
/// regardless of how many strings its category holds.
///
/// The pool holds no mutable state. Randomness comes from the
/// thread-local [`rand::rng`] or from an rng passed by the caller.
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: NonEmptyVec<Arc<str>>,
    map_category: BTreeMap<Category, NonEmptyVec<usize>>,
}

impl UserAgentPool {
    /// Create a pool containing the agents of a single category,
    /// returning the indices those agents got assigned.
    pub(crate) fn seed(
        category: Category,
        agents: NonEmptyVec<Arc<str>>,
    ) -> (Self, NonEmptyVec<usize>) {
        let indices = NonEmptyVec {
            head: 0,
            tail: (1..agents.len()).collect(),
        };
        let mut map_category = BTreeMap::new();
        map_category.insert(category, indices.clone());
        (
            Self {
                agents,
                map_category,
            },
            indices,
        )
    }

    /// Add the agents of a category to the pool,
    /// returning the indices those agents got assigned.
    pub(crate) fn insert(
        &mut self,
        category: Category,
        agents: NonEmptyVec<Arc<str>>,
    ) -> NonEmptyVec<usize> {
        let indices = agents.map(|agent| {
            let index = self.agents.len();
            self.agents.push(agent);
            index
        });
        match self.map_category.get_mut(&category) {
            Some(existing) => existing.extend(indices.iter().copied()),
            None => {
                self.map_category.insert(category, indices.clone());
            }
        }
        indices
    }

    /// Select a random user-agent of the given category.
    pub fn get(&self, category: Category) -> Result<&str, UnknownCategory> {
        self.get_with_rng(category, &mut rand::rng())
    }

    /// Select a random user-agent of the given category,
    /// using the given random number generator.
    pub fn get_with_rng<R>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> Result<&str, UnknownCategory>
    where
        R: rand::Rng + ?Sized,
    {
        let indices = self.category_indices(category)?;
        let ua = self.pick(indices, rng);
        tracing::trace!(%category, ua, "selected user-agent from category");
        Ok(ua)
    }

    /// Select a random user-agent of the category with the given label,
    /// e.g. `"chrome"`.
    pub fn get_by_name(&self, name: &str) -> Result<&str, UnknownCategory> {
        self.get(name.parse()?)
    }

    /// Select a random user-agent from the entire pool.
    ///
    /// Each string is equally likely to be selected,
    /// independent of the category it belongs to.
    #[must_use]
    pub fn random(&self) -> &str {
        self.random_with_rng(&mut rand::rng())
    }

    /// Select a random user-agent from the entire pool,
    /// using the given random number generator.
    pub fn random_with_rng<R>(&self, rng: &mut R) -> &str
    where
        R: rand::Rng + ?Sized,
    {
        let ua = self.agents.choose(rng);
        tracing::trace!(ua = %ua, "selected user-agent from pool");
        ua
    }

    /// Returns `true` if the pool holds agents for the given category.
    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.map_category.contains_key(&category)
    }

    /// Iterate over the categories present in this pool.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.map_category.keys().copied()
    }

    /// Iterate over all user-agents in this pool.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(|ua| &**ua)
    }

    /// Iterate over the user-agents of the given category.
    pub fn iter_category(
        &self,
        category: Category,
    ) -> Result<impl Iterator<Item = &str>, UnknownCategory> {
        let indices = self.category_indices(category)?;
        Ok(indices.iter().map(|index| &*self.agents[*index]))
    }

    /// Total amount of user-agents in this pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always returns false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn category_indices(
        &self,
        category: Category,
    ) -> Result<&NonEmptyVec<usize>, UnknownCategory> {
        self.map_category
            .get(&category)
            .ok_or_else(|| UnknownCategory::from_category(category))
    }

    // indices are only ever handed out by this pool,
    // so they always fall within `agents`
    pub(crate) fn pick<R>(&self, indices: &NonEmptyVec<usize>, rng: &mut R) -> &str
    where
        R: rand::Rng + ?Sized,
    {
        &self.agents[*indices.choose(rng)]
    }
}

impl From<AgentTable> for UserAgentPool {
    fn from(table: AgentTable) -> Self {
        let NonEmptyVec {
            head: (category, agents),
            tail,
        } = table.into_categories();

        let (mut pool, _) = Self::seed(category, agents);
        for (category, agents) in tail {
            pool.insert(category, agents);
        }

        tracing::debug!(
            categories = pool.map_category.len(),
            agents = pool.agents.len(),
            version = info::VERSION,
            "user-agent pool built",
        );

        pool
    }
}
