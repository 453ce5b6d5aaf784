use fake_useragent_utils::collections::NonEmptyVec;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use std::{collections::BTreeMap, sync::Arc};

use crate::{Category, InvalidAgentTable};

/// A fixed table of user-agent strings, grouped by [`Category`].
///
/// Every category present maps to at least one non-empty string,
/// and the table itself always has at least one category.
/// Categories are ordered by their declaration order in [`Category`],
/// regardless of the order they were added in.
/// Turn it into a [`UserAgentPool`](crate::UserAgentPool) to select from it.
///
/// It (de)serializes as a map of category label to a list of strings:
///
/// ```json
/// {
///     "chrome": ["Mozilla/5.0 ... Chrome/91.0"],
///     "firefox": ["Mozilla/5.0 ... Firefox/89.0"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<Category, Vec<String>>")]
pub struct AgentTable {
    categories: NonEmptyVec<(Category, NonEmptyVec<Arc<str>>)>,
}

impl AgentTable {
    /// Create a new [`AgentTable`] with the agents of a first category.
    ///
    /// Fails in case one of the agents is an empty string.
    pub fn new<I, S>(category: Category, agents: I) -> Result<Self, InvalidAgentTable>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let agents = validate_agents(category, agents)?;
        Ok(Self {
            categories: NonEmptyVec::new((category, agents)),
        })
    }

    /// Add the agents of a category to this [`AgentTable`].
    ///
    /// Agents of a category that is already present are appended to it.
    pub fn with_agents<I, S>(
        mut self,
        category: Category,
        agents: I,
    ) -> Result<Self, InvalidAgentTable>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.insert_agents(category, agents)?;
        Ok(self)
    }

    /// Add the agents of a category to this [`AgentTable`].
    ///
    /// Agents of a category that is already present are appended to it.
    pub fn insert_agents<I, S>(
        &mut self,
        category: Category,
        agents: I,
    ) -> Result<&mut Self, InvalidAgentTable>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let agents = validate_agents(category, agents)?;

        // categories are kept sorted in declaration order
        let categories = &mut self.categories;
        if categories.head.0 == category {
            categories.head.1.extend(agents);
        } else if category < categories.head.0 {
            let head = std::mem::replace(&mut categories.head, (category, agents));
            categories.tail.insert(0, head);
        } else {
            match categories.tail.binary_search_by_key(&category, |(c, _)| *c) {
                Ok(index) => categories.tail[index].1.extend(agents),
                Err(index) => categories.tail.insert(index, (category, agents)),
            }
        }
        Ok(self)
    }

    /// Get the agents of a category, if present.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&NonEmptyVec<Arc<str>>> {
        self.categories
            .iter()
            .find_map(|(c, agents)| (*c == category).then_some(agents))
    }

    /// Iterate over the categories in this table.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().map(|(c, _)| *c)
    }

    /// Iterate over all categories with their agents.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &NonEmptyVec<Arc<str>>)> {
        self.categories.iter().map(|(c, agents)| (*c, agents))
    }

    /// Total amount of agents in this table, across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|(_, agents)| agents.len()).sum()
    }

    /// Always returns false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn into_categories(self) -> NonEmptyVec<(Category, NonEmptyVec<Arc<str>>)> {
        self.categories
    }
}

fn validate_agents<I, S>(
    category: Category,
    agents: I,
) -> Result<NonEmptyVec<Arc<str>>, InvalidAgentTable>
where
    I: IntoIterator<Item = S>,
    S: Into<Arc<str>>,
{
    let agents = NonEmptyVec::collect(agents.into_iter().map(Into::into))
        .ok_or(InvalidAgentTable)?;
    for agent in &agents {
        if agent.is_empty() {
            return Err(InvalidAgentTable);
        }
        if !agent.contains(category.product_token()) {
            tracing::debug!(
                %category,
                ua = %agent,
                "user-agent does not advertise the product token of its category",
            );
        }
    }
    Ok(agents)
}

impl TryFrom<BTreeMap<Category, Vec<String>>> for AgentTable {
    type Error = InvalidAgentTable;

    fn try_from(map: BTreeMap<Category, Vec<String>>) -> Result<Self, Self::Error> {
        let mut iter = map.into_iter();
        let (category, agents) = iter.next().ok_or(InvalidAgentTable)?;
        let mut table = Self::new(category, agents)?;
        for (category, agents) in iter {
            table.insert_agents(category, agents)?;
        }
        Ok(table)
    }
}

impl Serialize for AgentTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (category, agents) in &self.categories {
            map.serialize_entry(category, agents)?;
        }
        map.end()
    }
}
