use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// Which entities receive identifiers, and with what prefix.
///
/// An entity without a prefix never has an `id` added.
#[derive(Clone)]
pub enum Prefixes {
    /// Fixed entity name to prefix mapping
    Map(IndexMap<String, String>),

    /// Computes the prefix from the entity name
    Fn(Arc<dyn Fn(&str) -> Option<String> + Send + Sync>),
}

impl Prefixes {
    pub fn from_fn<F>(f: F) -> Prefixes
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Prefixes::Fn(Arc::new(f))
    }

    /// Returns the prefix configured for `entity`.
    pub fn prefix_for(&self, entity: &str) -> Option<String> {
        match self {
            Prefixes::Map(map) => map.get(entity).cloned(),
            Prefixes::Fn(f) => f(entity),
        }
    }

    /// Sets the prefix for `entity`, switching to a fixed mapping first if
    /// the prefixes were computed by a function.
    pub(crate) fn insert(&mut self, entity: String, prefix: String) {
        match self {
            Prefixes::Map(map) => {
                map.insert(entity, prefix);
            }
            Prefixes::Fn(_) => {
                *self = Prefixes::Map(IndexMap::from([(entity, prefix)]));
            }
        }
    }
}

impl Default for Prefixes {
    fn default() -> Prefixes {
        Prefixes::Map(IndexMap::new())
    }
}

impl From<IndexMap<String, String>> for Prefixes {
    fn from(map: IndexMap<String, String>) -> Prefixes {
        Prefixes::Map(map)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Prefixes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Prefixes {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Prefixes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Prefixes {
        Prefixes::Map(
            iter.into_iter()
                .map(|(entity, prefix)| (entity.into(), prefix.into()))
                .collect(),
        )
    }
}

impl fmt::Debug for Prefixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefixes::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Prefixes::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}
