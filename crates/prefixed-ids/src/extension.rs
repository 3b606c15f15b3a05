mod builder;
pub use builder::Builder;

mod dispatch;

use crate::{AssignId, IdGenerator, MissingId, Prefixes, Rewriter};

use prefixed_ids_core::Schema;
use std::{fmt, sync::Arc};

/// Shared state between all `PrefixedIds` clones. Read-only once built.
pub(crate) struct Shared {
    pub(crate) schema: Arc<Schema>,
    pub(crate) prefixes: Prefixes,
    pub(crate) generator: Arc<dyn IdGenerator>,
    pub(crate) missing_id: MissingId,
}

/// Intercepts write operations and assigns prefixed identifiers to the
/// records they create.
///
/// Cloning is cheap; clones share the schema, prefixes and generator.
#[derive(Clone)]
pub struct PrefixedIds {
    shared: Arc<Shared>,
}

impl PrefixedIds {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }

    pub fn prefixes(&self) -> &Prefixes {
        &self.shared.prefixes
    }

    /// Generates an identifier for a new record of `entity`, if the entity
    /// has a prefix.
    pub fn generate_id(&self, entity: &str) -> Option<String> {
        self.shared.assign_id(entity)
    }

    /// A rewriter configured like this extension, for walking payloads
    /// outside of an intercepted operation.
    pub fn rewriter(&self) -> Rewriter<'_> {
        Rewriter::new(&self.shared.schema, &*self.shared).missing_id(self.shared.missing_id)
    }
}

impl AssignId for Shared {
    fn assign_id(&self, entity: &str) -> Option<String> {
        let prefix = self.prefixes.prefix_for(entity)?;
        Some(self.generator.generate(&prefix))
    }
}

impl fmt::Debug for PrefixedIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedIds")
            .field("schema", &self.shared.schema)
            .field("prefixes", &self.shared.prefixes)
            .field("missing_id", &self.shared.missing_id)
            .finish_non_exhaustive()
    }
}
