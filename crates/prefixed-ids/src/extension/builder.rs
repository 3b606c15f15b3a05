use super::{PrefixedIds, Shared};
use crate::{IdGenerator, MissingId, Prefixes, RandomId};

use prefixed_ids_core::{Error, Result, Schema};
use std::sync::Arc;

/// Configures a [`PrefixedIds`] extension.
///
/// A schema is required. Without prefixes no identifier is ever assigned;
/// without a generator, [`RandomId`] is used.
#[derive(Default)]
pub struct Builder {
    schema: Option<Arc<Schema>>,
    prefixes: Prefixes,
    generator: Option<Arc<dyn IdGenerator>>,
    missing_id: MissingId,
}

impl Builder {
    /// Sets the schema used to resolve relations.
    pub fn schema(&mut self, schema: impl Into<Arc<Schema>>) -> &mut Self {
        self.schema = Some(schema.into());
        self
    }

    /// Assigns identifiers to records of `entity`, starting with `prefix`.
    pub fn prefix(&mut self, entity: impl Into<String>, prefix: impl Into<String>) -> &mut Self {
        self.prefixes.insert(entity.into(), prefix.into());
        self
    }

    /// Replaces the prefix configuration.
    pub fn prefixes(&mut self, prefixes: impl Into<Prefixes>) -> &mut Self {
        self.prefixes = prefixes.into();
        self
    }

    /// Computes prefixes from entity names, replacing any configured ones.
    /// Entities for which `f` returns `None` get no identifier.
    pub fn prefix_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.prefixes = Prefixes::from_fn(f);
        self
    }

    /// Sets the identifier generator.
    pub fn id_generator(&mut self, generator: impl IdGenerator) -> &mut Self {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Sets which `id` values count as missing.
    pub fn missing_id(&mut self, missing_id: MissingId) -> &mut Self {
        self.missing_id = missing_id;
        self
    }

    pub fn build(&mut self) -> Result<PrefixedIds> {
        let Some(schema) = self.schema.clone() else {
            return Err(Error::invalid_configuration(
                "a schema is required to resolve nested relations",
            ));
        };

        let generator = self
            .generator
            .clone()
            .unwrap_or_else(|| Arc::new(RandomId::default()));

        Ok(PrefixedIds {
            shared: Arc::new(Shared {
                schema,
                prefixes: self.prefixes.clone(),
                generator,
                missing_id: self.missing_id,
            }),
        })
    }
}
