//! Read-only index over the data model used to resolve relation fields.

mod builder;
pub use builder::Builder;

mod description;
pub use description::{EntityDescription, FieldDescription, FieldKind, SchemaDescription};

mod entity;
pub use entity::Entity;

mod field;
pub use field::{Field, FieldTy, Multiplicity, Reference};

use crate::Result;
use indexmap::IndexMap;

/// The data model: entities, their fields, and the relations between them.
///
/// A `Schema` is built once and never mutated afterwards. Relation lookups
/// are answered from a map precomputed at build time.
#[derive(Debug, Default)]
pub struct Schema {
    /// Entities keyed by name, in declaration order
    entities: IndexMap<String, Entity>,

    /// entity name -> relation field name -> target entity name
    relations: IndexMap<String, IndexMap<String, String>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a schema from a deserialized description.
    pub fn from_description(description: SchemaDescription) -> Result<Schema> {
        let mut builder = Schema::builder();

        for entity in description.entities {
            builder.entity(entity.into_entity()?);
        }

        builder.build()
    }

    /// Parses a JSON schema description and builds a schema from it.
    pub fn from_json(src: &str) -> Result<Schema> {
        let description: SchemaDescription = serde_json::from_str(src).map_err(|err| {
            crate::Error::from(err).context(crate::Error::invalid_schema("malformed description"))
        })?;
        Schema::from_description(description)
    }

    /// Get an entity by name
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Resolve `field` on `entity` to the name of the entity it refers to.
    ///
    /// Returns `None` when the entity is unknown, the entity has no such
    /// field, or the field is a scalar. None of these are errors: callers
    /// treat the field as plain data.
    pub fn resolve_relation(&self, entity: &str, field: &str) -> Option<&str> {
        self.relations
            .get(entity)?
            .get(field)
            .map(String::as_str)
    }

    /// Returns `true` if `field` on `entity` refers to another entity.
    pub fn is_relation(&self, entity: &str, field: &str) -> bool {
        self.resolve_relation(entity, field).is_some()
    }
}
