use super::{Entity, FieldTy, Schema};
use crate::{Error, Result};

use indexmap::{map::Entry, IndexMap, IndexSet};

/// Collects entity definitions and indexes them into a [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    entities: Vec<Entity>,
}

impl Builder {
    /// Registers an entity.
    pub fn entity(&mut self, entity: Entity) -> &mut Self {
        self.entities.push(entity);
        self
    }

    /// Registers several entities at once.
    pub fn entities(&mut self, entities: impl IntoIterator<Item = Entity>) -> &mut Self {
        self.entities.extend(entities);
        self
    }

    /// Indexes the registered entities.
    ///
    /// Fails if two entities share a name or an entity declares the same
    /// field twice. Reference targets are not checked: a reference to an
    /// entity missing from the schema still resolves, and lookups against
    /// the missing entity simply find nothing.
    pub fn build(&mut self) -> Result<Schema> {
        let mut entities = IndexMap::with_capacity(self.entities.len());
        let mut relations = IndexMap::with_capacity(self.entities.len());

        for entity in std::mem::take(&mut self.entities) {
            let fields = index_relations(&entity)?;

            match entities.entry(entity.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::invalid_schema(format!(
                        "entity `{}` is defined more than once",
                        entity.name
                    )));
                }
                Entry::Vacant(entry) => {
                    relations.insert(entity.name.clone(), fields);
                    entry.insert(entity);
                }
            }
        }

        Ok(Schema {
            entities,
            relations,
        })
    }
}

/// Map each relation field of `entity` to its target entity name.
fn index_relations(entity: &Entity) -> Result<IndexMap<String, String>> {
    let mut seen = IndexSet::with_capacity(entity.fields.len());
    let mut relations = IndexMap::new();

    for field in &entity.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(Error::invalid_schema(format!(
                "field `{}::{}` is defined more than once",
                entity.name, field.name
            )));
        }

        if let FieldTy::Reference(reference) = &field.ty {
            relations.insert(field.name.clone(), reference.target.clone());
        }
    }

    Ok(relations)
}
