use super::{Entity, Field, Multiplicity};
use crate::{Error, Result};

use serde::Deserialize;

/// Serialized form of a data model, as supplied by the host.
///
/// ```json
/// {
///   "entities": [
///     {
///       "name": "User",
///       "fields": [
///         { "name": "id", "kind": "scalar" },
///         { "name": "posts", "kind": "reference", "target": "Post", "list": true }
///       ]
///     }
///   ]
/// }
/// ```
///
/// `models`, `type` and `isList` are accepted in place of `entities`,
/// `target` and `list`, and a `kind` of `object` means `reference`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDescription {
    #[serde(alias = "models")]
    pub entities: Vec<EntityDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityDescription {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescription {
    pub name: String,

    pub kind: FieldKind,

    /// Referenced entity; only meaningful for references
    #[serde(default, alias = "type")]
    pub target: Option<String>,

    #[serde(default, alias = "isList")]
    pub list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[serde(alias = "enum", alias = "unsupported")]
    Scalar,

    #[serde(alias = "object")]
    Reference,
}

impl EntityDescription {
    pub(super) fn into_entity(self) -> Result<Entity> {
        let mut entity = Entity::new(self.name);

        for field in self.fields {
            let field = field
                .into_field()
                .map_err(|err| err.context(crate::err!("in entity `{}`", entity.name)))?;
            entity.fields.push(field);
        }

        Ok(entity)
    }
}

impl FieldDescription {
    fn into_field(self) -> Result<Field> {
        match self.kind {
            FieldKind::Scalar => Ok(Field::scalar(self.name)),
            FieldKind::Reference => {
                let Some(target) = self.target else {
                    return Err(Error::invalid_schema(format!(
                        "reference field `{}` has no target entity",
                        self.name
                    )));
                };

                let multiplicity = if self.list {
                    Multiplicity::Many
                } else {
                    Multiplicity::Single
                };

                Ok(Field::reference(self.name, target, multiplicity))
            }
        }
    }
}
