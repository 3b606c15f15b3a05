use super::{Field, FieldTy, Multiplicity, Reference};

/// A named data type with an ordered list of fields.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique within the schema
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Entity {
        Entity {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Entity {
        self.fields.push(field);
        self
    }

    /// Appends a scalar field.
    pub fn scalar(self, name: impl Into<String>) -> Entity {
        self.field(Field::scalar(name))
    }

    /// Appends a singular reference to `target`.
    pub fn has_one(self, name: impl Into<String>, target: impl Into<String>) -> Entity {
        self.field(Field::reference(name, target, Multiplicity::Single))
    }

    /// Appends a list reference to `target`.
    pub fn has_many(self, name: impl Into<String>, target: impl Into<String>) -> Entity {
        self.field(Field::reference(name, target, Multiplicity::Many))
    }

    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Iterates over the fields referring to other entities.
    pub fn references(&self) -> impl Iterator<Item = (&Field, &Reference)> {
        self.fields.iter().filter_map(|field| match &field.ty {
            FieldTy::Reference(reference) => Some((field, reference)),
            FieldTy::Scalar => None,
        })
    }
}
