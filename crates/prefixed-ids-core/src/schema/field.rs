/// A single field of an [`Entity`](super::Entity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique within the containing entity
    pub name: String,

    /// Scalar or reference
    pub ty: FieldTy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTy {
    /// Plain data. Never recursed into.
    Scalar,

    /// Refers to another entity.
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Name of the referenced entity
    pub target: String,

    pub multiplicity: Multiplicity,
}

/// Whether a reference holds one related record or a list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    Single,
    Many,
}

impl Field {
    pub fn scalar(name: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: FieldTy::Scalar,
        }
    }

    pub fn reference(
        name: impl Into<String>,
        target: impl Into<String>,
        multiplicity: Multiplicity,
    ) -> Field {
        Field {
            name: name.into(),
            ty: FieldTy::Reference(Reference {
                target: target.into(),
                multiplicity,
            }),
        }
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_reference()
    }

    /// If the field is a relation, return the name of its target entity.
    pub fn relation_target(&self) -> Option<&str> {
        self.ty.as_reference().map(|reference| reference.target.as_str())
    }
}

impl FieldTy {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(..))
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(reference) => Some(reference),
            Self::Scalar => None,
        }
    }

    #[track_caller]
    pub fn expect_reference(&self) -> &Reference {
        match self {
            Self::Reference(reference) => reference,
            _ => panic!("expected reference field, but was {self:?}"),
        }
    }
}

impl Multiplicity {
    pub fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}
