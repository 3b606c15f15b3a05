use std::fmt;

/// The write operations whose arguments may need identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    CreateMany,
    CreateManyAndReturn,
    Update,
    UpdateMany,
    Upsert,
    ConnectOrCreate,
}

impl OperationKind {
    /// Parses the host's operation name. Returns `None` for operations that
    /// never create records, such as reads and deletes.
    pub fn from_name(name: &str) -> Option<OperationKind> {
        Some(match name {
            "create" => OperationKind::Create,
            "createMany" => OperationKind::CreateMany,
            "createManyAndReturn" => OperationKind::CreateManyAndReturn,
            "update" => OperationKind::Update,
            "updateMany" => OperationKind::UpdateMany,
            "upsert" => OperationKind::Upsert,
            "connectOrCreate" => OperationKind::ConnectOrCreate,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Create => "create",
            OperationKind::CreateMany => "createMany",
            OperationKind::CreateManyAndReturn => "createManyAndReturn",
            OperationKind::Update => "update",
            OperationKind::UpdateMany => "updateMany",
            OperationKind::Upsert => "upsert",
            OperationKind::ConnectOrCreate => "connectOrCreate",
        }
    }

    /// Returns `true` if the operation's root record already exists.
    pub fn is_update(self) -> bool {
        matches!(self, OperationKind::Update | OperationKind::UpdateMany)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
