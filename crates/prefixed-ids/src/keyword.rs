use std::fmt;

/// A reserved key describing how a related record is written.
///
/// Only the creating keywords lead the rewriter deeper into the payload; the
/// rest are listed so that every reserved key is recognized and passed
/// through explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Create,
    CreateMany,
    ConnectOrCreate,
    Upsert,
    Update,
    UpdateMany,
    Connect,
    Disconnect,
    Delete,
}

impl Keyword {
    pub const ALL: [Keyword; 9] = [
        Keyword::Create,
        Keyword::CreateMany,
        Keyword::ConnectOrCreate,
        Keyword::Upsert,
        Keyword::Update,
        Keyword::UpdateMany,
        Keyword::Connect,
        Keyword::Disconnect,
        Keyword::Delete,
    ];

    /// Returns the keyword spelled by `key`, if any.
    pub fn from_key(key: &str) -> Option<Keyword> {
        Some(match key {
            "create" => Keyword::Create,
            "createMany" => Keyword::CreateMany,
            "connectOrCreate" => Keyword::ConnectOrCreate,
            "upsert" => Keyword::Upsert,
            "update" => Keyword::Update,
            "updateMany" => Keyword::UpdateMany,
            "connect" => Keyword::Connect,
            "disconnect" => Keyword::Disconnect,
            "delete" => Keyword::Delete,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Create => "create",
            Keyword::CreateMany => "createMany",
            Keyword::ConnectOrCreate => "connectOrCreate",
            Keyword::Upsert => "upsert",
            Keyword::Update => "update",
            Keyword::UpdateMany => "updateMany",
            Keyword::Connect => "connect",
            Keyword::Disconnect => "disconnect",
            Keyword::Delete => "delete",
        }
    }

    pub fn is_keyword(key: &str) -> bool {
        Keyword::from_key(key).is_some()
    }

    /// Returns `true` if the keyword's payload may contain records to create.
    pub fn creates(self) -> bool {
        match self {
            Keyword::Create | Keyword::CreateMany | Keyword::ConnectOrCreate | Keyword::Upsert => {
                true
            }
            Keyword::Update
            | Keyword::UpdateMany
            | Keyword::Connect
            | Keyword::Disconnect
            | Keyword::Delete => false,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_key(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(Keyword::from_key("Create"), None);
        assert_eq!(Keyword::from_key("createmany"), None);
        assert!(!Keyword::is_keyword("posts"));
        assert!(!Keyword::is_keyword("id"));
    }

    #[test]
    fn creating_keywords() {
        let creating: Vec<_> = Keyword::ALL.into_iter().filter(|k| k.creates()).collect();
        assert_eq!(
            creating,
            [
                Keyword::Create,
                Keyword::CreateMany,
                Keyword::ConnectOrCreate,
                Keyword::Upsert
            ]
        );
    }
}
