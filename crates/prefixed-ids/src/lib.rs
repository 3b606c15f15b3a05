//! Assigns human-readable, prefixed identifiers to records on their way into
//! the database.
//!
//! [`PrefixedIds`] sits in front of the host client's write operations. For
//! each intercepted call it fills in a missing `id` on the record being
//! written and walks the nested-write tree (`create`, `createMany`,
//! `connectOrCreate`, `upsert`) so that related records created in the same
//! call get identifiers too. The rewritten arguments are then handed to the
//! host's continuation, which performs the actual write.
//!
//! ```no_run
//! # async fn example() -> prefixed_ids::Result<()> {
//! use prefixed_ids::{schema::Entity, PrefixedIds, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .entity(Entity::new("User").scalar("id").has_many("posts", "Post"))
//!     .entity(Entity::new("Post").scalar("id").scalar("title"))
//!     .build()?;
//!
//! let ids = PrefixedIds::builder()
//!     .schema(schema)
//!     .prefix("User", "usr")
//!     .prefix("Post", "pst")
//!     .build()?;
//!
//! let args = json!({ "data": { "posts": { "create": [{ "title": "A" }] } } });
//! let _record = ids
//!     .create("User", args, |args| async move { Ok::<_, ()>(args) })
//!     .await;
//! # Ok(())
//! # }
//! ```

mod extension;
pub use extension::{Builder, PrefixedIds};

mod generator;
pub use generator::{IdGenerator, RandomId, UuidId};

mod keyword;
pub use keyword::Keyword;

mod missing_id;
pub use missing_id::MissingId;

mod operation;
pub use operation::OperationKind;

mod prefix;
pub use prefix::Prefixes;

pub mod rewrite;
pub use rewrite::{AssignId, Rewriter};

pub use prefixed_ids_core::{schema, Error, Result, Schema};
