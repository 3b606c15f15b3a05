#![allow(dead_code)]

use prefixed_ids::{schema::Entity, AssignId, PrefixedIds, Schema};
use serde_json::Value;
use std::{
    cell::Cell,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

/// Schema:
///   User { id, name, posts: [Post], profile: Profile }
///   Post { id, title, author: User, comments: [Comment], tags: [Tag] }
///   Comment { id, body, post: Post }
///   Profile { id, bio }
///   Tag { id, label }
///
/// Every entity but `Tag` has a prefix.
pub fn schema() -> Schema {
    Schema::builder()
        .entity(
            Entity::new("User")
                .scalar("id")
                .scalar("name")
                .has_many("posts", "Post")
                .has_one("profile", "Profile"),
        )
        .entity(
            Entity::new("Post")
                .scalar("id")
                .scalar("title")
                .has_one("author", "User")
                .has_many("comments", "Comment")
                .has_many("tags", "Tag"),
        )
        .entity(
            Entity::new("Comment")
                .scalar("id")
                .scalar("body")
                .has_one("post", "Post"),
        )
        .entity(Entity::new("Profile").scalar("id").scalar("bio"))
        .entity(Entity::new("Tag").scalar("id").scalar("label"))
        .build()
        .unwrap()
}

pub fn prefix_for(entity: &str) -> Option<&'static str> {
    match entity {
        "User" => Some("usr"),
        "Post" => Some("pst"),
        "Comment" => Some("cmt"),
        "Profile" => Some("prf"),
        _ => None,
    }
}

/// Assigns `{prefix}_{n}`, counting from 1, for driving a `Rewriter`
/// directly.
#[derive(Default)]
pub struct Sequence {
    last: Cell<usize>,
}

impl Sequence {
    pub fn count(&self) -> usize {
        self.last.get()
    }
}

impl AssignId for Sequence {
    fn assign_id(&self, entity: &str) -> Option<String> {
        let prefix = prefix_for(entity)?;
        let n = self.last.get() + 1;
        self.last.set(n);
        Some(format!("{prefix}_{n}"))
    }
}

/// Generator producing `{prefix}_{n}`, counting from 1. Clones share the
/// counter.
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn generator(&self) -> impl Fn(&str) -> String + Send + Sync + 'static {
        let counter = self.0.clone();
        move |prefix: &str| format!("{prefix}_{}", counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// An extension over [`schema`] with a counting generator.
pub fn prefixed_ids() -> (PrefixedIds, Counter) {
    let counter = Counter::default();
    let ids = PrefixedIds::builder()
        .schema(schema())
        .prefixes([
            ("User", "usr"),
            ("Post", "pst"),
            ("Comment", "cmt"),
            ("Profile", "prf"),
        ])
        .id_generator(counter.generator())
        .build()
        .unwrap();
    (ids, counter)
}

/// Continuation standing in for the real write: returns the arguments it
/// was called with.
pub async fn echo(args: Value) -> Value {
    args
}

#[track_caller]
pub fn assert_prefixed(value: &Value, prefix: &str) {
    let id = value
        .as_str()
        .unwrap_or_else(|| panic!("expected a string id, got {value}"));
    assert!(
        id.starts_with(&format!("{prefix}_")),
        "expected `{id}` to start with `{prefix}_`"
    );
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
