use prefixed_ids_core::schema::{Entity, Field};
use prefixed_ids_core::Schema;

#[test]
fn duplicate_entity_is_rejected() {
    let err = Schema::builder()
        .entity(Entity::new("User").scalar("id"))
        .entity(Entity::new("User").scalar("name"))
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: entity `User` is defined more than once"
    );
}

#[test]
fn duplicate_field_is_rejected() {
    let err = Schema::builder()
        .entity(
            Entity::new("User")
                .scalar("posts")
                .has_many("posts", "Post"),
        )
        .build()
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(
        err.to_string().contains("`User::posts`"),
        "error should name the field, got: {err}"
    );
}

#[test]
fn same_field_name_on_different_entities() {
    let s = Schema::builder()
        .entities([
            Entity::new("User").scalar("id").has_many("posts", "Post"),
            Entity::new("Tag").scalar("id").has_many("posts", "Post"),
        ])
        .build()
        .unwrap();

    assert_eq!(s.resolve_relation("User", "posts"), Some("Post"));
    assert_eq!(s.resolve_relation("Tag", "posts"), Some("Post"));
}

#[test]
fn empty_schema_resolves_nothing() {
    let s = Schema::builder().build().unwrap();
    assert_eq!(s.entities().count(), 0);
    assert_eq!(s.resolve_relation("User", "posts"), None);
}

#[test]
fn builder_is_drained_by_build() {
    let mut builder = Schema::builder();
    builder.entity(Entity::new("User").field(Field::scalar("id")));

    let first = builder.build().unwrap();
    assert!(first.entity("User").is_some());

    let second = builder.build().unwrap();
    assert!(second.entity("User").is_none());
}
