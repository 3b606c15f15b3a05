//! Walks nested-write payloads and fills in missing identifiers.
//!
//! A payload describes one record of some entity. Any of its fields may name
//! a relation, in which case the field's value is a container of relation
//! operations (`create`, `createMany`, `connectOrCreate`, `upsert`, ...)
//! whose payloads describe records of the related entity. The rewriter
//! follows the creating operations down the tree, resolving each relation
//! through the [`Schema`] to learn which entity the nested records belong to.

use crate::{Keyword, MissingId};

use prefixed_ids_core::Schema;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Produces the identifier for a new record of `entity`, or `None` if records
/// of that entity do not get one.
pub trait AssignId {
    fn assign_id(&self, entity: &str) -> Option<String>;
}

impl<F> AssignId for F
where
    F: Fn(&str) -> Option<String>,
{
    fn assign_id(&self, entity: &str) -> Option<String> {
        self(entity)
    }
}

/// Rewrites write payloads against a schema.
///
/// The rewriter holds no state of its own and can be reused across payloads.
#[derive(Clone, Copy)]
pub struct Rewriter<'a> {
    schema: &'a Schema,
    assign: &'a dyn AssignId,
    missing_id: MissingId,
}

impl<'a> Rewriter<'a> {
    pub fn new(schema: &'a Schema, assign: &'a dyn AssignId) -> Rewriter<'a> {
        Rewriter {
            schema,
            assign,
            missing_id: MissingId::default(),
        }
    }

    /// Sets which `id` values count as missing.
    pub fn missing_id(mut self, missing_id: MissingId) -> Rewriter<'a> {
        self.missing_id = missing_id;
        self
    }

    /// Rewrites `payload`, a record (or list of records) of `entity`.
    ///
    /// When `add_root_id` is false the records at the top of `payload` keep
    /// whatever `id` they have; records created below them are still
    /// assigned one.
    pub fn rewrite(&self, payload: Value, entity: &str, add_root_id: bool) -> Value {
        match payload {
            Value::Object(node) => Value::Object(self.rewrite_node(node, entity, add_root_id)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.rewrite(item, entity, add_root_id))
                    .collect(),
            ),
            payload => payload,
        }
    }

    /// Sets `id` on `payload` if it is a record with a missing id.
    pub fn assign_root_id(&self, payload: &mut Value, entity: &str) {
        if let Value::Object(node) = payload {
            self.assign_node_id(node, entity);
        }
    }

    fn assign_node_id(&self, node: &mut Map<String, Value>, entity: &str) {
        if !self.missing_id.is_missing(node.get("id")) {
            return;
        }

        let Some(id) = self.assign.assign_id(entity) else {
            return;
        };

        debug!(entity, id = %id, "assigned identifier");
        node.insert("id".to_string(), Value::String(id));
    }

    fn rewrite_node(
        &self,
        mut node: Map<String, Value>,
        entity: &str,
        add_root_id: bool,
    ) -> Map<String, Value> {
        if add_root_id {
            self.assign_node_id(&mut node, entity);
        }

        // A keyword at this level means the node is itself a relation
        // container. Only the first non-keyword key is taken as the relation;
        // later candidates are never tried.
        let relation = node
            .keys()
            .find(|key| !Keyword::is_keyword(key))
            .cloned();

        for (key, value) in node.iter_mut() {
            if !value.is_object() && !value.is_array() {
                continue;
            }

            match Keyword::from_key(key) {
                Some(keyword) => {
                    if !keyword.creates() {
                        continue;
                    }

                    let Some(target) = relation
                        .as_deref()
                        .and_then(|field| self.resolve(entity, field))
                    else {
                        continue;
                    };

                    *value = self.apply(keyword, value.take(), target);
                }
                None => {
                    let Value::Object(ops) = value else {
                        continue;
                    };

                    let Some(target) = self.resolve(entity, key) else {
                        continue;
                    };

                    self.rewrite_relation_ops(ops, target);
                }
            }
        }

        node
    }

    /// Applies every keyword found in a relation field's value.
    fn rewrite_relation_ops(&self, ops: &mut Map<String, Value>, target: &str) {
        for (key, value) in ops.iter_mut() {
            let Some(keyword) = Keyword::from_key(key) else {
                continue;
            };

            if !value.is_object() && !value.is_array() {
                continue;
            }

            *value = self.apply(keyword, value.take(), target);
        }
    }

    fn apply(&self, keyword: Keyword, value: Value, target: &str) -> Value {
        trace!(%keyword, entity = target, "applying relation operation");

        match keyword {
            Keyword::Create => self.rewrite(value, target, true),
            Keyword::CreateMany => self.rewrite_create_many(value, target),
            Keyword::ConnectOrCreate => each_record(value, |item| {
                self.rewrite_entry(item, "create", target, true);
            }),
            Keyword::Upsert => each_record(value, |item| {
                self.rewrite_entry(item, "create", target, true);
                self.rewrite_entry(item, "update", target, false);
            }),
            Keyword::Update
            | Keyword::UpdateMany
            | Keyword::Connect
            | Keyword::Disconnect
            | Keyword::Delete => value,
        }
    }

    /// `createMany` carries its records in a `data` list. Anything else is
    /// left alone.
    fn rewrite_create_many(&self, mut value: Value, target: &str) -> Value {
        if let Some(data) = value.get_mut("data") {
            if data.is_array() {
                *data = self.rewrite(data.take(), target, true);
            }
        }
        value
    }

    fn rewrite_entry(
        &self,
        item: &mut Map<String, Value>,
        key: &str,
        target: &str,
        add_root_id: bool,
    ) {
        if let Some(value) = item.get_mut(key) {
            *value = self.rewrite(value.take(), target, add_root_id);
        }
    }

    fn resolve(&self, entity: &str, field: &str) -> Option<&'a str> {
        let target = self.schema.resolve_relation(entity, field);
        trace!(entity, field, related = target, "resolved relation");
        target
    }
}

/// Calls `f` on the record, or on each record of the list, in `value`.
fn each_record(value: Value, mut f: impl FnMut(&mut Map<String, Value>)) -> Value {
    match value {
        Value::Object(mut item) => {
            f(&mut item);
            Value::Object(item)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(mut item) => {
                        f(&mut item);
                        Value::Object(item)
                    }
                    item => item,
                })
                .collect(),
        ),
        value => value,
    }
}
