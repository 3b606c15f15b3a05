use super::PrefixedIds;
use crate::OperationKind;

use serde_json::{Map, Value};
use std::future::Future;
use tracing::debug;

impl PrefixedIds {
    /// Rewrites the arguments of a `kind` operation on `entity`.
    ///
    /// Arguments that are not an object, or lack the fields the operation
    /// writes through, are returned as they are.
    pub fn prepare(&self, kind: OperationKind, entity: &str, mut args: Value) -> Value {
        if let Value::Object(fields) = &mut args {
            self.prepare_fields(kind, entity, fields);
        }

        args
    }

    fn prepare_fields(&self, kind: OperationKind, entity: &str, fields: &mut Map<String, Value>) {
        let rewriter = self.rewriter();

        debug!(operation = %kind, entity, "preparing write arguments");

        match kind {
            OperationKind::Create => {
                if let Some(data) = fields.get_mut("data") {
                    rewriter.assign_root_id(data, entity);
                    *data = rewriter.rewrite(data.take(), entity, true);
                }
            }
            OperationKind::CreateMany | OperationKind::CreateManyAndReturn => {
                // Batch records are flat; only their own ids are filled in.
                match fields.get_mut("data") {
                    Some(Value::Array(items)) => {
                        for item in items {
                            rewriter.assign_root_id(item, entity);
                        }
                    }
                    Some(item) => rewriter.assign_root_id(item, entity),
                    None => {}
                }
            }
            OperationKind::Update | OperationKind::UpdateMany => {
                if let Some(data) = fields.get_mut("data") {
                    *data = rewriter.rewrite(data.take(), entity, false);
                }
            }
            OperationKind::Upsert => {
                if let Some(create) = fields.get_mut("create") {
                    rewriter.assign_root_id(create, entity);
                    *create = rewriter.rewrite(create.take(), entity, true);
                }
                if let Some(update) = fields.get_mut("update") {
                    *update = rewriter.rewrite(update.take(), entity, false);
                }
            }
            OperationKind::ConnectOrCreate => {
                if let Some(create) = fields.get_mut("create") {
                    rewriter.assign_root_id(create, entity);
                    *create = rewriter.rewrite(create.take(), entity, true);
                }
            }
        }
    }

    /// Rewrites the arguments and forwards them to `next`, returning its
    /// output unchanged.
    pub async fn handle<F, Fut>(
        &self,
        kind: OperationKind,
        entity: &str,
        args: Value,
        next: F,
    ) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        let args = self.prepare(kind, entity, args);
        next(args).await
    }

    /// Like [`handle`](Self::handle), but takes the host's operation name.
    /// Operations that never create records are forwarded untouched.
    pub async fn handle_named<F, Fut>(
        &self,
        operation: &str,
        entity: &str,
        args: Value,
        next: F,
    ) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        match OperationKind::from_name(operation) {
            Some(kind) => self.handle(kind, entity, args, next).await,
            None => next(args).await,
        }
    }

    pub async fn create<F, Fut>(&self, entity: &str, args: Value, next: F) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        self.handle(OperationKind::Create, entity, args, next).await
    }

    pub async fn create_many<F, Fut>(&self, entity: &str, args: Value, next: F) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        self.handle(OperationKind::CreateMany, entity, args, next)
            .await
    }

    pub async fn update<F, Fut>(&self, entity: &str, args: Value, next: F) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        self.handle(OperationKind::Update, entity, args, next).await
    }

    pub async fn update_many<F, Fut>(&self, entity: &str, args: Value, next: F) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        self.handle(OperationKind::UpdateMany, entity, args, next)
            .await
    }

    pub async fn upsert<F, Fut>(&self, entity: &str, args: Value, next: F) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        self.handle(OperationKind::Upsert, entity, args, next).await
    }

    pub async fn connect_or_create<F, Fut>(
        &self,
        entity: &str,
        args: Value,
        next: F,
    ) -> Fut::Output
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future,
    {
        self.handle(OperationKind::ConnectOrCreate, entity, args, next)
            .await
    }
}
