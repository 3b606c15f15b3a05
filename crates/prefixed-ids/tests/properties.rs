mod support;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use support::echo;

#[tokio::test]
async fn explicit_ids_survive_at_every_depth() {
    let (ids, counter) = support::prefixed_ids();

    let args = json!({
        "data": {
            "id": "usr_keep",
            "profile": { "create": { "id": "prf_keep" } },
            "posts": {
                "create": [{
                    "id": "pst_keep",
                    "comments": {
                        "createMany": { "data": [{ "id": "cmt_a" }, { "id": "cmt_b" }] },
                        "connectOrCreate": {
                            "where": { "id": "cmt_c" },
                            "create": { "id": "cmt_c" }
                        }
                    }
                }],
                "upsert": {
                    "where": { "id": "pst_u" },
                    "create": { "id": "pst_u" },
                    "update": { "title": "u" }
                }
            }
        }
    });

    let out = ids.create("User", args.clone(), echo).await;
    assert_eq!(out, args);
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn non_creating_operations_pass_through() {
    let (ids, counter) = support::prefixed_ids();

    let args = json!({
        "where": { "id": "usr_1" },
        "data": {
            "name": "n",
            "posts": {
                "connect": [{ "id": "pst_1" }],
                "disconnect": { "id": "pst_2" },
                "delete": [{ "id": "pst_3" }],
                "update": { "where": { "id": "pst_4" }, "data": { "title": "t" } },
                "updateMany": { "where": {}, "data": { "title": "t" } }
            }
        }
    });

    let out = ids.update("User", args.clone(), echo).await;
    assert_eq!(out, args);
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn large_batches_keep_order_and_length() {
    let (ids, counter) = support::prefixed_ids();

    let data: Vec<Value> = (0..50).map(|i| json!({ "name": format!("user {i}") })).collect();
    let out = ids
        .create_many("User", json!({ "data": data }), echo)
        .await;

    let records = out["data"].as_array().unwrap();
    assert_eq!(records.len(), 50);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["name"], json!(format!("user {i}")));
        assert_eq!(record["id"], json!(format!("usr_{}", i + 1)));
    }
    assert_eq!(counter.count(), 50);
}

#[tokio::test]
async fn unknown_entities_and_fields_are_ignored() {
    let (ids, counter) = support::prefixed_ids();

    let args = json!({
        "data": {
            "settings": { "create": {} },
            "metadata": { "nested": { "create": {} } }
        }
    });

    let out = ids.create("Account", args.clone(), echo).await;
    assert_eq!(out, args);

    let out = ids.create("User", args, echo).await;
    assert_eq!(
        out,
        json!({
            "data": {
                "settings": { "create": {} },
                "metadata": { "nested": { "create": {} } },
                "id": "usr_1"
            }
        })
    );
    assert_eq!(counter.count(), 1);
}
