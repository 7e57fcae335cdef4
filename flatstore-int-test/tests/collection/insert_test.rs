use flatstore::common::Value;
use flatstore::doc;
use flatstore_int_test::test_util::{cleanup, create_test_context, run_test};
use std::collections::HashSet;

#[test]
fn test_add_generates_unique_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;

            let mut ids = HashSet::new();
            for i in 0..20 {
                let doc_ref = coll.add(doc! { seq: i })?;
                assert_eq!(doc_ref.id().len(), 8);
                ids.insert(doc_ref.id().to_string());
            }
            assert_eq!(ids.len(), 20);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_add_stores_id_under_registered_field() {
    run_test(
        create_test_context,
        |ctx| {
            let business = ctx.store().collection("business")?;
            let doc_ref = business.add(doc! { name: "Cafe Luna" })?;
            let data = doc_ref.get()?.into_data().unwrap();
            assert_eq!(
                data.get("business_id").and_then(Value::as_str),
                Some(doc_ref.id())
            );

            // an unregistered collection falls back to the default field
            let users = ctx.store().collection("users")?;
            let doc_ref = users.add(doc! { name: "someone" })?;
            let data = doc_ref.get()?.into_data().unwrap();
            assert_eq!(data.get("id").and_then(Value::as_str), Some(doc_ref.id()));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_add_overwrites_caller_supplied_id() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            let doc_ref = coll.add(doc! { business_id: "mine", name: "Cafe Luna" })?;

            assert_ne!(doc_ref.id(), "mine");
            assert!(coll.doc("mine").get()?.data().is_none());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_creates_document_with_chosen_id() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1").set(doc! { name: "Cafe Luna" })?;

            let snapshot = coll.doc("b1").get()?;
            assert!(snapshot.exists());
            let data = snapshot.into_data().unwrap();
            assert_eq!(data.get("business_id").and_then(Value::as_str), Some("b1"));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_replaces_whole_document_in_place() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1").set(doc! { name: "First" })?;
            coll.doc("b2").set(doc! { name: "Second" })?;

            coll.doc("b1").set(doc! { renamed: true })?;

            // the replaced document keeps its position and loses old fields
            let snapshot = coll.get()?;
            assert_eq!(snapshot.size(), 2);
            assert_eq!(snapshot.docs()[0].id(), "b1");
            assert!(snapshot.docs()[0].data().unwrap().get("name").is_none());
            assert_eq!(
                snapshot.docs()[0].data().unwrap().get("renamed"),
                Some(&Value::Bool(true))
            );

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_forces_id_field_over_payload() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1")
                .set(doc! { business_id: "other", name: "Cafe Luna" })?;

            let data = coll.doc("b1").get()?.into_data().unwrap();
            assert_eq!(data.get("business_id").and_then(Value::as_str), Some("b1"));
            assert!(coll.doc("other").get()?.data().is_none());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_writes_to_distinct_collections_are_isolated() {
    run_test(
        create_test_context,
        |ctx| {
            let business = ctx.store().collection("business")?;
            let transactions = ctx.store().collection("transactions")?;

            business.add(doc! { name: "Cafe Luna" })?;
            transactions.add(doc! { amount: 12.5 })?;

            assert_eq!(business.get()?.size(), 1);
            assert_eq!(transactions.get()?.size(), 1);

            let mut collections = ctx.store().collection_names()?;
            collections.sort();
            assert_eq!(collections, vec!["business", "transactions"]);

            Ok(())
        },
        cleanup,
    )
}
