use flatstore::common::Value;
use flatstore::doc;
use flatstore_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_point_read_returns_full_document() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1").set(doc! {
                name: "Cafe Luna",
                address: { street: "Main St", city: "Portland" },
                tags: ["coffee", "breakfast"],
            })?;

            let snapshot = coll.doc("b1").get()?;
            assert!(snapshot.exists());
            assert_eq!(snapshot.id(), "b1");

            let data = snapshot.data().unwrap();
            let address = data.get("address").and_then(Value::as_document).unwrap();
            assert_eq!(
                address.get("city"),
                Some(&Value::String("Portland".to_string()))
            );
            assert_eq!(data.get("tags").and_then(Value::as_array).unwrap().len(), 2);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_point_read_of_missing_document() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;

            let snapshot = coll.doc("ghost").get()?;
            assert!(!snapshot.exists());
            assert!(snapshot.data().is_none());
            assert_eq!(snapshot.id(), "ghost");

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_document_field_order_survives_persistence() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1").set(doc! { zebra: 1, apple: 2, mango: 3 })?;

            let data = coll.doc("b1").get()?.into_data().unwrap();
            let keys: Vec<_> = data.keys().cloned().collect();
            // authored order survives, the forced identifier field appends
            assert_eq!(keys, vec!["zebra", "apple", "mango", "business_id"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_snapshot_is_point_in_time() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1").set(doc! { rating: 1 })?;

            let before = coll.doc("b1").get()?;
            coll.doc("b1").update(doc! { rating: 2 })?;

            // the snapshot taken before the write does not observe it
            assert_eq!(
                before.data().unwrap().get("rating"),
                Some(&Value::I64(1))
            );
            assert_eq!(
                coll.doc("b1").get()?.data().unwrap().get("rating"),
                Some(&Value::I64(2))
            );

            Ok(())
        },
        cleanup,
    )
}
