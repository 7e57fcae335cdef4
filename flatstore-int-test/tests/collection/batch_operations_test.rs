//! Integration tests for ordered write batches across collections.

use flatstore::collection::WriteOutcome;
use flatstore::common::Value;
use flatstore::doc;
use flatstore::errors::ErrorKind;
use flatstore::flatstore::Flatstore;
use flatstore_int_test::test_util::{cleanup, create_test_context, random_path, run_test};

#[test]
fn test_batch_set_across_collections() {
    run_test(
        create_test_context,
        |ctx| {
            let business = ctx.store().collection("business")?;
            let transactions = ctx.store().collection("transactions")?;

            let mut batch = ctx.store().batch();
            batch.set(&business.doc("b1"), doc! { name: "Cafe Luna" });
            batch.set(&transactions.doc("t1"), doc! { amount: 12.5, business: "b1" });
            let outcomes = batch.commit()?;

            assert_eq!(outcomes, vec![WriteOutcome::Applied, WriteOutcome::Applied]);
            assert!(business.doc("b1").get()?.exists());
            assert!(transactions.doc("t1").get()?.exists());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_applies_in_enqueue_order() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;

            let mut batch = ctx.store().batch();
            batch.set(&coll.doc("b1"), doc! { rating: 1 });
            batch.update(&coll.doc("b1"), doc! { rating: 2 });
            batch.update(&coll.doc("b1"), doc! { rating: 3 });
            batch.commit()?;

            let data = coll.doc("b1").get()?.into_data().unwrap();
            assert_eq!(data.get("rating"), Some(&Value::I64(3)));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_set_then_delete_leaves_nothing() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;

            let mut batch = ctx.store().batch();
            batch.set(&coll.doc("b1"), doc! { name: "Cafe Luna" });
            batch.delete(&coll.doc("b1"));
            let outcomes = batch.commit()?;

            assert_eq!(outcomes, vec![WriteOutcome::Applied, WriteOutcome::Applied]);
            assert!(!coll.doc("b1").get()?.exists());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_reports_per_operation_outcomes() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.doc("b1").set(doc! { name: "Cafe Luna" })?;

            let mut batch = ctx.store().batch();
            batch.update(&coll.doc("b1"), doc! { open: true });
            batch.update(&coll.doc("ghost"), doc! { open: true });
            batch.delete(&coll.doc("ghost"));
            let outcomes = batch.commit()?;

            assert_eq!(
                outcomes,
                vec![
                    WriteOutcome::Applied,
                    WriteOutcome::NotFound,
                    WriteOutcome::NotFound
                ]
            );

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_empty_batch_commit_is_noop() {
    run_test(
        create_test_context,
        |ctx| {
            let batch = ctx.store().batch();
            assert!(batch.is_empty());
            assert!(batch.commit()?.is_empty());

            assert!(ctx.store().collection_names()?.is_empty());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_failed_batch_stops_at_first_error() {
    run_test(
        create_test_context,
        |ctx| {
            // a second store whose backing file disappears before commit
            // makes its operation fail deterministically mid-batch
            let broken_path = random_path();
            let broken_store = Flatstore::builder()
                .file_path(&broken_path)
                .open_or_create()?;
            let broken = broken_store.collection("business")?;
            std::fs::remove_file(&broken_path)
                .map_err(flatstore::errors::FlatstoreError::from)?;

            let coll = ctx.store().collection("business")?;
            let mut batch = ctx.store().batch();
            batch.set(&coll.doc("b1"), doc! { name: "Cafe Luna" });
            batch.set(&broken.doc("x1"), doc! { name: "Iron Skillet" });
            batch.set(&coll.doc("b2"), doc! { name: "Harbor Teahouse" });

            let result = batch.commit();
            assert_eq!(
                result.unwrap_err().kind(),
                &ErrorKind::FileNotFound
            );

            // operations before the failure are applied, the rest were
            // never executed
            assert!(coll.doc("b1").get()?.exists());
            assert!(!coll.doc("b2").get()?.exists());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_mixing_typed_and_generated_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let business = ctx.store().collection("business")?;
            let added = business.add(doc! { name: "Cafe Luna" })?;

            let mut batch = ctx.store().batch();
            batch.update(&added, doc! { verified: true });
            batch.set(&business.doc("b-fixed"), doc! { name: "Iron Skillet" });
            batch.commit()?;

            assert_eq!(business.get()?.size(), 2);
            assert_eq!(
                added.get()?.data().unwrap().get("verified"),
                Some(&Value::Bool(true))
            );

            Ok(())
        },
        cleanup,
    )
}
