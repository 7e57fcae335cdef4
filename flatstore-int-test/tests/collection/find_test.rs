use flatstore::common::{SortOrder, Value};
use flatstore::doc;
use flatstore::filter::field;
use flatstore_int_test::test_util::{
    cleanup, create_test_context, insert_test_documents, is_sorted, run_test,
};

fn names(snapshot: &flatstore::collection::QuerySnapshot) -> Vec<String> {
    snapshot
        .iter()
        .map(|doc| {
            doc.data()
                .unwrap()
                .get("name")
                .and_then(Value::as_str)
                .unwrap()
                .to_string()
        })
        .collect()
}

#[test]
fn test_find_all() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            let snapshot = coll.get()?;
            assert_eq!(snapshot.size(), 3);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_filter() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            let snapshot = coll.clone().filter(field("city").eq("Portland")).get()?;
            assert_eq!(snapshot.size(), 2);

            let snapshot = coll.clone().filter(field("city").eq("Boise")).get()?;
            assert!(snapshot.is_empty());

            // filters AND together
            let snapshot = coll
                .clone()
                .filter(field("city").eq("Portland"))
                .filter(field("category").eq("cafe"))
                .get()?;
            assert_eq!(names(&snapshot), vec!["Cafe Luna"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_missing_field_never_matches() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;
            coll.add(doc! { name: "No City" })?;

            let snapshot = coll.clone().filter(field("city").eq("Portland")).get()?;
            assert_eq!(snapshot.size(), 2);

            // a null filter does not match an absent field either
            let snapshot = coll
                .clone()
                .filter(field("city").eq(Value::Null))
                .get()?;
            assert!(snapshot.is_empty());

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_numeric_equality_across_representations() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.add(doc! { name: "Int", rating: 4 })?;
            coll.add(doc! { name: "Float", rating: 4.0 })?;
            coll.add(doc! { name: "Text", rating: "4" })?;

            // integer and float forms of the same number both match
            let snapshot = coll.clone().filter(field("rating").eq(4)).get()?;
            assert_eq!(snapshot.size(), 2);

            let snapshot = coll.clone().filter(field("rating").eq(4.0)).get()?;
            assert_eq!(snapshot.size(), 2);

            // strings never coerce to numbers
            let snapshot = coll.clone().filter(field("rating").eq("4")).get()?;
            assert_eq!(names(&snapshot), vec!["Text"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_order_by() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            let snapshot = coll
                .clone()
                .order_by("rating", SortOrder::Ascending)
                .get()?;
            let ratings: Vec<f64> = snapshot
                .iter()
                .map(|doc| doc.data().unwrap().get("rating").unwrap().as_f64().unwrap())
                .collect();
            assert!(is_sorted(ratings, true));

            let snapshot = coll
                .clone()
                .order_by("rating", SortOrder::Descending)
                .get()?;
            let ratings: Vec<f64> = snapshot
                .iter()
                .map(|doc| doc.data().unwrap().get("rating").unwrap().as_f64().unwrap())
                .collect();
            assert!(is_sorted(ratings, false));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_order_by_replaces_prior_key() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            // only the last order_by applies
            let snapshot = coll
                .clone()
                .order_by("rating", SortOrder::Descending)
                .order_by("name", SortOrder::Ascending)
                .get()?;
            assert_eq!(
                names(&snapshot),
                vec!["Cafe Luna", "Harbor Teahouse", "Iron Skillet"]
            );

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_missing_sort_field_sorts_first() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            coll.add(doc! { name: "Rated", rating: 1 })?;
            coll.add(doc! { name: "Unrated" })?;

            let snapshot = coll
                .clone()
                .order_by("rating", SortOrder::Ascending)
                .get()?;
            assert_eq!(names(&snapshot), vec!["Unrated", "Rated"]);

            let snapshot = coll
                .clone()
                .order_by("rating", SortOrder::Descending)
                .get()?;
            assert_eq!(names(&snapshot), vec!["Rated", "Unrated"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_with_limit() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            assert_eq!(coll.clone().limit(2).get()?.size(), 2);
            assert_eq!(coll.clone().limit(10).get()?.size(), 3);
            assert_eq!(coll.clone().limit(0).get()?.size(), 0);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_filter_order_limit_compose() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            let snapshot = coll
                .clone()
                .filter(field("category").eq("cafe"))
                .order_by("rating", SortOrder::Descending)
                .limit(1)
                .get()?;
            assert_eq!(names(&snapshot), vec!["Harbor Teahouse"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_preserves_file_order_without_sort() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("business")?;
            insert_test_documents(&coll)?;

            let snapshot = coll.get()?;
            assert_eq!(
                names(&snapshot),
                vec!["Cafe Luna", "Iron Skillet", "Harbor Teahouse"]
            );

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_on_missing_collection_is_empty() {
    run_test(
        create_test_context,
        |ctx| {
            let coll = ctx.store().collection("never_written")?;
            assert!(coll.get()?.is_empty());
            Ok(())
        },
        cleanup,
    )
}
