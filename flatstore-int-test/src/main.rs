use flatstore::doc;
use flatstore::errors::FlatstoreResult;
use flatstore::filter::field;
use flatstore_int_test::test_util::{cleanup, create_test_context};

fn main() -> FlatstoreResult<()> {
    println!("Starting stress test...");
    let ctx = create_test_context()?;

    let count = 1000;
    let collection = ctx.store().collection("records")?;

    let start = std::time::Instant::now();
    for _ in 0..count {
        collection.add(doc! {
            first_name: (uuid::Uuid::new_v4().to_string()),
            last_name: (uuid::Uuid::new_v4().to_string()),
            processed: false,
            failed: false,
        })?;
    }
    let elapsed = start.elapsed();
    println!("Inserted {} records in {:?}", count, elapsed);

    let start = std::time::Instant::now();
    let snapshot = collection.clone().filter(field("failed").eq(false)).get()?;
    let found = snapshot.size();
    for envelope in &snapshot {
        envelope.reference().update(doc! { processed: true })?;
    }
    let elapsed = start.elapsed();
    println!("Processed {} records in {:?}", found, elapsed);

    let start = std::time::Instant::now();
    let processed = collection.clone().filter(field("processed").eq(true)).get()?;
    println!(
        "Counted {} processed records in {:?}",
        processed.size(),
        start.elapsed()
    );

    cleanup(ctx)
}
