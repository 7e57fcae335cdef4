use flatstore::collection::{CollectionRef, Document};
use flatstore::doc;
use flatstore::errors::FlatstoreResult;
use flatstore::flatstore::Flatstore;
use std::panic::AssertUnwindSafe;
use std::{env, fs};

/// Runs a test between context setup and teardown.
///
/// The `after` hook always runs, so the backing file is removed even when
/// the test body fails or panics.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    B: FnOnce() -> FlatstoreResult<TestContext>,
    T: FnOnce(TestContext) -> FlatstoreResult<()>,
    A: FnOnce(TestContext) -> FlatstoreResult<()>,
{
    let ctx = before().expect("Failed to create test context");

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| test(ctx.clone())));
    after(ctx).expect("Failed to clean up test context");

    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test failed: {:?}", e),
        Err(panic_err) => std::panic::resume_unwind(panic_err),
    }
}

#[derive(Clone)]
pub struct TestContext {
    path: String,
    store: Flatstore,
}

impl TestContext {
    pub fn new(path: String, store: Flatstore) -> Self {
        Self { path, store }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn store(&self) -> Flatstore {
        self.store.clone()
    }
}

pub fn random_path() -> String {
    let id = uuid::Uuid::new_v4();
    let temp_dir = env::temp_dir();
    temp_dir
        .join(format!("{}.json", id))
        .to_str()
        .unwrap()
        .to_string()
}

pub fn create_test_context() -> FlatstoreResult<TestContext> {
    let path = random_path();

    let store = Flatstore::builder()
        .file_path(&path)
        .id_field("business", "business_id")
        .id_field("transactions", "transaction_id")
        .id_field("subscriptions", "subscription_id")
        .open_or_create()?;

    Ok(TestContext::new(path, store))
}

pub fn cleanup(ctx: TestContext) -> FlatstoreResult<()> {
    match fs::remove_file(ctx.path()) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            // Don't fail the test over a leftover temp file
            eprintln!(
                "Warning: Failed to remove test file {}: {:?}",
                ctx.path(),
                e
            );
            Ok(())
        }
    }
}

pub fn create_test_docs() -> Vec<Document> {
    let doc1 = doc! {
        name: "Cafe Luna",
        city: "Portland",
        category: "cafe",
        rating: 4.5,
        open: true,
    };

    let doc2 = doc! {
        name: "Iron Skillet",
        city: "Portland",
        category: "diner",
        rating: 3.8,
        open: true,
    };

    let doc3 = doc! {
        name: "Harbor Teahouse",
        city: "Salem",
        category: "cafe",
        rating: 4.9,
        open: false,
    };

    vec![doc1, doc2, doc3]
}

pub fn insert_test_documents(collection: &CollectionRef) -> FlatstoreResult<()> {
    for doc in create_test_docs() {
        collection.add(doc)?;
    }
    Ok(())
}

pub fn is_sorted<T: PartialOrd>(iterable: impl IntoIterator<Item = T>, ascending: bool) -> bool {
    let mut iter = iterable.into_iter();
    if let Some(mut prev) = iter.next() {
        for current in iter {
            if ascending {
                if prev > current {
                    return false;
                }
            } else {
                if prev < current {
                    return false;
                }
            }
            prev = current;
        }
    }
    true
}
