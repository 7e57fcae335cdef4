//! # Flatstore - Embedded JSON Document Store
//!
//! Flatstore is a lightweight, embedded document store backed by a single
//! human-readable JSON file. It groups documents into named collections and
//! exposes a fluent query API with equality filters, single-key ordering,
//! and result limits, plus per-document handles, ordered write batches, and
//! type-safe repositories.
//!
//! ## Key Features
//!
//! - **Embedded**: No separate server process required
//! - **Plain JSON backing**: The whole store is one pretty-printed JSON file
//!   that can be read, diffed, and edited by hand
//! - **Fluent Queries**: `collection(..)?.filter(..).order_by(..).limit(..).get()`
//! - **Document Handles**: Point reads and writes through `doc(id)`
//! - **Write Batches**: Ordered, fail-fast multi-operation commits
//! - **Typed Repositories**: Serde-backed entity views over collections
//! - **Configurable Identifiers**: Per-collection identifier field names
//! - **Clean API**: PIMPL pattern provides stable, encapsulated interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flatstore::flatstore::Flatstore;
//! use flatstore::filter::field;
//! use flatstore::common::SortOrder;
//! use flatstore::doc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Open the store, creating the backing file when missing
//! let store = Flatstore::builder()
//!     .file_path("directory.json")
//!     .id_field("business", "business_id")
//!     .open_or_create()?;
//!
//! // Create a document with a generated identifier
//! let businesses = store.collection("business")?;
//! let cafe = businesses.add(doc! { name: "Cafe", city: "Portland", rating: 4.5 })?;
//!
//! // Query the collection
//! let top_rated = store
//!     .collection("business")?
//!     .filter(field("city").eq("Portland"))
//!     .order_by("rating", SortOrder::Descending)
//!     .limit(10)
//!     .get()?;
//!
//! // Point operations through a document handle
//! cafe.update(doc! { rating: 4.7 })?;
//! cafe.delete()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Consistency Model
//!
//! Every operation reads the backing file fresh and every mutation persists
//! the whole store before returning, so the file is the single source of
//! truth and external edits between operations are picked up. Mutations are
//! serialized through a store-wide write lock; open one store root per
//! backing file per process and share clones, since a second root on the
//! same path has its own lock and its writes are last-write-wins. Persisting
//! swaps the file in atomically, so readers never parse a partial write.
//! Batches guarantee ordering, not atomicity.
//!
//! ## Module Organization
//!
//! - [`batch`] - Ordered write batches
//! - [`collection`] - Documents, query builders, and document handles
//! - [`common`] - Value model and sort order
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Equality filters
//! - [`flatstore`] - Core store interface
//! - [`flatstore_builder`] - Store builder for initialization
//! - [`flatstore_config`] - Store configuration and identifier registry
//! - [`query`] - Typed query specifications
//! - [`repository`] - Type-safe entity repositories
//! - [`store`] - JSON file backing and snapshots

pub mod batch;
pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod flatstore;
pub mod flatstore_builder;
pub mod flatstore_config;
pub mod query;
pub mod repository;
pub mod store;
