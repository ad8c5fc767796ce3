//! JSON-backed persistence for primitive objects
//!
//! A single local JSON file acts as the document collection; every mutation
//! is an independent, immediately-flushed write (last write wins).

pub mod collection;
pub mod record;

pub use collection::{default_collection_path, Collection};
pub use record::{color_from_hex, color_to_hex, Record, ShapeData, Vec3Data};
