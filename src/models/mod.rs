//! Domain models

mod batch;

pub use batch::{BatchUpdate, CourseBatch, NewBatch};
