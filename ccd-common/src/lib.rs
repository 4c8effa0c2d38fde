//! Common building blocks shared by the ccd crates.

mod vector;
pub use vector::{Cursor, Vector, VectorError};
