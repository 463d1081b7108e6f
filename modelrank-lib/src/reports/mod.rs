//! Output of score records
//!
//! Records are written as NDJSON: one self-contained JSON object per line, with a fixed
//! key order defined by [`ScoreRecord`](crate::scoring::ScoreRecord)'s serialization.

mod ndjson;

pub use ndjson::generate as generate_ndjson;
