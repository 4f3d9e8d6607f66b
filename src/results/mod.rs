//! Result types shared by every provider adapter

mod types;

pub use types::*;
