//! Row structs and DTOs.
//!
//! Each submodule contains the `FromRow` entity structs it reads and, where
//! the engine accepts writes, the `Deserialize` request DTOs.

pub mod course;
pub mod drip;
pub mod enrollment;
pub mod holiday;
