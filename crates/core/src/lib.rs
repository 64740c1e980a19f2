//! Domain logic for the drip content unlock engine.
//!
//! This crate has zero internal deps: calendar maths, unlock resolution,
//! unlock-order planning and the holiday cache live here so the DB and API
//! layers share one implementation.

pub mod calendar;
pub mod drip;
pub mod error;
pub mod holiday;
pub mod types;
