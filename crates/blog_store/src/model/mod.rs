//! Blog domain model.
//!
//! # Responsibility
//! - Define the post and comment records shared by repositories and callers.
//! - Keep timestamp formatting in one place.
//!
//! # Invariants
//! - Identifiers are UUID v4 values generated at creation.
//! - Every timestamp carries millisecond precision.

pub mod comment;
pub mod post;
pub mod time;
