#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # tg-entities
//!
//! Reusable, agnostic domain entities for TailGator.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod favorite;
pub mod id;
pub mod report;
pub mod time;
pub mod venue;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
