//! External system integrations for Vitals.
//!
//! This module provides adapters for the systems the pipeline touches:
//!
//! - [`database`] - Destination store abstraction (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with fake implementations. The bulk loader depends only
//! on the [`database::RecordSink`] trait; PostgreSQL is one implementation of
//! it.

pub mod database;
pub mod postgresql;
