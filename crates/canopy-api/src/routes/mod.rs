//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are assembled into the application in [`crate::app`].

pub mod records;
