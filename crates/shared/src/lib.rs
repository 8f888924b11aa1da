//! Data model shared by the catalog pipeline, the presentation binding and the portal CLI.

pub mod domain;
pub mod error;
pub mod protocol;
