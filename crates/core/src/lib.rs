//! Core library for pokeretriever
//!
//! This crate implements the **Functional Core** of the pokeretriever application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`pokeretriever_core`** (this crate): Pure transformation functions with zero I/O
//! - **`pokeretriever`**: HTTP, file and console I/O plus orchestration (the Imperative Shell)
//!
//! # Module Organization
//!
//! - [`modes`]: Search modes and the endpoint table used to build request URLs
//! - [`payload`]: PokeAPI response shapes and their transformation into records
//! - [`records`]: Display records and their text rendering
//! - [`report`]: Header and notice blocks for file output
//!
//! # Example Usage
//!
//! ```rust
//! use pokeretriever_core::modes::{Endpoints, SearchMode};
//!
//! let endpoints = Endpoints::default();
//! assert_eq!(
//!     endpoints.target_url(SearchMode::Pokemon, " pikachu\n"),
//!     "https://pokeapi.co/api/v2/pokemon/pikachu"
//! );
//! ```

mod error;

pub mod modes;
pub mod payload;
pub mod records;
pub mod report;

pub use error::Error;
