#![doc = include_str!("../README.md")]

//! Temporal-logic unwinding for word-level bounded model checking.
//!
//! The passes run in pipeline order: [`classify::supports_property`]
//! decides support, [`nnf::property_nnf`] normalizes negations,
//! [`property::property`] maps the property onto per-timeframe obligation
//! handles, and [`lasso::lasso_constraints`] pins the lasso symbols the
//! liveness encodings reference.

pub mod classify;
pub mod errors;
pub mod instantiate;
pub mod lasso;
pub mod nnf;
pub mod obligations;
pub mod property;
