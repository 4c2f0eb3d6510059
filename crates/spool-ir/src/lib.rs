#![doc = include_str!("../README.md")]

//! Shared data model for the spool unwinding passes.
//!
//! Defines the property expression tree, temporal-operator and dialect
//! classification, and the transition-system symbol table consumed by the
//! word-level unwinding.

pub mod expr;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest_generators;
pub mod temporal;
pub mod transition;
