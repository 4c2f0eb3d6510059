#![doc = include_str!("../README.md")]

//! Solver collaborator interface for the unwinding passes.

pub mod backends;
pub mod solver;
