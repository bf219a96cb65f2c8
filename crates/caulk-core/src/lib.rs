//! Core types and configuration for caulk.
//!
//! This crate provides the foundational data structures used across all caulk crates:
//! - [`model`] — The host-supplied semantic model (declarations, members, type references)
//! - [`types`] — Rule identifiers, severities, and error types
//! - [`config`] — Configuration loading from `.caulk/caulk.json`
//! - [`hash`] — Deterministic symbol hashing (base62 of xxhash64)

pub mod config;
pub mod hash;
pub mod model;
pub mod types;
