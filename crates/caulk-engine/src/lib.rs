//! Contract-rule engine for caulk.
//!
//! Validates actor declarations against the serialization contract and
//! produces diagnostics:
//! - A001: actor-suffixed interface does not inherit the actor marker interface
//! - A002: enum member missing the enum-serialization marker
//! - A003: actor class property missing the naming marker (advisory)
//! - A004: composite type in an actor method missing the contract marker
//!   (descriptor and fix only; superseded by A005/A006)
//! - A005: actor method parameter type missing the contract marker
//! - A006: actor method return type missing the contract marker
//! - A007: collection element type missing the contract marker
//! - A008: record missing the contract marker or per-member markers
//! - A009: actor class implements no actor-marker interface
//! - A010: type has neither a public parameterless constructor nor the contract marker
//!
//! The [`fixes`] module synthesizes minimal tree edits for the fixable rules.

pub mod classify;
pub mod engine;
pub mod fixes;
pub mod hierarchy;
pub mod markers;
pub mod rules;
pub mod rules_serialization;
pub mod types;
