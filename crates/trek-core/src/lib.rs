//! # trek-core
//!
//! Core types and error types for Trek.
//!
//! This crate provides the foundational types shared across all Trek crates:
//! - The `TravelRecord` entity and the raw `TripDraft` submitted for validation
//! - Travel type, trip status, and sort column enums
//! - `ValidationSettings`, the read-only knobs consumed by the validation pipeline
//! - Statistic response types produced by the analytics aggregator
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod settings;
