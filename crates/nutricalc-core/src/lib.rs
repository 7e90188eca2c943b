// ABOUTME: Core types and constants for the nutricalc nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, coercion, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutricalc Core
//!
//! Foundation crate providing the shared value objects and constants of the
//! nutrition and body-composition engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological constants and validation ranges
//! - **coerce**: Lenient conversion of form text into numbers and categories
//! - **models**: Anthropometric inputs, body-composition samples, food entries, and goals

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants and validation ranges organized by domain
pub mod constants;

/// Lenient numeric coercion for values coming from free-form fields
pub mod coerce;

/// Core data models (anthropometrics, body composition, intake, goals)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
