// recordshield-core/src/engines/mod.rs
//! This module contains detection engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `DetectionEngine` trait.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod record_engine;
