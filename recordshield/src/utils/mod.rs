// recordshield/src/utils/mod.rs
//! Support code for the commands.

pub mod table;
