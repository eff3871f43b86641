//! Core conversion logic for Kawase.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! The rate table, request value parsing, and the conversion arithmetic
//! all live here.

pub mod currency;
