//! Shared helpers for the tariff demos.

pub mod common;
