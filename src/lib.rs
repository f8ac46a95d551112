//! Household energy tracker library
//!
//! This module exposes the core functionality for use in tests
//! and by the command-line front ends.

pub mod catalog;
pub mod core;
pub mod db;
pub mod ledger;
pub mod pricing;
pub mod report;
pub mod tracker;
