//! Quotecraft - Furniture Configuration & Quotation Engine
//!
//! This crate implements the catalog-driven configuration workflow and
//! cost-aggregation logic that turns a sequence of furniture selections
//! into a priced line item and then into a priced quotation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
