//! Quotation module - finalized items and quotation aggregation.

mod item;
mod quotation;

pub use item::FurnitureItem;
pub use quotation::{Quotation, QuotationBuilder};
