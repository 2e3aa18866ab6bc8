//! Application layer - session orchestration over the domain.
//!
//! Coordinates the configuration workflow, the quotation aggregate, and
//! the outbound collaborators. No business rules live here; those stay
//! in `domain`.

mod quotation_session;

pub use quotation_session::QuotationSession;
