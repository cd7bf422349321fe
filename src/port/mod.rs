//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────────────────────┐
//!        │         Application          │
//!        │  CatalogService  WagerService│
//!        └──────┬───────────────┬───────┘
//!               │               │
//!               ▼               ▼
//!        ┌─────────────┐ ┌─────────────┐
//!        │CatalogStore │ │ LedgerStore │
//!        └─────────────┘ └─────────────┘
//! ```
//!
//! The SQLite adapters in `adapter::outbound::sqlite` implement both ports.

pub mod outbound;
