//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The store is provided as an `RwSignal` context from the app root. Query
//! results load into it and the featured mutation patches it, so every
//! mounted view observes the same normalized entities.

pub mod speakers;
