//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (parameter reads, query
//! resources) and delegates rendering details to `components`. The static
//! pages carry no data-dependent logic.

pub mod home;
pub mod media;
pub mod our_story;
pub mod robotics;
pub mod speaker;
pub mod speakers;
