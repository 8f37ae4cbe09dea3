//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational fragments; the speaker card additionally
//! owns its featured-mutation button state. Data always arrives either as
//! plain props or through the shared store context.

pub mod footer;
pub mod header;
pub mod session_list;
pub mod speaker_card;
pub mod speaker_detail;
