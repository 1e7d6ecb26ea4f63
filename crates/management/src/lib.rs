//! Campaign wizard REST backend: drafts, AI suggestions and saved contexts.
//!
//! Provides the endpoints behind the platform wizards. Drafts live in
//! whatever `DraftRepository` the binary wires in (in-memory by default).

pub mod handlers;
pub mod models;
pub mod router;

pub use handlers::ManagementState;
pub use router::wizard_router;
