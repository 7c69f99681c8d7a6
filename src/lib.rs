pub mod backend;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod resource;
pub mod startup;
pub mod utils;
pub mod validation;

// Re-export commonly used types for easier access
pub use models::RegisteredUser;
pub use startup::{build_router, AppState};
pub use validation::{validate_form, validate_user, Registration};
