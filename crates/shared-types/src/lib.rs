pub mod error;
pub mod feature_flags;

// Auth screen domain
pub mod auth_form;
pub mod config;
pub mod requests;
pub mod validation;

pub use error::*;
pub use feature_flags::*;

pub use auth_form::*;
pub use config::*;
pub use requests::*;
pub use validation::*;
