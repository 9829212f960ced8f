// Standalone components
pub mod banner;
pub mod button;
pub mod card;
pub mod form;
pub mod input;

// Primitive wrappers
pub mod divider;

pub use banner::*;
pub use button::*;
pub use card::*;
pub use divider::*;
pub use form::*;
pub use input::*;
