//! regform validation primitives
//!
//! Pure checks used by the registration form controller. Each function only
//! answers "does this value satisfy the check"; the caller owns the message
//! shown to the user.

pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
