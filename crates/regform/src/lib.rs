// regform - conference registration form
// Declarative field rules, submit lifecycle with a transient success banner,
// and Maud rendering of the form surface.

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod form_state;
pub mod registration;
pub mod renderer;
pub mod sink;
pub mod success_banner;
pub mod validation;
pub mod value;

// Re-export core types
pub use config::Config;
pub use controller::{FormController, SubmitOutcome};
pub use error::FormError;
pub use field::{FieldAttrs, FieldSpec, InputType};
pub use form_state::{FieldErrors, FormState, FormValues};
pub use registration::registration_fields;
pub use renderer::{render_field, render_form, render_page};
pub use sink::{Submission, SubmissionSink, TracingSink};
pub use success_banner::{BannerState, SuccessBanner};
pub use validation::{RuleKind, RuleSet, ValidationError};
pub use value::FieldValue;

// Re-export Maud for hosts that embed the form markup
pub use maud::{Markup, PreEscaped, DOCTYPE};
