// File: src/registration.rs
// Purpose: The conference registration field table

use crate::field::{FieldSpec, InputType};
use crate::validation::RuleSet;
use crate::value::FieldValue;

/// Ticket types offered by the select
pub const TICKET_TYPES: &[&str] = &["General Access", "VIP", "Student"];

/// Placeholder row of the ticket select
pub const TICKET_PLACEHOLDER: &str = "-- Pilih Tipe Tiket --";

pub const AGE_MIN: f64 = 18.0;
pub const AGE_MAX: f64 = 100.0;

const AGE_RANGE_MESSAGE: &str = "Peserta harus berusia antara 18 dan 100 tahun";

fn password_policy(value: &FieldValue) -> bool {
    value
        .as_text()
        .is_some_and(regform_validation::validate_password)
}

/// Fields of the registration form, in render order
pub fn registration_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(
            "fullName",
            "Nama Lengkap",
            InputType::Text,
            RuleSet::new().required("Nama lengkap wajib diisi"),
        ),
        FieldSpec::new(
            "username",
            "Username",
            InputType::Text,
            RuleSet::new()
                .required("Username wajib diisi")
                .min_length(6, "Username minimal 6 karakter")
                .max_length(20, "Username maksimal 20 karakter"),
        ),
        FieldSpec::new(
            "email",
            "Email",
            InputType::Email,
            RuleSet::new()
                .required("Email wajib diisi")
                .pattern(regform_validation::email_regex().clone(), "Format email tidak valid"),
        ),
        FieldSpec::new(
            "password",
            "Password",
            InputType::Password,
            RuleSet::new().required("Password wajib diisi").validate(
                password_policy,
                "Password harus 8+ karakter, mengandung angka & simbol",
            ),
        ),
        FieldSpec::new(
            "age",
            "Umur",
            InputType::Number,
            RuleSet::new()
                .required("Umur wajib diisi")
                .min(AGE_MIN, AGE_RANGE_MESSAGE)
                .max(AGE_MAX, AGE_RANGE_MESSAGE),
        ),
        FieldSpec::new(
            "ticketType",
            "Tipe Tiket",
            InputType::Select,
            RuleSet::new().required("Anda harus memilih tipe tiket"),
        )
        .with_options(TICKET_TYPES),
        FieldSpec::new(
            "websiteUrl",
            "Situs Web Pribadi (Opsional)",
            InputType::Url,
            RuleSet::new().pattern(regform_validation::url_regex().clone(), "Format URL tidak valid"),
        ),
        FieldSpec::new(
            "agreeToTerms",
            "Saya setuju dengan syarat & ketentuan",
            InputType::Checkbox,
            RuleSet::new().required("Anda harus menyetujui syarat dan ketentuan"),
        ),
    ]
}
