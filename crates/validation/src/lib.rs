//! Shared input-validation and display-formatting layer of BusinessPilot.
//!
//! Validators never fail hard: malformed input yields a structured
//! [`ValidationReport`] listing every violated rule, so forms can show all
//! problems at once. Formatters map already-validated values to Greek-locale
//! (el-GR) display strings. The one deliberate impurity is the deadline
//! check, which reads the current time through an injected [`Clock`].

pub mod afm;
pub mod clock;
pub mod config;
pub mod fields;
pub mod format;
pub mod profile;
pub mod report;
pub mod sanitize;

pub use afm::validate_afm;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, QueryLimits};
pub use fields::{
    validate_date, validate_deadline, validate_email, validate_phone, validate_query,
};
pub use format::{
    format_currency, format_currency_in, format_date, format_date_time, format_fraction,
    format_number, format_whole_percent,
};
pub use profile::{validate_business_profile, BusinessProfile};
pub use report::{ErrorKind, FieldError, ValidationReport};
pub use sanitize::sanitize_input;
