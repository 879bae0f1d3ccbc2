//! Business-profile aggregate validation.

use serde::{Deserialize, Serialize};

use crate::afm::validate_afm;
use crate::fields::{validate_email, validate_phone};
use crate::report::{ErrorKind, FieldError, ValidationReport};

/// Identifying and numeric attributes of a business as collected by the
/// onboarding and settings forms.
///
/// Every field except `name` is optional at validation time: an absent field
/// means "not provided yet", not invalid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub name: Option<String>,
    pub afm: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub employee_count: Option<i64>,
    pub annual_revenue: Option<f64>,
}

/// Validate every provided field, accumulating errors in field order.
pub fn validate_business_profile(profile: &BusinessProfile) -> ValidationReport {
    let mut report = ValidationReport::ok();

    match &profile.name {
        Some(name) if !name.trim().is_empty() => {}
        _ => report.push(FieldError::new(
            "name",
            ErrorKind::Required,
            "Η επωνυμία είναι υποχρεωτική",
        )),
    }
    if let Some(afm) = &profile.afm {
        report.merge(validate_afm(afm));
    }
    if let Some(email) = &profile.email {
        report.merge(validate_email(email));
    }
    if let Some(phone) = &profile.phone {
        report.merge(validate_phone(phone));
    }
    if let Some(count) = profile.employee_count {
        if count < 0 {
            report.push(FieldError::new(
                "employeeCount",
                ErrorKind::OutOfRange,
                "Ο αριθμός εργαζομένων δεν μπορεί να είναι αρνητικός",
            ));
        }
    }
    if let Some(revenue) = profile.annual_revenue {
        if revenue < 0.0 {
            report.push(FieldError::new(
                "annualRevenue",
                ErrorKind::OutOfRange,
                "Τα έσοδα δεν μπορούν να είναι αρνητικά",
            ));
        }
    }

    if !report.is_valid {
        log::debug!(
            "business profile failed validation with {} error(s)",
            report.errors.len()
        );
    }
    report
}
