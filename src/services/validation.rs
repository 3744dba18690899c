use crate::{
    api::middleware::error::{ApiError, ApiResult},
    models::HolidayPayload,
};

/// One failed field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Presence rule for a payload field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Presence {
    /// An explicit non-null value is rejected.
    Forbidden,
    /// Missing or null is rejected.
    Required,
    Unconstrained,
}

/// Validation profile: the rule table differs between create and patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profile {
    Create,
    Patch,
}

impl Profile {
    // Checked in declaration order; the first violation wins.
    fn rules(self) -> &'static [(&'static str, Presence)] {
        match self {
            Profile::Create => &[
                ("id", Presence::Forbidden),
                ("name", Presence::Required),
                ("date", Presence::Unconstrained),
            ],
            Profile::Patch => &[
                ("id", Presence::Forbidden),
                ("name", Presence::Unconstrained),
                ("date", Presence::Unconstrained),
            ],
        }
    }
}

/// Collect every rule violation for `payload` under `profile`, in rule order.
pub fn violations(payload: &HolidayPayload, profile: Profile) -> Vec<Violation> {
    let mut found = Vec::new();

    for (field, presence) in profile.rules() {
        let supplied = match *field {
            "id" => payload.id.is_value(),
            "name" => payload.name.is_value(),
            "date" => payload.date.is_value(),
            _ => unreachable!("unknown rule field {}", field),
        };

        match presence {
            Presence::Forbidden if supplied => found.push(Violation {
                field,
                message: "must be null",
            }),
            Presence::Required if !supplied => found.push(Violation {
                field,
                message: "must not be null",
            }),
            _ => {}
        }
    }

    found
}

/// Validate `payload` and surface the first violation as a bad request.
pub fn validate(payload: &HolidayPayload, profile: Profile) -> ApiResult<()> {
    match violations(payload, profile).first() {
        Some(violation) => Err(ApiError::validation(violation.field, violation.message)),
        None => Ok(()),
    }
}
