use crate::models::{Field, Holiday, HolidayPayload};

/// Merge a partial payload onto an existing holiday.
///
/// A field explicitly supplied with a value replaces the stored one;
/// anything else keeps the stored value. An explicit null also keeps the
/// stored value: clearing a field through patch is not supported. The id
/// is never taken from the payload.
///
/// Pure, so the merge semantics are testable without a database.
pub fn merge(existing: Holiday, payload: &HolidayPayload) -> Holiday {
    Holiday {
        id: existing.id,
        name: patch_value(existing.name, payload.name.as_ref()),
        date: match payload.date {
            Field::Value(date) => Some(date),
            Field::Missing | Field::Null => existing.date,
        },
    }
}

fn patch_value<T: Clone>(current: T, supplied: Field<&T>) -> T {
    match supplied {
        Field::Value(v) => v.clone(),
        Field::Missing | Field::Null => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn existing() -> Holiday {
        Holiday {
            id: 42,
            name: "Christmas".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 12, 25),
        }
    }

    #[test]
    fn name_only_patch_leaves_date_unchanged() {
        let merged = merge(existing(), &HolidayPayload::new().with_name("Christmas Day"));
        assert_eq!(merged.name, "Christmas Day");
        assert_eq!(merged.date, NaiveDate::from_ymd_opt(2026, 12, 25));
        assert_eq!(merged.id, 42);
    }

    #[test]
    fn date_only_patch_leaves_name_unchanged() {
        let new_date = NaiveDate::from_ymd_opt(2027, 12, 25).unwrap();
        let merged = merge(existing(), &HolidayPayload::new().with_date(new_date));
        assert_eq!(merged.name, "Christmas");
        assert_eq!(merged.date, Some(new_date));
    }

    #[test]
    fn empty_payload_changes_nothing() {
        let merged = merge(existing(), &HolidayPayload::new());
        assert_eq!(merged, existing());
    }

    #[test]
    fn explicit_null_does_not_clear() {
        let payload: HolidayPayload =
            serde_json::from_str(r#"{"name":null,"date":null}"#).unwrap();
        let merged = merge(existing(), &payload);
        assert_eq!(merged, existing());
    }

    #[test]
    fn merge_is_idempotent() {
        let payload = HolidayPayload::new()
            .with_name("Boxing Day")
            .with_date(NaiveDate::from_ymd_opt(2026, 12, 26).unwrap());
        let once = merge(existing(), &payload);
        let twice = merge(once.clone(), &payload);
        assert_eq!(once, twice);
    }

    #[test]
    fn payload_id_is_ignored() {
        let payload: HolidayPayload = serde_json::from_str(r#"{"name":"Renamed"}"#).unwrap();
        let merged = merge(existing(), &payload);
        assert_eq!(merged.id, 42);
    }
}
