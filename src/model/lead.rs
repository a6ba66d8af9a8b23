use serde::{Deserialize, Serialize};

use super::field::Field;

/// The constant source tag attached to every submitted lead.
pub const LEAD_SOURCE: &str = "HR Automation Website";

/// The normalized payload sent to the webhook endpoint.
///
/// Optional attributes with an empty or absent source value are omitted from
/// the serialized record entirely, never sent as null or empty strings.
/// `value` is carried as a number, not a string. A record is built fresh per
/// submit attempt and discarded after the request completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl LeadRecord {
    /// Builds a record from the current form values.
    ///
    /// `get` returns the raw value for a field; every value is trimmed here.
    /// The caller is expected to have validated the form already, so a
    /// `value` that does not parse is dropped rather than reported.
    pub fn from_fields<F: Fn(Field) -> String>(get: F) -> Self {
        let required = |field| get(field).trim().to_string();
        let optional = |field| {
            let raw = get(field);
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Self {
            first_name: required(Field::FirstName),
            last_name: required(Field::LastName),
            email: required(Field::Email),
            phone: optional(Field::Phone),
            company_name: optional(Field::CompanyName),
            title: optional(Field::Title),
            designation: optional(Field::Designation),
            notes: optional(Field::Notes),
            source: LEAD_SOURCE.to_string(),
            value: optional(Field::Value).and_then(|v| v.parse::<f64>().ok()),
            linkedin: optional(Field::Linkedin),
            website: optional(Field::Website),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn record_from(pairs: &[(Field, &str)]) -> LeadRecord {
        let values: HashMap<Field, String> = pairs
            .iter()
            .map(|(f, v)| (*f, v.to_string()))
            .collect();
        LeadRecord::from_fields(|f| values.get(&f).cloned().unwrap_or_default())
    }

    fn minimal() -> LeadRecord {
        record_from(&[
            (Field::FirstName, "Jo"),
            (Field::LastName, "Smith"),
            (Field::Email, "jo@x.com"),
        ])
    }

    #[test]
    fn required_fields_carried() {
        let lead = minimal();
        assert_eq!(lead.first_name, "Jo");
        assert_eq!(lead.last_name, "Smith");
        assert_eq!(lead.email, "jo@x.com");
        assert_eq!(lead.source, LEAD_SOURCE);
    }

    #[test]
    fn empty_optionals_never_serialized() {
        let json = serde_json::to_value(minimal()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["firstName", "lastName", "email", "source"]);
    }

    #[test]
    fn whitespace_only_optional_omitted() {
        let lead = record_from(&[
            (Field::FirstName, "Jo"),
            (Field::LastName, "Smith"),
            (Field::Email, "jo@x.com"),
            (Field::Notes, "   "),
        ]);
        assert_eq!(lead.notes, None);
    }

    #[test]
    fn values_are_trimmed() {
        let lead = record_from(&[
            (Field::FirstName, "  Jo  "),
            (Field::LastName, "Smith"),
            (Field::Email, " jo@x.com "),
            (Field::CompanyName, " Acme "),
        ]);
        assert_eq!(lead.first_name, "Jo");
        assert_eq!(lead.email, "jo@x.com");
        assert_eq!(lead.company_name, Some("Acme".to_string()));
    }

    #[test]
    fn value_serialized_as_number() {
        let lead = record_from(&[
            (Field::FirstName, "Jo"),
            (Field::LastName, "Smith"),
            (Field::Email, "jo@x.com"),
            (Field::Value, "5"),
        ]);
        assert_eq!(lead.value, Some(5.0));
        let json = serde_json::to_value(&lead).unwrap();
        assert!(json["value"].is_number());
        assert_eq!(json["value"], serde_json::json!(5.0));
    }

    #[test]
    fn unparsable_value_dropped() {
        let lead = record_from(&[
            (Field::FirstName, "Jo"),
            (Field::LastName, "Smith"),
            (Field::Email, "jo@x.com"),
            (Field::Value, "12abc"),
        ]);
        assert_eq!(lead.value, None);
    }

    #[test]
    fn full_record_uses_wire_names() {
        let lead = record_from(&[
            (Field::FirstName, "Jo"),
            (Field::LastName, "Smith"),
            (Field::Email, "jo@x.com"),
            (Field::Phone, "+14155552671"),
            (Field::CompanyName, "Acme"),
            (Field::Title, "CTO"),
            (Field::Designation, "Engineering"),
            (Field::Notes, "called on Tuesday"),
            (Field::Value, "1250.75"),
            (Field::Linkedin, "https://linkedin.com/in/jo"),
            (Field::Website, "https://acme.example"),
        ]);
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["designation"], "Engineering");
        assert_eq!(json["source"], LEAD_SOURCE);
        assert_eq!(json["value"], serde_json::json!(1250.75));
    }

    #[test]
    fn serde_round_trip_with_missing_optionals() {
        let json = r#"{"firstName":"Jo","lastName":"Smith","email":"jo@x.com","source":"HR Automation Website"}"#;
        let lead: LeadRecord = serde_json::from_str(json).unwrap();
        assert_eq!(lead, minimal());
    }
}
