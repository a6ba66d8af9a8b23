use std::fmt;

/// Identity of one input in the lead capture form.
///
/// The declaration order is the form order; [`Field::ALL`] iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    CompanyName,
    Title,
    Designation,
    Notes,
    Value,
    Linkedin,
    Website,
}

impl Field {
    /// Every form field, in form order.
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::CompanyName,
        Field::Title,
        Field::Designation,
        Field::Notes,
        Field::Value,
        Field::Linkedin,
        Field::Website,
    ];

    /// Returns the wire name of this field, matching the host document's
    /// input names and the webhook payload keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::CompanyName => "companyName",
            Field::Title => "title",
            Field::Designation => "designation",
            Field::Notes => "notes",
            Field::Value => "value",
            Field::Linkedin => "linkedin",
            Field::Website => "website",
        }
    }

    /// Looks up a field by its wire name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Returns `true` if the field must be non-empty on submit.
    pub fn is_required(self) -> bool {
        matches!(self, Field::FirstName | Field::LastName | Field::Email)
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
