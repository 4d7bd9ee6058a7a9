// File: src/field.rs
// Purpose: Form field names and the static descriptor table used by renderers

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Name of the UI-only toggle that reveals the password input
pub const SHOW_PASSWORD: &str = "showPassword";

/// The ten data fields of the registration form, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    Country,
    City,
    Pan,
    Aadhar,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::Phone,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhar,
    ];

    /// Wire name of the field (matches the input's `name` attribute)
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::Phone => "phone",
            Field::Country => "country",
            Field::City => "city",
            Field::Pan => "pan",
            Field::Aadhar => "aadhar",
        }
    }

    /// Rendering metadata for this field
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELD_DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Kind of input control a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Select,
}

/// Icon shown inside the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    User,
    Mail,
    Phone,
    CreditCard,
    Shield,
    MapPin,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::User => "user",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::CreditCard => "credit-card",
            Icon::Shield => "shield",
            Icon::MapPin => "map-pin",
        }
    }
}

/// Static rendering metadata for one field. Carries no validation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub label: &'static str,
    pub input: InputKind,
    pub icon: Icon,
    pub placeholder: &'static str,
}

/// Descriptor table, indexed by `Field as usize`
pub static FIELD_DESCRIPTORS: [FieldDescriptor; 10] = [
    FieldDescriptor {
        field: Field::FirstName,
        label: "First Name",
        input: InputKind::Text,
        icon: Icon::User,
        placeholder: "Enter your first name",
    },
    FieldDescriptor {
        field: Field::LastName,
        label: "Last Name",
        input: InputKind::Text,
        icon: Icon::User,
        placeholder: "Enter your last name",
    },
    FieldDescriptor {
        field: Field::Username,
        label: "Username",
        input: InputKind::Text,
        icon: Icon::User,
        placeholder: "Enter your username",
    },
    FieldDescriptor {
        field: Field::Email,
        label: "Email",
        input: InputKind::Email,
        icon: Icon::Mail,
        placeholder: "Enter your email",
    },
    FieldDescriptor {
        field: Field::Password,
        label: "Password",
        input: InputKind::Password,
        icon: Icon::Shield,
        placeholder: "Create a strong password",
    },
    FieldDescriptor {
        field: Field::Phone,
        label: "Phone No.",
        input: InputKind::Text,
        icon: Icon::Phone,
        placeholder: "Enter your phone no.",
    },
    FieldDescriptor {
        field: Field::Country,
        label: "Country",
        input: InputKind::Select,
        icon: Icon::MapPin,
        placeholder: "Select Country",
    },
    FieldDescriptor {
        field: Field::City,
        label: "City",
        input: InputKind::Select,
        icon: Icon::MapPin,
        placeholder: "Select City",
    },
    FieldDescriptor {
        field: Field::Pan,
        label: "PAN No.",
        input: InputKind::Text,
        icon: Icon::CreditCard,
        placeholder: "Enter your pan no.",
    },
    FieldDescriptor {
        field: Field::Aadhar,
        label: "Aadhar No.",
        input: InputKind::Text,
        icon: Icon::Shield,
        placeholder: "Enter your aadhar no.",
    },
];

impl FieldDescriptor {
    /// HTML5 attributes for the field's control
    ///
    /// Selects get no `type` or `placeholder`; the placeholder becomes the
    /// empty first option instead.
    pub fn attrs(&self) -> FieldAttrs {
        let mut html5_attrs = BTreeMap::new();
        html5_attrs.insert("name".to_string(), self.field.as_str().to_string());
        html5_attrs.insert("required".to_string(), String::new());

        let html_type = match self.input {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Password => Some("password"),
            InputKind::Select => None,
        };
        if let Some(html_type) = html_type {
            html5_attrs.insert("type".to_string(), html_type.to_string());
            html5_attrs.insert("placeholder".to_string(), self.placeholder.to_string());
        }

        FieldAttrs {
            html5_attrs,
            label: self.label.to_string(),
        }
    }
}

/// HTML5 attributes and label for a rendered field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// Attribute name to value; an empty value renders as a bare attribute
    pub html5_attrs: BTreeMap<String, String>,
    /// Field label for display
    pub label: String,
}

impl FieldAttrs {
    /// Render HTML5 attributes as a string, in attribute-name order
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
