//! Contact domain model.

use std::fmt;

use validator::Validate;

use crate::errors::ContactError;

/// A single contact record.
///
/// Built contacts have no identifier. Only instances loaded from the store
/// carry one, and no setter can change it. All other fields are freely
/// mutable in memory; changes only reach the store through an explicit update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<i64>,
}

impl Contact {
    /// Rebuilds a contact from a stored row, carrying its identifier.
    ///
    /// This is the only way a contact gets an identifier; the persistence
    /// layer calls it when loading rows.
    pub fn from_stored(
        id: i64,
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<i64>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name,
            last_name,
            email,
            phone,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<i64> {
        self.phone
    }

    /// Returns true for contacts loaded from the store.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn set_phone(&mut self, phone: Option<i64>) {
        self.phone = phone;
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let phone = self
            .phone
            .map_or_else(|| "-".to_string(), |phone| phone.to_string());
        write!(
            f,
            "Contact {{ id: {}, name: {} {}, email: {}, phone: {} }}",
            id,
            self.first_name,
            self.last_name,
            self.email.as_deref().unwrap_or("-"),
            phone
        )
    }
}

/// Fluent builder for [`Contact`].
///
/// Names are validated when the builder is created, so `build` cannot fail.
#[derive(Debug, Clone, Validate)]
pub struct ContactBuilder {
    #[validate(length(min = 1, message = "First name is required"))]
    first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    last_name: String,

    email: Option<String>,
    phone: Option<i64>,
}

impl ContactBuilder {
    /// Create a builder for a contact with the given names.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ContactError> {
        let builder = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
        };
        builder.validate()?;
        Ok(builder)
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: i64) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Build an unsaved Contact.
    pub fn build(self) -> Contact {
        Contact {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}
