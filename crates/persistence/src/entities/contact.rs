//! Contact entity (database row mapping).

use sqlx::FromRow;

use domain::models::Contact;

/// Database row mapping for the contacts table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<i64>,
}

impl From<ContactEntity> for Contact {
    fn from(entity: ContactEntity) -> Self {
        Contact::from_stored(
            entity.id,
            entity.first_name,
            entity.last_name,
            entity.email,
            entity.phone,
        )
    }
}
