//! Contact repository for database operations.
//!
//! Every operation runs in its own unit of work: reads check out a pooled
//! connection, writes open a transaction. Both are released on drop, and an
//! uncommitted transaction rolls back, so no exit path leaks a connection.
//! Each operation is timed; failures are recorded with `outcome="error"`.

use sqlx::SqlitePool;
use tracing::debug;

use domain::models::Contact;

use crate::entities::ContactEntity;
use crate::error::PersistenceError;
use crate::metrics::QueryTimer;

/// Repository for contact-related database operations.
#[derive(Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new contact and return the identifier the store assigned.
    ///
    /// The passed contact is left untouched; load it with [`Self::find_by_id`]
    /// to get an instance bound to the stored row.
    pub async fn create(&self, contact: &Contact) -> Result<i64, PersistenceError> {
        if let Some(id) = contact.id() {
            return Err(PersistenceError::AlreadyPersisted(id));
        }

        let mut timer = QueryTimer::new("create_contact");
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(contact.first_name())
        .bind(contact.last_name())
        .bind(contact.email())
        .bind(contact.phone())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.succeed();

        debug!(contact_id = id, "Contact created");
        Ok(id)
    }

    /// Find a contact by its identifier.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, PersistenceError> {
        let mut timer = QueryTimer::new("find_contact_by_id");
        let mut conn = self.pool.acquire().await?;

        let entity = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone
            FROM contacts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        timer.succeed();

        Ok(entity.map(Contact::from))
    }

    /// List every stored contact.
    ///
    /// Rows are sorted by identifier so output is stable, but callers should
    /// not depend on any particular order.
    pub async fn list_all(&self) -> Result<Vec<Contact>, PersistenceError> {
        let mut timer = QueryTimer::new("list_contacts");
        let mut conn = self.pool.acquire().await?;

        let entities = sqlx::query_as::<_, ContactEntity>(
            r#"
            SELECT id, first_name, last_name, email, phone
            FROM contacts
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        timer.succeed();

        Ok(entities.into_iter().map(Contact::from).collect())
    }

    /// Count stored contacts.
    pub async fn count(&self) -> Result<i64, PersistenceError> {
        let mut timer = QueryTimer::new("count_contacts");
        let mut conn = self.pool.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(&mut *conn)
            .await?;
        timer.succeed();

        Ok(count)
    }

    /// Write every field of the contact to its stored row.
    pub async fn update(&self, contact: &Contact) -> Result<(), PersistenceError> {
        let id = contact.id().ok_or(PersistenceError::Transient)?;

        let mut timer = QueryTimer::new("update_contact");
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE contacts SET
                first_name = ?,
                last_name = ?,
                email = ?,
                phone = ?
            WHERE id = ?
            "#,
        )
        .bind(contact.first_name())
        .bind(contact.last_name())
        .bind(contact.email())
        .bind(contact.phone())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(id));
        }

        tx.commit().await?;
        timer.succeed();

        debug!(contact_id = id, "Contact updated");
        Ok(())
    }

    /// Delete the stored row for the contact.
    pub async fn delete(&self, contact: &Contact) -> Result<(), PersistenceError> {
        let id = contact.id().ok_or(PersistenceError::Transient)?;

        let mut timer = QueryTimer::new("delete_contact");
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM contacts WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(id));
        }

        tx.commit().await?;
        timer.succeed();

        debug!(contact_id = id, "Contact deleted");
        Ok(())
    }
}
