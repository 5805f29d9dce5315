use crate::{DbError, Result as DbErrorResult};

use ph_core::{ErrorLocation, ProfileUpdate, User};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, credential, federated_id, date_of_birth, \
     phone_number, profile_image_path, public_code, created_at, updated_at";

/// Oldest first; rowid breaks ties between records created in the same second
const OLDEST_FIRST: &str = "ORDER BY created_at ASC, rowid ASC LIMIT 1";

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: Option<String>,
    email: String,
    credential: Option<String>,
    federated_id: Option<String>,
    date_of_birth: Option<NaiveDate>,
    phone_number: Option<String>,
    profile_image_path: Option<String>,
    public_code: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        let corrupt = |message: String| DbError::CorruptRow {
            id: r.id.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let id = Uuid::parse_str(&r.id).map_err(|e| corrupt(format!("bad id: {e}")))?;
        let created_at = DateTime::from_timestamp(r.created_at, 0)
            .ok_or_else(|| corrupt(format!("bad created_at: {}", r.created_at)))?;
        let updated_at = DateTime::from_timestamp(r.updated_at, 0)
            .ok_or_else(|| corrupt(format!("bad updated_at: {}", r.updated_at)))?;

        Ok(User {
            id,
            name: r.name,
            email: r.email,
            credential: r.credential,
            federated_id: r.federated_id,
            date_of_birth: r.date_of_birth,
            phone_number: r.phone_number,
            profile_image_path: r.profile_image_path,
            public_code: r.public_code,
            created_at,
            updated_at,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (
                  id, name, email, credential, federated_id,
                  date_of_birth, phone_number, profile_image_path, public_code,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.credential)
        .bind(&user.federated_id)
        .bind(user.date_of_birth)
        .bind(&user.phone_number)
        .bind(&user.profile_image_path)
        .bind(&user.public_code)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Oldest record registered under `email`, if any
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ? {OLDEST_FIRST}"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Oldest record whose email and credential both match exactly.
    ///
    /// Federated records have no credential and never match.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        credential: &str,
    ) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE email = ? AND credential IS NOT NULL AND credential = ? {OLDEST_FIRST}"
        ))
        .bind(email)
        .bind(credential)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Apply scalar changes and an optional new image reference in one write.
    ///
    /// Returns the record as stored afterwards, or `None` if `id` does not exist.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
        profile_image_path: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              UPDATE users
              SET name = CASE WHEN ? THEN name ELSE ? END,
                  date_of_birth = CASE WHEN ? THEN date_of_birth ELSE ? END,
                  phone_number = CASE WHEN ? THEN phone_number ELSE ? END,
                  profile_image_path = COALESCE(?, profile_image_path),
                  updated_at = ?
              WHERE id = ?
              RETURNING {USER_COLUMNS}
              "#
        ))
        .bind(update.name.is_keep())
        .bind(update.name.value())
        .bind(update.date_of_birth.is_keep())
        .bind(update.date_of_birth.value().copied())
        .bind(update.phone_number.is_keep())
        .bind(update.phone_number.value())
        .bind(profile_image_path)
        .bind(updated_at.timestamp())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Store a freshly issued public code. Returns false if `id` does not exist.
    pub async fn set_public_code(&self, id: Uuid, public_code: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET public_code = ? WHERE id = ?")
            .bind(public_code)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            log::warn!("Public code for {} not stored: record vanished", id);
        }

        Ok(result.rows_affected() > 0)
    }

    /// Cheap round-trip used by readiness checks
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
