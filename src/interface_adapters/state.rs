use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Companion, Guest, Participation};
use crate::domain::ports::GuestRepository;

// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    // Shared database pool for guest persistence.
    pub db: PgPool,
}

// PostgreSQL-backed guest repository adapter.
#[derive(Clone)]
pub struct PostgresGuestRepository {
    pub db: PgPool,
}

#[derive(sqlx::FromRow)]
struct GuestRow {
    id: i64,
    name: String,
    attendance_confirmed: bool,
    participation: String,
    companion_count: i32,
}

#[derive(sqlx::FromRow)]
struct CompanionRow {
    id: i64,
    name: String,
    guest_id: i64,
}

#[async_trait]
impl GuestRepository for PostgresGuestRepository {
    async fn add_guest(&self, guest: Guest) -> Result<(), String> {
        // Guest and companions go in a single transaction so a failed
        // companion insert never leaves a partial registration behind.
        let mut tx = self.db.begin().await.map_err(|err| err.to_string())?;

        let (guest_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO guests (name, attendance_confirmed, participation, companion_count)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&guest.name)
        .bind(guest.attendance_confirmed)
        .bind(guest.participation.as_str())
        .bind(guest.companion_count)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| err.to_string())?;

        for companion in &guest.companions {
            sqlx::query("INSERT INTO companions (name, guest_id) VALUES ($1, $2)")
                .bind(&companion.name)
                .bind(guest_id)
                .execute(&mut *tx)
                .await
                .map_err(|err| err.to_string())?;
        }

        tx.commit().await.map_err(|err| err.to_string())?;
        Ok(())
    }

    async fn guest_exists(&self, name: &str) -> Result<bool, String> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM guests WHERE LOWER(name) = LOWER($1))")
                .bind(name)
                .fetch_one(&self.db)
                .await
                .map_err(|err| err.to_string())?;

        Ok(exists)
    }

    async fn list_confirmed_guests(&self) -> Result<Vec<Guest>, String> {
        let guest_rows: Vec<GuestRow> = sqlx::query_as(
            r#"
            SELECT id, name, attendance_confirmed, participation, companion_count
            FROM guests
            WHERE attendance_confirmed
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        let companion_rows: Vec<CompanionRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.name, c.guest_id
            FROM companions c
            JOIN guests g ON g.id = c.guest_id
            WHERE g.attendance_confirmed
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        let mut companions_by_guest: HashMap<i64, Vec<Companion>> = HashMap::new();
        for row in companion_rows {
            companions_by_guest
                .entry(row.guest_id)
                .or_default()
                .push(Companion {
                    id: row.id,
                    name: row.name,
                });
        }

        let mut guests = Vec::with_capacity(guest_rows.len());
        for row in guest_rows {
            let participation = Participation::parse(&row.participation)
                .ok_or_else(|| format!("unknown participation value: {}", row.participation))?;

            guests.push(Guest {
                id: row.id,
                name: row.name,
                attendance_confirmed: row.attendance_confirmed,
                participation,
                companion_count: row.companion_count,
                companions: companions_by_guest.remove(&row.id).unwrap_or_default(),
            });
        }

        Ok(guests)
    }

    async fn clear_all(&self) -> Result<(), String> {
        // Truncating both tables together sidesteps the FK ordering.
        sqlx::query("TRUNCATE TABLE companions, guests RESTART IDENTITY")
            .execute(&self.db)
            .await
            .map_err(|err| err.to_string())?;

        Ok(())
    }
}
