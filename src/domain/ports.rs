use async_trait::async_trait;

use crate::domain::entities::Guest;

// Port for guest persistence used by the application use cases.
#[async_trait]
pub trait GuestRepository: Send + Sync {
    // Insert a guest and all companions atomically.
    async fn add_guest(&self, guest: Guest) -> Result<(), String>;
    // Case-insensitive existence check by guest name.
    async fn guest_exists(&self, name: &str) -> Result<bool, String>;
    // All guests with confirmed attendance, companions included, in insertion order.
    async fn list_confirmed_guests(&self) -> Result<Vec<Guest>, String>;
    // Wipe every guest and companion record.
    async fn clear_all(&self) -> Result<(), String>;
}
