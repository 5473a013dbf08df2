use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::Guest;
use crate::domain::ports::GuestRepository;

pub(crate) type GuestTable = Arc<Mutex<Vec<Guest>>>;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub add: bool,
    pub exists: bool,
    pub list: bool,
    pub clear: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingRepository {
    guests: GuestTable,
    failures: FailureFlags,
}

impl RecordingRepository {
    pub(crate) fn new() -> Self {
        Self {
            guests: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_guest(&self, guest: Guest) {
        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        guard.push(guest);
    }

    pub(crate) fn stored_guests(&self) -> Vec<Guest> {
        let guard = self.guests.lock().expect("guests mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl GuestRepository for RecordingRepository {
    async fn add_guest(&self, guest: Guest) -> Result<(), String> {
        // Intentional failure hook used to verify error mapping behavior.
        if self.failures.add {
            return Err("insert failed".to_string());
        }

        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        guard.push(guest);
        Ok(())
    }

    async fn guest_exists(&self, name: &str) -> Result<bool, String> {
        if self.failures.exists {
            return Err("select failed".to_string());
        }

        // Case-insensitive match, mirroring the LOWER() comparison the
        // Postgres adapter performs.
        let needle = name.to_lowercase();
        let guard = self.guests.lock().expect("guests mutex poisoned");
        Ok(guard.iter().any(|guest| guest.name.to_lowercase() == needle))
    }

    async fn list_confirmed_guests(&self) -> Result<Vec<Guest>, String> {
        if self.failures.list {
            return Err("select failed".to_string());
        }

        let guard = self.guests.lock().expect("guests mutex poisoned");
        Ok(guard
            .iter()
            .filter(|guest| guest.attendance_confirmed)
            .cloned()
            .collect())
    }

    async fn clear_all(&self) -> Result<(), String> {
        if self.failures.clear {
            return Err("delete failed".to_string());
        }

        let mut guard = self.guests.lock().expect("guests mutex poisoned");
        guard.clear();
        Ok(())
    }
}
