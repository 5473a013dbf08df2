use crate::domain::entities::{Companion, Guest, Participation};
use crate::domain::errors::GuestError;
use crate::domain::ports::GuestRepository;
use crate::interface_adapters::protocol::RegisterGuestRequest;

const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 50;
const MAX_COMPANIONS: i32 = 5;

// Guest registration use case with an injected repository.
pub struct RegisterGuestUseCase<R> {
    pub repo: R,
}

impl<R> RegisterGuestUseCase<R>
where
    R: GuestRepository,
{
    pub async fn execute(&self, payload: RegisterGuestRequest) -> Result<(), GuestError> {
        validate_registration(&payload)?;

        // A guest going alone never carries companions, even if names
        // slipped through in the payload.
        let companions = match payload.participation {
            Participation::Alone => Vec::new(),
            Participation::Accompanied => payload
                .companion_names
                .iter()
                .map(|name| Companion {
                    id: 0,
                    name: name.clone(),
                })
                .collect(),
        };

        let guest = Guest {
            id: 0,
            name: payload.name,
            attendance_confirmed: payload.attendance_confirmed,
            participation: payload.participation,
            companion_count: payload.companion_count,
            companions,
        };

        self.repo
            .add_guest(guest)
            .await
            .map_err(GuestError::Storage)?;

        Ok(())
    }
}

// First violated rule wins; the caller maps the variant to a 400 message.
fn validate_registration(payload: &RegisterGuestRequest) -> Result<(), GuestError> {
    if payload.name.trim().is_empty() {
        return Err(GuestError::MissingName);
    }

    let name_len = payload.name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
        return Err(GuestError::NameLength);
    }

    if payload.companion_count < 0 || payload.companion_count > MAX_COMPANIONS {
        return Err(GuestError::CompanionCountRange);
    }

    if payload.participation == Participation::Alone && payload.companion_count > 0 {
        return Err(GuestError::SoloWithCompanions);
    }

    if payload.companion_count as usize != payload.companion_names.len() {
        return Err(GuestError::CompanionCountMismatch);
    }

    if payload
        .companion_names
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(GuestError::BlankCompanionName);
    }

    if payload.companion_names.iter().any(|name| {
        let len = name.chars().count();
        !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
    }) {
        return Err(GuestError::CompanionNameLength);
    }

    Ok(())
}
