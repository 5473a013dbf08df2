use crate::domain::errors::GuestError;
use crate::domain::ports::GuestRepository;

// Existence check use case with an injected repository. The check is
// advisory only: nothing stops two racing registrations of the same name.
pub struct CheckGuestUseCase<R> {
    pub repo: R,
}

impl<R> CheckGuestUseCase<R>
where
    R: GuestRepository,
{
    pub async fn execute(&self, name: &str) -> Result<bool, GuestError> {
        if name.trim().is_empty() {
            return Err(GuestError::MissingName);
        }

        self.repo
            .guest_exists(name)
            .await
            .map_err(GuestError::Storage)
    }
}
