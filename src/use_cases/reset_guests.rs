use crate::domain::errors::GuestError;
use crate::domain::ports::GuestRepository;

// Administrative bulk wipe use case with an injected repository.
pub struct ResetGuestsUseCase<R> {
    pub repo: R,
}

impl<R> ResetGuestsUseCase<R>
where
    R: GuestRepository,
{
    pub async fn execute(&self) -> Result<(), GuestError> {
        self.repo.clear_all().await.map_err(GuestError::Storage)
    }
}
