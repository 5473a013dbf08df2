use thiserror::Error;

// Domain-level errors for guest-list workflows. Validation variants carry
// the client-facing message; Storage wraps the underlying cause.
#[derive(Debug, Error)]
pub enum GuestError {
    #[error("O nome do convidado é obrigatório.")]
    MissingName,
    #[error("O nome deve ter entre 3 e 50 caracteres.")]
    NameLength,
    #[error("A quantidade de acompanhantes não pode ser negativa ou superior a 5.")]
    CompanionCountRange,
    #[error("Convidado que vai sozinho não pode ter acompanhantes.")]
    SoloWithCompanions,
    #[error("A quantidade de acompanhantes deve ser igual a quantidade de nomes informados.")]
    CompanionCountMismatch,
    #[error("Os nomes dos acompanhantes não podem estar vazios.")]
    BlankCompanionName,
    #[error("O nome de cada acompanhante deve ter entre 3 e 50 caracteres.")]
    CompanionNameLength,
    #[error("{0}")]
    Storage(String),
}
