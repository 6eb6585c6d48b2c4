use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    #[error("no dialogue with id {0}")]
    UnknownDialogue(u32),

    #[error("dialogue {0} has no nodes")]
    EmptyDialogue(u32),

    #[error("no dialogue is open")]
    NotActive,

    #[error("choice {index} is out of range ({available} available)")]
    InvalidChoice { index: usize, available: usize },
}

impl GameError for DialogueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotActive | Self::InvalidChoice { .. } => ErrorSeverity::Recoverable,
            Self::UnknownDialogue(_) | Self::EmptyDialogue(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownDialogue(_) => "DIALOGUE_UNKNOWN",
            Self::EmptyDialogue(_) => "DIALOGUE_EMPTY",
            Self::NotActive => "DIALOGUE_NOT_ACTIVE",
            Self::InvalidChoice { .. } => "DIALOGUE_INVALID_CHOICE",
        }
    }
}
