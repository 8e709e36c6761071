use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Lifecycle status of a client engagement.
///
/// `Completed` and `Cancelled` are terminal; once a record reaches either,
/// no further status write is accepted.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClientStatus {
    #[default]
    #[serde(rename = "aguardando")]
    Awaiting,
    #[serde(rename = "confirmado")]
    Confirmed,
    #[serde(rename = "concluido")]
    Completed,
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl ClientStatus {
    /// Whether the record has reached a final state.
    pub fn is_terminal(self) -> bool {
        matches!(self, ClientStatus::Completed | ClientStatus::Cancelled)
    }

    /// Whether the engagement still requires attention (not completed or cancelled).
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// Guarded transition table.
    ///
    /// Terminal states accept nothing; a non-terminal record may be
    /// re-confirmed with its current status, move forward, or be cancelled.
    pub fn can_transition_to(self, target: ClientStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if self == target {
            return true;
        }
        match self {
            ClientStatus::Awaiting => matches!(
                target,
                ClientStatus::Confirmed | ClientStatus::Completed | ClientStatus::Cancelled
            ),
            ClientStatus::Confirmed => {
                matches!(target, ClientStatus::Completed | ClientStatus::Cancelled)
            }
            ClientStatus::Completed | ClientStatus::Cancelled => false,
        }
    }
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientStatus::Awaiting => write!(f, "aguardando"),
            ClientStatus::Confirmed => write!(f, "confirmado"),
            ClientStatus::Completed => write!(f, "concluido"),
            ClientStatus::Cancelled => write!(f, "cancelado"),
        }
    }
}

impl FromStr for ClientStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aguardando" => Ok(ClientStatus::Awaiting),
            "confirmado" => Ok(ClientStatus::Confirmed),
            "concluido" => Ok(ClientStatus::Completed),
            "cancelado" => Ok(ClientStatus::Cancelled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_accept_no_transition() {
        for target in [
            ClientStatus::Awaiting,
            ClientStatus::Confirmed,
            ClientStatus::Completed,
            ClientStatus::Cancelled,
        ] {
            assert!(!ClientStatus::Completed.can_transition_to(target));
            assert!(!ClientStatus::Cancelled.can_transition_to(target));
        }
    }

    #[test]
    fn awaiting_moves_forward_but_confirmed_does_not_regress() {
        assert!(ClientStatus::Awaiting.can_transition_to(ClientStatus::Confirmed));
        assert!(ClientStatus::Awaiting.can_transition_to(ClientStatus::Cancelled));
        assert!(ClientStatus::Confirmed.can_transition_to(ClientStatus::Completed));
        assert!(!ClientStatus::Confirmed.can_transition_to(ClientStatus::Awaiting));
    }

    #[test]
    fn same_status_write_is_allowed_while_active() {
        assert!(ClientStatus::Awaiting.can_transition_to(ClientStatus::Awaiting));
        assert!(!ClientStatus::Completed.can_transition_to(ClientStatus::Completed));
    }

    #[test]
    fn round_trips_through_display_and_from_str() {
        for status in [
            ClientStatus::Awaiting,
            ClientStatus::Confirmed,
            ClientStatus::Completed,
            ClientStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<ClientStatus>(), Ok(status));
        }
    }
}
