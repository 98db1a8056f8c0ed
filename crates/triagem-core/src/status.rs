//! Protocol status lifecycle.
//!
//! ```text
//! Aguardando ──► Em Execução ──► Peticionado
//!    │  ▲             │
//!    │  └─ Devolvido ◄┤
//!    ▼        │       ▼
//! Cancelado ◄─┴───────┘
//! ```
//!
//! `Peticionado` and `Cancelado` are terminal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolStatus {
    /// Waiting in its queue.
    #[default]
    Aguardando,
    /// Picked up by the robot or a handler.
    #[serde(rename = "Em Execução")]
    EmExecucao,
    /// Filed with the court.
    Peticionado,
    /// Sent back to the lawyer for correction.
    Devolvido,
    Cancelado,
}

impl ProtocolStatus {
    pub const ALL: [ProtocolStatus; 5] = [
        Self::Aguardando,
        Self::EmExecucao,
        Self::Peticionado,
        Self::Devolvido,
        Self::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aguardando => "Aguardando",
            Self::EmExecucao => "Em Execução",
            Self::Peticionado => "Peticionado",
            Self::Devolvido => "Devolvido",
            Self::Cancelado => "Cancelado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Peticionado | Self::Cancelado)
    }

    pub fn can_transition_to(&self, next: ProtocolStatus) -> bool {
        use ProtocolStatus::*;
        matches!(
            (*self, next),
            (Aguardando, EmExecucao)
                | (Aguardando, Devolvido)
                | (Aguardando, Cancelado)
                | (EmExecucao, Peticionado)
                | (EmExecucao, Devolvido)
                | (EmExecucao, Cancelado)
                | (Devolvido, Aguardando)
                | (Devolvido, Cancelado)
        )
    }

    /// Validated transition.
    pub fn transition(self, next: ProtocolStatus) -> Result<ProtocolStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for ProtocolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ProtocolStatus::*;

    #[test]
    fn happy_path() {
        let s = Aguardando.transition(EmExecucao).unwrap();
        let s = s.transition(Peticionado).unwrap();
        assert!(s.is_terminal());
    }

    #[test]
    fn returned_protocol_can_be_resubmitted() {
        let s = EmExecucao.transition(Devolvido).unwrap();
        assert_eq!(s.transition(Aguardando), Ok(Aguardando));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in [Peticionado, Cancelado] {
            for to in ProtocolStatus::ALL {
                assert!(!from.can_transition_to(to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn no_self_transitions() {
        for s in ProtocolStatus::ALL {
            assert!(!s.can_transition_to(s), "{s}");
        }
    }

    #[test]
    fn cannot_skip_execution() {
        assert_eq!(
            Aguardando.transition(Peticionado),
            Err(CoreError::InvalidTransition {
                from: Aguardando,
                to: Peticionado,
            })
        );
        assert!(!Devolvido.can_transition_to(EmExecucao));
    }

    #[test]
    fn parse_and_serde() {
        for s in ProtocolStatus::ALL {
            assert_eq!(s.as_str().parse::<ProtocolStatus>(), Ok(s));
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!("\"{}\"", s.as_str())
            );
        }
        assert!("Em Execucao".parse::<ProtocolStatus>().is_err());
    }

    #[test]
    fn default_is_waiting() {
        assert_eq!(ProtocolStatus::default(), Aguardando);
    }
}
