//! Filing sub-systems ("sistemas") used by Brazilian courts.
//!
//! [`TribunalSystem::ALL`] is the dropdown vocabulary offered to operators.
//! Every system the classifier can emit, from the court table or from a
//! state-court override, is a member of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TribunalSystem {
    #[serde(rename = "PJe")]
    Pje,
    #[serde(rename = "eProc")]
    Eproc,
    #[serde(rename = "eProc SP")]
    EprocSp,
    #[serde(rename = "ESAJ")]
    Esaj,
    #[serde(rename = "Projudi")]
    Projudi,
    #[serde(rename = "TJRJ Eletrônico")]
    TjrjEletronico,
    #[serde(rename = "e-STF")]
    Estf,
    #[serde(rename = "e-STJ")]
    Estj,
}

impl TribunalSystem {
    pub const ALL: [TribunalSystem; 8] = [
        Self::Pje,
        Self::Eproc,
        Self::EprocSp,
        Self::Esaj,
        Self::Projudi,
        Self::TjrjEletronico,
        Self::Estf,
        Self::Estj,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pje => "PJe",
            Self::Eproc => "eProc",
            Self::EprocSp => "eProc SP",
            Self::Esaj => "ESAJ",
            Self::Projudi => "Projudi",
            Self::TjrjEletronico => "TJRJ Eletrônico",
            Self::Estf => "e-STF",
            Self::Estj => "e-STJ",
        }
    }
}

impl fmt::Display for TribunalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TribunalSystem {
    type Err = CoreError;

    /// Exact match on the display string, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSystem(s.to_string()))
    }
}
