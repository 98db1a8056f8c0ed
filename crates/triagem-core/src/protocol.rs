//! Protocol records as exchanged with the protocol service.
//!
//! Field names follow the service's camelCase JSON. `system` and `court` stay
//! plain strings: operators may type values the classifier never emits, and
//! the router treats anything it does not recognise as robot-ineligible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::ProtocolStatus;
use crate::tribunal::ProcessType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[serde(rename = "1º Grau")]
    PrimeiroGrau,
    #[serde(rename = "2º Grau")]
    SegundoGrau,
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimeiroGrau => "1º Grau",
            Self::SegundoGrau => "2º Grau",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1º Grau" => Ok(Self::PrimeiroGrau),
            "2º Grau" => Ok(Self::SegundoGrau),
            other => Err(CoreError::UnknownJurisdiction(other.to_string())),
        }
    }
}

/// A protocol as stored by the protocol service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub process_number: String,
    #[serde(default)]
    pub court: String,
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub jurisdiction: Option<Jurisdiction>,
    #[serde(default)]
    pub process_type: Option<ProcessType>,
    #[serde(default)]
    pub is_fatal: bool,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub is_distribution: bool,
    /// Handler name; `None` is the robot queue.
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status: ProtocolStatus,
    /// ISO 8601 timestamp string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Protocol {
    pub fn is_in_robot_queue(&self) -> bool {
        self.assigned_to.is_none()
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow.
    pub fn transition_to(&mut self, next: ProtocolStatus) -> Result<(), CoreError> {
        self.status = self.status.transition(next)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_parse_and_serde() {
        assert_eq!("1º Grau".parse::<Jurisdiction>(), Ok(Jurisdiction::PrimeiroGrau));
        assert_eq!("2º Grau".parse::<Jurisdiction>(), Ok(Jurisdiction::SegundoGrau));
        assert!("3º Grau".parse::<Jurisdiction>().is_err());
        assert_eq!(
            serde_json::to_string(&Jurisdiction::SegundoGrau).unwrap(),
            "\"2º Grau\""
        );
    }

    #[test]
    fn protocol_json_uses_camel_case() {
        let p = Protocol {
            process_number: "0001234-56.2024.8.26.0100".into(),
            court: "Tribunal de Justiça de São Paulo".into(),
            system: "ESAJ".into(),
            jurisdiction: Some(Jurisdiction::PrimeiroGrau),
            process_type: Some(ProcessType::Civel),
            is_fatal: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["processNumber"], "0001234-56.2024.8.26.0100");
        assert_eq!(json["jurisdiction"], "1º Grau");
        assert_eq!(json["processType"], "civel");
        assert_eq!(json["isFatal"], true);
        assert_eq!(json["isDistribution"], false);
        assert_eq!(json["assignedTo"], serde_json::Value::Null);
        assert_eq!(json["status"], "Aguardando");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn protocol_from_sparse_service_json() {
        let json = r#"{
            "id": "p-17",
            "processNumber": "0001234-56.2024.8.26.0100",
            "assignedTo": "Deyse",
            "status": "Em Execução"
        }"#;
        let p: Protocol = serde_json::from_str(json).unwrap();
        assert_eq!(p.id.as_deref(), Some("p-17"));
        assert_eq!(p.assigned_to.as_deref(), Some("Deyse"));
        assert_eq!(p.status, ProtocolStatus::EmExecucao);
        assert!(p.court.is_empty());
        assert!(!p.is_in_robot_queue());
    }

    #[test]
    fn transition_updates_status() {
        let mut p = Protocol::default();
        p.transition_to(ProtocolStatus::EmExecucao).unwrap();
        assert_eq!(p.status, ProtocolStatus::EmExecucao);
        assert!(p.transition_to(ProtocolStatus::Aguardando).is_err());
        assert_eq!(p.status, ProtocolStatus::EmExecucao);
    }
}
