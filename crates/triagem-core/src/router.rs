//! Queue routing: robot automation or a human handler.
//!
//! Routing never fails. Anything the robot cannot be trusted with (a
//! distribution, a note for the handler, a second-instance filing, a
//! system/court pair outside the eligible groups) goes to the fallback
//! handler's manual queue.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::groups::SYSTEM_GROUPS;
use crate::protocol::{Jurisdiction, Protocol};

/// Handler that receives every protocol the robot does not take.
pub const DEFAULT_FALLBACK_HANDLER: &str = "Carlos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub fallback_handler: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fallback_handler: DEFAULT_FALLBACK_HANDLER.to_string(),
        }
    }
}

/// The form fields routing looks at. Any of them may still be blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingForm<'a> {
    pub system: &'a str,
    pub court: &'a str,
    pub jurisdiction: Option<Jurisdiction>,
    pub observations: &'a str,
    pub is_distribution: bool,
}

impl<'a> From<&'a Protocol> for RoutingForm<'a> {
    fn from(p: &'a Protocol) -> Self {
        Self {
            system: &p.system,
            court: &p.court,
            jurisdiction: p.jurisdiction,
            observations: &p.observations,
            is_distribution: p.is_distribution,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualReason {
    Distribution,
    Observations,
    SecondInstance,
    RobotIneligible,
}

impl ManualReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distribution => "distribution",
            Self::Observations => "observations",
            Self::SecondInstance => "second_instance",
            Self::RobotIneligible => "robot_ineligible",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Distribution => "new case distribution",
            Self::Observations => "has observations for the handler",
            Self::SecondInstance => "2º Grau filing",
            Self::RobotIneligible => "system/court not supported by the robot",
        }
    }
}

impl fmt::Display for ManualReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum RoutingDecision {
    Robot,
    Manual {
        handler: String,
        reason: ManualReason,
    },
}

impl RoutingDecision {
    pub fn is_robot(&self) -> bool {
        matches!(self, Self::Robot)
    }

    /// Value stored in `Protocol::assigned_to`; `None` is the robot queue.
    pub fn assigned_to(&self) -> Option<&str> {
        match self {
            Self::Robot => None,
            Self::Manual { handler, .. } => Some(handler.as_str()),
        }
    }

    /// `"robot"` or the handler's name.
    pub fn target(&self) -> &str {
        self.assigned_to().unwrap_or("robot")
    }
}

/// Decide which queue a protocol goes to. The first matching rule wins.
///
/// `is_distribution` is the operator's explicit flag and takes precedence
/// over the form's own `is_distribution` field.
pub fn determine_queue_assignment(
    form: &RoutingForm<'_>,
    is_distribution: bool,
    config: &RouterConfig,
) -> RoutingDecision {
    let reason = if is_distribution {
        Some(ManualReason::Distribution)
    } else if !form.observations.trim().is_empty() {
        Some(ManualReason::Observations)
    } else if form.jurisdiction == Some(Jurisdiction::SegundoGrau) {
        Some(ManualReason::SecondInstance)
    } else if !check_robot_eligibility(form.system, form.court) {
        Some(ManualReason::RobotIneligible)
    } else {
        None
    };

    let decision = match reason {
        None => RoutingDecision::Robot,
        Some(reason) => RoutingDecision::Manual {
            handler: config.fallback_handler.clone(),
            reason,
        },
    };
    debug!(
        system = form.system,
        court = form.court,
        target = decision.target(),
        "queue assignment"
    );
    decision
}

/// Whether the robot can file in `system` at `court`.
///
/// True exactly for pairs in a robot-eligible [`SYSTEM_GROUPS`] entry.
pub fn check_robot_eligibility(system: &str, court: &str) -> bool {
    SYSTEM_GROUPS
        .iter()
        .any(|g| g.robot_eligible && g.matches(system, court))
}
