//! Intake: turn an operator's draft into a classified, routed protocol.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classify::{TribunalInfo, extract_tribunal_info};
use crate::cnj::parse_process_number;
use crate::error::CoreError;
use crate::protocol::{Jurisdiction, Protocol};
use crate::router::{RouterConfig, RoutingDecision, RoutingForm, determine_queue_assignment};
use crate::status::ProtocolStatus;
use crate::tribunal::ProcessType;

/// What the lawyer or operator typed into the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtocolDraft {
    pub process_number: String,
    pub court: String,
    pub system: String,
    pub jurisdiction: Option<Jurisdiction>,
    pub process_type: Option<ProcessType>,
    pub is_fatal: bool,
    pub observations: String,
    pub is_distribution: bool,
}

/// A protocol ready for the protocol service, with how it got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedProtocol {
    pub protocol: Protocol,
    /// `None` when the number could not be classified and the operator's
    /// fields were kept as typed.
    pub tribunal: Option<TribunalInfo>,
    pub decision: RoutingDecision,
}

/// Classify the draft's process number, auto-fill court fields, and route.
///
/// A successful classification overwrites `court`, `system` and
/// `processType`. When classification fails those fields stay as the
/// operator entered them and routing works from them.
pub fn prepare_protocol(draft: ProtocolDraft, config: &RouterConfig) -> PreparedProtocol {
    let tribunal = extract_tribunal_info(&draft.process_number);
    let process_number = match parse_process_number(&draft.process_number) {
        Ok(number) => number.to_string(),
        Err(_) => draft.process_number,
    };

    let mut protocol = Protocol {
        id: None,
        process_number,
        court: draft.court,
        system: draft.system,
        jurisdiction: draft.jurisdiction,
        process_type: draft.process_type,
        is_fatal: draft.is_fatal,
        observations: draft.observations,
        is_distribution: draft.is_distribution,
        assigned_to: None,
        status: ProtocolStatus::Aguardando,
        created_at: None,
    };

    match &tribunal {
        Some(info) => {
            protocol.court = info.name.clone();
            protocol.system = info.system.to_string();
            protocol.process_type = Some(info.process_type);
        }
        None => debug!(
            process_number = %protocol.process_number,
            "cannot auto-classify, keeping entered court fields"
        ),
    }

    let decision = route(&protocol, config);
    protocol.assigned_to = decision.assigned_to().map(str::to_string);
    info!(
        process_number = %protocol.process_number,
        target = decision.target(),
        "protocol prepared"
    );

    PreparedProtocol {
        protocol,
        tribunal,
        decision,
    }
}

/// Send a returned protocol back to the queue, re-routing it from its
/// corrected fields.
pub fn resubmit(
    protocol: &mut Protocol,
    config: &RouterConfig,
) -> Result<RoutingDecision, CoreError> {
    protocol.transition_to(ProtocolStatus::Aguardando)?;
    let decision = route(protocol, config);
    protocol.assigned_to = decision.assigned_to().map(str::to_string);
    Ok(decision)
}

/// Move a stored protocol to `next`. Going back to `Aguardando` is a
/// resubmission and re-routes the protocol; the new decision is returned.
pub fn change_status(
    protocol: &mut Protocol,
    next: ProtocolStatus,
    config: &RouterConfig,
) -> Result<Option<RoutingDecision>, CoreError> {
    let from = protocol.status;
    let decision = if next == ProtocolStatus::Aguardando {
        Some(resubmit(protocol, config)?)
    } else {
        protocol.transition_to(next)?;
        None
    };
    info!(
        process_number = %protocol.process_number,
        from = %from,
        to = %next,
        "status changed"
    );
    Ok(decision)
}

fn route(protocol: &Protocol, config: &RouterConfig) -> RoutingDecision {
    determine_queue_assignment(
        &RoutingForm::from(protocol),
        protocol.is_distribution,
        config,
    )
}
