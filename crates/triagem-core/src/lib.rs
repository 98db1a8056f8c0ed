//! CNJ process-number classification and queue routing for legal protocols.

pub mod classify;
pub mod cnj;
pub mod error;
pub mod groups;
pub mod intake;
pub mod protocol;
pub mod router;
pub mod status;
pub mod systems;
pub mod tribunal;

pub use classify::{TribunalInfo, classify, extract_tribunal_info};
pub use cnj::{ProcessNumber, format_process_number, is_valid_cnj_format, parse_process_number};
pub use error::{CnjError, CoreError};
pub use groups::{SYSTEM_GROUPS, SystemGroup, system_group_for};
pub use intake::{PreparedProtocol, ProtocolDraft, change_status, prepare_protocol};
pub use protocol::{Jurisdiction, Protocol};
pub use router::{
    DEFAULT_FALLBACK_HANDLER, ManualReason, RouterConfig, RoutingDecision, RoutingForm,
    check_robot_eligibility, determine_queue_assignment,
};
pub use status::ProtocolStatus;
pub use systems::TribunalSystem;
pub use tribunal::ProcessType;
