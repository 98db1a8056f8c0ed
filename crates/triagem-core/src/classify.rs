//! Court classification from a CNJ process number.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cnj::{ProcessNumber, parse_process_number};
use crate::error::CnjError;
use crate::systems::TribunalSystem;
use crate::tribunal::{self, ProcessType};

/// Court identity derived from a process number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TribunalInfo {
    pub name: String,
    pub system: TribunalSystem,
    pub process_type: ProcessType,
}

/// Classify `input`, telling a malformed number apart from an unknown court.
pub fn classify(input: &str) -> Result<TribunalInfo, CnjError> {
    let number = parse_process_number(input)?;
    classify_number(&number)
}

/// Classify an already-validated process number.
pub fn classify_number(number: &ProcessNumber) -> Result<TribunalInfo, CnjError> {
    let branch = number.justice_branch();
    let court = number.court_code();
    let entry = tribunal::lookup(branch, court).ok_or_else(|| CnjError::UnknownCourt {
        branch: branch.to_string(),
        court: court.to_string(),
    })?;

    let system = if branch == "8" {
        state_court_system(number, entry.system)
    } else {
        entry.system
    };

    debug!(
        process_number = %number,
        court = entry.name,
        base_system = %entry.system,
        system = %system,
        "classified process number"
    );

    Ok(TribunalInfo {
        name: entry.name.to_string(),
        system,
        process_type: entry.process_type,
    })
}

/// Auto-fill contract: `None` whenever the number cannot be classified,
/// whether it is malformed or names a court outside the table.
pub fn extract_tribunal_info(input: &str) -> Option<TribunalInfo> {
    classify(input).ok()
}

/// Refine the table's default system for state courts that run several.
///
/// The rules look at the leading digits of the sequential number, the filing
/// year and the origin unit. Courts without a rule keep `base`.
fn state_court_system(number: &ProcessNumber, base: TribunalSystem) -> TribunalSystem {
    use TribunalSystem::*;

    let seq = number.sequential();
    match number.court_code() {
        // Amazonas
        "04" => {
            if number.origin_code() == "1000" {
                Projudi
            } else {
                Esaj
            }
        }
        // Bahia
        "05" => {
            if seq.starts_with('8') {
                Pje
            } else {
                Projudi
            }
        }
        // Ceará
        "06" => {
            if seq.starts_with('3') {
                Pje
            } else {
                Esaj
            }
        }
        // Minas Gerais
        "13" => {
            if seq.starts_with(['5', '6']) {
                Pje
            } else if seq.starts_with('1') && number.year() == "2025" {
                Eproc
            } else {
                Pje
            }
        }
        // Rio de Janeiro
        "19" => {
            let two = &seq[..2];
            let three = &seq[..3];
            if matches!(two, "08" | "09") || matches!(three, "008" | "009") {
                Pje
            } else {
                TjrjEletronico
            }
        }
        // São Paulo
        "26" => {
            if seq.starts_with('4') {
                EprocSp
            } else {
                Esaj
            }
        }
        _ => base,
    }
}
