//! Vertical card rendering for classification and routing results.

use std::fmt::Write;

use triagem_core::groups::{CourtMatcher, SYSTEM_GROUPS};
use triagem_core::tribunal::{BRANCHES, Branch};
use triagem_core::{CnjError, ProcessNumber, RoutingDecision, RoutingForm, TribunalInfo};

const LABEL_WIDTH: usize = 22;

// ── Classification ──

/// Card for `triagem classify`.
pub fn classification_card(
    input: &str,
    number: Option<&ProcessNumber>,
    result: &Result<TribunalInfo, CnjError>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", input.trim());
    let _ = writeln!(out);

    if let Some(n) = number {
        section(&mut out, "Process Number");
        row(&mut out, "canonical", n.as_str());
        row(&mut out, "sequential", n.sequential());
        row(&mut out, "year", n.year());
        row(&mut out, "justice_branch", n.justice_branch());
        row(&mut out, "court_code", n.court_code());
        row(&mut out, "origin_code", n.origin_code());
        let check = if n.check_digits_valid() {
            format!("{} (ok)", n.check_digits())
        } else {
            format!("{} (expected {:02})", n.check_digits(), n.expected_check_digits())
        };
        row(&mut out, "check_digits", &check);
        let _ = writeln!(out);
    }

    section(&mut out, "Classification");
    match result {
        Ok(info) => {
            row(&mut out, "court", &info.name);
            row(&mut out, "system", info.system.as_str());
            row(&mut out, "process_type", info.process_type.as_str());
        }
        Err(err) => {
            row(&mut out, "result", "cannot auto-classify; enter court fields manually");
            row(&mut out, "reason", &err.to_string());
        }
    }
    out
}

// ── Routing ──

/// Card for `triagem route`.
pub fn decision_card(form: &RoutingForm<'_>, decision: &RoutingDecision) -> String {
    let mut out = String::new();
    section(&mut out, "Form");
    row(&mut out, "system", form.system);
    row(&mut out, "court", form.court);
    row(
        &mut out,
        "jurisdiction",
        form.jurisdiction.map(|j| j.as_str()).unwrap_or("-"),
    );
    row(
        &mut out,
        "observations",
        if form.observations.trim().is_empty() { "-" } else { form.observations.trim() },
    );
    let _ = writeln!(out);

    section(&mut out, "Queue");
    match decision {
        RoutingDecision::Robot => row(&mut out, "target", "robot"),
        RoutingDecision::Manual { handler, reason } => {
            row(&mut out, "target", handler);
            row(&mut out, "reason", reason.description());
        }
    }
    out
}

// ── Reference tables ──

/// Listing for `triagem groups`.
pub fn groups_listing() -> String {
    let mut out = String::new();
    for group in SYSTEM_GROUPS {
        let eligibility = if group.robot_eligible { "robot" } else { "manual" };
        let _ = writeln!(out, "{} [{}]", group.name, eligibility);
        for rule in group.rules {
            let systems: Vec<&str> = rule.systems.iter().map(|s| s.as_str()).collect();
            let courts = match rule.courts {
                CourtMatcher::Only(courts) => courts.join(", "),
                CourtMatcher::AnyExcept(courts) => format!("all except {}", courts.join(", ")),
            };
            let _ = writeln!(out, "  {:<LABEL_WIDTH$} {}", systems.join(", "), courts);
        }
        let _ = writeln!(out);
    }
    out
}

/// Listing for `triagem courts`, optionally restricted to one branch.
pub fn courts_listing(branch: Option<&str>) -> String {
    let mut out = String::new();
    let branches: Vec<&Branch> = BRANCHES
        .iter()
        .filter(|b| branch.is_none_or(|code| b.code == code))
        .collect();

    for b in branches {
        let _ = writeln!(out, "{} {}", b.code, b.name);
        for c in b.courts {
            let _ = writeln!(
                out,
                "  {}.{}  {:<16} {:<12} {}",
                b.code,
                c.code,
                c.system.as_str(),
                c.process_type.as_str(),
                c.name
            );
        }
        let _ = writeln!(out);
    }
    out
}

fn section(out: &mut String, header: &str) {
    let _ = writeln!(out, "{header}");
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$} {value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use triagem_core::{
        ManualReason, RouterConfig, classify, determine_queue_assignment, parse_process_number,
    };

    #[test]
    fn classified_card() {
        let input = "0001234-71.2024.8.26.0100";
        let number = parse_process_number(input).ok();
        let card = classification_card(input, number.as_ref(), &classify(input));
        assert!(card.contains("Tribunal de Justiça de São Paulo"));
        assert!(card.contains("ESAJ"));
        assert!(card.contains("71 (ok)"));
    }

    #[test]
    fn card_reports_expected_check_digits() {
        let input = "0001234-56.2024.8.26.0100";
        let number = parse_process_number(input).ok();
        let card = classification_card(input, number.as_ref(), &classify(input));
        assert!(card.contains("56 (expected 71)"));
    }

    #[test]
    fn unclassified_card() {
        let card = classification_card("abc", None, &classify("abc"));
        assert!(card.contains("cannot auto-classify"));
        assert!(!card.contains("Process Number"));
    }

    #[test]
    fn manual_decision_card() {
        let form = RoutingForm {
            system: "PJe",
            court: "Tribunal de Justiça de Minas Gerais",
            ..Default::default()
        };
        let decision = determine_queue_assignment(&form, false, &RouterConfig::default());
        let card = decision_card(&form, &decision);
        assert!(card.contains("Carlos"));
        assert!(card.contains(ManualReason::RobotIneligible.description()));
    }

    #[test]
    fn groups_listing_names_every_group() {
        let listing = groups_listing();
        for g in SYSTEM_GROUPS {
            assert!(listing.contains(g.name));
        }
        assert!(listing.contains("all except Tribunal de Justiça de Minas Gerais"));
    }

    #[test]
    fn courts_listing_filters_branch() {
        let labour = courts_listing(Some("5"));
        assert!(labour.contains("Justiça do Trabalho"));
        assert!(!labour.contains("Justiça Estadual"));
        assert!(courts_listing(None).contains("Justiça Estadual"));
        assert!(courts_listing(Some("7")).is_empty());
    }
}
