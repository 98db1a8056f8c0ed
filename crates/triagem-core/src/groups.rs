//! System groups: the one description of which system/court pairs the robot
//! can file in.
//!
//! The queue filter shows these groups and the router's eligibility check is
//! defined in terms of them, so the two cannot drift apart. Groups are
//! disjoint: a pair belongs to at most one group.

use crate::protocol::Protocol;
use crate::systems::TribunalSystem;
use crate::tribunal::{TJMG, TJPR, TJRS, TJSC, TJSP};

/// Which courts a rule covers.
#[derive(Debug, Clone, Copy)]
pub enum CourtMatcher {
    Only(&'static [&'static str]),
    AnyExcept(&'static [&'static str]),
}

impl CourtMatcher {
    pub fn matches(&self, court: &str) -> bool {
        let court = court.trim();
        match self {
            Self::Only(courts) => courts.iter().any(|c| *c == court),
            Self::AnyExcept(courts) => !courts.iter().any(|c| *c == court),
        }
    }
}

/// A set of systems used in a set of courts.
#[derive(Debug, Clone, Copy)]
pub struct GroupRule {
    pub systems: &'static [TribunalSystem],
    pub courts: CourtMatcher,
}

#[derive(Debug)]
pub struct SystemGroup {
    pub name: &'static str,
    pub robot_eligible: bool,
    pub rules: &'static [GroupRule],
}

pub static SYSTEM_GROUPS: &[SystemGroup] = &[
    SystemGroup {
        name: "PJe Diversos",
        robot_eligible: true,
        rules: &[GroupRule {
            systems: &[TribunalSystem::Pje],
            courts: CourtMatcher::AnyExcept(&[TJMG]),
        }],
    },
    SystemGroup {
        name: "eProc RS/SC e Projudi PR",
        robot_eligible: true,
        rules: &[
            GroupRule {
                systems: &[TribunalSystem::Eproc],
                courts: CourtMatcher::Only(&[TJRS, TJSC]),
            },
            GroupRule {
                systems: &[TribunalSystem::Projudi],
                courts: CourtMatcher::Only(&[TJPR]),
            },
        ],
    },
    SystemGroup {
        name: "ESAJ SP",
        robot_eligible: true,
        rules: &[GroupRule {
            systems: &[TribunalSystem::Esaj],
            courts: CourtMatcher::Only(&[TJSP]),
        }],
    },
    // MG's PJe is handled by people.
    SystemGroup {
        name: "PJe MG",
        robot_eligible: false,
        rules: &[GroupRule {
            systems: &[TribunalSystem::Pje],
            courts: CourtMatcher::Only(&[TJMG]),
        }],
    },
];

impl SystemGroup {
    /// Look a group up by its display name.
    pub fn find(name: &str) -> Option<&'static SystemGroup> {
        SYSTEM_GROUPS.iter().find(|g| g.name == name.trim())
    }

    /// Whether the pair belongs to this group. Unknown systems belong nowhere.
    pub fn matches(&self, system: &str, court: &str) -> bool {
        let Ok(system) = system.parse::<TribunalSystem>() else {
            return false;
        };
        self.rules
            .iter()
            .any(|rule| rule.systems.contains(&system) && rule.courts.matches(court))
    }

    pub fn contains(&self, protocol: &Protocol) -> bool {
        self.matches(&protocol.system, &protocol.court)
    }
}

/// The group a system/court pair is filed under, if any.
pub fn system_group_for(system: &str, court: &str) -> Option<&'static SystemGroup> {
    SYSTEM_GROUPS.iter().find(|g| g.matches(system, court))
}

/// Protocols that belong to `group`, in input order.
pub fn protocols_in_group<'a>(
    protocols: &'a [Protocol],
    group: &'a SystemGroup,
) -> impl Iterator<Item = &'a Protocol> + 'a {
    protocols.iter().filter(move |p| group.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tribunal::entries;

    #[test]
    fn four_groups() {
        let names: Vec<&str> = SYSTEM_GROUPS.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            ["PJe Diversos", "eProc RS/SC e Projudi PR", "ESAJ SP", "PJe MG"]
        );
    }

    #[test]
    fn groups_are_disjoint() {
        for (_, court) in entries() {
            for system in TribunalSystem::ALL {
                let hits = SYSTEM_GROUPS
                    .iter()
                    .filter(|g| g.matches(system.as_str(), court.name))
                    .count();
                assert!(hits <= 1, "{system} / {} in {hits} groups", court.name);
            }
        }
    }

    #[test]
    fn pje_mg_is_its_own_group() {
        let g = system_group_for("PJe", TJMG).unwrap();
        assert_eq!(g.name, "PJe MG");
        assert!(!g.robot_eligible);
    }

    #[test]
    fn pje_elsewhere_is_diversos() {
        let g = system_group_for("PJe", "Tribunal de Justiça da Bahia").unwrap();
        assert_eq!(g.name, "PJe Diversos");
        let g = system_group_for("PJe", "Tribunal Regional do Trabalho da 2ª Região").unwrap();
        assert_eq!(g.name, "PJe Diversos");
    }

    #[test]
    fn eproc_outside_rs_sc_has_no_group() {
        assert!(system_group_for("eProc", TJMG).is_none());
        assert!(system_group_for("eProc", "Tribunal Regional Federal da 4ª Região").is_none());
        assert!(system_group_for("eProc SP", TJSP).is_none());
        assert_eq!(
            system_group_for("eProc", TJSC).map(|g| g.name),
            Some("eProc RS/SC e Projudi PR")
        );
        assert_eq!(
            system_group_for("Projudi", TJPR).map(|g| g.name),
            Some("eProc RS/SC e Projudi PR")
        );
    }

    #[test]
    fn unknown_system_has_no_group() {
        assert!(system_group_for("SAJ", TJSP).is_none());
        assert!(system_group_for("", "").is_none());
    }

    #[test]
    fn court_names_are_trimmed() {
        let esaj = SystemGroup::find("ESAJ SP").unwrap();
        assert!(esaj.matches("ESAJ", " Tribunal de Justiça de São Paulo "));
    }

    #[test]
    fn find_by_name() {
        assert!(SystemGroup::find("PJe MG").is_some());
        assert!(SystemGroup::find("PJe RJ").is_none());
    }

    #[test]
    fn filter_protocols() {
        let protocols = vec![
            Protocol {
                system: "ESAJ".into(),
                court: TJSP.into(),
                ..Default::default()
            },
            Protocol {
                system: "PJe".into(),
                court: TJMG.into(),
                ..Default::default()
            },
            Protocol {
                system: "ESAJ".into(),
                court: "Tribunal de Justiça do Acre".into(),
                ..Default::default()
            },
        ];
        let esaj = SystemGroup::find("ESAJ SP").unwrap();
        let hits: Vec<_> = protocols_in_group(&protocols, esaj).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].court, TJSP);
    }
}
