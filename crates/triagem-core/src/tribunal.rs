//! Static court table: justice branch (`J`) → court code (`TR`) → court.
//!
//! The table is compile-time data and is never mutated. Each row carries the
//! court's display name, the filing system it uses by default and the kind
//! of case it hears. State courts (branch `8`) may run more than one system;
//! [`classify`](crate::classify) refines the default for those courts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::systems::TribunalSystem;
use crate::systems::TribunalSystem::{Eproc, Esaj, Estf, Estj, Pje, Projudi, TjrjEletronico};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessType {
    Civel,
    Trabalhista,
}

impl ProcessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Civel => "civel",
            Self::Trabalhista => "trabalhista",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One court in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub system: TribunalSystem,
    pub process_type: ProcessType,
}

/// A justice branch and the courts under it.
#[derive(Debug)]
pub struct Branch {
    pub code: &'static str,
    pub name: &'static str,
    pub courts: &'static [CourtEntry],
}

const fn civel(code: &'static str, name: &'static str, system: TribunalSystem) -> CourtEntry {
    CourtEntry {
        code,
        name,
        system,
        process_type: ProcessType::Civel,
    }
}

const fn trabalhista(
    code: &'static str,
    name: &'static str,
    system: TribunalSystem,
) -> CourtEntry {
    CourtEntry {
        code,
        name,
        system,
        process_type: ProcessType::Trabalhista,
    }
}

// Courts named by the robot-eligibility rules.
pub const TJMG: &str = "Tribunal de Justiça de Minas Gerais";
pub const TJPR: &str = "Tribunal de Justiça do Paraná";
pub const TJRS: &str = "Tribunal de Justiça do Rio Grande do Sul";
pub const TJSC: &str = "Tribunal de Justiça de Santa Catarina";
pub const TJSP: &str = "Tribunal de Justiça de São Paulo";

pub static BRANCHES: &[Branch] = &[
    Branch {
        code: "1",
        name: "Tribunais Superiores",
        courts: SUPERIORES,
    },
    Branch {
        code: "2",
        name: "Justiça Militar",
        courts: MILITAR,
    },
    Branch {
        code: "3",
        name: "Justiça Eleitoral",
        courts: ELEITORAL,
    },
    Branch {
        code: "4",
        name: "Justiça Federal",
        courts: FEDERAL,
    },
    Branch {
        code: "5",
        name: "Justiça do Trabalho",
        courts: TRABALHO,
    },
    Branch {
        code: "8",
        name: "Justiça Estadual",
        courts: ESTADUAL,
    },
];

const SUPERIORES: &[CourtEntry] = &[
    civel("00", "Supremo Tribunal Federal", Estf),
    civel("01", "Superior Tribunal de Justiça", Estj),
    trabalhista("02", "Tribunal Superior do Trabalho", Pje),
];

const MILITAR: &[CourtEntry] = &[
    civel("00", "Superior Tribunal Militar", Eproc),
    civel("13", "Tribunal de Justiça Militar de Minas Gerais", Pje),
    civel("21", "Tribunal de Justiça Militar do Rio Grande do Sul", Eproc),
    civel("26", "Tribunal de Justiça Militar de São Paulo", Eproc),
];

const ELEITORAL: &[CourtEntry] = &[
    civel("01", "Tribunal Regional Eleitoral do Acre", Pje),
    civel("02", "Tribunal Regional Eleitoral de Alagoas", Pje),
    civel("03", "Tribunal Regional Eleitoral do Amapá", Pje),
    civel("04", "Tribunal Regional Eleitoral do Amazonas", Pje),
    civel("05", "Tribunal Regional Eleitoral da Bahia", Pje),
    civel("06", "Tribunal Regional Eleitoral do Ceará", Pje),
    civel("07", "Tribunal Regional Eleitoral do Distrito Federal", Pje),
    civel("08", "Tribunal Regional Eleitoral do Espírito Santo", Pje),
    civel("09", "Tribunal Regional Eleitoral de Goiás", Pje),
    civel("10", "Tribunal Regional Eleitoral do Maranhão", Pje),
    civel("11", "Tribunal Regional Eleitoral de Mato Grosso", Pje),
    civel("12", "Tribunal Regional Eleitoral de Mato Grosso do Sul", Pje),
    civel("13", "Tribunal Regional Eleitoral de Minas Gerais", Pje),
    civel("14", "Tribunal Regional Eleitoral do Pará", Pje),
    civel("15", "Tribunal Regional Eleitoral da Paraíba", Pje),
    civel("16", "Tribunal Regional Eleitoral do Paraná", Pje),
    civel("17", "Tribunal Regional Eleitoral de Pernambuco", Pje),
    civel("18", "Tribunal Regional Eleitoral do Piauí", Pje),
    civel("19", "Tribunal Regional Eleitoral do Rio de Janeiro", Pje),
    civel("20", "Tribunal Regional Eleitoral do Rio Grande do Norte", Pje),
    civel("21", "Tribunal Regional Eleitoral do Rio Grande do Sul", Pje),
    civel("22", "Tribunal Regional Eleitoral de Rondônia", Pje),
    civel("23", "Tribunal Regional Eleitoral de Roraima", Pje),
    civel("24", "Tribunal Regional Eleitoral de Santa Catarina", Pje),
    civel("25", "Tribunal Regional Eleitoral de Sergipe", Pje),
    civel("26", "Tribunal Regional Eleitoral de São Paulo", Pje),
    civel("27", "Tribunal Regional Eleitoral do Tocantins", Pje),
];

const FEDERAL: &[CourtEntry] = &[
    civel("01", "Tribunal Regional Federal da 1ª Região", Pje),
    civel("02", "Tribunal Regional Federal da 2ª Região", Eproc),
    civel("03", "Tribunal Regional Federal da 3ª Região", Pje),
    civel("04", "Tribunal Regional Federal da 4ª Região", Eproc),
    civel("05", "Tribunal Regional Federal da 5ª Região", Pje),
    civel("06", "Tribunal Regional Federal da 6ª Região", Eproc),
];

const TRABALHO: &[CourtEntry] = &[
    trabalhista("01", "Tribunal Regional do Trabalho da 1ª Região", Pje),
    trabalhista("02", "Tribunal Regional do Trabalho da 2ª Região", Pje),
    trabalhista("03", "Tribunal Regional do Trabalho da 3ª Região", Pje),
    trabalhista("04", "Tribunal Regional do Trabalho da 4ª Região", Pje),
    trabalhista("05", "Tribunal Regional do Trabalho da 5ª Região", Pje),
    trabalhista("06", "Tribunal Regional do Trabalho da 6ª Região", Pje),
    trabalhista("07", "Tribunal Regional do Trabalho da 7ª Região", Pje),
    trabalhista("08", "Tribunal Regional do Trabalho da 8ª Região", Pje),
    trabalhista("09", "Tribunal Regional do Trabalho da 9ª Região", Pje),
    trabalhista("10", "Tribunal Regional do Trabalho da 10ª Região", Pje),
    trabalhista("11", "Tribunal Regional do Trabalho da 11ª Região", Pje),
    trabalhista("12", "Tribunal Regional do Trabalho da 12ª Região", Pje),
    trabalhista("13", "Tribunal Regional do Trabalho da 13ª Região", Pje),
    trabalhista("14", "Tribunal Regional do Trabalho da 14ª Região", Pje),
    trabalhista("15", "Tribunal Regional do Trabalho da 15ª Região", Pje),
    trabalhista("16", "Tribunal Regional do Trabalho da 16ª Região", Pje),
    trabalhista("17", "Tribunal Regional do Trabalho da 17ª Região", Pje),
    trabalhista("18", "Tribunal Regional do Trabalho da 18ª Região", Pje),
    trabalhista("19", "Tribunal Regional do Trabalho da 19ª Região", Pje),
    trabalhista("20", "Tribunal Regional do Trabalho da 20ª Região", Pje),
    trabalhista("21", "Tribunal Regional do Trabalho da 21ª Região", Pje),
    trabalhista("22", "Tribunal Regional do Trabalho da 22ª Região", Pje),
    trabalhista("23", "Tribunal Regional do Trabalho da 23ª Região", Pje),
    trabalhista("24", "Tribunal Regional do Trabalho da 24ª Região", Pje),
];

const ESTADUAL: &[CourtEntry] = &[
    civel("01", "Tribunal de Justiça do Acre", Esaj),
    civel("02", "Tribunal de Justiça de Alagoas", Esaj),
    civel("03", "Tribunal de Justiça do Amapá", Pje),
    civel("04", "Tribunal de Justiça do Amazonas", Esaj),
    civel("05", "Tribunal de Justiça da Bahia", Pje),
    civel("06", "Tribunal de Justiça do Ceará", Esaj),
    civel("07", "Tribunal de Justiça do Distrito Federal e dos Territórios", Pje),
    civel("08", "Tribunal de Justiça do Espírito Santo", Pje),
    civel("09", "Tribunal de Justiça de Goiás", Projudi),
    civel("10", "Tribunal de Justiça do Maranhão", Pje),
    civel("11", "Tribunal de Justiça de Mato Grosso", Pje),
    civel("12", "Tribunal de Justiça de Mato Grosso do Sul", Esaj),
    civel("13", TJMG, Pje),
    civel("14", "Tribunal de Justiça do Pará", Pje),
    civel("15", "Tribunal de Justiça da Paraíba", Pje),
    civel("16", TJPR, Projudi),
    civel("17", "Tribunal de Justiça de Pernambuco", Pje),
    civel("18", "Tribunal de Justiça do Piauí", Pje),
    civel("19", "Tribunal de Justiça do Rio de Janeiro", TjrjEletronico),
    civel("20", "Tribunal de Justiça do Rio Grande do Norte", Pje),
    civel("21", TJRS, Eproc),
    civel("22", "Tribunal de Justiça de Rondônia", Pje),
    civel("23", "Tribunal de Justiça de Roraima", Projudi),
    civel("24", TJSC, Eproc),
    civel("25", "Tribunal de Justiça de Sergipe", Pje),
    civel("26", TJSP, Esaj),
    civel("27", "Tribunal de Justiça do Tocantins", Eproc),
];

/// Find a branch by its `J` digit.
pub fn branch(code: &str) -> Option<&'static Branch> {
    BRANCHES.iter().find(|b| b.code == code)
}

/// Look up a court by justice branch and court code.
pub fn lookup(branch_code: &str, court_code: &str) -> Option<&'static CourtEntry> {
    branch(branch_code)?
        .courts
        .iter()
        .find(|c| c.code == court_code)
}

/// Every row of the table with its branch, in table order.
pub fn entries() -> impl Iterator<Item = (&'static Branch, &'static CourtEntry)> {
    BRANCHES
        .iter()
        .flat_map(|b| b.courts.iter().map(move |c| (b, c)))
}

/// Court names for the court dropdown, deduplicated, in table order.
pub fn court_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for (_, court) in entries() {
        if !names.contains(&court.name) {
            names.push(court.name);
        }
    }
    names
}
