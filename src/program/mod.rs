//! Intervention programs and the weights each one applies.

mod report;
pub mod validation;
pub mod weights;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::score::analyzer::{AttributeGroup, IndicatorId};

/// Closed set of program identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Program {
    Otro,
    Fiesta,
    LapisPriv,
    LapisPub,
    LapisPlus,
    PintaCancha,
    CanchasPm,
    RelCom,
    Backing,
    MenuDia,
    She,
    EcoAdapt,
    SaludDigna,
    PmCamp,
}

impl Program {
    pub const ALL: [Program; 14] = [
        Self::Otro,
        Self::Fiesta,
        Self::LapisPriv,
        Self::LapisPub,
        Self::LapisPlus,
        Self::PintaCancha,
        Self::CanchasPm,
        Self::RelCom,
        Self::Backing,
        Self::MenuDia,
        Self::She,
        Self::EcoAdapt,
        Self::SaludDigna,
        Self::PmCamp,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Otro => "OTRO",
            Self::Fiesta => "FIESTA",
            Self::LapisPriv => "LAPIS_PRIV",
            Self::LapisPub => "LAPIS_PUB",
            Self::LapisPlus => "LAPIS_PLUS",
            Self::PintaCancha => "PINTA_CANCHA",
            Self::CanchasPm => "CANCHAS_PM",
            Self::RelCom => "REL_COM",
            Self::Backing => "BACKING",
            Self::MenuDia => "MENU_DIA",
            Self::She => "SHE",
            Self::EcoAdapt => "ECO_ADAPT",
            Self::SaludDigna => "SALUD_DIGNA",
            Self::PmCamp => "PM_CAMP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Otro => "Otro programa",
            Self::Fiesta => "Programa FIESTA",
            Self::LapisPriv => "LAPIS (espacio privado)",
            Self::LapisPub => "LAPIS (espacio público)",
            Self::LapisPlus => "LAPIS +",
            Self::PintaCancha => "Pinta tu cancha",
            Self::CanchasPm => "Canchas con Placemaking",
            Self::RelCom => "Relacionamiento comunitario",
            Self::Backing => "Backing International Small Restaurants",
            Self::MenuDia => "Menú del día",
            Self::She => "Seguridad / Higiene y Empoderamiento",
            Self::EcoAdapt => "Adaptaciones basadas en ecosistemas",
            Self::SaludDigna => "Salud Digna",
            Self::PmCamp => "Placemaking Camp",
        }
    }

    /// Program for an optional id; unknown or missing ids use the neutral
    /// `OTRO` weighting.
    pub fn resolve(id: Option<&str>) -> Self {
        let Some(id) = id else {
            debug!("no program given, using OTRO");
            return Self::Otro;
        };
        id.parse().unwrap_or_else(|_| {
            debug!(program = id, "unknown program, using OTRO");
            Self::Otro
        })
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown program '{wanted}'"))
    }
}

/// Weights one program applies. Missing indicator entries weigh 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramConfig {
    pub indicator_weights: BTreeMap<AttributeGroup, BTreeMap<IndicatorId, f64>>,
    pub section_weights: BTreeMap<AttributeGroup, f64>,
}

impl ProgramConfig {
    pub fn new(overrides: &[(IndicatorId, f64)], section_weights: BTreeMap<AttributeGroup, f64>) -> Self {
        let mut indicator_weights: BTreeMap<AttributeGroup, BTreeMap<IndicatorId, f64>> =
            BTreeMap::new();
        for (id, weight) in overrides {
            indicator_weights
                .entry(id.group)
                .or_default()
                .insert(*id, *weight);
        }
        Self {
            indicator_weights,
            section_weights,
        }
    }

    /// No overrides and the common section weights.
    pub fn neutral() -> Self {
        Self::new(&[], common_section_weights())
    }

    pub fn overrides(&self) -> impl Iterator<Item = (IndicatorId, f64)> + '_ {
        self.indicator_weights
            .values()
            .flat_map(|group| group.iter().map(|(id, w)| (*id, *w)))
    }
}

pub const COMMON_SECTION_WEIGHT: f64 = 0.25;

pub fn common_section_weights() -> BTreeMap<AttributeGroup, f64> {
    AttributeGroup::ALL
        .into_iter()
        .map(|g| (g, COMMON_SECTION_WEIGHT))
        .collect()
}

const fn ind(group: AttributeGroup, number: u8) -> IndicatorId {
    IndicatorId::new(group, number)
}

const A1_1: IndicatorId = ind(AttributeGroup::Encuentro, 1);
const A1_2: IndicatorId = ind(AttributeGroup::Encuentro, 2);
const A1_5: IndicatorId = ind(AttributeGroup::Encuentro, 5);
const A2_1: IndicatorId = ind(AttributeGroup::Conexiones, 1);
const A2_2: IndicatorId = ind(AttributeGroup::Conexiones, 2);
const A2_3: IndicatorId = ind(AttributeGroup::Conexiones, 3);
const A2_6: IndicatorId = ind(AttributeGroup::Conexiones, 6);
const A3_3: IndicatorId = ind(AttributeGroup::Comodidad, 3);
const A4_4: IndicatorId = ind(AttributeGroup::Usos, 4);
const A4_5: IndicatorId = ind(AttributeGroup::Usos, 5);

const FIESTA: &[(IndicatorId, f64)] = &[(A2_1, 0.7), (A2_3, 0.7), (A2_6, 1.5), (A4_4, 0.3)];

const LAPIS: &[(IndicatorId, f64)] = &[
    (A2_1, 0.7),
    (A2_3, 0.7),
    (A2_6, 1.5),
    (A3_3, 1.5),
    (A4_4, 0.3),
];

const LAPIS_PUB: &[(IndicatorId, f64)] = &[
    (A1_2, 0.0),
    (A1_5, 0.0),
    (A2_1, 0.7),
    (A2_3, 0.7),
    (A2_6, 1.5),
    (A3_3, 1.5),
    (A4_4, 0.3),
];

const CANCHAS: &[(IndicatorId, f64)] = &[
    (A2_1, 0.7),
    (A2_3, 0.7),
    (A2_6, 1.5),
    (A3_3, 0.5),
    (A4_4, 0.3),
];

const REL_COM: &[(IndicatorId, f64)] = &[
    (A2_1, 0.7),
    (A2_2, 1.5),
    (A2_3, 0.7),
    (A2_6, 1.5),
    (A4_4, 0.3),
];

const RESTAURANTS: &[(IndicatorId, f64)] = &[(A2_1, 0.7), (A2_3, 0.7), (A4_4, 2.5), (A4_5, 0.3)];

const SHE: &[(IndicatorId, f64)] = &[
    (A1_1, 0.0),
    (A1_2, 0.0),
    (A1_5, 2.0),
    (A2_1, 0.7),
    (A2_2, 1.5),
    (A2_3, 0.7),
    (A3_3, 0.5),
    (A4_4, 0.3),
];

const ACCESS_LIGHT: &[(IndicatorId, f64)] = &[(A2_1, 0.7), (A2_3, 0.7), (A4_4, 0.3)];

/// Built-in configuration. The match is exhaustive so a new program
/// cannot ship without one.
pub fn builtin_config(program: Program) -> ProgramConfig {
    let overrides: &[(IndicatorId, f64)] = match program {
        Program::Otro | Program::PmCamp => &[],
        Program::Fiesta => FIESTA,
        Program::LapisPriv | Program::LapisPlus => LAPIS,
        Program::LapisPub => LAPIS_PUB,
        Program::PintaCancha | Program::CanchasPm => CANCHAS,
        Program::RelCom => REL_COM,
        Program::Backing | Program::MenuDia => RESTAURANTS,
        Program::She => SHE,
        Program::EcoAdapt | Program::SaludDigna => ACCESS_LIGHT,
    };
    ProgramConfig::new(overrides, common_section_weights())
}

/// Program id to configuration, fully populated on construction and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    configs: BTreeMap<Program, ProgramConfig>,
    neutral: ProgramConfig,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            configs: Program::ALL
                .into_iter()
                .map(|p| (p, builtin_config(p)))
                .collect(),
            neutral: ProgramConfig::neutral(),
        }
    }

    pub fn config(&self, program: Program) -> &ProgramConfig {
        self.configs.get(&program).unwrap_or(&self.neutral)
    }

    /// Replace one program's configuration.
    #[cfg(test)]
    pub fn with_override(mut self, program: Program, config: ProgramConfig) -> Self {
        self.configs.insert(program, config);
        self
    }

    /// Built-in catalog with the overrides of a TOML document applied.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(CatalogFile::parse(input)?.apply(Self::builtin()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_toml_str(&input)?;
        debug!(path = %path.display(), "loaded program catalog");
        Ok(catalog)
    }

    /// Built-in catalog, or the one at `path` when given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }
}

/// On-disk catalog overrides.
///
/// ```toml
/// [common_section_weights]
/// Encuentro = 0.4
///
/// [programs.FIESTA.indicator_weights.A2]
/// "A2.1" = 0.7
///
/// [programs.FIESTA.section_weights]
/// Usos = 0.5
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub common_section_weights: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub programs: BTreeMap<String, ProgramFile>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProgramFile {
    #[serde(default)]
    pub indicator_weights: Option<BTreeMap<String, BTreeMap<String, f64>>>,
    #[serde(default)]
    pub section_weights: Option<BTreeMap<String, f64>>,
}

/// `base` with the sections named in `weights` replaced.
fn section_map(
    base: &BTreeMap<AttributeGroup, f64>,
    weights: &BTreeMap<String, f64>,
) -> BTreeMap<AttributeGroup, f64> {
    let mut sections = base.clone();
    for (name, weight) in weights {
        if let Some(group) = AttributeGroup::from_section(name) {
            sections.insert(group, *weight);
        }
    }
    sections
}

impl CatalogFile {
    /// Parse and validate, reporting every problem at once.
    pub fn parse(input: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(input)?;
        validation::validate_catalog(&file).map_err(Error::InvalidCatalog)?;
        Ok(file)
    }

    /// Number of programs the file configures.
    pub fn overridden(&self) -> usize {
        self.programs.len()
    }

    /// Apply a validated file on top of `catalog`.
    fn apply(&self, mut catalog: Catalog) -> Catalog {
        let builtin_common = common_section_weights();
        let common = self
            .common_section_weights
            .as_ref()
            .map(|weights| section_map(&builtin_common, weights));
        let base = common.clone().unwrap_or(builtin_common);
        let Catalog { configs, neutral } = &mut catalog;
        if common.is_some() {
            neutral.section_weights = base.clone();
        }

        for program in Program::ALL {
            let Some(config) = configs.get_mut(&program) else {
                continue;
            };
            let file = self.programs.iter().find_map(|(id, file)| {
                (id.parse::<Program>().ok() == Some(program)).then_some(file)
            });

            match file.and_then(|f| f.section_weights.as_ref()) {
                Some(sections) => config.section_weights = section_map(&base, sections),
                None => {
                    if let Some(common) = &common {
                        config.section_weights = common.clone();
                    }
                }
            }

            if let Some(groups) = file.and_then(|f| f.indicator_weights.as_ref()) {
                let overrides: Vec<(IndicatorId, f64)> = groups
                    .values()
                    .flat_map(|weights| weights.iter())
                    .filter_map(|(id, w)| id.parse::<IndicatorId>().ok().map(|id| (id, *w)))
                    .collect();
                let sections = config.section_weights.clone();
                *config = ProgramConfig::new(&overrides, sections);
            }
        }
        catalog
    }
}

/// Parse and validate a catalog file without applying it.
pub fn check_catalog(path: &Path) -> Result<CatalogFile> {
    let input = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    CatalogFile::parse(&input)
}

/// `programs` command: list the catalog as a table or JSON.
pub fn run_list(catalog_path: Option<&Path>, json: bool) -> Result<()> {
    let catalog = Catalog::load_or_builtin(catalog_path)?;
    if json {
        report::print_json(&catalog)
    } else {
        report::print_programs(&catalog);
        Ok(())
    }
}

/// `check-catalog` command.
pub fn run_check(path: &Path) -> Result<()> {
    let file = check_catalog(path)?;
    println!("catalog OK ({} programs overridden)", file.overridden());
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
