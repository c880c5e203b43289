use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::program::Program;

/// The four top-level evaluation dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AttributeGroup {
    #[serde(rename = "A1")]
    Encuentro,
    #[serde(rename = "A2")]
    Conexiones,
    #[serde(rename = "A3")]
    Comodidad,
    #[serde(rename = "A4")]
    Usos,
}

const ENCUENTRO_LABELS: [&str; 5] = [
    "Diversidad demográfica",
    "Redes ciudadanas",
    "Voluntariado",
    "Cuidado del lugar",
    "Uso nocturno",
];

const CONEXIONES_LABELS: [&str; 6] = [
    "Modos de transporte",
    "Conectividad con el lugar",
    "Permanencia",
    "Accesibilidad del entorno",
    "Accesibilidad dentro del lugar (movilidad reducida)",
    "Accesibilidad dentro del lugar (primera infancia y cuidadores)",
];

const COMODIDAD_LABELS: [&str; 7] = [
    "Seguridad y limpieza",
    "Cuidado de la imagen",
    "Comodidad",
    "Caminabilidad",
    "Lugares para sentarse",
    "Resiliencia climática y áreas verdes",
    "Ser agradable",
];

const USOS_LABELS: [&str; 6] = [
    "Dinamismo",
    "Referente",
    "Utilidad",
    "Actividad económica",
    "Diversidad de actividades",
    "Localidad",
];

impl AttributeGroup {
    pub const ALL: [AttributeGroup; 4] = [
        Self::Encuentro,
        Self::Conexiones,
        Self::Comodidad,
        Self::Usos,
    ];

    /// Composite-key prefix, e.g. `A2`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Encuentro => "A1",
            Self::Conexiones => "A2",
            Self::Comodidad => "A3",
            Self::Usos => "A4",
        }
    }

    /// Section name used for section weights.
    pub fn section(self) -> &'static str {
        match self {
            Self::Encuentro => "Encuentro",
            Self::Conexiones => "Conexiones",
            Self::Comodidad => "Comodidad",
            Self::Usos => "Usos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Encuentro => "Encuentro",
            Self::Conexiones => "Conexiones y Accesos",
            Self::Comodidad => "Comodidad e Imagen",
            Self::Usos => "Usos y Actividades",
        }
    }

    fn indicator_labels(self) -> &'static [&'static str] {
        match self {
            Self::Encuentro => &ENCUENTRO_LABELS,
            Self::Conexiones => &CONEXIONES_LABELS,
            Self::Comodidad => &COMODIDAD_LABELS,
            Self::Usos => &USOS_LABELS,
        }
    }

    pub fn indicator_count(self) -> u8 {
        // The label tables have at most 7 entries.
        self.indicator_labels().len() as u8
    }

    /// Every indicator id of this group, in order.
    pub fn indicators(self) -> impl Iterator<Item = IndicatorId> {
        (1..=self.indicator_count()).map(move |number| IndicatorId::new(self, number))
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }

    pub fn from_section(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.section() == name)
    }
}

impl fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Composite indicator key `<group>.<n>`, e.g. `A2.3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorId {
    pub group: AttributeGroup,
    pub number: u8,
}

impl IndicatorId {
    pub const fn new(group: AttributeGroup, number: u8) -> Self {
        Self { group, number }
    }

    pub fn label(self) -> &'static str {
        usize::from(self.number)
            .checked_sub(1)
            .and_then(|i| self.group.indicator_labels().get(i))
            .copied()
            .unwrap_or("")
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group.id(), self.number)
    }
}

impl FromStr for IndicatorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (group, number) = s
            .split_once('.')
            .ok_or_else(|| format!("'{s}' is not an indicator id (expected e.g. A2.3)"))?;
        let group = AttributeGroup::from_id(group)
            .ok_or_else(|| format!("'{s}': unknown attribute '{group}'"))?;
        let number: u8 = number
            .parse()
            .map_err(|_| format!("'{s}': '{number}' is not an indicator number"))?;
        if number == 0 || number > group.indicator_count() {
            return Err(format!(
                "'{s}': {group} has indicators 1..={}",
                group.indicator_count()
            ));
        }
        Ok(Self::new(group, number))
    }
}

impl Serialize for IndicatorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One computed indicator; `None` means absent, never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorScore {
    pub id: IndicatorId,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntangibleScore {
    pub name: &'static str,
    pub score: f64,
}

/// Performance band of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceLevel {
    #[serde(rename = "excelente")]
    Excellent,
    #[serde(rename = "bueno")]
    Good,
    #[serde(rename = "en desarrollo")]
    Developing,
    #[serde(rename = "crítico")]
    Critical,
}

impl PerformanceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excelente",
            Self::Good => "bueno",
            Self::Developing => "en desarrollo",
            Self::Critical => "crítico",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn score_to_level(score: f64) -> PerformanceLevel {
    if score >= 85.0 {
        PerformanceLevel::Excellent
    } else if score >= 65.0 {
        PerformanceLevel::Good
    } else if score >= 40.0 {
        PerformanceLevel::Developing
    } else {
        PerformanceLevel::Critical
    }
}

/// Everything computed for one attribute group.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeScore {
    pub group: AttributeGroup,
    pub indicators: Vec<IndicatorScore>,
    pub intangibles: Vec<IntangibleScore>,
    pub total: f64,
    pub level: PerformanceLevel,
}

/// Full result tree of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub program: Program,
    pub attributes: Vec<AttributeScore>,
    pub global_score: f64,
    pub level: PerformanceLevel,
}

impl ScoreReport {
    pub fn attribute(&self, group: AttributeGroup) -> Option<&AttributeScore> {
        self.attributes.iter().find(|a| a.group == group)
    }

    /// Score of one indicator; `None` when absent.
    pub fn indicator(&self, id: IndicatorId) -> Option<f64> {
        self.attribute(id.group)?
            .indicators
            .iter()
            .find(|i| i.id == id)
            .and_then(|i| i.score)
    }

    pub fn total(&self, group: AttributeGroup) -> Option<f64> {
        self.attribute(group).map(|a| a.total)
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
