//! Intangibles: qualitative composites of a group's indicators.
//!
//! Absent indicators count as 0 here, unlike attribute totals which skip
//! them.

use super::aggregate::weighted_sum_zero_filling_absent;
use super::analyzer::IntangibleScore;
use super::indicators::comodidad::ComodidadScores;
use super::indicators::conexiones::ConexionesScores;
use super::indicators::encuentro::EncuentroScores;
use super::indicators::usos::UsosScores;

fn intangible(name: &'static str, terms: &[(Option<f64>, f64)]) -> IntangibleScore {
    IntangibleScore {
        name,
        score: weighted_sum_zero_filling_absent(terms),
    }
}

pub fn encuentro(s: &EncuentroScores) -> Vec<IntangibleScore> {
    vec![
        intangible("Diversidad", &[(s.diversity, 1.0)]),
        intangible(
            "Cuidado",
            &[
                (s.diversity, 0.34),
                (s.citizen_networks, 0.33),
                (s.place_upkeep, 0.33),
            ],
        ),
        intangible(
            "Comunidad",
            &[(s.citizen_networks, 0.5), (s.volunteering, 0.5)],
        ),
        intangible("Compartido", &[(s.citizen_networks, 1.0)]),
        intangible("Símbolos", &[(s.citizen_networks, 1.0)]),
        intangible("Orgullo", &[(s.volunteering, 1.0)]),
        intangible("Amigable", &[(s.night_use, 1.0)]),
        intangible("Interactivo", &[(s.night_use, 1.0)]),
    ]
}

/// `walkability` is A3.4.
pub fn conexiones(s: &ConexionesScores, walkability: Option<f64>) -> Vec<IntangibleScore> {
    vec![
        intangible("Cercano", &[(s.transport_modes, 0.5), (s.connectivity, 0.5)]),
        intangible("Conectado", &[(s.transport_modes, 0.5), (s.connectivity, 0.5)]),
        intangible(
            "Conveniente",
            &[
                (s.connectivity, 0.34),
                (s.permanence, 0.33),
                (s.surroundings_accessibility, 0.33),
            ],
        ),
        intangible(
            "Accesible (movilidad reducida)",
            &[
                (s.surroundings_accessibility, 0.5),
                (s.reduced_mobility_accessibility, 0.5),
            ],
        ),
        intangible(
            "Accesible (primera infancia y cuidadores)",
            &[(s.early_childhood_accessibility, 1.0)],
        ),
        intangible(
            "Transitable",
            &[
                (walkability, 0.5),
                (s.surroundings_accessibility, 0.25),
                (s.reduced_mobility_accessibility, 0.25),
            ],
        ),
    ]
}

pub fn comodidad(s: &ComodidadScores) -> Vec<IntangibleScore> {
    vec![
        intangible("Limpio", &[(s.safety, 1.0)]),
        intangible("Seguro", &[(s.safety, 1.0)]),
        intangible(
            "Sentable",
            &[(s.image_upkeep, 0.34), (s.comfort, 0.33), (s.seating, 0.33)],
        ),
        intangible(
            "Agradable",
            &[
                (s.image_upkeep, 0.25),
                (s.comfort, 0.25),
                (s.climate_resilience, 0.25),
                (s.pleasantness, 0.25),
            ],
        ),
        intangible("Verde", &[(s.comfort, 0.5), (s.climate_resilience, 0.5)]),
        intangible("Caminable", &[(s.walkability, 1.0)]),
        intangible("Resiliencia climática", &[(s.climate_resilience, 1.0)]),
    ]
}

pub fn usos(s: &UsosScores) -> Vec<IntangibleScore> {
    vec![
        intangible(
            "Dinámico",
            &[
                (s.dynamism, 0.34),
                (s.activity_diversity, 0.33),
                (s.locality, 0.33),
            ],
        ),
        intangible("Especial", &[(s.dynamism, 0.5), (s.landmark, 0.5)]),
        intangible("Real", &[(s.landmark, 0.5), (s.usefulness, 0.5)]),
        intangible("Útil", &[(s.landmark, 0.5), (s.usefulness, 0.5)]),
        intangible(
            "Local",
            &[
                (s.economic_activity, 0.33),
                (s.activity_diversity, 0.34),
                (s.locality, 0.33),
            ],
        ),
        intangible("Sostenible", &[(s.economic_activity, 1.0)]),
        intangible("Conmemorativo", &[(s.economic_activity, 1.0)]),
        intangible("Comunidad", &[(s.locality, 1.0)]),
    ]
}

#[cfg(test)]
#[path = "intangibles_test.rs"]
mod tests;
