// src/noyau/quadratique.rs
//
// Solveur ax² + bx + c = 0 (racines réelles, formule du discriminant)
// -------------------------------------------------------------------
// - Lecture des trois coefficients seulement au moment de résoudre
// - a = 0 refusé (pas une équation du second degré)
// - d < 0 : pas de racine réelle, mais d est quand même rendu
// - d ou racine hors de f64 (coefficients énormes) : coefficients refusés

use tracing::debug;

use super::format::{formater_fixe, nombre_en_texte};

/// Décimales des racines dans le texte de résultat.
const DECIMALES_RACINES: usize = 4;

/// Rappel affiché au-dessus du formulaire.
pub const FORMULE: &str = "x = (-b ± √(b² - 4ac)) / 2a";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurResolution {
    #[error("invalid coefficients")]
    CoefficientsInvalides,

    #[error("a must be nonzero")]
    ANul,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NatureRacines {
    DeuxRacines,
    RacineDouble,
    AucuneRacineReelle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultatQuadratique {
    pub x1: Option<f64>,
    pub x2: Option<f64>,
    pub discriminant: f64,
}

impl ResultatQuadratique {
    pub fn nature(&self) -> NatureRacines {
        if self.x1.is_none() || self.x2.is_none() {
            NatureRacines::AucuneRacineReelle
        } else if self.discriminant == 0.0 {
            NatureRacines::RacineDouble
        } else {
            NatureRacines::DeuxRacines
        }
    }

    /// Phrase de résultat (racines à 4 décimales).
    pub fn texte(&self) -> String {
        let fixe = |v: Option<f64>| {
            v.map(|x| formater_fixe(x, DECIMALES_RACINES))
                .unwrap_or_default()
        };
        match self.nature() {
            NatureRacines::AucuneRacineReelle => {
                "This equation has no real solutions (complex roots)".to_string()
            }
            NatureRacines::RacineDouble => format!(
                "This equation has one repeated solution: x = {}",
                fixe(self.x1)
            ),
            NatureRacines::DeuxRacines => {
                format!("Solutions: x₁ = {}, x₂ = {}", fixe(self.x1), fixe(self.x2))
            }
        }
    }

    pub fn texte_discriminant(&self) -> String {
        format!("Discriminant: {}", nombre_en_texte(self.discriminant))
    }
}

fn lire_coefficient(texte: &str) -> Result<f64, ErreurResolution> {
    texte
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ErreurResolution::CoefficientsInvalides)
}

/// API publique : résout à partir des trois champs texte.
pub fn resoudre(a: &str, b: &str, c: &str) -> Result<ResultatQuadratique, ErreurResolution> {
    let a = lire_coefficient(a)?;
    let b = lire_coefficient(b)?;
    let c = lire_coefficient(c)?;
    resoudre_coefficients(a, b, c)
}

/// Cœur numérique (coefficients déjà lus).
pub fn resoudre_coefficients(
    a: f64,
    b: f64,
    c: f64,
) -> Result<ResultatQuadratique, ErreurResolution> {
    if a == 0.0 {
        return Err(ErreurResolution::ANul);
    }

    let discriminant = b * b - 4.0 * a * c;
    if !discriminant.is_finite() {
        debug!(a, b, c, "discriminant hors de f64");
        return Err(ErreurResolution::CoefficientsInvalides);
    }
    let deux_a = 2.0 * a;

    let (x1, x2) = if discriminant > 0.0 {
        let r = discriminant.sqrt();
        (Some((-b + r) / deux_a), Some((-b - r) / deux_a))
    } else if discriminant == 0.0 {
        let x = -b / deux_a;
        (Some(x), Some(x))
    } else {
        (None, None)
    };

    debug!(a, b, c, discriminant, ?x1, ?x2, "résolution quadratique");

    if [x1, x2].into_iter().flatten().any(|x| !x.is_finite()) {
        return Err(ErreurResolution::CoefficientsInvalides);
    }

    Ok(ResultatQuadratique {
        x1,
        x2,
        discriminant,
    })
}
