//! src/app/reglages.rs
//!
//! Réglages utilisateur (fichier TOML optionnel).
//!
//! Emplacement natif : <config_dir>/calculatrice/reglages.toml
//! - fichier absent   => valeurs par défaut
//! - fichier invalide => avertissement + valeurs par défaut (jamais bloquant)
//! - wasm32           => valeurs par défaut

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::noyau::format::{CHIFFRES_FRACTION_DEFAUT, CHIFFRES_FRACTION_MAX};
use crate::noyau::{Mode, OptionsAffichage};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Décimales max à l’écran (borné à CHIFFRES_FRACTION_MAX).
    pub chiffres_fraction: usize,
    pub separateur_milliers: bool,
    pub mode_initial: Mode,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres_fraction: CHIFFRES_FRACTION_DEFAUT,
            separateur_milliers: true,
            mode_initial: Mode::Standard,
        }
    }
}

impl Reglages {
    pub fn options_affichage(&self) -> OptionsAffichage {
        OptionsAffichage {
            chiffres_fraction: self.chiffres_fraction.min(CHIFFRES_FRACTION_MAX),
            separateur_milliers: self.separateur_milliers,
        }
    }

    pub fn depuis_toml(texte: &str) -> Result<Self> {
        toml::from_str(texte).context("réglages TOML invalides")
    }

    /// Ok(None) si le fichier n’existe pas.
    pub fn charger_fichier(chemin: &Path) -> Result<Option<Self>> {
        if !chemin.exists() {
            return Ok(None);
        }
        let texte = std::fs::read_to_string(chemin)
            .with_context(|| format!("lecture de {}", chemin.display()))?;
        let r = Self::depuis_toml(&texte)
            .with_context(|| format!("réglages dans {}", chemin.display()))?;
        Ok(Some(r))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_defaut() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice").join("reglages.toml"))
    }

    /// Chargement “best effort” : n’échoue jamais.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin_defaut() else {
            return Self::default();
        };
        match Self::charger_fichier(&chemin) {
            Ok(Some(r)) => {
                tracing::info!(chemin = %chemin.display(), "réglages chargés");
                r
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(erreur = %format!("{e:#}"), "réglages ignorés");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> Self {
        Self::default()
    }
}
