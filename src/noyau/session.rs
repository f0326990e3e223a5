//! src/noyau/session.rs
//!
//! Session : bascule de mode + les deux unités (accumulateur, solveur).
//!
//! Rôle :
//! - aiguiller chaque événement vers l’unité du mode actif
//! - garder les trois champs a/b/c et le dernier résultat (ou erreur) du solveur
//! - prévenir la présentation après chaque mutation (callback de rendu)
//!
//! Aucune donnée ne circule entre les deux unités.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::accumulateur::{Accumulateur, Touche};
use super::format::{formater_affichage, OptionsAffichage};
use super::quadratique::{resoudre, ErreurResolution, ResultatQuadratique};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Quadratique,
}

impl Mode {
    pub fn autre(self) -> Mode {
        match self {
            Mode::Standard => Mode::Quadratique,
            Mode::Quadratique => Mode::Standard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coefficient {
    A,
    B,
    C,
}

/// Champs texte du formulaire (lus seulement au moment de résoudre).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coefficients {
    pub a: String,
    pub b: String,
    pub c: String,
}

impl Coefficients {
    pub fn get(&self, coef: Coefficient) -> &str {
        match coef {
            Coefficient::A => &self.a,
            Coefficient::B => &self.b,
            Coefficient::C => &self.c,
        }
    }

    fn get_mut(&mut self, coef: Coefficient) -> &mut String {
        match coef {
            Coefficient::A => &mut self.a,
            Coefficient::B => &mut self.b,
            Coefficient::C => &mut self.c,
        }
    }
}

/// Chaînes affichables après une mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendu {
    pub mode: Mode,
    pub historique: String,
    pub affichage: String,
    pub resultat: Option<String>,
    pub discriminant: Option<String>,
    pub erreur: Option<String>,
}

type CallbackRendu = Box<dyn FnMut(&Rendu)>;

pub struct Calculatrice {
    mode: Mode,
    options: OptionsAffichage,

    accumulateur: Accumulateur,

    coefficients: Coefficients,
    resultat: Option<ResultatQuadratique>,
    erreur: Option<ErreurResolution>,

    rendu_cb: Option<CallbackRendu>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Mode::default(), OptionsAffichage::default())
    }
}

impl fmt::Debug for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculatrice")
            .field("mode", &self.mode)
            .field("options", &self.options)
            .field("accumulateur", &self.accumulateur)
            .field("coefficients", &self.coefficients)
            .field("resultat", &self.resultat)
            .field("erreur", &self.erreur)
            .finish_non_exhaustive()
    }
}

impl Calculatrice {
    pub fn new(mode: Mode, options: OptionsAffichage) -> Self {
        Self {
            mode,
            options,
            accumulateur: Accumulateur::new(),
            coefficients: Coefficients::default(),
            resultat: None,
            erreur: None,
            rendu_cb: None,
        }
    }

    /// Enregistre le callback de rendu (appelé après chaque mutation).
    pub fn avec_rendu(mut self, cb: impl FnMut(&Rendu) + 'static) -> Self {
        self.rendu_cb = Some(Box::new(cb));
        self
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn accumulateur(&self) -> &Accumulateur {
        &self.accumulateur
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn resultat(&self) -> Option<&ResultatQuadratique> {
        self.resultat.as_ref()
    }

    pub fn erreur(&self) -> Option<ErreurResolution> {
        self.erreur
    }

    pub fn rendu(&self) -> Rendu {
        Rendu {
            mode: self.mode,
            historique: self.accumulateur.historique(),
            affichage: formater_affichage(&self.accumulateur.affichage(), self.options),
            resultat: self.resultat.map(|r| r.texte()),
            discriminant: self.resultat.map(|r| r.texte_discriminant()),
            erreur: self.erreur.map(|e| e.to_string()),
        }
    }

    /* ------------------------ Actions ------------------------ */

    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.autre();
        debug!(mode = ?self.mode, "bascule de mode");
        self.notifier();
    }

    /// Touche du pavé standard (ignorée en mode quadratique).
    pub fn touche(&mut self, touche: Touche) {
        if self.mode != Mode::Standard {
            debug!(?touche, "touche ignorée hors mode standard");
            return;
        }
        self.accumulateur.appliquer(touche);
        self.notifier();
    }

    /// Modification d’un champ a/b/c (aucune validation ici).
    pub fn saisir_coefficient(&mut self, coef: Coefficient, texte: impl Into<String>) {
        *self.coefficients.get_mut(coef) = texte.into();
        self.notifier();
    }

    /// Résout ; succès => remplace le résultat, échec => message (le résultat
    /// précédent reste affiché).
    pub fn resoudre(&mut self) {
        let c = &self.coefficients;
        match resoudre(&c.a, &c.b, &c.c) {
            Ok(r) => {
                self.resultat = Some(r);
                self.erreur = None;
            }
            Err(e) => {
                debug!(erreur = %e, "résolution refusée");
                self.erreur = Some(e);
            }
        }
        self.notifier();
    }

    fn notifier(&mut self) {
        let rendu = self.rendu();
        if let Some(cb) = self.rendu_cb.as_mut() {
            cb(&rendu);
        }
    }
}
