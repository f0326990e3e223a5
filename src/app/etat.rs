//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la session du noyau + les réglages, et offrir à la vue des
//! actions simples (touche, bascule, champs a/b/c, résoudre).
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `noyau::Calculatrice`.
//! - Actions déterministes, sans effet de bord caché.

use tracing::trace;

use crate::noyau::{Calculatrice, Coefficient, Mode, Rendu, Touche};

use super::reglages::Reglages;

#[derive(Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        let calc = Calculatrice::new(reglages.mode_initial, reglages.options_affichage())
            .avec_rendu(|r: &Rendu| {
                trace!(
                    mode = ?r.mode,
                    historique = %r.historique,
                    affichage = %r.affichage,
                    "rendu"
                );
            });
        Self { calc, reglages }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn touche(&mut self, touche: Touche) {
        self.calc.touche(touche);
    }

    pub fn basculer_mode(&mut self) {
        self.calc.basculer_mode();
    }

    pub fn mode(&self) -> Mode {
        self.calc.mode()
    }

    pub fn rendu(&self) -> Rendu {
        self.calc.rendu()
    }

    /// Copie éditable d’un champ (egui veut un &mut String).
    pub fn champ(&self, coef: Coefficient) -> String {
        self.calc.coefficients().get(coef).to_string()
    }

    pub fn set_champ(&mut self, coef: Coefficient, texte: String) {
        self.calc.saisir_coefficient(coef, texte);
    }

    pub fn resoudre(&mut self) {
        self.calc.resoudre();
    }
}
