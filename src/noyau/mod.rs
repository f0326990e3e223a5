//! Noyau calculatrice (sans UI)
//!
//! Organisation interne :
//! - jetons.rs       : opérateurs + jetons typés
//! - rpn.rs          : shunting-yard + évaluation RPN
//! - eval.rs         : pipeline d’évaluation + erreurs + sentinelle
//! - format.rs       : texte canonique, rendu écran (fraction bornée, milliers)
//! - saisie.rs       : jeton numérique en cours (structuré)
//! - accumulateur.rs : machine à états du pavé standard
//! - quadratique.rs  : solveur ax² + bx + c = 0
//! - session.rs      : bascule de mode + callback de rendu

pub mod accumulateur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod quadratique;
pub mod rpn;
pub mod saisie;
pub mod session;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::Touche;
pub use format::OptionsAffichage;
pub use jetons::Operateur;
pub use quadratique::FORMULE;
pub use session::{Calculatrice, Coefficient, Mode, Rendu};
