//! Noyau — évaluation (pipeline réel)
//!
//! jetons typés -> RPN (shunting-yard) -> valeur f64
//!
//! Aucune évaluation générique de texte : l’accumulateur fournit les jetons,
//! la précédence est explicite dans rpn.rs.

use tracing::trace;

use super::jetons::{format_tokens, Tok};
use super::rpn::{eval_rpn, to_rpn};

/// Marqueur affiché à la place d’un résultat quand l’évaluation échoue.
pub const SENTINELLE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurEval {
    #[error("expression vide")]
    ExpressionVide,

    #[error("expression invalide")]
    ExpressionMalformee,

    #[error("résultat non fini (division par zéro ou débordement)")]
    ResultatNonFini,
}

/// API publique : évalue une suite de jetons avec la précédence usuelle.
pub fn evaluer(jetons: &[Tok]) -> Result<f64, ErreurEval> {
    if jetons.is_empty() {
        return Err(ErreurEval::ExpressionVide);
    }

    let rpn = to_rpn(jetons)?;
    trace!(
        jetons = %format_tokens(jetons),
        rpn = %format_tokens(&rpn),
        "évaluation"
    );

    eval_rpn(&rpn)
}
