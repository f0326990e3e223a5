// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir la suite de Tok de l’accumulateur en RPN (postfix)
// - Puis l’évaluer sur une pile de f64
//
// Règles:
// - × ÷ avant + − ; associativité à gauche
// - Signe unaire (opérateur là où on attend une valeur) :
//    - '-' => Tok::Neg (préfixe, priorité maximale)
//    - '+' => ignoré
//    - '×' / '÷' => expression invalide
// - Toute valeur non finie (division par zéro, débordement) est refusée.

use super::eval::ErreurEval;
use super::jetons::{Operateur, Tok};

/// Priorité de Neg : au-dessus de tous les opérateurs binaires.
const PRECEDENCE_NEG: i32 = 3;

fn precedence(t: Tok) -> i32 {
    match t {
        Tok::Op(op) => op.precedence(),
        Tok::Neg => PRECEDENCE_NEG,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN.
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(×), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(×), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Sert à distinguer opérateur binaire et signe unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                // deux nombres collés : jamais produit par l’accumulateur
                if prev_was_value {
                    return Err(ErreurEval::ExpressionMalformee);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Neg => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionMalformee);
                }
                ops.push(Tok::Neg);
            }

            Tok::Op(op) if !prev_was_value => match op {
                Operateur::Plus => {}
                Operateur::Moins => ops.push(Tok::Neg),
                Operateur::Fois | Operateur::Divise => {
                    return Err(ErreurEval::ExpressionMalformee)
                }
            },

            Tok::Op(op) => {
                // gauche-associatif : on sort tout ce qui est au moins aussi prioritaire
                while let Some(&top) = ops.last() {
                    if precedence(top) < op.precedence() {
                        break;
                    }
                    out.push(top);
                    ops.pop();
                }
                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de valeurs.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Neg => {
                let x = pile.pop().ok_or(ErreurEval::ExpressionMalformee)?;
                pile.push(-x);
            }

            Tok::Op(op) => {
                let b = pile.pop().ok_or(ErreurEval::ExpressionMalformee)?;
                let a = pile.pop().ok_or(ErreurEval::ExpressionMalformee)?;
                let v = op.appliquer(a, b);
                if !v.is_finite() {
                    return Err(ErreurEval::ResultatNonFini);
                }
                pile.push(v);
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionMalformee);
    }
    pile.pop().ok_or(ErreurEval::ExpressionMalformee)
}
