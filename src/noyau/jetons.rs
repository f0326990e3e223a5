// src/noyau/jetons.rs
//
// Jetons typés du calculateur standard.
// L’accumulateur produit directement des nombres (f64) et des opérateurs :
// aucune chaîne n’est re-analysée au moment de l’évaluation.

use super::format::nombre_en_texte;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché dans l’historique (et sur le pavé).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// × ÷ avant + −
    pub fn precedence(self) -> i32 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    // Moins unaire : injecté par le shunting-yard, jamais par l’accumulateur.
    Neg,
}

/// Format utilitaire (trace de l’évaluation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => nombre_en_texte(*v),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
