// src/noyau/saisie.rs
//
// Jeton numérique en cours de saisie (structuré, pas du texte à re-analyser).
// - signe séparé de la magnitude : +/- est une simple bascule, exactement réversible
// - magnitude gardée telle que tapée ("0.", "1.50") pour l’affichage
// - au plus un point décimal (vérifié à l’insertion)

use std::fmt;

use super::format::nombre_en_texte;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Saisie {
    negatif: bool,
    chiffres: String,
}

impl Default for Saisie {
    fn default() -> Self {
        Self::zero()
    }
}

impl Saisie {
    pub fn zero() -> Self {
        Self {
            negatif: false,
            chiffres: "0".to_string(),
        }
    }

    /// Nouveau jeton = un chiffre (0..=9).
    pub fn depuis_chiffre(chiffre: u8) -> Self {
        let mut s = Self::zero();
        s.ajouter_chiffre(chiffre);
        s
    }

    /// Nouveau jeton commençant par le point : "0."
    pub fn depuis_point() -> Self {
        Self {
            negatif: false,
            chiffres: "0.".to_string(),
        }
    }

    /// Jeton portant une valeur calculée (résultat précédent, pourcentage).
    pub fn depuis_valeur(v: f64) -> Self {
        let texte = nombre_en_texte(v);
        match texte.strip_prefix('-') {
            Some(m) => Self {
                negatif: true,
                chiffres: m.to_string(),
            },
            None => Self {
                negatif: false,
                chiffres: texte,
            },
        }
    }

    /// Ajoute un chiffre ; "0" est remplacé (pas de zéro de tête).
    pub fn ajouter_chiffre(&mut self, chiffre: u8) {
        debug_assert!(chiffre <= 9);
        let c = char::from(b'0' + chiffre.min(9));
        if self.chiffres == "0" {
            self.chiffres.clear();
        }
        self.chiffres.push(c);
    }

    /// Ajoute le point décimal s’il n’y en a pas déjà un.
    /// Retourne false si refusé.
    pub fn ajouter_point(&mut self) -> bool {
        if self.chiffres.contains('.') {
            return false;
        }
        self.chiffres.push('.');
        true
    }

    pub fn basculer_signe(&mut self) {
        self.negatif = !self.negatif;
    }

    /// Remplace le jeton par sa valeur / 100 ; le signe d’un zéro ("-0") est gardé.
    pub fn pourcent(&mut self) {
        let negatif = self.negatif;
        *self = Self::depuis_valeur(self.valeur() / 100.0);
        if self.valeur() == 0.0 {
            self.negatif = negatif;
        }
    }

    pub fn est_negatif(&self) -> bool {
        self.negatif
    }

    pub fn valeur(&self) -> f64 {
        // "12." est accepté par parse::<f64>() ; la magnitude est toujours bien formée
        let m: f64 = self.chiffres.parse().unwrap_or(0.0);
        if self.negatif {
            -m
        } else {
            m
        }
    }

    pub fn texte(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Saisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negatif {
            f.write_str("-")?;
        }
        f.write_str(&self.chiffres)
    }
}
