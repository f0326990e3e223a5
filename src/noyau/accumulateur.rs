//! src/noyau/accumulateur.rs
//!
//! Machine à états du calculateur standard (pavé “chaîné”).
//!
//! Rôle : construire l’expression touche après touche, garder la valeur
//! d’affichage, puis évaluer à la demande (“=”).
//!
//! Contrats :
//! - Chaque touche est une transition complète (aucun état intermédiaire visible).
//! - L’expression est structurée : termes validés + jeton en cours (`Saisie`).
//!   Son texte est toujours la concaténation des deux.
//! - “=” ne remonte jamais d’erreur : un échec devient la sentinelle "Error",
//!   et la touche suivante repart proprement.
//! - AC remet tout à l’état initial.

use tracing::debug;

use super::eval::{evaluer, SENTINELLE_ERREUR};
use super::format::nombre_en_texte;
use super::jetons::{Operateur, Tok};
use super::saisie::Saisie;

/// Événements du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Egal,
    Effacer,
    Signe,
    Pourcent,
}

impl Touche {
    /// Raccourci clavier -> touche (None si le caractère n’est pas une touche).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' | ',' => Touche::Point,
            '+' => Touche::Operateur(Operateur::Plus),
            '-' | '−' => Touche::Operateur(Operateur::Moins),
            '*' | 'x' | 'X' | '×' => Touche::Operateur(Operateur::Fois),
            '/' | '÷' => Touche::Operateur(Operateur::Divise),
            '=' => Touche::Egal,
            '%' => Touche::Pourcent,
            _ => return None,
        };
        Some(t)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Terme {
    Nombre(Saisie),
    Op(Operateur),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Accumulateur {
    // --- expression ---
    termes: Vec<Terme>,
    saisie: Option<Saisie>,

    // --- affichage ---
    // Valeur montrée quand aucun jeton n’est en cours (dernier jeton validé, résultat, sentinelle).
    affichage_fige: String,
    // "expression=résultat" de la dernière évaluation.
    derniere_evaluation: String,

    // --- drapeaux ---
    operateur_en_attente: Option<Operateur>,
    attend_operande: bool,
    vient_d_evaluer: bool,

    // Opérande gauche si un opérateur suit “=” (None après une erreur).
    dernier_resultat: Option<f64>,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            termes: Vec::new(),
            saisie: None,
            affichage_fige: "0".to_string(),
            derniere_evaluation: String::new(),
            operateur_en_attente: None,
            attend_operande: false,
            vient_d_evaluer: false,
            dernier_resultat: None,
        }
    }
}

impl Accumulateur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Valeur d’affichage brute (non formatée).
    pub fn affichage(&self) -> String {
        match &self.saisie {
            Some(s) => s.texte(),
            None => self.affichage_fige.clone(),
        }
    }

    /// Ligne “process” : l’expression en cours, ou "expr=résultat" juste après “=”.
    pub fn historique(&self) -> String {
        if self.vient_d_evaluer {
            self.derniere_evaluation.clone()
        } else {
            self.expression()
        }
    }

    /// Texte de l’expression : termes validés + jeton en cours.
    pub fn expression(&self) -> String {
        let mut out = String::new();
        for t in &self.termes {
            match t {
                Terme::Nombre(s) => out.push_str(&s.texte()),
                Terme::Op(op) => out.push_str(op.symbole()),
            }
        }
        if let Some(s) = &self.saisie {
            out.push_str(&s.texte());
        }
        out
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur_en_attente
    }

    pub fn attend_operande(&self) -> bool {
        self.attend_operande
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.vient_d_evaluer
    }

    pub fn est_en_erreur(&self) -> bool {
        self.saisie.is_none() && self.affichage_fige == SENTINELLE_ERREUR
    }

    fn jetons(&self) -> Vec<Tok> {
        let mut out: Vec<Tok> = self
            .termes
            .iter()
            .map(|t| match t {
                Terme::Nombre(s) => Tok::Num(s.valeur()),
                Terme::Op(op) => Tok::Op(*op),
            })
            .collect();
        if let Some(s) = &self.saisie {
            out.push(Tok::Num(s.valeur()));
        }
        out
    }

    /* ------------------------ Transitions ------------------------ */

    /// Applique une touche (transition en place).
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Point => self.point(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::Signe => self.signe(),
            Touche::Pourcent => self.pourcent(),
        }
    }

    /// Forme “fonction pure” : (état, touche) -> nouvel état.
    pub fn suivant(&self, touche: Touche) -> Accumulateur {
        let mut next = self.clone();
        next.appliquer(touche);
        next
    }

    /// Démarre un nouveau jeton (après opérateur, après “=”, ou au tout début).
    fn demarrer_saisie(&mut self, s: Saisie) {
        self.saisie = Some(s);
        self.attend_operande = false;
        self.vient_d_evaluer = false;
    }

    fn continue_saisie(&mut self) -> Option<&mut Saisie> {
        if self.attend_operande || self.vient_d_evaluer {
            return None;
        }
        self.saisie.as_mut()
    }

    fn chiffre(&mut self, c: u8) {
        if c > 9 {
            return;
        }
        match self.continue_saisie() {
            Some(s) => s.ajouter_chiffre(c),
            None => self.demarrer_saisie(Saisie::depuis_chiffre(c)),
        }
    }

    fn point(&mut self) {
        match self.continue_saisie() {
            Some(s) => {
                s.ajouter_point();
            }
            None => self.demarrer_saisie(Saisie::depuis_point()),
        }
    }

    fn signe(&mut self) {
        if self.vient_d_evaluer {
            // le résultat affiché reste l’opérande gauche d’un éventuel opérateur
            if let Some(v) = self.dernier_resultat {
                self.set_resultat_affiche(-v);
            }
            return;
        }
        match self.continue_saisie() {
            Some(s) => s.basculer_signe(),
            None => {
                let mut s = Saisie::zero();
                s.basculer_signe();
                self.demarrer_saisie(s);
            }
        }
    }

    fn pourcent(&mut self) {
        if self.vient_d_evaluer {
            if let Some(v) = self.dernier_resultat {
                self.set_resultat_affiche(v / 100.0);
            }
            return;
        }
        if let Some(s) = self.continue_saisie() {
            s.pourcent();
        }
    }

    fn set_resultat_affiche(&mut self, v: f64) {
        self.dernier_resultat = Some(v);
        self.affichage_fige = nombre_en_texte(v);
    }

    fn operateur(&mut self, op: Operateur) {
        if self.vient_d_evaluer {
            // le résultat précédent devient l’opérande gauche
            self.termes.clear();
            if let Some(v) = self.dernier_resultat {
                self.termes.push(Terme::Nombre(Saisie::depuis_valeur(v)));
            }
            self.vient_d_evaluer = false;
        } else if let Some(s) = self.saisie.take() {
            self.affichage_fige = s.texte();
            self.termes.push(Terme::Nombre(s));
        }

        self.termes.push(Terme::Op(op));
        self.operateur_en_attente = Some(op);
        self.attend_operande = true;
    }

    fn egal(&mut self) {
        let jetons = self.jetons();
        if jetons.is_empty() {
            return;
        }

        let expr = self.expression();
        match evaluer(&jetons) {
            Ok(v) => {
                let texte = nombre_en_texte(v);
                debug!(expression = %expr, resultat = %texte, "évaluation réussie");
                self.derniere_evaluation = format!("{expr}={texte}");
                self.affichage_fige = texte;
                self.dernier_resultat = Some(v);
            }
            Err(e) => {
                debug!(expression = %expr, erreur = %e, "évaluation en erreur");
                self.derniere_evaluation = format!("{expr}={SENTINELLE_ERREUR}");
                self.affichage_fige = SENTINELLE_ERREUR.to_string();
                self.dernier_resultat = None;
            }
        }

        self.termes.clear();
        self.saisie = None;
        self.operateur_en_attente = None;
        self.attend_operande = false;
        self.vient_d_evaluer = true;
    }

    /// AC : remise à zéro totale.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }
}
