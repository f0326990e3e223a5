//! Tests scénarios (campagne) : parcours complets du point de vue utilisateur.
//!
//! On passe par la session (comme la vue) et on lit le rendu formaté,
//! pas l’état interne.

use super::accumulateur::Touche;
use super::eval::SENTINELLE_ERREUR;
use super::jetons::Operateur;
use super::quadratique::{resoudre, ErreurResolution};
use super::session::{Calculatrice, Coefficient, Mode, Rendu};

fn touche(c: char) -> Touche {
    match c {
        'C' => Touche::Effacer,
        'S' => Touche::Signe,
        _ => Touche::depuis_caractere(c).unwrap_or_else(|| panic!("touche inconnue: {c:?}")),
    }
}

fn tape(calc: &mut Calculatrice, touches: &str) -> Rendu {
    for c in touches.chars() {
        calc.touche(touche(c));
    }
    calc.rendu()
}

fn tape_neuf(touches: &str) -> Rendu {
    tape(&mut Calculatrice::default(), touches)
}

/* ------------------------ Calculateur standard ------------------------ */

#[test]
fn scen_concatenation_sans_operateur() {
    for seq in ["1", "12", "123", "9876", "1050"] {
        assert_eq!(tape_neuf(seq).affichage.replace(',', ""), seq);
    }
    assert_eq!(tape_neuf("000123").affichage, "123");
}

#[test]
fn scen_double_point_ignore() {
    let mut calc = Calculatrice::default();
    let avant = tape(&mut calc, "3.");
    let apres = tape(&mut calc, ".");
    assert_eq!(avant.affichage, "3.");
    assert_eq!(apres.affichage, "3.");
}

#[test]
fn scen_effacer_depuis_tout_etat() {
    for seq in ["", "42", "5+", "5+3=", "1/0=", "7.25S", "8%", "5+3=*"] {
        let mut calc = Calculatrice::default();
        tape(&mut calc, seq);
        let r = tape(&mut calc, "C");
        assert_eq!(r.affichage, "0", "seq={seq:?}");
        assert_eq!(r.historique, "", "seq={seq:?}");
    }
}

#[test]
fn scen_signe_deux_fois() {
    for seq in ["7", "12.5", "0.", "3+4", "9*2.75"] {
        let mut calc = Calculatrice::default();
        let avant = tape(&mut calc, seq);
        let apres = tape(&mut calc, "SS");
        assert_eq!(avant, apres, "seq={seq:?}");
    }
}

#[test]
fn scen_cinq_plus_trois() {
    let r = tape_neuf("5+3=");
    assert_eq!(r.affichage, "8");
    assert_eq!(r.historique, "5+3=8");
}

#[test]
fn scen_division_par_zero_puis_reprise() {
    let mut calc = Calculatrice::default();
    let r = tape(&mut calc, "1/0=");
    assert_eq!(r.affichage, SENTINELLE_ERREUR);

    let r = tape(&mut calc, "4");
    assert_eq!(r.affichage, "4");
    let r = tape(&mut calc, "+1=");
    assert_eq!(r.affichage, "5");
    assert_eq!(r.historique, "4+1=5");
}

#[test]
fn scen_precedence_conventionnelle() {
    assert_eq!(tape_neuf("2+3*4=").affichage, "14");
    assert_eq!(tape_neuf("20-10/5=").affichage, "18");
    assert_eq!(tape_neuf("2*3+4*5=").affichage, "26");
}

#[test]
fn scen_chainage_apres_resultat() {
    assert_eq!(tape_neuf("6*7=-2=").affichage, "40");
    assert_eq!(tape_neuf("6*7=-2=").historique, "42-2=40");
}

#[test]
fn scen_affichage_arrondi_valeur_complete() {
    let mut calc = Calculatrice::default();
    let r = tape(&mut calc, "0.1+0.2=");
    assert_eq!(r.affichage, "0.3");
    // l’historique garde la valeur complète
    assert_eq!(r.historique, "0.1+0.2=0.30000000000000004");
}

#[test]
fn scen_affichage_moitie_arrondie_vers_le_haut() {
    let r = tape_neuf("1/512=");
    assert_eq!(r.historique, "1÷512=0.001953125");
    assert_eq!(r.affichage, "0.00195313");
}

#[test]
fn scen_pourcent_sur_moins_zero() {
    let r = tape_neuf("S%7");
    assert_eq!(r.affichage, "-7");
    assert_eq!(tape_neuf("S%7+10=").affichage, "3");
}

#[test]
fn scen_grands_nombres_groupes() {
    let r = tape_neuf("1000*1000=");
    assert_eq!(r.affichage, "1,000,000");
    assert_eq!(r.historique, "1000×1000=1000000");
}

#[test]
fn scen_pourcentage_de_remise() {
    // 80 - 25% saisi comme 80 - 0.25 (pourcentage du jeton seulement)
    let r = tape_neuf("80-25%=");
    assert_eq!(r.affichage, "79.75");
}

#[test]
fn scen_operateur_en_attente() {
    let mut calc = Calculatrice::default();
    tape(&mut calc, "9/");
    assert_eq!(
        calc.accumulateur().operateur_en_attente(),
        Some(Operateur::Divise)
    );
    tape(&mut calc, "3=");
    assert_eq!(calc.accumulateur().operateur_en_attente(), None);
    assert_eq!(calc.rendu().affichage, "3");
}

/* ------------------------ Solveur quadratique ------------------------ */

#[test]
fn scen_solveur_cas_de_reference() {
    let r = resoudre("1", "-3", "2").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!((r.x1, r.x2, r.discriminant), (Some(2.0), Some(1.0), 1.0));

    let r = resoudre("1", "2", "1").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!((r.x1, r.x2, r.discriminant), (Some(-1.0), Some(-1.0), 0.0));

    let r = resoudre("1", "0", "1").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!((r.x1, r.x2, r.discriminant), (None, None, -4.0));

    assert_eq!(resoudre("0", "1", "1"), Err(ErreurResolution::ANul));
    assert_eq!(
        resoudre("a", "1", "1"),
        Err(ErreurResolution::CoefficientsInvalides)
    );
}

#[test]
fn scen_formulaire_complet() {
    let mut calc = Calculatrice::default();
    calc.basculer_mode();
    assert_eq!(calc.rendu().mode, Mode::Quadratique);

    calc.resoudre();
    assert_eq!(calc.rendu().erreur.as_deref(), Some("invalid coefficients"));

    calc.saisir_coefficient(Coefficient::A, "2");
    calc.saisir_coefficient(Coefficient::B, "0");
    calc.saisir_coefficient(Coefficient::C, "8");
    calc.resoudre();
    let r = calc.rendu();
    assert_eq!(r.erreur, None);
    assert_eq!(
        r.resultat.as_deref(),
        Some("This equation has no real solutions (complex roots)")
    );
    assert_eq!(r.discriminant.as_deref(), Some("Discriminant: -64"));
}
