//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’accumulateur et le solveur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants clés :
//!   - aucune touche ne panique
//!   - au plus un point dans le jeton affiché
//!   - l’affichage est un nombre bien formé OU la sentinelle
//!   - AC ramène toujours à l’état initial
//!   - une touche chiffre après une erreur repart sans AC

use std::time::{Duration, Instant};

use super::accumulateur::{Accumulateur, Touche};
use super::eval::SENTINELLE_ERREUR;
use super::jetons::Operateur;
use super::quadratique::{resoudre, ErreurResolution};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres surreprésentés (sinon les jetons restent triviaux)
    match rng.pick(20) {
        0..=9 => Touche::Chiffre(rng.pick(10) as u8),
        10 => Touche::Point,
        11 => Touche::Operateur(Operateur::Plus),
        12 => Touche::Operateur(Operateur::Moins),
        13 => Touche::Operateur(Operateur::Fois),
        14 => Touche::Operateur(Operateur::Divise),
        15 | 16 => Touche::Egal,
        17 => Touche::Signe,
        18 => Touche::Pourcent,
        _ => {
            // AC rare : on veut des expressions longues
            if rng.pick(4) == 0 {
                Touche::Effacer
            } else {
                Touche::Chiffre(0)
            }
        }
    }
}

/// -?[0-9]+(.[0-9]*)?
fn est_nombre_bien_forme(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);
    let (entier, fraction) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };
    !entier.is_empty()
        && entier.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

fn check_invariants(acc: &Accumulateur, seq: &[Touche]) {
    let aff = acc.affichage();
    assert!(
        aff.matches('.').count() <= 1,
        "plus d’un point: {aff:?} seq={seq:?}"
    );
    assert!(
        aff == SENTINELLE_ERREUR || est_nombre_bien_forme(&aff),
        "affichage mal formé: {aff:?} seq={seq:?}"
    );
    if !acc.vient_d_evaluer() {
        assert_eq!(acc.historique(), acc.expression());
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_accumulateur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vu_erreur = 0usize;
    let mut vu_resultat = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let n = 1 + rng.pick(40) as usize;
        let seq: Vec<Touche> = (0..n).map(|_| gen_touche(&mut rng)).collect();

        let mut acc = Accumulateur::new();
        for t in &seq {
            acc.appliquer(*t);
            check_invariants(&acc, &seq);

            if *t == Touche::Egal && acc.vient_d_evaluer() {
                if acc.est_en_erreur() {
                    vu_erreur += 1;
                } else {
                    vu_resultat += 1;
                }
            }
        }

        // AC depuis n’importe quel état
        assert_eq!(acc.suivant(Touche::Effacer), Accumulateur::new());
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_resultat > 10, "trop peu de résultats: {vu_resultat}");
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let rejoue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut acc = Accumulateur::new();
        for _ in 0..200 {
            acc.appliquer(gen_touche(&mut rng));
        }
        (acc.affichage(), acc.historique())
    };
    assert_eq!(rejoue(0xBADC0DE), rejoue(0xBADC0DE));
}

#[test]
fn fuzz_safe_reprise_apres_erreur() {
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..100 {
        let mut acc = Accumulateur::new();
        acc.appliquer(Touche::Chiffre(1 + rng.pick(9) as u8));
        acc.appliquer(Touche::Operateur(Operateur::Divise));
        acc.appliquer(Touche::Chiffre(0));
        acc.appliquer(Touche::Egal);
        assert!(acc.est_en_erreur());

        let d = rng.pick(10) as u8;
        acc.appliquer(Touche::Chiffre(d));
        assert_eq!(acc.affichage(), d.to_string());
        assert!(!acc.est_en_erreur());
    }
}

#[test]
fn fuzz_safe_solveur_racines_verifient_equation() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..500 {
        budget(t0, max);

        let coef = |rng: &mut Rng| rng.pick(41) as f64 - 20.0;
        let (a, b, c) = (coef(&mut rng), coef(&mut rng), coef(&mut rng));

        match resoudre(&a.to_string(), &b.to_string(), &c.to_string()) {
            Ok(r) => {
                assert_eq!(r.discriminant, b * b - 4.0 * a * c);
                assert_eq!(r.x1.is_some(), r.discriminant >= 0.0);
                assert_eq!(r.x1.is_some(), r.x2.is_some());
                for x in [r.x1, r.x2].into_iter().flatten() {
                    let residu = a * x * x + b * x + c;
                    assert!(
                        residu.abs() < 1e-9 * (1.0 + a.abs() + b.abs() + c.abs()) * (1.0 + x * x),
                        "a={a} b={b} c={c} x={x} residu={residu}"
                    );
                }
            }
            Err(e) => {
                assert_eq!(a, 0.0, "erreur inattendue {e} pour a={a}");
                assert_eq!(e, ErreurResolution::ANul);
            }
        }
    }
}
