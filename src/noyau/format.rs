// src/noyau/format.rs
//
// Affichage des nombres :
// - nombre_en_texte   : forme “canonique” d’un résultat (historique, valeur d’affichage)
// - formater_affichage: rendu écran (fraction bornée + séparateur de milliers)
// - formater_fixe     : décimales fixes (racines du solveur quadratique)

/// Nombre max de chiffres après la virgule à l’écran (par défaut).
pub const CHIFFRES_FRACTION_DEFAUT: usize = 8;

/// Garde-fou : au-delà, f64 n’a plus rien de significatif à montrer.
pub const CHIFFRES_FRACTION_MAX: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionsAffichage {
    pub chiffres_fraction: usize,
    pub separateur_milliers: bool,
}

impl Default for OptionsAffichage {
    fn default() -> Self {
        Self {
            chiffres_fraction: CHIFFRES_FRACTION_DEFAUT,
            separateur_milliers: true,
        }
    }
}

/* ------------------------ Texte canonique ------------------------ */

/// Plus courte écriture décimale qui relit la même valeur.
/// 8.0 -> "8", 0.1+0.2 -> "0.30000000000000004", -0.0 -> "0".
pub fn nombre_en_texte(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Nombre de décimales de l’écriture exacte de `v` (0.03125 -> 5, 0.1 -> 55).
fn decimales_exactes(v: f64) -> usize {
    let bits = v.to_bits();
    let exposant = ((bits >> 52) & 0x7ff) as i32;
    let mantisse = bits & ((1u64 << 52) - 1);
    let (m, e) = if exposant == 0 {
        (mantisse, -1074)
    } else {
        (mantisse | (1u64 << 52), exposant - 1075)
    };
    if m == 0 {
        return 0;
    }
    let e = e + m.trailing_zeros() as i32;
    if e < 0 {
        e.unsigned_abs() as usize
    } else {
        0
    }
}

/// Décimales fixes, arrondi “demi vers le haut” sur la valeur exacte
/// (1.005 -> "1.00", 0.03125 -> "0.0313"), sans “-0.0000”.
pub fn formater_fixe(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let v = if v == 0.0 { 0.0 } else { v };
    let precision = decimales.max(decimales_exactes(v));
    let exact = format!("{:.precision$}", v.abs());
    let signe = if v < 0.0 { "-" } else { "" };
    format!("{signe}{}", arrondir_litteral(&exact, decimales))
}

/* ------------------------ Rendu écran ------------------------ */

/// [0-9]+ ( '.' [0-9]* )?
fn est_litteral_decimal(s: &str) -> bool {
    let mut points = 0;
    let mut premier = true;
    for c in s.chars() {
        match c {
            '0'..='9' => {}
            '.' if !premier => points += 1,
            _ => return false,
        }
        premier = false;
    }
    !s.is_empty() && points <= 1
}

fn grouper_milliers(entier: &str) -> String {
    let n = entier.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Coupe un littéral positif à `chiffres` décimales exactement, la moitié
/// arrondie vers le haut ("0.001953125", 8 -> "0.00195313").
fn arrondir_litteral(corps: &str, chiffres: usize) -> String {
    let (entier, fraction) = corps.split_once('.').unwrap_or((corps, ""));

    let mut ds: Vec<u8> = entier
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(chiffres))
        .collect();

    let suivant = fraction.as_bytes().get(chiffres).copied().unwrap_or(b'0');
    if suivant >= b'5' {
        let mut i = ds.len();
        loop {
            if i == 0 {
                ds.insert(0, b'1');
                break;
            }
            i -= 1;
            if ds[i] == b'9' {
                ds[i] = b'0';
            } else {
                ds[i] += 1;
                break;
            }
        }
    }

    let coupe = ds.len() - chiffres;
    let mut out: String = ds[..coupe].iter().map(|&b| char::from(b)).collect();
    if chiffres > 0 {
        out.push('.');
        out.extend(ds[coupe..].iter().map(|&b| char::from(b)));
    }
    out
}

/// Arrondit `corps` (littéral positif) à `chiffres` décimales, zéros de fin retirés.
fn arrondir(corps: &str, chiffres: usize) -> String {
    let s = arrondir_litteral(corps, chiffres);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Rendu écran de la valeur d’affichage.
///
/// - au plus `chiffres_fraction` décimales (arrondi au-delà)
/// - partie entière groupée par milliers avec ','
/// - une saisie en cours garde sa fraction telle que tapée ("0.", "1.50")
/// - tout ce qui n’est pas un nombre (sentinelle d’erreur) est rendu tel quel
pub fn formater_affichage(texte: &str, options: OptionsAffichage) -> String {
    let (signe, corps) = match texte.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", texte),
    };

    if !est_litteral_decimal(corps) {
        return texte.to_string();
    }

    let trop_long = corps
        .split_once('.')
        .is_some_and(|(_, f)| f.len() > options.chiffres_fraction);

    let corps = if trop_long {
        arrondir(corps, options.chiffres_fraction)
    } else {
        corps.to_string()
    };

    // -0.000000001 arrondi à 8 décimales : plus de signe
    let signe = if trop_long && corps.bytes().all(|b| b == b'0' || b == b'.') {
        ""
    } else {
        signe
    };

    let (entier, fraction) = match corps.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (corps.as_str(), None),
    };

    let mut out = String::with_capacity(corps.len() + 8);
    out.push_str(signe);
    if options.separateur_milliers {
        out.push_str(&grouper_milliers(entier));
    } else {
        out.push_str(entier);
    }
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}
