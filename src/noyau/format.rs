// src/noyau/format.rs
//
// Affichage borné d'un flottant :
// - 0                         -> "0"
// - |n| >= 1e12 ou |n| < 1e-6 -> notation scientifique, mantisse à 6 chiffres
// - sinon                     -> décimal, au plus 12 chiffres significatifs,
//                                zéros de traîne et point final retirés

/// Seuils de bascule vers la notation scientifique.
const BORNE_HAUTE: f64 = 1e12;
const BORNE_BASSE: f64 = 1e-6;

/// Chiffres significatifs conservés en décimal.
const CHIFFRES_SIGNIFICATIFS: usize = 12;

pub fn format_nombre(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= BORNE_HAUTE || abs < BORNE_BASSE {
        return format!("{n:.5e}");
    }

    decimal_borne(n)
}

/// Arrondi à 12 chiffres significatifs puis reconstruction décimale.
/// Évite les chiffres de bruit du flottant (ex: 0.1+0.2).
fn decimal_borne(n: f64) -> String {
    // "{:.11e}" rend d.ddddddddddd e±exp : exactement 12 chiffres significatifs,
    // exposant déjà ajusté si l'arrondi déborde (9.99...e-1 -> 1.0e0).
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, n);
    let Some((mantisse, exp_txt)) = sci.split_once('e') else {
        return sci; // jamais atteint : "{:e}" contient toujours un exposant
    };
    let exp: i32 = exp_txt.parse().unwrap_or(0);

    let negatif = mantisse.starts_with('-');
    let chiffres: String = mantisse.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut texte = if exp >= 0 {
        // point décimal déplacé de `exp` positions vers la droite
        let pos = (exp as usize) + 1;
        if pos >= chiffres.len() {
            let mut s = chiffres.clone();
            s.push_str(&"0".repeat(pos - chiffres.len()));
            s
        } else {
            format!("{}.{}", &chiffres[..pos], &chiffres[pos..])
        }
    } else {
        format!("0.{}{}", "0".repeat((-exp as usize) - 1), chiffres)
    };

    if texte.contains('.') {
        texte = texte
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    if negatif {
        format!("-{texte}")
    } else {
        texte
    }
}
