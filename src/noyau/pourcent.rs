// src/noyau/pourcent.rs
//
// Réécriture des pourcentages : `N%` devient `(N*0.01)`.
// Appliquée AVANT le filtre : la forme réécrite n'introduit que des
// caractères déjà autorisés.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Un nombre décimal immédiatement suivi de '%'.
    static ref NOMBRE_POURCENT: Regex = Regex::new(r"(\d+(?:\.\d+)?)%").unwrap();
}

/// Remplace chaque `N%` par `(N*0.01)` ; tout le reste est laissé tel quel.
///
/// Non-but : la sémantique « N% de M » n'existe pas, seule la conversion
/// numérique directe est supportée.
pub fn normaliser_pourcent(entree: &str) -> String {
    NOMBRE_POURCENT
        .replace_all(entree, "(${1}*0.01)")
        .into_owned()
}
