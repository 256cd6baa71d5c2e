// src/noyau/filtre.rs
//
// Filtre d'entrée : seuls chiffres, + - * / ( ) . % et espaces passent.
// Tourne avant toute évaluation : rien d'autre que de l'arithmétique
// n'atteint le tokeniseur.

use lazy_static::lazy_static;
use regex::Regex;

use super::erreur::ErreurCalc;

lazy_static! {
    /// Expression entière dans le jeu de caractères autorisé.
    static ref CARACTERES_SURS: Regex = Regex::new(r"^[0-9\s.+\-*/%()]*$").unwrap();
}

/// Vérifie le jeu de caractères et rend l'entrée inchangée.
pub fn assainir(entree: &str) -> Result<&str, ErreurCalc> {
    if CARACTERES_SURS.is_match(entree) {
        return Ok(entree);
    }

    // Premier caractère fautif, pour le message.
    let fautif = entree
        .chars()
        .find(|c| !(c.is_ascii_digit() || c.is_whitespace() || "+-*/().%".contains(*c)))
        .unwrap_or('?');
    Err(ErreurCalc::EntreeInvalide(fautif))
}
