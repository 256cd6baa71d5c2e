// src/noyau/erreur.rs

use thiserror::Error;

/// Taxonomie des erreurs du noyau.
///
/// Toutes finissent récupérées par l'état de session (affichage "Error"),
/// mais on garde des variantes distinctes pour les tests, la console
/// et le journal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalc {
    /// Caractère hors du jeu autorisé {chiffres, + - * / ( ) . %, espaces}.
    #[error("caractère interdit: '{0}'")]
    EntreeInvalide(char),

    /// L'expression se termine sur au moins deux opérateurs consécutifs.
    #[error("opérateurs en fin d'expression")]
    OperateurFinal,

    /// Grammaire arithmétique non respectée (nombre malformé,
    /// parenthèses déséquilibrées, opérande manquant…).
    #[error("expression mal formée: {0}")]
    Syntaxe(String),

    /// Valeur calculée non finie (division par zéro, débordement).
    #[error("résultat non fini")]
    ResultatNonFini,
}
