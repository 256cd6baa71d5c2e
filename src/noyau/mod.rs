//! Noyau d'évaluation arithmétique
//!
//! Organisation interne :
//! - erreur.rs   : taxonomie des erreurs (thiserror)
//! - pourcent.rs : réécriture N% -> (N*0.01)
//! - filtre.rs   : jeu de caractères autorisé
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard + construction Expr
//! - expr.rs     : AST arithmétique + valeur flottante
//! - format.rs   : affichage borné (12 chiffres significatifs)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod filtre;
pub mod format;
pub mod jetons;
pub mod pourcent;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::evaluer_expression;
