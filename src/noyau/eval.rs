//! Noyau — évaluation (pipeline réel)
//!
//! pourcent -> filtre -> garde opérateurs finaux -> jetons -> RPN -> Expr
//!          -> valeur -> garde de finitude -> affichage
//!
//! Remarque : la réécriture des pourcentages passe AVANT le filtre, pour que
//! la forme réécrite (chiffres/opérateurs/parenthèses) reste dans le jeu
//! de caractères autorisé.

use tracing::{debug, trace};

use super::erreur::ErreurCalc;
use super::filtre::assainir;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::pourcent::normaliser_pourcent;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression et retourne:
/// - la valeur calculée (finie)
/// - son affichage borné (12 chiffres significatifs / scientifique)
pub fn evaluer_expression(expr_str: &str) -> Result<(f64, String), ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::Syntaxe("entrée vide".into()));
    }

    // 1) Pourcentages : N% -> (N*0.01)
    let normalise = normaliser_pourcent(s);

    // 2) Filtre de caractères
    let propre = assainir(&normalise)?;

    // 3) Garde : expression terminée au milieu d'un opérateur
    if operateurs_en_fin(propre) {
        return Err(ErreurCalc::OperateurFinal);
    }

    // 4) Jetons
    let jetons = tokenize(propre)?;
    trace!(jetons = %format_tokens(&jetons), "tokenisation");

    // 5) RPN -> AST
    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;

    // 6) Valeur + garde de finitude (division par zéro, débordement)
    let valeur = expr.valeur();
    if !valeur.is_finite() {
        return Err(ErreurCalc::ResultatNonFini);
    }

    let affichage = format_nombre(valeur);
    debug!(entree = %s, valeur, affichage = %affichage, "évaluation réussie");
    Ok((valeur, affichage))
}

/// Vraie si l'expression (espaces finaux ignorés) se termine par
/// au moins deux opérateurs consécutifs.
fn operateurs_en_fin(s: &str) -> bool {
    let fin = s.trim_end();
    let n = fin
        .chars()
        .rev()
        .take_while(|c| matches!(c, '+' | '-' | '*' | '/'))
        .count();
    n >= 2
}

#[cfg(test)]
mod tests {
    use super::evaluer_expression;
    use crate::noyau::erreur::ErreurCalc;

    fn ok_valeur(s: &str) -> f64 {
        let (valeur, _affichage) =
            evaluer_expression(s).unwrap_or_else(|e| panic!("evaluer_expression({s:?}) erreur: {e}"));
        valeur
    }

    fn ok_affichage(s: &str) -> String {
        let (_valeur, affichage) =
            evaluer_expression(s).unwrap_or_else(|e| panic!("evaluer_expression({s:?}) erreur: {e}"));
        affichage
    }

    // --- Arithmétique de base ---

    #[test]
    fn addition_simple() {
        assert_eq!(ok_valeur("2+2"), 4.0);
        assert_eq!(ok_affichage("2+2"), "4");
    }

    #[test]
    fn precedence_et_parentheses() {
        assert_eq!(ok_valeur("2+3*4"), 14.0);
        assert_eq!(ok_valeur("2*(3+4)"), 14.0);
        assert_eq!(ok_valeur("(1+2)*(3+4)"), 21.0);
    }

    #[test]
    fn signes_unaires() {
        assert_eq!(ok_valeur("-5+2"), -3.0);
        assert_eq!(ok_valeur("2*-3"), -6.0);
    }

    #[test]
    fn decimaux_et_espaces() {
        assert_eq!(ok_valeur(" 1.5 + 2.5 "), 4.0);
        assert_eq!(ok_affichage("0.1+0.2"), "0.3");
    }

    // --- Pourcentages ---

    #[test]
    fn pourcent_direct() {
        assert_eq!(ok_affichage("50%"), "0.5");
        assert_eq!(ok_valeur("12.5%+3"), 3.125);
        assert_eq!(ok_valeur("200*10%"), 20.0);
    }

    // --- Taxonomie des erreurs ---

    #[test]
    fn division_par_zero_non_finie() {
        assert_eq!(evaluer_expression("2/0"), Err(ErreurCalc::ResultatNonFini));
        // Non fini au milieu de l'expression aussi (inf+1, 0*inf -> NaN)
        assert_eq!(
            evaluer_expression("1/0+1"),
            Err(ErreurCalc::ResultatNonFini)
        );
        assert_eq!(
            evaluer_expression("1/0*0"),
            Err(ErreurCalc::ResultatNonFini)
        );
    }

    #[test]
    fn debordement_non_fini() {
        assert_eq!(
            evaluer_expression("999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999*999999999999"),
            Err(ErreurCalc::ResultatNonFini)
        );
    }

    #[test]
    fn operateurs_en_fin_detectes() {
        assert_eq!(evaluer_expression("2**"), Err(ErreurCalc::OperateurFinal));
        assert_eq!(evaluer_expression("2+-"), Err(ErreurCalc::OperateurFinal));
        assert_eq!(evaluer_expression("2** "), Err(ErreurCalc::OperateurFinal));
    }

    #[test]
    fn un_seul_operateur_final_est_une_erreur_de_syntaxe() {
        assert!(matches!(
            evaluer_expression("2+"),
            Err(ErreurCalc::Syntaxe(_))
        ));
    }

    #[test]
    fn caractere_interdit() {
        assert_eq!(
            evaluer_expression("2+a"),
            Err(ErreurCalc::EntreeInvalide('a'))
        );
        assert_eq!(
            evaluer_expression("2^3"),
            Err(ErreurCalc::EntreeInvalide('^'))
        );
    }

    #[test]
    fn entree_vide_refusee() {
        assert!(matches!(evaluer_expression(""), Err(ErreurCalc::Syntaxe(_))));
        assert!(matches!(
            evaluer_expression("   "),
            Err(ErreurCalc::Syntaxe(_))
        ));
    }

    // --- Affichage en bout de pipeline ---

    #[test]
    fn resultat_long_borne() {
        assert_eq!(ok_affichage("1/3"), "0.333333333333");
    }

    #[test]
    fn resultat_enorme_en_scientifique() {
        let a = ok_affichage("1000000*10000000");
        assert_eq!(a, "1.00000e13");
    }

    #[test]
    fn enchainement_resultat_reutilisable() {
        // Le résultat affiché redevient une entrée valable (calcul en chaîne).
        let a = ok_affichage("0.1+0.2");
        assert_eq!(ok_valeur(&format!("{a}*10")), 3.0);
    }
}
