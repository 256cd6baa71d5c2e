// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Précédence conventionnelle : * / au-dessus de + -, associativité à gauche,
//   parenthèses prioritaires.
// - Signe unaire:
//    - si '+' ou '-' arrive quand on n'attend PAS une valeur, on injecte 0 :
//      "-x" => "0 x -"
//    - l'opérateur injecté est empilé SANS dépiler : il reste collé à son
//      opérande ("2*-3" => "2 0 3 - *", soit -6)

use super::erreur::ErreurCalc;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err(ErreurCalc::Syntaxe(
                        "parenthèse fermante sans ouvrante".into(),
                    ));
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus => {
                // signe unaire : pas de valeur avant => injecte 0 et empile
                // sans dépiler (le signe reste collé à son opérande)
                if !prev_was_value {
                    out.push(Tok::Num(0.0));
                    ops.push(tok);
                    continue;
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Star | Tok::Slash => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurCalc> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(n) => st.push(Expr::Num(n)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(expression_invalide)?;
                let a = st.pop().ok_or_else(expression_invalide)?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::Syntaxe("parenthèse inattendue en RPN".into()))
            }
        }
    }

    if st.len() != 1 {
        return Err(expression_invalide());
    }
    Ok(st.pop().unwrap())
}

fn expression_invalide() -> ErreurCalc {
    ErreurCalc::Syntaxe("expression invalide".into())
}
