// src/console.rs
//
// Frontaux texte (natif seulement) : évaluation ponctuelle et REPL.
// Mêmes entrées, même pipeline que la fenêtre — seul l'affichage change.

use std::io::{self, BufRead, Write};

use crate::noyau;

/// Évalue une seule expression et imprime le résultat formaté.
/// Retourne false (et imprime sur stderr) en cas d'erreur.
pub fn executer_ponctuel(expr: &str) -> bool {
    match noyau::evaluer_expression(expr) {
        Ok((_valeur, affichage)) => {
            println!("{affichage}");
            true
        }
        Err(e) => {
            eprintln!("Erreur: {e}");
            false
        }
    }
}

/// Boucle interactive : une expression par ligne, Ctrl+D pour quitter.
pub fn executer_repl() {
    println!("Calculatrice de poche — REPL. Opérations: + - * / ( ) . %");
    println!("Ctrl+D pour quitter.");

    let stdin = io::stdin();
    let mut lignes = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let ligne = match lignes.next() {
            Some(Ok(l)) => l,
            // fin d'entrée ou erreur de lecture : on sort proprement
            _ => {
                println!();
                break;
            }
        };

        let s = ligne.trim();
        if s.is_empty() {
            continue;
        }

        match noyau::evaluer_expression(s) {
            Ok((_valeur, affichage)) => println!("{affichage}"),
            Err(e) => println!("Erreur: {e}"),
        }
    }
}
