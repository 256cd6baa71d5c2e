// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le champ a le focus).
// - Les minuteries (effacement auto après erreur, fin du flash) sont des
//   échéances explicites dans etat.rs; ici on les fait avancer et on programme
//   le re-rendu suivant.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // Échéances dues (effacement auto, fin du flash) + re-rendu programmé
        // pour la prochaine, sans attendre un événement d'entrée.
        if let Some(delai) = self.tic(maintenant) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(delai));
        }

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = tout effacer (comme bouton "AC").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.effacer(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
