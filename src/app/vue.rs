// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : saisie directe dans le champ, Enter évalue (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Flash : fond de l'écran surligné tant que l'accusé de réception court
//
// Note :
// - La vue ne calcule rien : elle transmet les événements à etat.rs et relit
//   l'affichage + la ligne d'historique.

use eframe::egui;

use super::etat::{AppCalc, Mode};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Ligne d'historique : expression précédente + " =" (hauteur stable)
        let hist = if self.ligne_historique().is_empty() {
            " "
        } else {
            self.ligne_historique()
        };
        ui.label(egui::RichText::new(hist).monospace().weak());

        // Fond surligné pendant le flash
        let fond = if self.flash_actif() {
            ui.visuals().selection.bg_fill
        } else {
            ui.visuals().extreme_bg_color
        };

        egui::Frame::group(ui.style()).fill(fond).show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            if self.mode == Mode::Erreur {
                // Jeton d'erreur : lecture seule jusqu'à l'effacement auto
                ui.colored_label(ui.visuals().error_fg_color, self.affichage());
                return;
            }

            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.entree)
                    .desired_width(ui.available_width())
                    .hint_text("Ex: 2*(3+4), 12.5%+3")
                    .id_source("ecran_edit")
                    .code_editor(),
            );

            // Si on a cliqué un bouton (pavé / AC / DEL / =), on redonne le focus
            if self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            // Saisie directe : même contrat qu'un ajout (historique + échéances tombent)
            if resp.changed() {
                self.marquer_edition();
            }

            // --- Clavier : Enter évalue (seulement si le champ est focus) ---
            // On évite les déclenchements “globaux” quand l'utilisateur clique ailleurs.
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.has_focus() && enter {
                let maintenant = ui.input(|i| i.time);
                self.evaluer(maintenant);
            }
        });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let taille = egui::vec2(64.0, 40.0);

        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "AC", "Efface tout", Action::Effacer, taille);
                self.bouton_action(
                    ui,
                    "DEL",
                    "Retire le dernier caractère",
                    Action::RetirerDernier,
                    taille,
                );
                self.bouton_jeton(ui, "%", "%", taille);
                self.bouton_jeton(ui, "÷", "/", taille);
                ui.end_row();

                self.bouton_jeton(ui, "7", "7", taille);
                self.bouton_jeton(ui, "8", "8", taille);
                self.bouton_jeton(ui, "9", "9", taille);
                self.bouton_jeton(ui, "×", "*", taille);
                ui.end_row();

                self.bouton_jeton(ui, "4", "4", taille);
                self.bouton_jeton(ui, "5", "5", taille);
                self.bouton_jeton(ui, "6", "6", taille);
                self.bouton_jeton(ui, "−", "-", taille);
                ui.end_row();

                self.bouton_jeton(ui, "1", "1", taille);
                self.bouton_jeton(ui, "2", "2", taille);
                self.bouton_jeton(ui, "3", "3", taille);
                self.bouton_jeton(ui, "+", "+", taille);
                ui.end_row();

                self.bouton_jeton(ui, "(", "(", taille);
                self.bouton_jeton(ui, "0", "0", taille);
                self.bouton_jeton(ui, ")", ")", taille);
                self.bouton_action(ui, "=", "Évalue l'expression", Action::Evaluer, taille);
                ui.end_row();

                self.bouton_jeton(ui, ".", ".", taille);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /* ------------------------ Boutons ------------------------ */

    /// Bouton qui ajoute un jeton au tampon (le libellé peut différer du
    /// jeton inséré : ÷ insère "/", × insère "*", − insère "-").
    fn bouton_jeton(&mut self, ui: &mut egui::Ui, label: &str, jeton: &str, taille: egui::Vec2) {
        if ui.add_sized(taille, egui::Button::new(label)).clicked() {
            self.ajouter_jeton(jeton);
        }
    }

    fn bouton_action(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        action: Action,
        taille: egui::Vec2,
    ) {
        let resp = ui
            .add_sized(taille, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::RetirerDernier => self.retirer_dernier(),
                Action::Evaluer => {
                    let maintenant = ui.input(|i| i.time);
                    self.evaluer(maintenant);
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    RetirerDernier,
    Evaluer,
}
