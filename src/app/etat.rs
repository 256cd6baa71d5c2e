//! src/app/etat.rs
//!
//! État de session de la calculatrice.
//!
//! Rôle : machine à trois modes (Edition / Resultat / Erreur) possédant le
//! tampon d'expression, la ligne d'historique et les échéances différées
//! (effacement auto après erreur, fin du flash). Toutes les transitions sont
//! synchrones ; la vue ne fait que transmettre les événements et relire l'état.
//!
//! Contrats :
//! - Tout nouvel événement ANNULE les échéances en attente (pas de minuterie
//!   périmée qui écrase un état plus récent).
//! - Horloge = secondes de l'horloge d'entrée egui (f64), valable en natif
//!   comme en wasm.

use tracing::debug;

use crate::noyau;

/// Délai avant effacement automatique de l'écran d'erreur (secondes).
pub const DELAI_EFFACEMENT_ERREUR: f64 = 0.7;

/// Durée du flash d'accusé de réception après un calcul réussi (secondes).
pub const DUREE_FLASH: f64 = 0.15;

/// Jeton affiché à l'écran pendant le mode Erreur.
const JETON_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Le tampon accepte la saisie.
    Edition,
    /// Le tampon contient le dernier résultat formaté (toujours éditable).
    Resultat,
    /// Transitoire : le tampon est forcé au jeton d'erreur.
    Erreur,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- tampon d'expression (éditable, résultat compris) ---
    pub entree: String,

    // --- ligne d'historique : expression précédente + " =" (ou vide) ---
    pub historique: String,

    pub mode: Mode,

    // --- échéances différées (None = aucune en attente) ---
    echeance_erreur: Option<f64>,
    fin_flash: Option<f64>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            historique: String::new(),
            mode: Mode::Edition,
            echeance_erreur: None,
            fin_flash: None,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Événements d'entrée ------------------------ */

    /// Ajoute un jeton (chiffre, opérateur, parenthèse, point, %) au tampon.
    pub fn ajouter_jeton(&mut self, jeton: &str) {
        self.sortir_erreur();
        self.historique.clear();
        self.entree.push_str(jeton);
        self.mode = Mode::Edition;
        self.focus_entree = true;
    }

    /// AC : remise à zéro (tampon + historique), depuis n'importe quel mode.
    pub fn effacer(&mut self) {
        self.annuler_echeances();
        self.entree.clear();
        self.historique.clear();
        self.mode = Mode::Edition;
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère (sans effet si le tampon est vide).
    pub fn retirer_dernier(&mut self) {
        self.sortir_erreur();
        self.historique.clear();
        self.entree.pop();
        self.mode = Mode::Edition;
        self.focus_entree = true;
    }

    /// Saisie directe au clavier dans le champ : même contrat qu'un ajout
    /// (l'historique tombe, les échéances aussi).
    pub fn marquer_edition(&mut self) {
        self.annuler_echeances();
        self.historique.clear();
        self.mode = Mode::Edition;
    }

    /// = : évalue le tampon via le noyau.
    ///
    /// - Tampon vide : sans effet.
    /// - Mode Erreur : sans effet (on n'évalue jamais le jeton forcé).
    /// - Succès : le résultat formaté DEVIENT le tampon (calcul en chaîne),
    ///   l'expression évaluée part dans l'historique, flash bref.
    /// - Échec : jeton d'erreur + effacement auto différé.
    pub fn evaluer(&mut self, maintenant: f64) {
        if self.mode == Mode::Erreur {
            return;
        }

        let expr = self.entree.trim().to_string();
        if expr.is_empty() {
            return;
        }

        self.annuler_echeances();

        match noyau::evaluer_expression(&expr) {
            Ok((valeur, affichage)) => {
                debug!(entree = %expr, valeur, "résultat déposé");
                self.historique = format!("{expr} =");
                self.entree = affichage;
                self.mode = Mode::Resultat;
                self.fin_flash = Some(maintenant + DUREE_FLASH);
            }
            Err(e) => {
                debug!(entree = %expr, erreur = %e, "évaluation échouée");
                self.historique.clear();
                self.entree = JETON_ERREUR.to_string();
                self.mode = Mode::Erreur;
                self.echeance_erreur = Some(maintenant + DELAI_EFFACEMENT_ERREUR);
            }
        }

        self.focus_entree = true;
    }

    /* ------------------------ Minuteries ------------------------ */

    /// Fait tomber les échéances dues ; retourne le délai (secondes) avant la
    /// prochaine échéance restante, pour programmer un re-rendu.
    pub fn tic(&mut self, maintenant: f64) -> Option<f64> {
        if let Some(t) = self.echeance_erreur {
            if maintenant >= t {
                self.echeance_erreur = None;
                self.entree.clear();
                self.historique.clear();
                self.mode = Mode::Edition;
                self.focus_entree = true;
            }
        }

        if let Some(t) = self.fin_flash {
            if maintenant >= t {
                self.fin_flash = None;
            }
        }

        let restes = [self.echeance_erreur, self.fin_flash];
        restes
            .iter()
            .flatten()
            .map(|t| (t - maintenant).max(0.0))
            .fold(None, |acc: Option<f64>, d| {
                Some(acc.map_or(d, |a| a.min(d)))
            })
    }

    /* ------------------------ Lectures (vue) ------------------------ */

    /// Chaîne à afficher à l'écran (tampon courant, jeton d'erreur compris).
    pub fn affichage(&self) -> &str {
        &self.entree
    }

    /// Ligne d'historique (« expression = » ou vide).
    pub fn ligne_historique(&self) -> &str {
        &self.historique
    }

    /// Vrai tant que le flash d'accusé de réception court.
    pub fn flash_actif(&self) -> bool {
        self.fin_flash.is_some()
    }

    /* ------------------------ Interne ------------------------ */

    fn annuler_echeances(&mut self) {
        self.echeance_erreur = None;
        self.fin_flash = None;
    }

    /// Une édition pendant le mode Erreur résout d'abord l'erreur :
    /// tampon vidé, retour en Edition, puis l'édition s'applique.
    fn sortir_erreur(&mut self) {
        if self.mode == Mode::Erreur {
            self.entree.clear();
            self.mode = Mode::Edition;
        }
        self.annuler_echeances();
    }
}
