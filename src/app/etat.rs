//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la machine du noyau et relayer les touches du pavé.
//!
//! Contrats :
//! - Aucune règle de calcul ici : tout passe par `noyau::Machine`.
//! - Une touche refusée ne change rien (journalisée par la machine).

use calculatrice_etats::noyau::{instantane_json, Machine};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub machine: Machine,

    // --- UX ---
    /// Panneau "État" (instantané JSON) déplié.
    pub voir_etat: bool,
}

impl AppCalc {
    /// Relaye une touche du pavé vers la machine.
    pub fn appuyer(&mut self, touche: &str) {
        // refus déjà journalisé côté machine
        let _ = self.machine.envoyer_touche(touche);
    }

    pub fn affichage(&self) -> &str {
        self.machine.affichage()
    }

    pub fn en_erreur(&self) -> bool {
        self.machine.etat().est_erreur()
    }

    /// Texte du panneau "État".
    pub fn instantane(&self) -> String {
        instantane_json(self.machine.etat())
            .unwrap_or_else(|e| format!("instantané indisponible : {e}"))
    }
}
