//! Machine : possède UN état, applique `transition`, journalise.
//!
//! `envoyer` prend `&mut self` : un évènement est entièrement traité avant le suivant.

use super::erreur::ErreurEvenement;
use super::etat::EtatCalc;
use super::evenement::Evenement;
use super::transition::transition;

#[derive(Clone, Debug, Default)]
pub struct Machine {
    etat: EtatCalc,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    /// Dispatch typé.
    pub fn envoyer(&mut self, evt: Evenement) -> &EtatCalc {
        let avant = self.etat.phase;
        self.etat = transition(std::mem::take(&mut self.etat), evt);

        tracing::debug!(
            evenement = evt.nom(),
            charge = ?evt,
            avant = ?avant,
            apres = ?self.etat.phase,
            affichage = %self.etat.affichage,
            "évènement traité"
        );

        &self.etat
    }

    /// Dispatch par nom (`NUMBER`, `OPERATOR`, ...). Entrée refusée => état inchangé.
    pub fn envoyer_nom(
        &mut self,
        nom: &str,
        charge: Option<&str>,
    ) -> Result<&EtatCalc, ErreurEvenement> {
        match Evenement::depuis_nom(nom, charge) {
            Ok(evt) => Ok(self.envoyer(evt)),
            Err(e) => {
                tracing::warn!(nom, ?charge, erreur = %e, "évènement refusé");
                Err(e)
            }
        }
    }

    /// Libellé de touche (pavé de la vue).
    pub fn envoyer_touche(&mut self, touche: &str) -> Result<&EtatCalc, ErreurEvenement> {
        match Evenement::depuis_touche(touche) {
            Ok(evt) => Ok(self.envoyer(evt)),
            Err(e) => {
                tracing::warn!(touche, erreur = %e, "touche refusée");
                Err(e)
            }
        }
    }
}
