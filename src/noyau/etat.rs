//! État de la machine (contexte + phase).
//!
//! Contrats :
//! - `affichage` correspond toujours à la valeur en saisie OU au dernier résultat.
//! - au plus un opérateur en attente.
//! - `EtatCalc::default()` est l’état initial ; C y ramène depuis n’importe où.

use serde::Serialize;

use super::erreur::ErreurCalcul;
use super::evenement::Operateur;
use super::format::valeur_saisie;

/// Affichage au démarrage (et après C).
pub const AFFICHAGE_INITIAL: &str = "0";

/// Sentinelle affichée après division par zéro / dépassement.
pub const AFFICHAGE_ERREUR: &str = "Erreur";

/// Où en est la saisie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Saisie de l’opérande 1.
    #[default]
    Saisie1,
    /// Opérateur choisi, opérande 2 pas encore commencé.
    OperateurChoisi,
    /// Saisie de l’opérande 2.
    Saisie2,
    /// L’affichage montre un résultat calculé.
    Resultat,
    /// L’affichage montre la sentinelle d’erreur.
    Erreur,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    pub affichage: String,
    pub operande1: f64,
    pub operande2: f64,
    pub operateur: Option<Operateur>,
    pub a_virgule: bool,
    pub phase: Phase,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            operande1: 0.0,
            operande2: 0.0,
            operateur: None,
            a_virgule: false,
            phase: Phase::Saisie1,
        }
    }
}

impl EtatCalc {
    pub fn est_initial(&self) -> bool {
        *self == Self::default()
    }

    pub fn est_erreur(&self) -> bool {
        self.phase == Phase::Erreur
    }

    /// Recopie la saisie courante dans l’opérande qui la reçoit.
    /// Saisie non finie => erreur, opérandes inchangés.
    pub(crate) fn synchronise_operande(&mut self) -> Result<(), ErreurCalcul> {
        let v = valeur_saisie(&self.affichage)?;
        match self.phase {
            Phase::Saisie1 => self.operande1 = v,
            Phase::Saisie2 => self.operande2 = v,
            _ => {}
        }
        Ok(())
    }
}
