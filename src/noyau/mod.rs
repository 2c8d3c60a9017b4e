//! Noyau : machine à états de la calculatrice
//!
//! Organisation interne :
//! - evenement.rs  : évènements (union étiquetée) + lecture touche / nom
//! - etat.rs       : EtatCalc + Phase
//! - transition.rs : transition pure (état, évènement) -> état
//! - format.rs     : affichage canonique des nombres
//! - machine.rs    : propriétaire de l’état + journal
//! - instantane.rs : instantané JSON (débogage)
//! - erreur.rs     : erreurs typées

pub mod erreur;
pub mod etat;
pub mod evenement;
pub mod format;
pub mod instantane;
pub mod machine;
pub mod transition;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{ErreurCalcul, ErreurEvenement};
pub use etat::{EtatCalc, Phase, AFFICHAGE_ERREUR};
pub use evenement::{Evenement, Operateur};
pub use instantane::instantane_json;
pub use machine::Machine;
pub use transition::transition;
