//! Erreurs du noyau.
//!
//! Deux familles :
//! - `ErreurEvenement` : entrée refusée AVANT l’envoi à la machine (touche, nom, charge).
//! - `ErreurCalcul`    : échec arithmétique au moment d’appliquer l’opérateur.
//!
//! Aucune des deux n’est fatale : la machine reste dans un état valide.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEvenement {
    #[error("chiffre invalide : {0} (attendu 0..=9)")]
    ChiffreInvalide(u8),

    #[error("opérateur inconnu : {0:?}")]
    OperateurInconnu(String),

    #[error("touche inconnue : {0:?}")]
    ToucheInconnue(String),

    #[error("évènement inconnu : {0:?}")]
    EvenementInconnu(String),

    #[error("charge manquante pour {0}")]
    ChargeManquante(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat ou saisie non fini (±inf, NaN).
    #[error("dépassement de capacité")]
    Depassement,

    #[error("saisie illisible : {0:?}")]
    SaisieIllisible(String),
}
