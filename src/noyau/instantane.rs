// src/noyau/instantane.rs
//
// Instantané de l’état pour le panneau de débogage.
// Forme : { "etat": <phase>, "contexte": { ... } }
// Champs choisis explicitement (pas de reflet brut de la structure interne).

use serde::Serialize;

use super::etat::{EtatCalc, Phase};
use super::evenement::Operateur;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Instantane {
    pub etat: Phase,
    pub contexte: Contexte,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contexte {
    pub affichage: String,
    pub operande1: f64,
    pub operande2: f64,
    pub operateur: Option<Operateur>,
    pub a_virgule: bool,
}

impl Instantane {
    pub fn depuis(e: &EtatCalc) -> Self {
        Self {
            etat: e.phase,
            contexte: Contexte {
                affichage: e.affichage.clone(),
                operande1: e.operande1,
                operande2: e.operande2,
                operateur: e.operateur,
                a_virgule: e.a_virgule,
            },
        }
    }
}

/// JSON indenté (2 espaces).
pub fn instantane_json(e: &EtatCalc) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Instantane::depuis(e))
}
