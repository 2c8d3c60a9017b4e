// src/noyau/format.rs

use super::erreur::ErreurCalcul;

/* ------------------------ Affichage canonique ------------------------ */

/// f64 -> texte décimal canonique (jamais d’exposant).
/// - plus courte écriture qui se relit à l’identique (Display de f64)
/// - "-0" rendu "0"
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

/* ------------------------ Lecture de la saisie ------------------------ */

/// Texte saisi -> valeur. Accepte un point final ("12." -> 12).
/// Plus de ~309 chiffres => inf => `Depassement`.
pub fn valeur_saisie(s: &str) -> Result<f64, ErreurCalcul> {
    let t = s.trim().trim_end_matches('.');
    if t.is_empty() {
        return Ok(0.0);
    }

    let v = t
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::SaisieIllisible(s.to_string()))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::Depassement)
    }
}
