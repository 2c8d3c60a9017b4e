// src/noyau/evenement.rs
//
// Évènements de la machine (union étiquetée) + lecture depuis les touches.
//
// Deux entrées possibles :
// - depuis_touche("7"), depuis_touche("CE")...     (pavé de la vue)
// - depuis_nom("NUMBER", Some("7"))...              (dispatch par nom)
//
// Contrat : tout ce qui sort d’ici est déjà validé (chiffre 0..=9, opérateur connu).

use std::str::FromStr;

use serde::Serialize;

use super::erreur::{ErreurCalcul, ErreurEvenement};

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Operateur {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Moins,
    #[serde(rename = "x")]
    Fois,
    #[serde(rename = "/")]
    Divise,
}

impl Operateur {
    /// a ∘ b. Un résultat non fini est refusé (jamais affiché).
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        let r = match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
        };

        if r.is_finite() {
            Ok(r)
        } else {
            Err(ErreurCalcul::Depassement)
        }
    }
}

impl FromStr for Operateur {
    type Err = ErreurEvenement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operateur::Plus),
            "-" | "−" => Ok(Operateur::Moins),
            "x" | "X" | "*" | "×" => Ok(Operateur::Fois),
            "/" | "÷" => Ok(Operateur::Divise),
            autre => Err(ErreurEvenement::OperateurInconnu(autre.to_string())),
        }
    }
}

/* ------------------------ Évènements ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// NUMBER
    Chiffre(u8),
    /// OPERATOR
    Operateur(Operateur),
    /// DECIMAL_POINT
    Virgule,
    /// PERCENTAGE
    Pourcentage,
    /// CLEAR_ENTRY
    EffacerEntree,
    /// CLEAR_EVERYTHING
    EffacerTout,
    /// EQUALS
    Egal,
}

impl Evenement {
    /// Chiffre validé (0..=9).
    pub fn chiffre(d: u8) -> Result<Self, ErreurEvenement> {
        if d <= 9 {
            Ok(Evenement::Chiffre(d))
        } else {
            Err(ErreurEvenement::ChiffreInvalide(d))
        }
    }

    /// Libellé de touche -> évènement (même découpage que le pavé).
    pub fn depuis_touche(touche: &str) -> Result<Self, ErreurEvenement> {
        let t = touche.trim();

        if let Some(d) = chiffre_seul(t) {
            return Ok(Evenement::Chiffre(d));
        }
        if let Ok(op) = t.parse::<Operateur>() {
            return Ok(Evenement::Operateur(op));
        }

        match t {
            "C" => Ok(Evenement::EffacerTout),
            "CE" => Ok(Evenement::EffacerEntree),
            "." | "," => Ok(Evenement::Virgule),
            "%" => Ok(Evenement::Pourcentage),
            "=" => Ok(Evenement::Egal),
            _ => Err(ErreurEvenement::ToucheInconnue(t.to_string())),
        }
    }

    /// Dispatch par nom : `NUMBER` + "7", `OPERATOR` + "+", etc.
    pub fn depuis_nom(nom: &str, charge: Option<&str>) -> Result<Self, ErreurEvenement> {
        match nom {
            "NUMBER" => {
                let c = charge.ok_or(ErreurEvenement::ChargeManquante("NUMBER"))?;
                let d = c
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| ErreurEvenement::ToucheInconnue(c.to_string()))?;
                Self::chiffre(d)
            }
            "OPERATOR" => {
                let c = charge.ok_or(ErreurEvenement::ChargeManquante("OPERATOR"))?;
                Ok(Evenement::Operateur(c.parse()?))
            }
            "DECIMAL_POINT" => Ok(Evenement::Virgule),
            "PERCENTAGE" => Ok(Evenement::Pourcentage),
            "CLEAR_ENTRY" => Ok(Evenement::EffacerEntree),
            "CLEAR_EVERYTHING" => Ok(Evenement::EffacerTout),
            "EQUALS" => Ok(Evenement::Egal),
            autre => Err(ErreurEvenement::EvenementInconnu(autre.to_string())),
        }
    }

    /// Nom « dispatch » de l’évènement (journal).
    pub fn nom(&self) -> &'static str {
        match self {
            Evenement::Chiffre(_) => "NUMBER",
            Evenement::Operateur(_) => "OPERATOR",
            Evenement::Virgule => "DECIMAL_POINT",
            Evenement::Pourcentage => "PERCENTAGE",
            Evenement::EffacerEntree => "CLEAR_ENTRY",
            Evenement::EffacerTout => "CLEAR_EVERYTHING",
            Evenement::Egal => "EQUALS",
        }
    }
}

fn chiffre_seul(t: &str) -> Option<u8> {
    let mut it = t.chars();
    let c = it.next()?;
    if it.next().is_some() {
        return None;
    }
    c.to_digit(10).map(|d| d as u8)
}
