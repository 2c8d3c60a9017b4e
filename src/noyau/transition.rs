//! Noyau : transition pure `(EtatCalc, Evenement) -> EtatCalc`
//!
//! Une fonction par évènement, chacune découpée par phase :
//!
//! | phase            | chiffre / "."      | opérateur         | =                 |
//! |------------------|--------------------|-------------------|-------------------|
//! | Saisie1          | ajoute             | fige opérande 1   | résultat = saisie |
//! | OperateurChoisi  | démarre opérande 2 | remplace          | abandonne l’op    |
//! | Saisie2          | ajoute             | enchaîne (calcul) | calcule           |
//! | Resultat         | repart de zéro     | reprend résultat  | rien              |
//! | Erreur           | repart de zéro     | rien              | rien              |
//!
//! Division par zéro / résultat non fini : phase Erreur + affichage "Erreur".

use super::erreur::ErreurCalcul;
use super::etat::{EtatCalc, Phase, AFFICHAGE_ERREUR, AFFICHAGE_INITIAL};
use super::evenement::{Evenement, Operateur};
use super::format::{format_nombre, valeur_saisie};

/// Applique un évènement. Ne panique jamais, aucun effet de bord hors journal.
pub fn transition(etat: EtatCalc, evt: Evenement) -> EtatCalc {
    match evt {
        Evenement::Chiffre(d) => chiffre(etat, d),
        Evenement::Operateur(op) => operateur(etat, op),
        Evenement::Virgule => virgule(etat),
        Evenement::Pourcentage => pourcentage(etat),
        Evenement::EffacerEntree => effacer_entree(etat),
        Evenement::EffacerTout => EtatCalc::default(),
        Evenement::Egal => egal(etat),
    }
}

/* ------------------------ Saisie ------------------------ */

fn chiffre(mut e: EtatCalc, d: u8) -> EtatCalc {
    // Filtré en amont (Evenement::chiffre) ; ici : no-op.
    if d > 9 {
        return e;
    }
    let c = char::from(b'0' + d);

    match e.phase {
        Phase::Resultat | Phase::Erreur => {
            e = EtatCalc::default();
            e.affichage = c.to_string();
        }
        Phase::OperateurChoisi => {
            e.phase = Phase::Saisie2;
            e.affichage = c.to_string();
            e.a_virgule = false;
        }
        Phase::Saisie1 | Phase::Saisie2 => {
            // "0" puis 7 => "7" (pas de zéros de tête)
            if e.affichage == AFFICHAGE_INITIAL {
                e.affichage = c.to_string();
            } else {
                e.affichage.push(c);
            }
        }
    }

    synchronise(e)
}

fn virgule(mut e: EtatCalc) -> EtatCalc {
    match e.phase {
        Phase::Resultat | Phase::Erreur => {
            e = EtatCalc::default();
            e.affichage = "0.".to_string();
        }
        Phase::OperateurChoisi => {
            e.phase = Phase::Saisie2;
            e.affichage = "0.".to_string();
        }
        Phase::Saisie1 | Phase::Saisie2 => {
            if e.a_virgule {
                return e;
            }
            e.affichage.push('.');
        }
    }

    e.a_virgule = true;
    synchronise(e)
}

fn pourcentage(mut e: EtatCalc) -> EtatCalc {
    match e.phase {
        Phase::Saisie1 | Phase::Saisie2 => {
            let v = match valeur_saisie(&e.affichage) {
                Ok(v) => v / 100.0,
                Err(err) => return etat_erreur(err),
            };
            e.affichage = format_nombre(v);
            e.a_virgule = e.affichage.contains('.');
            return synchronise(e);
        }
        Phase::Resultat => {
            e.operande1 /= 100.0;
            e.affichage = format_nombre(e.operande1);
        }
        // rien en cours de saisie
        Phase::OperateurChoisi | Phase::Erreur => {}
    }
    e
}

/* ------------------------ Effacement ------------------------ */

fn effacer_entree(mut e: EtatCalc) -> EtatCalc {
    match e.phase {
        Phase::Saisie1 | Phase::Saisie2 => {
            e.affichage = AFFICHAGE_INITIAL.to_string();
            e.a_virgule = false;
            synchronise(e)
        }
        Phase::OperateurChoisi => e,
        Phase::Resultat | Phase::Erreur => EtatCalc::default(),
    }
}

/* ------------------------ Opérateurs / égal ------------------------ */

fn operateur(mut e: EtatCalc, op: Operateur) -> EtatCalc {
    match e.phase {
        Phase::Saisie1 => match valeur_saisie(&e.affichage) {
            Ok(v) => e.operande1 = v,
            Err(err) => return etat_erreur(err),
        },
        // Remplacé sans être appliqué : pas d’opérande 2.
        Phase::OperateurChoisi => {}
        Phase::Saisie2 => match calcule(&e) {
            Ok(r) => {
                e.operande1 = r;
                e.affichage = format_nombre(r);
            }
            Err(err) => return etat_erreur(err),
        },
        Phase::Resultat => {}
        Phase::Erreur => return e,
    }

    e.operateur = Some(op);
    e.operande2 = 0.0;
    e.a_virgule = false;
    e.phase = Phase::OperateurChoisi;
    e
}

fn egal(mut e: EtatCalc) -> EtatCalc {
    match e.phase {
        // la saisie devient résultat
        Phase::Saisie1 => match valeur_saisie(&e.affichage) {
            Ok(v) => {
                e.operande1 = v;
                e.affichage = format_nombre(v);
            }
            Err(err) => return etat_erreur(err),
        },
        // l’opérateur est abandonné
        Phase::OperateurChoisi => {
            e.affichage = format_nombre(e.operande1);
        }
        Phase::Saisie2 => match calcule(&e) {
            Ok(r) => {
                e.operande1 = r;
                e.affichage = format_nombre(r);
            }
            Err(err) => return etat_erreur(err),
        },
        Phase::Resultat | Phase::Erreur => return e,
    }

    e.operande2 = 0.0;
    e.operateur = None;
    e.a_virgule = false;
    e.phase = Phase::Resultat;
    e
}

/// operande1 ∘ operande2 (sans opérateur : la saisie elle-même).
fn calcule(e: &EtatCalc) -> Result<f64, ErreurCalcul> {
    match e.operateur {
        Some(op) => op.appliquer(e.operande1, e.operande2),
        None => Ok(e.operande2),
    }
}

/// Relit la saisie dans l’opérande courant ; saisie non finie => Erreur.
fn synchronise(mut e: EtatCalc) -> EtatCalc {
    match e.synchronise_operande() {
        Ok(()) => e,
        Err(err) => etat_erreur(err),
    }
}

fn etat_erreur(err: ErreurCalcul) -> EtatCalc {
    tracing::warn!(erreur = %err, "calcul refusé");
    EtatCalc {
        affichage: AFFICHAGE_ERREUR.to_string(),
        phase: Phase::Erreur,
        ..EtatCalc::default()
    }
}
