//! Scénarios de bout en bout : séquences de touches -> affichage attendu.
//!
//! Chaque scénario passe par `Machine::envoyer_touche` (même chemin que la vue).

use super::{Machine, Phase, AFFICHAGE_ERREUR};

fn taper(touches: &[&str]) -> Machine {
    let mut m = Machine::new();
    for t in touches {
        m.envoyer_touche(t)
            .unwrap_or_else(|e| panic!("touche={t:?} err={e}"));
    }
    m
}

fn assert_affiche(touches: &[&str], attendu: &str) {
    let m = taper(touches);
    assert_eq!(m.affichage(), attendu, "touches={touches:?}");
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn addition_simple() {
    assert_affiche(&["5", "+", "3", "="], "8");
}

#[test]
fn decimal_fois_entier() {
    assert_affiche(&["1", ".", "5", "x", "2", "="], "3");
}

#[test]
fn division_par_zero() {
    let m = taper(&["5", "/", "0", "="]);
    assert_eq!(m.affichage(), AFFICHAGE_ERREUR);
    assert_eq!(m.etat().phase, Phase::Erreur);
    assert_eq!(m.etat().operateur, None);
}

#[test]
fn effacer_entree_puis_egal() {
    assert_affiche(&["9", "CE", "4", "="], "4");
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn enchainement_operateurs() {
    // 5 + 3 - : le "-" calcule 8 d’abord
    let m = taper(&["5", "+", "3", "-"]);
    assert_eq!(m.affichage(), "8");
    assert_eq!(m.etat().operande1, 8.0);

    assert_affiche(&["5", "+", "3", "-", "2", "="], "6");
    assert_affiche(&["2", "x", "3", "x", "4", "="], "24");
}

#[test]
fn operateur_remplace() {
    assert_affiche(&["5", "+", "-", "3", "="], "2");
    assert_affiche(&["8", "x", "/", "2", "="], "4");
}

#[test]
fn resultat_reutilise() {
    assert_affiche(&["5", "+", "3", "=", "x", "2", "="], "16");
}

#[test]
fn chiffre_apres_resultat_repart() {
    let m = taper(&["5", "+", "3", "=", "7"]);
    assert_eq!(m.affichage(), "7");
    assert_eq!(m.etat().phase, Phase::Saisie1);
    assert_eq!(m.etat().operande1, 7.0);
}

#[test]
fn resultat_negatif() {
    assert_affiche(&["3", "-", "8", "="], "-5");
}

/* ------------------------ Pourcentage ------------------------ */

#[test]
fn pourcentage_saisie() {
    assert_affiche(&["5", "%"], "0.05");
    assert_affiche(&["2", "0", "0", "+", "1", "0", "%", "="], "200.1");
}

#[test]
fn pourcentage_puis_chiffre() {
    // la saisie continue après la conversion
    assert_affiche(&["5", "%", "3"], "0.053");
}

/* ------------------------ Effacement / erreur ------------------------ */

#[test]
fn effacer_tout() {
    let m = taper(&["7", "x", "6", "C"]);
    assert!(m.etat().est_initial());
}

#[test]
fn reprise_apres_erreur() {
    assert_affiche(&["5", "/", "0", "=", "4", "+", "1", "="], "5");

    let m = taper(&["5", "/", "0", "=", "CE"]);
    assert!(m.etat().est_initial());

    assert_affiche(&["5", "/", "0", "=", "."], "0.");
}

#[test]
fn division_par_zero_en_enchainement() {
    let m = taper(&["5", "/", "0", "+"]);
    assert_eq!(m.affichage(), AFFICHAGE_ERREUR);
}

#[test]
fn virgule_redondante_ignoree() {
    assert_affiche(&["3", ".", ".", "1", ".", "4"], "3.14");
}
