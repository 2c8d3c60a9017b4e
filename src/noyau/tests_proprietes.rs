//! Propriétés (proptest) : séquences d’évènements arbitraires, bornées.
//!
//! Invariants vérifiés :
//! - C ramène à l’état initial depuis n’importe quel état atteignable
//! - chiffres consécutifs => affichage = concaténation (une seule virgule)
//! - deux opérateurs de suite == le second seul
//! - "=" répété sans nouvelle saisie ne change rien
//! - affichage "Erreur" <=> phase Erreur ; jamais vide, jamais "NaN"/"inf"
//! - en saisie, l’affichage se relit exactement en l’opérande courant (y compris > 300 chiffres)

use proptest::prelude::*;

use super::format::valeur_saisie;
use super::transition::transition;
use super::{EtatCalc, Evenement, Operateur, Phase, AFFICHAGE_ERREUR};

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

fn evenement() -> impl Strategy<Value = Evenement> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Evenement::Chiffre),
        2 => operateur().prop_map(Evenement::Operateur),
        1 => Just(Evenement::Virgule),
        1 => Just(Evenement::Pourcentage),
        1 => Just(Evenement::EffacerEntree),
        1 => Just(Evenement::EffacerTout),
        1 => Just(Evenement::Egal),
    ]
}

fn rejouer(evts: &[Evenement]) -> EtatCalc {
    evts.iter().fold(EtatCalc::default(), |e, &evt| transition(e, evt))
}

/// Invariants valables après chaque évènement.
fn verifie_coherence(e: &EtatCalc) -> Result<(), TestCaseError> {
    prop_assert!(!e.affichage.is_empty());
    prop_assert_eq!(e.affichage == AFFICHAGE_ERREUR, e.phase == Phase::Erreur);
    prop_assert!(!e.affichage.contains("NaN") && !e.affichage.contains("inf"));
    prop_assert!(e.affichage.matches('.').count() <= 1);
    prop_assert!(e.operande1.is_finite() && e.operande2.is_finite());

    // en saisie : le texte affiché se relit exactement en l’opérande courant
    match e.phase {
        Phase::Saisie1 => {
            prop_assert_eq!(e.a_virgule, e.affichage.contains('.'));
            prop_assert_eq!(valeur_saisie(&e.affichage), Ok(e.operande1));
        }
        Phase::Saisie2 => {
            prop_assert_eq!(e.a_virgule, e.affichage.contains('.'));
            prop_assert_eq!(valeur_saisie(&e.affichage), Ok(e.operande2));
        }
        _ => prop_assert!(!e.a_virgule),
    }

    if e.phase == Phase::Saisie1 || e.phase == Phase::Resultat {
        prop_assert_eq!(e.operateur, None);
    } else if e.phase != Phase::Erreur {
        prop_assert!(e.operateur.is_some());
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_effacer_tout_reinitialise(evts in prop::collection::vec(evenement(), 0..40)) {
        let e = transition(rejouer(&evts), Evenement::EffacerTout);
        prop_assert!(e.est_initial());
    }

    #[test]
    fn prop_chiffres_concatenes(
        tete in 1u8..=9,
        avant in prop::collection::vec(0u8..=9, 0..8),
        apres in prop::option::of(prop::collection::vec(0u8..=9, 0..6)),
    ) {
        let mut evts = vec![Evenement::Chiffre(tete)];
        let mut attendu = tete.to_string();

        evts.extend(avant.iter().map(|&d| Evenement::Chiffre(d)));
        attendu.extend(avant.iter().map(|d| char::from(b'0' + d)));

        if let Some(apres) = apres {
            evts.push(Evenement::Virgule);
            attendu.push('.');
            evts.extend(apres.iter().map(|&d| Evenement::Chiffre(d)));
            attendu.extend(apres.iter().map(|d| char::from(b'0' + d)));
        }

        let e = rejouer(&evts);
        prop_assert_eq!(&e.affichage, &attendu);
        prop_assert_eq!(e.phase, Phase::Saisie1);
    }

    #[test]
    fn prop_second_operateur_remplace(
        prefixe in prop::collection::vec(evenement(), 0..20),
        premier in operateur(),
        second in operateur(),
    ) {
        let base = rejouer(&prefixe);
        let deux = transition(
            transition(base.clone(), Evenement::Operateur(premier)),
            Evenement::Operateur(second),
        );
        let un = transition(base, Evenement::Operateur(second));
        prop_assert_eq!(deux, un);
    }

    #[test]
    fn prop_egal_idempotent(evts in prop::collection::vec(evenement(), 0..40)) {
        let une = transition(rejouer(&evts), Evenement::Egal);
        let deux = transition(une.clone(), Evenement::Egal);
        prop_assert_eq!(une.operateur, None);
        prop_assert_eq!(deux, une);
    }

    #[test]
    fn prop_affichage_coherent(evts in prop::collection::vec(evenement(), 0..60)) {
        let mut e = EtatCalc::default();
        for evt in evts {
            e = transition(e, evt);
            verifie_coherence(&e)?;
        }
    }

    #[test]
    fn prop_saisie_tres_longue(
        prefixe in prop::collection::vec(evenement(), 0..10),
        n in 280usize..340,
        fin in evenement(),
    ) {
        let mut e = rejouer(&prefixe);
        let suite = std::iter::repeat(Evenement::Chiffre(9)).take(n);
        for evt in suite.chain(std::iter::once(fin)) {
            e = transition(e, evt);
            verifie_coherence(&e)?;
        }
    }
}
