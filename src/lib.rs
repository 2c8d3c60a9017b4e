//! Calculatrice à états : noyau réutilisable (sans UI).
//!
//! La vue egui (binaire) ne fait que relayer des touches à `noyau::Machine`.

pub mod noyau;
