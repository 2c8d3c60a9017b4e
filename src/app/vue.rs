// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage aligné à droite + pavé 4 colonnes
// - Panneau "État" : instantané JSON de la machine (débogage)
//
// Note :
// - Aucune règle de calcul ici : chaque clic => AppCalc::appuyer(libellé)

use eframe::egui;

use super::etat::AppCalc;

/// Pavé (ligne par ligne). "C" occupe deux colonnes.
const PAVE: [&[&str]; 5] = [
    &["C", "CE", "/"],
    &["7", "8", "9", "x"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "=", "%"],
];

const TOUCHE: [f32; 2] = [56.0, 40.0];
const ECART: f32 = 8.0;
const TAILLE_AFFICHAGE: f32 = 32.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ECART, ECART);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_etat(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let largeur = 4.0 * TOUCHE[0] + 3.0 * ECART;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(largeur);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut texte = egui::RichText::new(self.affichage())
                        .monospace()
                        .size(TAILLE_AFFICHAGE);
                    if self.en_erreur() {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for ligne in PAVE {
            ui.horizontal(|ui| {
                for &touche in ligne {
                    self.bouton(ui, touche);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        let (taille, bouton) = if touche == "C" {
            // deux colonnes + l’écart entre elles
            (
                [2.0 * TOUCHE[0] + ECART, TOUCHE[1]],
                egui::Button::new(touche).fill(egui::Color32::from_rgb(0x35, 0x72, 0xdb)),
            )
        } else {
            (TOUCHE, egui::Button::new(touche))
        };

        if ui.add_sized(taille, bouton).clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_etat(&mut self, ui: &mut egui::Ui) {
        let resp = egui::CollapsingHeader::new("État")
            .default_open(self.voir_etat)
            .show(ui, |ui| {
                let json = self.instantane();
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.monospace(json);
                    });
            });

        self.voir_etat = resp.fully_open();
    }
}
