// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Mode standard : ligne “process”, grand affichage, pavé 4 colonnes
// - Mode quadratique : formulaire a/b/c, bouton Solve, erreur ou résultat
// - La vue ne calcule rien : elle relaie les événements et dessine `Rendu`

use eframe::egui;

use crate::noyau::{Coefficient, Mode, Rendu, Touche, FORMULE};

use super::etat::AppCalc;

/// Taille des touches du pavé.
const TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_bascule(ui);
                ui.add_space(8.0);

                let rendu = self.rendu();
                match rendu.mode {
                    Mode::Standard => self.ui_standard(ui, &rendu),
                    Mode::Quadratique => self.ui_quadratique(ui, &rendu),
                }
            });
    }

    fn ui_bascule(&mut self, ui: &mut egui::Ui) {
        let libelle = match self.mode() {
            Mode::Standard => "Quadratic",
            Mode::Quadratique => "Standard Calc",
        };
        ui.horizontal(|ui| {
            if ui.button(libelle).clicked() {
                self.basculer_mode();
            }
        });
    }

    /* ------------------------ Mode standard ------------------------ */

    fn ui_standard(&mut self, ui: &mut egui::Ui, rendu: &Rendu) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(4.0 * TOUCHE[0] + 18.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&rendu.historique).monospace().weak());
                    ui.label(egui::RichText::new(&rendu.affichage).monospace().size(36.0));
                });
            });

        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use crate::noyau::Operateur::{Divise, Fois, Moins, Plus};

        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", Touche::Effacer);
                self.bouton(ui, "+/-", Touche::Signe);
                self.bouton(ui, "%", Touche::Pourcent);
                self.bouton(ui, "÷", Touche::Operateur(Divise));
                ui.end_row();

                for ligne in [[7, 8, 9], [4, 5, 6], [1, 2, 3]] {
                    for c in ligne {
                        self.bouton(ui, &c.to_string(), Touche::Chiffre(c));
                    }
                    let op = match ligne[0] {
                        7 => Fois,
                        4 => Moins,
                        _ => Plus,
                    };
                    self.bouton(ui, op.symbole(), Touche::Operateur(op));
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Chiffre(0));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let texte = egui::RichText::new(label).size(20.0);
        if ui.add_sized(TOUCHE, egui::Button::new(texte)).clicked() {
            self.touche(touche);
        }
    }

    /* ------------------------ Mode quadratique ------------------------ */

    fn ui_quadratique(&mut self, ui: &mut egui::Ui, rendu: &Rendu) {
        ui.heading("Quadratic Equation Solver");
        ui.label("Solves equations in the form: ax² + bx + c = 0");
        ui.monospace(FORMULE);

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            self.ui_champ(ui, "a", Coefficient::A);
            self.ui_champ(ui, "b", Coefficient::B);
            self.ui_champ(ui, "c", Coefficient::C);
        });

        ui.add_space(6.0);

        if ui
            .add_sized([ui.available_width(), 32.0], egui::Button::new("Solve"))
            .clicked()
        {
            self.resoudre();
        }

        if let Some(erreur) = &rendu.erreur {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, erreur);
        }

        if let Some(resultat) = &rendu.resultat {
            ui.add_space(8.0);
            ui.strong("Result");
            ui.label(resultat);
            if let Some(d) = &rendu.discriminant {
                ui.weak(d);
            }
        }
    }

    fn ui_champ(&mut self, ui: &mut egui::Ui, label: &str, coef: Coefficient) {
        ui.label(label);
        let mut texte = self.champ(coef);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut texte)
                .desired_width(72.0)
                .id_salt(("coef", label)),
        );
        if resp.changed() {
            self.set_champ(coef, texte);
        }
        // Enter dans un champ = Solve
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.resoudre();
        }
    }
}
