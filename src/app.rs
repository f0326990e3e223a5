// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + reglages.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Clavier seulement en mode standard : en mode quadratique, les champs a/b/c
//   reçoivent la frappe (sinon double déclenchement).

pub mod etat;
pub mod reglages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{Mode, Touche};

/// Événements clavier de la frame -> touches du pavé.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Touche::Egal),
                    egui::Key::Escape => out.push(Touche::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.mode() == Mode::Standard {
            for t in touches_clavier(ctx) {
                self.touche(t);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
