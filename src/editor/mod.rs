//! Top-level editor application
//!
//! Owns the primitive store and the three panels, tracks the current
//! selection, and hosts the menu bar. All mutations happen synchronously
//! inside the egui update pass.

pub mod panels;

use crate::constants::ui::SIDE_PANEL_WIDTH;
use crate::persistence::Collection;
use crate::scene::{PrimitiveId, PrimitiveStore};
use log::{error, info};
use panels::{ListAction, ObjectListPanel, PropertiesAction, PropertiesPanel, ViewportPanel};

/// The Scenebox application shell
pub struct SceneboxApp {
    store: PrimitiveStore,
    selected: Option<PrimitiveId>,
    object_list: ObjectListPanel,
    properties: PropertiesPanel,
    viewport: ViewportPanel,
}

impl SceneboxApp {
    /// Wrap an already-restored store in the application shell
    pub fn new(store: PrimitiveStore) -> Self {
        Self {
            store,
            selected: None,
            object_list: ObjectListPanel::new(),
            properties: PropertiesPanel::new(),
            viewport: ViewportPanel::new(),
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open…").clicked() {
                        ui.close_menu();
                        self.open_scene();
                    }
                    if ui.button("Save As…").clicked() {
                        ui.close_menu();
                        self.save_scene_as();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    /// Open another collection file and rebuild the scene from it
    fn open_scene(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return; // user cancelled
        };

        match Collection::open(&path) {
            Ok(collection) => {
                info!("opened scene collection {}", path.display());
                let mut store = PrimitiveStore::new(collection);
                store.restore_all();
                self.store = store;
                self.selected = None;
            }
            Err(e) => error!("failed to open scene: {}", e),
        }
    }

    /// Re-home the collection to a new file chosen by the user
    fn save_scene_as(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return; // user cancelled
        };

        if let Err(e) = self.store.collection_mut().save_as(&path) {
            error!("failed to save scene as {}: {}", path.display(), e);
        } else {
            info!("scene collection now at {}", path.display());
        }
    }
}

impl eframe::App for SceneboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);

        egui::SidePanel::left("object_list")
            .default_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                match self.object_list.ui(ui, &mut self.store, self.selected) {
                    ListAction::Created(id) | ListAction::Selected(id) => {
                        self.selected = Some(id);
                    }
                    ListAction::None => {}
                }
            });

        egui::SidePanel::right("properties")
            .default_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                match self.properties.ui(ui, &mut self.store, self.selected) {
                    PropertiesAction::Deleted => self.selected = None,
                    PropertiesAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(id) = self.viewport.ui(ui, &self.store, self.selected) {
                self.selected = Some(id);
            }
        });
    }
}
