//! Object list panel
//!
//! Create buttons plus an ordered list of every primitive in the scene.
//! Selecting an entry activates the properties editor for that primitive.

use crate::scene::{PrimitiveId, PrimitiveKind, PrimitiveStore};
use egui::ScrollArea;
use log::error;

/// What the user did in the object list this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListAction {
    None,
    /// A new primitive was created (and should become the selection)
    Created(PrimitiveId),
    /// An existing entry was clicked
    Selected(PrimitiveId),
}

/// Left-hand panel: create buttons and the scene object list
pub struct ObjectListPanel;

impl ObjectListPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        store: &mut PrimitiveStore,
        selected: Option<PrimitiveId>,
    ) -> ListAction {
        let mut action = ListAction::None;

        if ui.button("Create Cube").clicked() {
            match store.create(PrimitiveKind::Cube) {
                Ok(id) => action = ListAction::Created(id),
                Err(e) => error!("failed to create cube: {}", e),
            }
        }
        if ui.button("Create Sphere").clicked() {
            match store.create(PrimitiveKind::Sphere) {
                Ok(id) => action = ListAction::Created(id),
                Err(e) => error!("failed to create sphere: {}", e),
            }
        }

        ui.separator();

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for &id in store.ids().to_vec().iter() {
                let name = match store.get(id) {
                    Some(primitive) => primitive.name.clone(),
                    None => continue,
                };
                let is_selected = selected == Some(id);
                if ui.selectable_label(is_selected, name).clicked() {
                    action = ListAction::Selected(id);
                }
            }
        });

        action
    }
}

impl Default for ObjectListPanel {
    fn default() -> Self {
        Self::new()
    }
}
