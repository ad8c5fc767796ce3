//! Scenebox - an interactive 3D primitive scene editor
//!
//! Persisted primitives are restored before the window opens; a missing or
//! corrupt collection file is fatal (the default file is created explicitly
//! on first launch).

use log::{error, info};
use scenebox::persistence::{default_collection_path, Collection};
use scenebox::scene::PrimitiveStore;
use scenebox::SceneboxApp;

/// Open the default collection, creating it on first launch only
fn bootstrap_collection() -> Result<Collection, String> {
    let path = default_collection_path()?;
    if path.exists() {
        return Collection::open(&path);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create data directory {}: {}", parent.display(), e))?;
    }
    info!("creating new scene collection at {}", path.display());
    Collection::create(&path)
}

/// Application entry point.
fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let collection = match bootstrap_collection() {
        Ok(collection) => collection,
        Err(e) => {
            error!("cannot start: {}", e);
            std::process::exit(1);
        }
    };

    let mut store = PrimitiveStore::new(collection);
    store.restore_all();
    info!(
        "restored {} primitive(s) from {}",
        store.len(),
        store.collection().path().display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scenebox",
        options,
        Box::new(|_cc| Ok(Box::new(SceneboxApp::new(store)))),
    )
}
