//! Application-wide constants and default values

use egui::Color32;

/// File name of the JSON document collection holding persisted primitives
pub const COLLECTION_FILE_NAME: &str = "primitive_objects.json";

/// Directory name under the user data dir where the default collection lives
pub const APP_DATA_DIR: &str = "scenebox";

/// Version string written into the collection file header
pub const COLLECTION_VERSION: &str = "1.0";

/// Creator string written into the collection file header
pub const COLLECTION_CREATOR: &str = "Scenebox 0.1";

/// Decimal places used when displaying numeric fields in the editor
pub const DISPLAY_DECIMALS: i32 = 5;

/// Primitive defaults
pub mod primitive {
    use super::Color32;

    /// Default diffuse color for new primitives (mid gray)
    pub const DEFAULT_DIFFUSE: Color32 = Color32::from_rgb(0xa0, 0xa0, 0xa4);

    /// Default cube extents (length, width, height)
    pub const DEFAULT_CUBE_EXTENTS: [f32; 3] = [1.0, 1.0, 1.0];

    /// Default sphere radius
    pub const DEFAULT_SPHERE_RADIUS: f32 = 2.0;

    /// Uniform render scale applied to new scene nodes
    pub const DEFAULT_NODE_SCALE: f32 = 1.3;

    /// Uniform render scale applied to cube scene nodes
    pub const CUBE_NODE_SCALE: f32 = 4.0;
}

/// Viewport camera defaults
pub mod camera {
    /// Initial distance from the orbit target
    pub const DEFAULT_DISTANCE: f32 = 20.0;

    /// Vertical field of view in degrees
    pub const FOV_Y_DEGREES: f32 = 45.0;

    /// Near clip plane
    pub const Z_NEAR: f32 = 0.1;

    /// Far clip plane
    pub const Z_FAR: f32 = 1000.0;

    /// Drag sensitivity for camera orbit (radians per pixel)
    pub const ORBIT_SENSITIVITY: f32 = 0.01;

    /// Scroll sensitivity for camera zoom
    pub const ZOOM_SENSITIVITY: f32 = 0.02;
}

/// UI sizing constants
pub mod ui {
    use super::Color32;

    /// Width of the left (object list) and right (properties) side panels
    pub const SIDE_PANEL_WIDTH: f32 = 300.0;

    /// Width of a single numeric edit field
    pub const NUMERIC_FIELD_WIDTH: f32 = 64.0;

    /// Viewport clear color
    pub const VIEWPORT_CLEAR_COLOR: Color32 = Color32::from_rgb(0x4d, 0x4d, 0x4f);

    /// Click-to-select radius around a projected primitive center, in pixels
    pub const PICK_RADIUS: f32 = 14.0;
}
