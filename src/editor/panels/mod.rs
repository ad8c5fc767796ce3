//! Editor panels: object list (left), properties (right), viewport (center)

pub mod object_list;
pub mod properties;
pub mod viewport;

pub use object_list::{ListAction, ObjectListPanel};
pub use properties::{PropertiesAction, PropertiesPanel};
pub use viewport::ViewportPanel;
