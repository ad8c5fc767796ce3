//! Viewport panel
//!
//! Paints a wireframe projection of the scene into the central panel: an
//! orbit camera around the origin, a ground grid, and each primitive's
//! edges stroked with its material color. Clicking near a primitive's
//! projected center selects it.

use crate::constants::camera;
use crate::constants::ui::{PICK_RADIUS, VIEWPORT_CLEAR_COLOR};
use crate::scene::{PrimitiveId, PrimitiveStore, Shape};
use egui::{Color32, Pos2, Rect, Sense, Stroke};
use glam::{Mat4, Vec3};

/// Points sampled per great circle when drawing spheres
const CIRCLE_SEGMENTS: usize = 32;

/// Central panel: orbit camera and wireframe scene view
pub struct ViewportPanel {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: camera::DEFAULT_DISTANCE,
        }
    }

    /// Camera position derived from the orbit angles
    fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        )
    }

    /// Render the viewport. Returns a newly clicked primitive, if any.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        store: &PrimitiveStore,
        selected: Option<PrimitiveId>,
    ) -> Option<PrimitiveId> {
        let response = ui.allocate_response(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, VIEWPORT_CLEAR_COLOR);

        // camera input
        if response.dragged() {
            let delta = response.drag_delta();
            self.yaw -= delta.x * camera::ORBIT_SENSITIVITY;
            self.pitch = (self.pitch + delta.y * camera::ORBIT_SENSITIVITY)
                .clamp(-1.5, 1.5);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                self.distance = (self.distance - scroll * camera::ZOOM_SENSITIVITY)
                    .clamp(2.0, 200.0);
            }
        }

        let aspect = (rect.width() / rect.height()).max(0.01);
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(
            camera::FOV_Y_DEGREES.to_radians(),
            aspect,
            camera::Z_NEAR,
            camera::Z_FAR,
        );
        let view_proj = proj * view;

        self.draw_grid(&painter, rect, view_proj);

        // draw every enabled primitive, selected one with a heavier stroke
        let mut centers: Vec<(PrimitiveId, Pos2)> = Vec::new();
        for &id in store.ids() {
            let Some(primitive) = store.get(id) else {
                continue;
            };
            let Some(node) = store.scene().get(primitive.node) else {
                continue;
            };
            if !node.enabled {
                continue;
            }

            let is_selected = selected == Some(id);
            let stroke = Stroke::new(
                if is_selected { 2.5 } else { 1.0 },
                node.material.diffuse,
            );

            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(node.transform.scale),
                node.transform.rotation,
                node.transform.translation,
            );

            match primitive.shape {
                Shape::Cube {
                    length,
                    width,
                    height,
                } => {
                    draw_cube(&painter, rect, view_proj * model, length, width, height, stroke)
                }
                Shape::Sphere { radius } => {
                    draw_sphere(&painter, rect, view_proj * model, radius, stroke)
                }
            }

            if let Some(center) = project(view_proj, rect, node.transform.translation) {
                if is_selected {
                    painter.circle_filled(center, 3.0, Color32::WHITE);
                }
                centers.push((id, center));
            }
        }

        // click-to-select: nearest projected center within the pick radius
        if response.clicked() {
            if let Some(click) = response.interact_pointer_pos() {
                return nearest_within(&centers, click, PICK_RADIUS);
            }
        }
        None
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: Rect, view_proj: Mat4) {
        let stroke = Stroke::new(1.0, Color32::from_gray(90));
        for i in -5..=5 {
            let offset = i as f32 * 2.0;
            line_3d(
                painter,
                rect,
                view_proj,
                Vec3::new(offset, 0.0, -10.0),
                Vec3::new(offset, 0.0, 10.0),
                stroke,
            );
            line_3d(
                painter,
                rect,
                view_proj,
                Vec3::new(-10.0, 0.0, offset),
                Vec3::new(10.0, 0.0, offset),
                stroke,
            );
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Project a world-space point to screen coordinates, `None` if behind the
/// camera
fn project(view_proj: Mat4, rect: Rect, point: Vec3) -> Option<Pos2> {
    let clip = view_proj * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip / clip.w;
    Some(Pos2::new(
        rect.center().x + ndc.x * rect.width() * 0.5,
        rect.center().y - ndc.y * rect.height() * 0.5,
    ))
}

fn line_3d(
    painter: &egui::Painter,
    rect: Rect,
    view_proj: Mat4,
    a: Vec3,
    b: Vec3,
    stroke: Stroke,
) {
    if let (Some(a), Some(b)) = (project(view_proj, rect, a), project(view_proj, rect, b)) {
        painter.line_segment([a, b], stroke);
    }
}

/// Stroke the 12 edges of a cube. Length maps to the x extent, height to y,
/// width to z.
fn draw_cube(
    painter: &egui::Painter,
    rect: Rect,
    mvp: Mat4,
    length: f32,
    width: f32,
    height: f32,
    stroke: Stroke,
) {
    let half = Vec3::new(length, height, width) * 0.5;
    let corners = [
        Vec3::new(-half.x, -half.y, -half.z),
        Vec3::new(half.x, -half.y, -half.z),
        Vec3::new(half.x, half.y, -half.z),
        Vec3::new(-half.x, half.y, -half.z),
        Vec3::new(-half.x, -half.y, half.z),
        Vec3::new(half.x, -half.y, half.z),
        Vec3::new(half.x, half.y, half.z),
        Vec3::new(-half.x, half.y, half.z),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    for (a, b) in EDGES {
        line_3d(painter, rect, mvp, corners[a], corners[b], stroke);
    }
}

/// Stroke three great circles of a sphere (one per axis plane)
fn draw_sphere(painter: &egui::Painter, rect: Rect, mvp: Mat4, radius: f32, stroke: Stroke) {
    for axis in 0..3 {
        let mut previous: Option<Vec3> = None;
        for segment in 0..=CIRCLE_SEGMENTS {
            let angle = segment as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
            let (sin, cos) = angle.sin_cos();
            let point = match axis {
                0 => Vec3::new(0.0, cos, sin),
                1 => Vec3::new(cos, 0.0, sin),
                _ => Vec3::new(cos, sin, 0.0),
            } * radius;
            if let Some(previous) = previous {
                line_3d(painter, rect, mvp, previous, point, stroke);
            }
            previous = Some(point);
        }
    }
}

fn nearest_within(
    centers: &[(PrimitiveId, Pos2)],
    click: Pos2,
    radius: f32,
) -> Option<PrimitiveId> {
    let mut best: Option<(PrimitiveId, f32)> = None;
    for &(id, center) in centers {
        let distance = center.distance(click);
        if distance <= radius && best.map(|(_, d)| distance < d).unwrap_or(true) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}
