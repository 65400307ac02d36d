// File: crates/scatter-core/src/controls.rs
// Summary: Pan/zoom camera controls with damping, driven by pointer and wheel input.
// Notes:
// - Orbiting is disabled for this chart: the camera always looks straight down -Z,
//   so orbit input is accepted and ignored.
// - Pan accumulates into an offset that `update` drains each frame; with damping
//   only a fraction is applied per frame, which eases the motion out.

use nalgebra::Vector3;

use crate::camera::OrthographicCamera;
use crate::types::{SurfaceSize, Vertex};

const EPS: f64 = 1e-6;

/// Physical pointer buttons the controls understand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// What a drag does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Orbit,
    Zoom,
    Pan,
}

/// Button-to-action assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseButtons {
    pub orbit: PointerButton,
    pub zoom: PointerButton,
    pub pan: PointerButton,
}

impl MouseButtons {
    pub fn action_for(&self, button: PointerButton) -> Option<ControlAction> {
        if button == self.pan {
            Some(ControlAction::Pan)
        } else if button == self.zoom {
            Some(ControlAction::Zoom)
        } else if button == self.orbit {
            Some(ControlAction::Orbit)
        } else {
            None
        }
    }
}

impl Default for MouseButtons {
    fn default() -> Self {
        Self { orbit: PointerButton::Secondary, zoom: PointerButton::Middle, pan: PointerButton::Primary }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    /// Point the camera looks at.
    pub target: Vertex,
    pub enable_damping: bool,
    pub damping_factor: f64,
    pub zoom_speed: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub mouse_buttons: MouseButtons,
    // camera position relative to target; fixed while orbiting is off
    offset: Vertex,
    pan_offset: Vertex,
    zoom_changed: bool,
    active: Option<ControlAction>,
    last_pointer: Option<(f64, f64)>,
}

impl OrbitControls {
    /// Controls for `camera`, targeting the world origin.
    pub fn new(camera: &OrthographicCamera) -> Self {
        let target = Vector3::zeros();
        Self {
            target,
            enable_damping: true,
            damping_factor: 0.8,
            zoom_speed: 1.0,
            min_zoom: 0.0,
            max_zoom: f64::INFINITY,
            mouse_buttons: MouseButtons::default(),
            offset: camera.position - target,
            pan_offset: Vector3::zeros(),
            zoom_changed: false,
            active: None,
            last_pointer: None,
        }
    }

    /// Pan still waiting to be applied by `update`.
    pub fn pending_pan(&self) -> Vertex { self.pan_offset }

    pub fn active_action(&self) -> Option<ControlAction> { self.active }

    fn zoom_scale(&self) -> f64 {
        0.95f64.powf(self.zoom_speed)
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        self.active = match self.mouse_buttons.action_for(button) {
            Some(ControlAction::Orbit) | None => None,
            other => other,
        };
        self.last_pointer = Some((x, y));
    }

    pub fn pointer_up(&mut self) {
        self.active = None;
        self.last_pointer = None;
    }

    /// Feed a pointer position; drags pan or zoom depending on the held button.
    pub fn pointer_move(&mut self, x: f64, y: f64, camera: &mut OrthographicCamera, surface: SurfaceSize) {
        let Some((lx, ly)) = self.last_pointer.replace((x, y)) else { return };
        let (dx, dy) = (x - lx, y - ly);
        match self.active {
            Some(ControlAction::Pan) => self.pan(dx, dy, camera, surface),
            Some(ControlAction::Zoom) => {
                if dy > 0.0 {
                    self.zoom_out(camera);
                } else if dy < 0.0 {
                    self.zoom_in(camera);
                }
            }
            Some(ControlAction::Orbit) | None => {}
        }
    }

    /// Wheel input; negative `delta_y` (scrolling up) zooms in.
    pub fn wheel(&mut self, delta_y: f64, camera: &mut OrthographicCamera) {
        if delta_y < 0.0 {
            self.zoom_in(camera);
        } else if delta_y > 0.0 {
            self.zoom_out(camera);
        }
    }

    /// Queue a pan for a pointer delta in surface pixels; content follows the pointer.
    pub fn pan(&mut self, dx: f64, dy: f64, camera: &OrthographicCamera, surface: SurfaceSize) {
        let w = (surface.width as f64).max(1.0);
        let h = (surface.height as f64).max(1.0);
        let world_x = dx * (camera.right - camera.left) / camera.zoom / w;
        let world_y = dy * (camera.top - camera.bottom) / camera.zoom / h;
        self.pan_offset += Vector3::new(-world_x, world_y, 0.0);
    }

    pub fn zoom_in(&mut self, camera: &mut OrthographicCamera) {
        self.set_zoom(camera, camera.zoom / self.zoom_scale());
    }

    pub fn zoom_out(&mut self, camera: &mut OrthographicCamera) {
        self.set_zoom(camera, camera.zoom * self.zoom_scale());
    }

    fn set_zoom(&mut self, camera: &mut OrthographicCamera, zoom: f64) {
        camera.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.zoom_changed = true;
    }

    /// Apply pending pan (damped if enabled) and place the camera. Returns whether it moved.
    pub fn update(&mut self, camera: &mut OrthographicCamera) -> bool {
        let step = if self.enable_damping { self.pan_offset * self.damping_factor } else { self.pan_offset };
        self.target += step;

        let last_position = camera.position;
        camera.position = self.target + self.offset;

        if self.enable_damping {
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.pan_offset = Vector3::zeros();
        }

        let moved = (camera.position - last_position).norm_squared() > EPS || self.zoom_changed;
        self.zoom_changed = false;
        moved
    }
}
