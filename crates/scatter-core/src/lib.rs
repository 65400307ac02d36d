// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports scales, axis geometry, scene model and rendering.

pub mod axis;
pub mod camera;
pub mod chart;
pub mod config;
pub mod controls;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod theme;
pub mod types;

pub use axis::{create_axis_geometry, AxisGeometry, AxisOrientation, AxisSpec};
pub use camera::OrthographicCamera;
pub use chart::{Chart, ChartBuilder, RenderOptions};
pub use config::{ChartConfig, PointMapping};
pub use controls::{ControlAction, MouseButtons, OrbitControls, PointerButton};
pub use data::DataPoint;
pub use error::{ChartError, DataError, ScaleError};
pub use geometry::DiscGeometry;
pub use scale::{LinearScale, LogScale, Scale};
pub use scene::{Material, Mesh, Scene};
pub use theme::Theme;
pub use types::{SurfaceSize, Vertex};
