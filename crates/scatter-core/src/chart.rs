// File: crates/scatter-core/src/chart.rs
// Summary: Chart builder (scales, axes, point discs) and headless rendering using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{create_axis_geometry, AxisGeometry, AxisOrientation, AxisSpec};
use crate::camera::OrthographicCamera;
use crate::config::{ChartConfig, PointMapping};
use crate::controls::OrbitControls;
use crate::data::DataPoint;
use crate::error::{ChartError, Result, ScaleError};
use crate::geometry::DiscGeometry;
use crate::scale::{LinearScale, LogScale, Scale};
use crate::scene::{DiscMesh, LineMesh, Material, Mesh, Scene};
use crate::theme::Theme;
use crate::types::{SurfaceSize, Vertex, X_DOMAIN_MAX, Y_AXIS_OFFSET, Y_LOG_BASE, Y_RANGE};

pub struct RenderOptions {
    pub size: SurfaceSize,
    pub theme: Theme,
    pub line_width: f32,
    pub anti_alias: bool,
}

impl RenderOptions {
    /// Options sized to the config's surface (half the viewport).
    pub fn for_config(config: &ChartConfig) -> Self {
        Self { size: config.surface_size(), ..Self::default() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: ChartConfig::default().surface_size(),
            theme: Theme::dark(),
            line_width: 1.0,
            anti_alias: true,
        }
    }
}

/// Owns the two scales and turns point data into a scene.
#[derive(Clone, Debug)]
pub struct ChartBuilder {
    config: ChartConfig,
    x_scale: LinearScale,
    y_scale: LogScale,
}

impl ChartBuilder {
    /// X: linear `[0, 100] -> [0, WIDTH]`. Y: log2 `[1, HEIGHT] -> [1, 300]`.
    pub fn new(config: ChartConfig) -> Result<Self, ScaleError> {
        let x_scale = LinearScale::new([0.0, X_DOMAIN_MAX], [0.0, config.width()]);
        let y_scale = LogScale::new(Y_LOG_BASE, [1.0, config.height()], Y_RANGE)?;
        debug!(ratio = config.ratio(), height = config.height(), "scales configured");
        Ok(Self { config, x_scale, y_scale })
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn x_scale(&self) -> &LinearScale { &self.x_scale }

    pub fn y_scale(&self) -> &LogScale { &self.y_scale }

    /// Bottom axis from the X scale's ticks.
    pub fn x_axis_geometry(&self) -> AxisGeometry {
        create_axis_geometry(&AxisSpec {
            orientation: AxisOrientation::Bottom,
            tick_count: self.config.tick_count,
            tick_height: self.config.tick_height,
            scale: &self.x_scale,
        })
    }

    /// Left axis from the Y scale's ticks, lifted off the X baseline.
    pub fn y_axis_geometry(&self) -> AxisGeometry {
        let [dx, dy, dz] = Y_AXIS_OFFSET;
        create_axis_geometry(&AxisSpec {
            orientation: AxisOrientation::Left,
            tick_count: self.config.tick_count,
            tick_height: self.config.tick_height,
            scale: &self.y_scale,
        })
        .translate(dx, dy, dz)
    }

    /// Scene position of a data point.
    pub fn point_position(&self, p: DataPoint) -> Vertex {
        let y = match self.config.point_mapping {
            PointMapping::InvertY => self.y_scale.invert(p.y),
            PointMapping::ForwardY => self.y_scale.forward(p.y),
        };
        Vertex::new(self.x_scale.forward(p.x), y, 0.0)
    }

    pub fn point_geometry(&self, p: DataPoint) -> DiscGeometry {
        let pos = self.point_position(p);
        DiscGeometry::new(self.config.disc_radius, self.config.disc_segments).translate(pos.x, pos.y, pos.z)
    }

    /// Y axis line, X axis line, then one disc per point in input order.
    pub fn build_scene(&self, data: &[DataPoint]) -> Scene {
        let mut scene = Scene::new();
        scene.add(Mesh::Line(LineMesh::from_axis(self.y_axis_geometry())));
        scene.add(Mesh::Line(LineMesh::from_axis(self.x_axis_geometry())));
        for &p in data {
            scene.add(Mesh::Disc(DiscMesh { geometry: self.point_geometry(p), material: Material::Point }));
        }
        scene
    }

    /// Scene plus a camera framing the plot and controls attached to it.
    pub fn build(&self, data: &[DataPoint]) -> Chart {
        let scene = self.build_scene(data);
        let mut camera = OrthographicCamera::for_chart(&self.config);
        let mut controls = OrbitControls::new(&camera);
        controls.update(&mut camera);
        info!(meshes = scene.len(), points = data.len(), "chart built");
        Chart { scene, camera, controls }
    }
}

pub struct Chart {
    pub scene: Scene,
    pub camera: OrthographicCamera,
    pub controls: OrbitControls,
}

impl Chart {
    /// Per-frame step: let the controls move the camera. Returns whether it moved.
    pub fn update(&mut self) -> bool {
        self.controls.update(&mut self.camera)
    }

    /// Draw the scene through the camera onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(opts.anti_alias);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.line_width);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(opts.anti_alias);
        fill.set_style(skia::paint::Style::Fill);

        let mut skipped = 0usize;
        for mesh in self.scene.meshes() {
            let color = material_color(&opts.theme, mesh.material());
            match mesh {
                Mesh::Line(line) if line.vertices.is_empty() => {}
                Mesh::Line(line) => match project_path(&self.camera, &line.vertices, opts.size, false) {
                    Some(path) => {
                        stroke.set_color(color);
                        canvas.draw_path(&path, &stroke);
                    }
                    None => skipped += 1,
                },
                Mesh::Disc(disc) => match project_path(&self.camera, &disc.geometry.outline(), opts.size, true) {
                    Some(path) => {
                        fill.set_color(color);
                        canvas.draw_path(&path, &fill);
                    }
                    None => skipped += 1,
                },
            }
        }
        if skipped > 0 {
            debug!(skipped, "meshes outside the camera depth range");
        }
    }

    /// Render to a tightly packed RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.size.width, opts.size.height);
        let mut surface = raster_surface(opts.size)?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; opts.size.rgba_len()];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, w, h, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = raster_surface(opts.size)?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(size: SurfaceSize) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((size.width as i32, size.height as i32))
        .ok_or(ChartError::Surface(size.width, size.height))
}

fn material_color(theme: &Theme, material: Material) -> skia::Color {
    match material {
        Material::AxisLine => theme.axis_line,
        Material::Point => theme.point,
    }
}

/// Pixel-space path through `vertices`; `None` if any vertex is outside the depth range.
fn project_path(
    camera: &OrthographicCamera,
    vertices: &[Vertex],
    size: SurfaceSize,
    close: bool,
) -> Option<skia::Path> {
    let (first, rest) = vertices.split_first()?;
    let mut path = skia::PathBuilder::new();
    path.move_to(camera.project_to_pixel(first, size)?);
    for v in rest {
        path.line_to(camera.project_to_pixel(v, size)?);
    }
    if close {
        path.close();
    }
    Some(path.detach())
}
