//! The rendering pipeline, which walks the scene graph and draws every model into a framebuffer

use crate::error::RenderResult;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Dimensions, HasDimensions, Matrix};
use crate::scene::{Camera, Model, Position, Scene};

pub mod config;
pub mod stages;

pub use self::config::RenderConfig;

use self::stages::rasterization::RasterArguments;

/// Everything that stays the same for the whole render call
struct Frame<'a> {
    camera: &'a Camera,
    inverse_view: Matrix,
    normalization: Matrix,
    raster: RasterArguments,
}

/// Starting point for the rendering pipeline.
///
/// By itself it only holds the render settings. Each call to `render` walks the scene graph depth first,
/// drawing models in the order they are reached, and runs every model through the stages
/// model to world, world to view, view to camera, back face culling, primitive assembly,
/// back face culling of the assembled triangles, near clipping, projection, viewport clipping and rasterization.
///
/// The scene is never changed by rendering. Every stage works on a copy of the model's lists,
/// so rendering the same scene twice produces the same image.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: RenderConfig,
}

impl Pipeline {
    pub fn new(config: RenderConfig) -> Pipeline {
        Pipeline { config }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig { &self.config }

    #[inline]
    pub fn config_mut(&mut self) -> &mut RenderConfig { &mut self.config }

    /// Enable or disable anti-aliasing of lines and triangle edges
    #[inline]
    pub fn antialiased(&mut self, enable: bool) {
        self.config.antialiasing = enable;
    }

    /// Enable or disable depth testing
    #[inline]
    pub fn depth_test(&mut self, enable: bool) {
        self.config.depth_test = enable;
    }

    /// Draw the scene into the framebuffer.
    ///
    /// The framebuffer is not cleared first, so several scenes can be layered into one image.
    /// Stops at the first model that fails validation, leaving whatever was drawn before it.
    pub fn render<F>(&self, scene: &Scene, framebuffer: &mut F) -> RenderResult<()> where F: Framebuffer {
        let dimensions = framebuffer.dimensions();

        if dimensions.area() == 0 {
            log::debug!("skipping render of scene {:?} into an empty framebuffer", scene.name);
            return Ok(());
        }

        let Dimensions { width, height } = dimensions;

        log::debug!("rendering scene {:?} into {}x{} framebuffer", scene.name, width, height);

        let camera = scene.camera();

        let frame = Frame {
            camera,
            inverse_view: camera.inverse_view_matrix()?,
            normalization: camera.normalization_matrix(),
            raster: RasterArguments::new(dimensions, &self.config),
        };

        for position in scene.positions() {
            self.render_position(&frame, &position.read_recursive(), &Matrix::identity(), framebuffer)?;
        }

        Ok(())
    }

    fn render_position<F>(&self, frame: &Frame, position: &Position, parent: &Matrix, framebuffer: &mut F) -> RenderResult<()> where F: Framebuffer {
        let matrix = parent * position.matrix();

        if let Some(model) = position.model() {
            self.render_model(frame, &model.read_recursive(), &matrix, framebuffer)?;
        }

        for nested in position.nested_positions() {
            self.render_position(frame, &nested.read_recursive(), &matrix, framebuffer)?;
        }

        Ok(())
    }

    fn render_model<F>(&self, frame: &Frame, model: &Model, parent: &Matrix, framebuffer: &mut F) -> RenderResult<()> where F: Framebuffer {
        let matrix = parent * model.matrix();

        model.validate()?;

        let trace = |stage: &str, model: &Model| if self.config.debug {
            log::trace!("{:?} after {}: {} vertices, {} primitives", model.name, stage, model.vertices().len(), model.primitives().len());
        };

        let world = stages::model_to_world(model, &matrix);
        let view = stages::world_to_view(&world, &frame.inverse_view);
        let camera_space = stages::view_to_camera(&view, &frame.normalization);
        trace("transform", &camera_space);

        let culled = stages::cull_unassembled(&camera_space, frame.camera);
        trace("back face culling", &culled);

        let assembled = stages::assemble(&culled);
        trace("primitive assembly", &assembled);

        let culled = stages::cull_assembled(&assembled, frame.camera);
        trace("back face culling of triangles", &culled);

        let near_clipped = stages::near_clip(&culled, frame.camera.near())?;
        trace("near clipping", &near_clipped);

        let projected = stages::project(&near_clipped, frame.camera);

        let clipped = stages::clip(&projected)?;
        trace("viewport clipping", &clipped);

        stages::rasterize(&clipped, framebuffer, &frame.raster)?;

        for nested in model.nested_models() {
            self.render_model(frame, &nested.read_recursive(), &matrix, framebuffer)?;
        }

        Ok(())
    }
}

/// Draw the scene into the framebuffer with the default settings
pub fn render<F>(scene: &Scene, framebuffer: &mut F) -> RenderResult<()> where F: Framebuffer {
    Pipeline::default().render(scene, framebuffer)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::predefined::{BLACK, GREEN, RED};
    use crate::error::{IndexList, RenderError};
    use crate::framebuffer::RenderBuffer;
    use crate::geometry::{Coordinate, Vertex};
    use crate::pixels::PixelRead;
    use crate::scene::Primitive;

    fn point_model(x: f64, y: f64) -> Model {
        let mut model = Model::new("point");
        model.add_vertex(Vertex::new(x, y, -1.0));
        model.add_color(RED);
        model.add_primitive(Primitive::point(0));
        model
    }

    #[test]
    fn test_nested_transforms_accumulate() {
        // the camera sees x in [-1, 1] at z = -1
        let mut scene = Scene::new(Camera::default());

        let mut inner = point_model(0.0, 0.0);
        inner.set_matrix(Matrix::translate(0.25, 0.0, 0.0));

        let mut outer = Model::new("outer");
        outer.set_matrix(Matrix::translate(0.25, 0.0, 0.0));
        outer.add_nested_model(inner.into_handle());

        let mut position = Position::new(outer.into_handle());
        position.set_matrix(Matrix::translate(0.0, 0.5, 0.0));

        scene.add_position(position.into_handle());

        let mut framebuffer = RenderBuffer::new(8, 8);
        render(&scene, &mut framebuffer).unwrap();

        // (0.5, 0.5) in normalized coordinates
        assert_eq!(framebuffer.pixel(Coordinate::new(6, 2)), Ok(RED));
        assert_eq!(framebuffer.iter().filter(|p| *p.color() == RED).count(), 1);
    }

    #[test]
    fn test_invalid_model_stops_render() {
        let mut model = point_model(0.0, 0.0);
        model.add_primitive(Primitive::point(7));

        let mut scene = Scene::new(Camera::default());
        scene.add_position(Position::new(model.into_handle()).into_handle());

        let mut framebuffer = RenderBuffer::new(4, 4);

        assert_eq!(render(&scene, &mut framebuffer),
                   Err(RenderError::IndexOutOfRange { list: IndexList::Vertex, index: 7, len: 1 }));
    }

    #[test]
    fn test_singular_camera() {
        let mut scene = Scene::new(Camera::default());
        scene.camera_mut().set_view(Matrix::scale(0.0, 1.0, 1.0));

        let mut framebuffer = RenderBuffer::new(4, 4);

        assert_eq!(render(&scene, &mut framebuffer), Err(RenderError::SingularViewMatrix));
    }

    #[test]
    fn test_render_does_not_modify_scene() {
        let model = point_model(0.0, 0.0).into_handle();

        let mut scene = Scene::new(Camera::default());
        scene.add_position(Position::new(model.clone()).into_handle());

        let mut first = RenderBuffer::new(8, 8);
        let mut second = RenderBuffer::new(8, 8);

        render(&scene, &mut first).unwrap();
        render(&scene, &mut second).unwrap();

        assert_eq!(first.colors(), second.colors());
        assert_eq!(model.read().vertices()[0], Vertex::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_edit_between_renders() {
        let model = point_model(0.0, 0.0).into_handle();

        let mut scene = Scene::new(Camera::default());
        scene.add_position(Position::new(model.clone()).into_handle());

        let mut framebuffer = RenderBuffer::new(8, 8);
        render(&scene, &mut framebuffer).unwrap();

        let before = framebuffer.pixel(Coordinate::new(4, 4)).unwrap();
        assert_eq!(before, RED);

        {
            let mut model = model.write();
            let green = model.add_color(GREEN);

            // drawn after the red point, so it paints over it
            model.add_primitive(Primitive::point(0).with_color(green));
        }

        framebuffer.clear(BLACK);
        render(&scene, &mut framebuffer).unwrap();

        assert_eq!(framebuffer.pixel(Coordinate::new(4, 4)), Ok(GREEN));
    }
}
