//! Scene graph data model

use std::fmt::{self, Debug};

pub mod camera;
pub mod model;
pub mod position;
pub mod primitive;
pub mod texture;

pub use self::camera::{Camera, ProjectionKind};
pub use self::model::{Model, ModelHandle};
pub use self::position::{Position, PositionHandle};
pub use self::primitive::{Primitive, PrimitiveKind};
pub use self::texture::{TexCoord, Texture};

/// A camera and the root positions of a scene graph.
///
/// Scenes are built once and then mutated in place between frames,
/// either through the shared position and model handles or by swapping the camera.
#[derive(Clone, Default)]
pub struct Scene {
    pub name: String,
    camera: Camera,
    positions: Vec<PositionHandle>,
}

impl Scene {
    pub fn new(camera: Camera) -> Scene {
        Scene { name: String::new(), camera, positions: Vec::new() }
    }

    #[inline]
    pub fn camera(&self) -> &Camera { &self.camera }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera { &mut self.camera }

    #[inline]
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn add_position(&mut self, position: PositionHandle) {
        self.positions.push(position);
    }

    #[inline]
    pub fn positions(&self) -> &[PositionHandle] { &self.positions }
}

impl Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Scene {:?} {{ camera: {:?}, positions: {} }}", self.name, self.camera.kind(), self.positions.len())
    }
}
