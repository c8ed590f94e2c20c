//! Geometry containers

use std::fmt::{self, Debug};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::color::Color;
use crate::error::RenderResult;
use crate::geometry::{Matrix, Vertex};

use super::primitive::Primitive;
use super::texture::{TexCoord, Texture};

/// Shared handle to a `Model`.
///
/// The same model may be nested in several parents to instance its geometry.
/// Cycles are not supported and are not detected.
pub type ModelHandle = Arc<RwLock<Model>>;

/// A container of geometry: vertices, colors, texture data and the primitives built from them,
/// placed by a local transform and possibly holding nested child models.
///
/// Lists are reference counted so that pipeline stages can derive new models from this one
/// while sharing whatever they leave untouched. Writing to a shared list copies it first,
/// so a model is never changed through another model derived from it.
#[derive(Clone)]
pub struct Model {
    pub name: String,
    pub(crate) vertices: Arc<Vec<Vertex>>,
    pub(crate) colors: Arc<Vec<Color>>,
    pub(crate) primitives: Arc<Vec<Primitive>>,
    pub(crate) textures: Arc<Vec<Texture>>,
    pub(crate) texcoords: Arc<Vec<TexCoord>>,
    pub(crate) nested: Vec<ModelHandle>,
    matrix: Matrix,
    do_back_face_culling: bool,
    front_facing_is_ccw: bool,
    faces_have_two_sides: bool,
}

impl Default for Model {
    fn default() -> Model {
        Model::new("")
    }
}

impl Model {
    /// Creates an empty model with back face culling enabled, counter-clockwise front faces and one-sided faces
    pub fn new<S: Into<String>>(name: S) -> Model {
        Model {
            name: name.into(),
            vertices: Arc::default(),
            colors: Arc::default(),
            primitives: Arc::default(),
            textures: Arc::default(),
            texcoords: Arc::default(),
            nested: Vec::new(),
            matrix: Matrix::identity(),
            do_back_face_culling: true,
            front_facing_is_ccw: true,
            faces_have_two_sides: false,
        }
    }

    /// Wrap the model in a shared handle
    pub fn into_handle(self) -> ModelHandle {
        Arc::new(RwLock::new(self))
    }

    /// Adds a vertex, returning its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let vertices = Arc::make_mut(&mut self.vertices);
        vertices.push(vertex);
        vertices.len() - 1
    }

    pub fn add_vertices<I>(&mut self, vertices: I) where I: IntoIterator<Item=Vertex> {
        Arc::make_mut(&mut self.vertices).extend(vertices);
    }

    /// Adds a color, returning its index
    pub fn add_color(&mut self, color: Color) -> usize {
        let colors = Arc::make_mut(&mut self.colors);
        colors.push(color);
        colors.len() - 1
    }

    pub fn add_colors<I>(&mut self, colors: I) where I: IntoIterator<Item=Color> {
        Arc::make_mut(&mut self.colors).extend(colors);
    }

    /// Adds a copy of `color` for every vertex that does not have a color of the same index yet,
    /// so that primitives using their default color indices are all drawn in `color`.
    pub fn fill_colors(&mut self, color: Color) {
        let missing = self.vertices.len().saturating_sub(self.colors.len());

        Arc::make_mut(&mut self.colors).extend(std::iter::repeat(color).take(missing));
    }

    /// Adds a primitive, returning its index
    pub fn add_primitive(&mut self, primitive: Primitive) -> usize {
        let primitives = Arc::make_mut(&mut self.primitives);
        primitives.push(primitive);
        primitives.len() - 1
    }

    /// Adds a texture, returning its index
    pub fn add_texture(&mut self, texture: Texture) -> usize {
        let textures = Arc::make_mut(&mut self.textures);
        textures.push(texture);
        textures.len() - 1
    }

    /// Adds a texture coordinate, returning its index
    pub fn add_texcoord(&mut self, texcoord: TexCoord) -> usize {
        let texcoords = Arc::make_mut(&mut self.texcoords);
        texcoords.push(texcoord);
        texcoords.len() - 1
    }

    /// Nest a child model, which is drawn with this model's transform applied after its own
    pub fn add_nested_model(&mut self, model: ModelHandle) {
        self.nested.push(model);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    #[inline]
    pub fn colors(&self) -> &[Color] { &self.colors }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] { &self.primitives }

    #[inline]
    pub fn textures(&self) -> &[Texture] { &self.textures }

    #[inline]
    pub fn texcoords(&self) -> &[TexCoord] { &self.texcoords }

    #[inline]
    pub fn nested_models(&self) -> &[ModelHandle] { &self.nested }

    #[inline]
    pub fn matrix(&self) -> &Matrix { &self.matrix }

    #[inline]
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    /// Applies `transform` after the current local transform
    #[inline]
    pub fn transform(&mut self, transform: Matrix) {
        self.matrix = transform * self.matrix;
    }

    #[inline]
    pub fn do_back_face_culling(&self) -> bool { self.do_back_face_culling }

    #[inline]
    pub fn front_facing_is_ccw(&self) -> bool { self.front_facing_is_ccw }

    #[inline]
    pub fn faces_have_two_sides(&self) -> bool { self.faces_have_two_sides }

    /// Enable or disable back face culling for this model and all of its nested models
    pub fn set_back_face_culling(&mut self, enable: bool) {
        self.set_recursive(&|model: &mut Model| model.do_back_face_culling = enable);
    }

    /// Choose the front-facing winding for this model and all of its nested models
    pub fn set_front_facing_is_ccw(&mut self, ccw: bool) {
        self.set_recursive(&|model: &mut Model| model.front_facing_is_ccw = ccw);
    }

    /// Choose whether back faces are drawn with their back colors instead of being discarded,
    /// for this model and all of its nested models
    pub fn set_faces_have_two_sides(&mut self, two_sides: bool) {
        self.set_recursive(&|model: &mut Model| model.faces_have_two_sides = two_sides);
    }

    fn set_recursive(&mut self, f: &dyn Fn(&mut Model)) {
        f(self);

        for child in &self.nested {
            child.write().set_recursive(f);
        }
    }

    /// Checks that every primitive references valid entries of this model's lists.
    ///
    /// Nested models are validated separately when they are rendered.
    pub fn validate(&self) -> RenderResult<()> {
        for primitive in self.primitives.iter() {
            primitive.validate(self.vertices.len(), self.colors.len(), self.texcoords.len(), self.textures.len())?;
        }

        Ok(())
    }

    /// A copy of this model without nested models, sharing every list.
    ///
    /// Pipeline stages build their output from this.
    pub(crate) fn derive(&self) -> Model {
        Model {
            name: self.name.clone(),
            vertices: self.vertices.clone(),
            colors: self.colors.clone(),
            primitives: self.primitives.clone(),
            textures: self.textures.clone(),
            texcoords: self.texcoords.clone(),
            nested: Vec::new(),
            matrix: self.matrix,
            do_back_face_culling: self.do_back_face_culling,
            front_facing_is_ccw: self.front_facing_is_ccw,
            faces_have_two_sides: self.faces_have_two_sides,
        }
    }

    pub(crate) fn with_vertices(mut self, vertices: Vec<Vertex>) -> Model {
        self.vertices = Arc::new(vertices);
        self
    }

    pub(crate) fn with_primitives(mut self, primitives: Vec<Primitive>) -> Model {
        self.primitives = Arc::new(primitives);
        self
    }

    /// Checks if two models share the same vertex list, without comparing contents
    pub fn shares_vertices_with(&self, other: &Model) -> bool {
        Arc::ptr_eq(&self.vertices, &other.vertices)
    }

    /// Checks if two models share the same color list, without comparing contents
    pub fn shares_colors_with(&self, other: &Model) -> bool {
        Arc::ptr_eq(&self.colors, &other.colors)
    }
}

impl Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Model {:?} {{ vertices: {}, colors: {}, primitives: {}, nested: {} }}",
               self.name, self.vertices.len(), self.colors.len(), self.primitives.len(), self.nested.len())
    }
}
