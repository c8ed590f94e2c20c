//! The closed family of geometric primitives a `Model` is built from

use crate::error::{IndexList, RenderError, RenderResult};

/// Every kind of primitive the pipeline understands.
///
/// Composite kinds are rewritten into the three atomic kinds (`Point`, `LineSegment` and `Triangle`)
/// by primitive assembly. Only atomic kinds reach the clipping, projection and rasterization stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A single point
    Point,
    /// A group of independent points
    Points,
    /// A line between two vertices
    LineSegment,
    /// Connected line segments through every vertex in order
    LineStrip,
    /// A line strip whose last vertex connects back to the first
    LineLoop,
    /// Line segments from the first vertex to each of the others
    LineFan,
    /// Independent line segments, one per pair of vertices
    Lines,
    /// A convex polygon
    Face,
    /// A single triangle
    Triangle,
    /// Triangles sharing an edge with their predecessor
    TriangleStrip,
    /// Triangles sharing the first vertex
    TriangleFan,
    /// Independent triangles, one per triple of vertices
    Triangles,
}

impl PrimitiveKind {
    /// Orientable kinds have distinguishable front and back faces
    #[inline]
    pub fn is_orientable(self) -> bool {
        matches!(self, PrimitiveKind::Face |
                       PrimitiveKind::Triangle |
                       PrimitiveKind::TriangleStrip |
                       PrimitiveKind::TriangleFan |
                       PrimitiveKind::Triangles)
    }

    /// Atomic kinds are the output of primitive assembly
    #[inline]
    pub fn is_atomic(self) -> bool {
        matches!(self, PrimitiveKind::Point | PrimitiveKind::LineSegment | PrimitiveKind::Triangle)
    }

    /// Checks if a primitive of this kind can be built from the given number of vertices
    pub fn accepts_vertex_count(self, n: usize) -> bool {
        match self {
            PrimitiveKind::Point => n == 1,
            PrimitiveKind::Points => n >= 1,
            PrimitiveKind::LineSegment => n == 2,
            PrimitiveKind::LineStrip |
            PrimitiveKind::LineLoop |
            PrimitiveKind::LineFan => n >= 2,
            PrimitiveKind::Lines => n >= 2 && n % 2 == 0,
            PrimitiveKind::Triangle => n == 3,
            PrimitiveKind::Face |
            PrimitiveKind::TriangleStrip |
            PrimitiveKind::TriangleFan => n >= 3,
            PrimitiveKind::Triangles => n >= 3 && n % 3 == 0,
        }
    }
}

/// A primitive holds parallel index lists into its owning `Model`.
///
/// The vertex, color, back-face color and texture coordinate lists always have the same length,
/// and entry `i` of each list describes the `i`th corner of the primitive. Back-face colors only exist
/// on orientable kinds. Indices are checked against the model by [`Model::validate`](struct.Model.html#method.validate)
/// when the model is rendered, so primitives may be added before the vertices they reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    kind: PrimitiveKind,
    pub(crate) vertex_indices: Vec<usize>,
    pub(crate) color_indices: Vec<usize>,
    pub(crate) back_color_indices: Option<Vec<usize>>,
    pub(crate) texcoord_indices: Option<Vec<usize>>,
    pub(crate) texture: Option<usize>,
    /// Bit `i` is set when the edge from corner `i` to the next corner is shared with
    /// another triangle of the same surface. Set by the pipeline stages that split surfaces.
    inner_edges: u8,
}

impl Primitive {
    /// Creates a primitive of the given kind over the given vertices.
    ///
    /// Color indices default to the vertex indices, so vertex `i` is colored by color `i`.
    pub fn new(kind: PrimitiveKind, vertex_indices: Vec<usize>) -> RenderResult<Primitive> {
        if !kind.accepts_vertex_count(vertex_indices.len()) {
            return Err(RenderError::InvalidVertexCount(vertex_indices.len(), kind));
        }

        Ok(Primitive {
            kind,
            color_indices: vertex_indices.clone(),
            vertex_indices,
            back_color_indices: None,
            texcoord_indices: None,
            texture: None,
            inner_edges: 0,
        })
    }

    pub fn point(i: usize) -> Primitive {
        Primitive::fixed(PrimitiveKind::Point, vec![i])
    }

    pub fn line_segment(a: usize, b: usize) -> Primitive {
        Primitive::fixed(PrimitiveKind::LineSegment, vec![a, b])
    }

    pub fn triangle(a: usize, b: usize, c: usize) -> Primitive {
        Primitive::fixed(PrimitiveKind::Triangle, vec![a, b, c])
    }

    pub fn points(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::Points, indices.to_vec())
    }

    pub fn lines(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::Lines, indices.to_vec())
    }

    pub fn line_strip(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::LineStrip, indices.to_vec())
    }

    pub fn line_loop(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::LineLoop, indices.to_vec())
    }

    pub fn line_fan(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::LineFan, indices.to_vec())
    }

    pub fn face(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::Face, indices.to_vec())
    }

    pub fn triangles(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::Triangles, indices.to_vec())
    }

    pub fn triangle_strip(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::TriangleStrip, indices.to_vec())
    }

    pub fn triangle_fan(indices: &[usize]) -> RenderResult<Primitive> {
        Primitive::new(PrimitiveKind::TriangleFan, indices.to_vec())
    }

    fn fixed(kind: PrimitiveKind, vertex_indices: Vec<usize>) -> Primitive {
        debug_assert!(kind.accepts_vertex_count(vertex_indices.len()));

        Primitive {
            kind,
            color_indices: vertex_indices.clone(),
            vertex_indices,
            back_color_indices: None,
            texcoord_indices: None,
            texture: None,
            inner_edges: 0,
        }
    }

    /// Assembles a primitive from already-consistent index lists. Used by the pipeline stages.
    pub(crate) fn from_parts(kind: PrimitiveKind,
                             vertex_indices: Vec<usize>,
                             color_indices: Vec<usize>,
                             back_color_indices: Option<Vec<usize>>,
                             texcoord_indices: Option<Vec<usize>>,
                             texture: Option<usize>) -> Primitive {
        debug_assert_eq!(vertex_indices.len(), color_indices.len());

        Primitive { kind, vertex_indices, color_indices, back_color_indices, texcoord_indices, texture, inner_edges: 0 }
    }

    #[inline]
    pub(crate) fn with_inner_edges(mut self, inner_edges: u8) -> Primitive {
        self.inner_edges = inner_edges;
        self
    }

    /// Checks if the edge leaving corner `i` lies inside the surface this primitive was split from
    #[inline]
    pub(crate) fn is_inner_edge(&self, i: usize) -> bool {
        i < 8 && self.inner_edges & (1 << i) != 0
    }

    /// Replace the color indices
    pub fn with_colors(mut self, color_indices: Vec<usize>) -> RenderResult<Primitive> {
        self.check_len(IndexList::Color, color_indices.len())?;
        self.color_indices = color_indices;
        Ok(self)
    }

    /// Color every corner with the same color
    pub fn with_color(mut self, color_index: usize) -> Primitive {
        self.color_indices = vec![color_index; self.vertex_indices.len()];
        self
    }

    /// Set the colors shown when the back of an orientable primitive faces the camera
    /// and its model has two-sided faces.
    ///
    /// Non-orientable primitives have no back face, so the colors are ignored for them.
    pub fn with_back_colors(mut self, color_indices: Vec<usize>) -> RenderResult<Primitive> {
        self.check_len(IndexList::BackColor, color_indices.len())?;

        if self.kind.is_orientable() {
            self.back_color_indices = Some(color_indices);
        }

        Ok(self)
    }

    /// Color every corner of the back face with the same color
    pub fn with_back_color(self, color_index: usize) -> Primitive {
        let len = self.vertex_indices.len();

        match self.with_back_colors(vec![color_index; len]) {
            Ok(primitive) => primitive,
            Err(_) => unreachable!("back color list built with the vertex count"),
        }
    }

    /// Texture the primitive with the given texture and per-corner texture coordinates
    pub fn with_texture(mut self, texture: usize, texcoord_indices: Vec<usize>) -> RenderResult<Primitive> {
        self.check_len(IndexList::TexCoord, texcoord_indices.len())?;
        self.texture = Some(texture);
        self.texcoord_indices = Some(texcoord_indices);
        Ok(self)
    }

    fn check_len(&self, list: IndexList, found: usize) -> RenderResult<()> {
        let expected = self.vertex_indices.len();

        if found != expected {
            Err(RenderError::MismatchedIndexLists { kind: self.kind, list, expected, found })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn kind(&self) -> PrimitiveKind { self.kind }

    /// Number of corners
    #[inline]
    pub fn len(&self) -> usize { self.vertex_indices.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.vertex_indices.is_empty() }

    #[inline]
    pub fn vertex_indices(&self) -> &[usize] { &self.vertex_indices }

    #[inline]
    pub fn color_indices(&self) -> &[usize] { &self.color_indices }

    #[inline]
    pub fn back_color_indices(&self) -> Option<&[usize]> { self.back_color_indices.as_deref() }

    #[inline]
    pub fn texcoord_indices(&self) -> Option<&[usize]> { self.texcoord_indices.as_deref() }

    #[inline]
    pub fn texture(&self) -> Option<usize> { self.texture }

    /// Builds a primitive of another kind from a selection of this primitive's corners,
    /// carrying every parallel index list along.
    pub(crate) fn select(&self, kind: PrimitiveKind, corners: &[usize]) -> Primitive {
        let pick = |list: &[usize]| corners.iter().map(|&c| list[c]).collect::<Vec<_>>();

        Primitive {
            kind,
            vertex_indices: pick(&self.vertex_indices),
            color_indices: pick(&self.color_indices),
            back_color_indices: self.back_color_indices.as_deref().map(pick),
            texcoord_indices: self.texcoord_indices.as_deref().map(pick),
            texture: self.texture,
            inner_edges: 0,
        }
    }

    /// Swap in the back-face colors, keeping the front colors when none were given.
    ///
    /// Applying this twice has the same effect as applying it once.
    pub(crate) fn show_back_face(&mut self) {
        if let Some(ref back) = self.back_color_indices {
            self.color_indices = back.clone();
        }
    }

    /// Checks the invariants of the primitive against the lengths of its model's lists
    pub(crate) fn validate(&self, vertices: usize, colors: usize, texcoords: usize, textures: usize) -> RenderResult<()> {
        if !self.kind.accepts_vertex_count(self.vertex_indices.len()) {
            return Err(RenderError::InvalidVertexCount(self.vertex_indices.len(), self.kind));
        }

        self.check_len(IndexList::Color, self.color_indices.len())?;

        check_indices(IndexList::Vertex, &self.vertex_indices, vertices)?;
        check_indices(IndexList::Color, &self.color_indices, colors)?;

        if let Some(ref back) = self.back_color_indices {
            self.check_len(IndexList::BackColor, back.len())?;
            check_indices(IndexList::BackColor, back, colors)?;
        }

        if let Some(ref tex) = self.texcoord_indices {
            self.check_len(IndexList::TexCoord, tex.len())?;
            check_indices(IndexList::TexCoord, tex, texcoords)?;
        }

        if let Some(texture) = self.texture {
            check_indices(IndexList::Texture, &[texture], textures)?;
        }

        Ok(())
    }
}

fn check_indices(list: IndexList, indices: &[usize], len: usize) -> RenderResult<()> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(RenderError::IndexOutOfRange { list, index, len }),
        None => Ok(()),
    }
}
