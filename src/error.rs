//! Error types for the rendering pipeline

use std::fmt;

use thiserror::Error;

use crate::scene::PrimitiveKind;

/// Identifies which of a `Model`'s lists an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexList {
    Vertex,
    Color,
    BackColor,
    TexCoord,
    Texture,
}

impl fmt::Display for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            IndexList::Vertex => "vertex",
            IndexList::Color => "color",
            IndexList::BackColor => "back-face color",
            IndexList::TexCoord => "texture coordinate",
            IndexList::Texture => "texture",
        })
    }
}

/// Errors raised while building or rendering a scene.
///
/// Every variant is an invariant violation of the input data or the framebuffer setup.
/// Numerical edge cases inside the pipeline are always resolved locally and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("{0} vertices is invalid for {1:?} primitive")]
    InvalidVertexCount(usize, PrimitiveKind),

    #[error("{kind:?} primitive has {found} {list} indices but {expected} vertex indices")]
    MismatchedIndexLists {
        kind: PrimitiveKind,
        list: IndexList,
        expected: usize,
        found: usize,
    },

    #[error("{list} index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        list: IndexList,
        index: usize,
        len: usize,
    },

    #[error("{0:?} primitive must be assembled before this pipeline stage")]
    UnassembledPrimitive(PrimitiveKind),

    #[error("camera view matrix is not invertible")]
    SingularViewMatrix,

    #[error("invalid pixel coordinate")]
    InvalidPixelCoordinate,

    #[error("viewport does not fit inside the framebuffer")]
    InvalidViewport,

    #[error("texture dimensions {0}x{1} do not match {2} texels")]
    InvalidTextureSize(u32, u32, usize),
}

pub type RenderResult<T> = Result<T, RenderError>;
