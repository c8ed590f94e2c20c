//! Placement nodes of the scene graph

use std::fmt::{self, Debug};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::geometry::Matrix;

use super::model::ModelHandle;

/// Shared handle to a `Position`, so that one placement can appear under several parents.
pub type PositionHandle = Arc<RwLock<Position>>;

/// Places a model in the scene with its own transform, and holds nested positions
/// that are placed relative to it.
///
/// A position owns no geometry itself.
#[derive(Clone, Default)]
pub struct Position {
    pub name: String,
    model: Option<ModelHandle>,
    matrix: Matrix,
    nested: Vec<PositionHandle>,
}

impl Position {
    pub fn new(model: ModelHandle) -> Position {
        Position {
            name: String::new(),
            model: Some(model),
            matrix: Matrix::identity(),
            nested: Vec::new(),
        }
    }

    /// A position with no model, only useful as a parent for nested positions
    pub fn empty() -> Position {
        Position::default()
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Position {
        self.name = name.into();
        self
    }

    pub fn with_matrix(mut self, matrix: Matrix) -> Position {
        self.matrix = matrix;
        self
    }

    /// Wrap the position in a shared handle
    pub fn into_handle(self) -> PositionHandle {
        Arc::new(RwLock::new(self))
    }

    #[inline]
    pub fn model(&self) -> Option<&ModelHandle> { self.model.as_ref() }

    #[inline]
    pub fn set_model(&mut self, model: Option<ModelHandle>) {
        self.model = model;
    }

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

    pub fn add_nested_position(&mut self, position: PositionHandle) {
        self.nested.push(position);
    }

    #[inline]
    pub fn nested_positions(&self) -> &[PositionHandle] { &self.nested }
}

impl Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Position {:?} {{ model: {}, nested: {} }}", self.name, self.model.is_some(), self.nested.len())
    }
}
