//! Geometry value types: points, directions, transforms and pixel space

pub mod vertex;
pub mod vector;
pub mod matrix;
pub mod dimension;
pub mod coordinate;
pub mod winding;

pub use self::vertex::Vertex;
pub use self::vector::Vector;
pub use self::matrix::Matrix;
pub use self::dimension::{Dimensions, HasDimensions};
pub use self::coordinate::Coordinate;
pub use self::winding::{FaceWinding, Facing};
