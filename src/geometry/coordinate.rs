use super::Dimensions;

/// Integer pixel coordinate, with the origin at the top-left corner
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: u32, y: u32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Row-major index of the coordinate in a buffer of the given dimensions
    #[inline]
    pub fn into_index(self, dimensions: Dimensions) -> usize {
        let Coordinate { x, y } = self;
        y as usize * dimensions.width as usize + x as usize
    }

    /// Offsets the coordinate by another one, as when translating from viewport to framebuffer space
    #[inline]
    pub fn offset(self, origin: Coordinate) -> Coordinate {
        Coordinate::new(self.x + origin.x, self.y + origin.y)
    }
}
