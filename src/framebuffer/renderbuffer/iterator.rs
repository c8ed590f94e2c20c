//! `RenderBuffer` iterator support

use std::slice;

use crate::color::Color;

/// Contains a reference to a `RenderBuffer` pixel value
pub struct RenderBufferPixelRef<'a> {
    item: &'a (Color, f32),
}

impl<'a> RenderBufferPixelRef<'a> {
    /// Return a reference to the pixel color value
    pub fn color(&self) -> &Color { &self.item.0 }
    /// Return a reference to the pixel depth value
    pub fn depth(&self) -> &f32 { &self.item.1 }
}

/// Iterator for `RenderBuffer` pixel values, in row-major order
pub struct RenderBufferIter<'a> {
    pub(in crate::framebuffer::renderbuffer) iter: slice::Iter<'a, (Color, f32)>,
}

impl<'a> Iterator for RenderBufferIter<'a> {
    type Item = RenderBufferPixelRef<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|item| RenderBufferPixelRef { item })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> DoubleEndedIterator for RenderBufferIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|item| RenderBufferPixelRef { item })
    }
}

impl<'a> ExactSizeIterator for RenderBufferIter<'a> {}
