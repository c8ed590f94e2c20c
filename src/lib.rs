//! Scene Graph Software Renderer in Rust
//!
//! ### Example:
//!
//! ```
//! use softscene::{Camera, Model, Position, Primitive, RenderBuffer, Scene, Vertex};
//! use softscene::color::predefined::RED;
//!
//! let mut model = Model::new("triangle");
//!
//! model.add_vertex(Vertex::new(-1.0, 0.0, -2.0));
//! model.add_vertex(Vertex::new(1.0, 0.0, -2.0));
//! model.add_vertex(Vertex::new(0.0, 1.0, -2.0));
//! model.fill_colors(RED);
//! model.add_primitive(Primitive::triangle(0, 1, 2));
//!
//! let mut scene = Scene::new(Camera::perspective(90.0, 1.0, 0.5));
//! scene.add_position(Position::new(model.into_handle()).into_handle());
//!
//! let mut framebuffer = RenderBuffer::new(64, 64);
//!
//! softscene::render(&scene, &mut framebuffer).unwrap();
//! ```
//!
//! ### Current Features:
//!
//! * Scene graph of shared, nestable positions and models, each with its own transform.
//! * Model geometry built from points, lines, line strips, loops and fans,
//! faces, triangles, triangle strips and fans.
//! * Perspective and orthographic cameras.
//! * Back face culling with configurable front-face winding and two-sided faces with separate back colors.
//! * Near plane clipping in camera space and recursive viewport clipping after projection.
//! * Barycentric interpolation of vertex colors, depth and texture coordinates.
//! * Flexible framebuffer with color and depth components, and viewports into it.
//! * Optional depth testing, anti-aliasing and gamma encoding.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.

pub mod error;
pub mod interpolate;
pub mod geometry;
pub mod color;
pub mod pixels;
pub mod framebuffer;
pub mod scene;
pub mod pipeline;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult};
pub use interpolate::Interpolate;
pub use geometry::{Coordinate, Dimensions, FaceWinding, Facing, HasDimensions, Matrix, Vector, Vertex};
pub use color::Color;
pub use pixels::{PixelRead, PixelWrite};
pub use framebuffer::{Framebuffer, RenderBuffer, ViewportMut};
pub use scene::{Camera, Model, ModelHandle, Position, PositionHandle, Primitive, PrimitiveKind, ProjectionKind,
                Scene, TexCoord, Texture};
pub use pipeline::{render, Pipeline, RenderConfig};
