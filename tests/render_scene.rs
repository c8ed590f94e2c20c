use softscene::color::predefined::{BLACK, BLUE, GREEN, RED, WHITE};
use softscene::{render, Camera, Color, Coordinate, Dimensions, Framebuffer, Matrix, Model, PixelRead, Pipeline,
                Position, Primitive, RenderBuffer, RenderConfig, Scene, Vertex};

fn scene_with(camera: Camera, models: Vec<Model>) -> Scene {
    let mut scene = Scene::new(camera);

    for model in models {
        scene.add_position(Position::new(model.into_handle()).into_handle());
    }

    scene
}

fn triangle(name: &str, vertices: [(f64, f64, f64); 3], color: Color) -> Model {
    let mut model = Model::new(name);

    for &(x, y, z) in &vertices {
        model.add_vertex(Vertex::new(x, y, z));
    }

    model.fill_colors(color);
    model.add_primitive(Primitive::triangle(0, 1, 2));

    model
}

fn count(framebuffer: &RenderBuffer, color: Color) -> usize {
    framebuffer.iter().filter(|p| *p.color() == color).count()
}

#[test]
fn test_triangle_fills_upper_half() {
    let model = triangle("wide", [(-2.0, 0.0, -1.0), (2.0, 0.0, -1.0), (0.0, 2.0, -1.0)], RED);
    let scene = scene_with(Camera::perspective(90.0, 1.0, 0.5), vec![model]);

    let mut framebuffer = RenderBuffer::new(100, 100);
    render(&scene, &mut framebuffer).unwrap();

    for y in 0..50 {
        for x in 0..100 {
            assert_eq!(framebuffer.pixel(Coordinate::new(x, y)), Ok(RED), "pixel ({}, {})", x, y);
        }
    }

    for y in 51..100 {
        for x in 0..100 {
            assert_eq!(framebuffer.pixel(Coordinate::new(x, y)), Ok(BLACK), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_antialiased_triangle_has_no_seams() {
    let model = triangle("wide", [(-2.0, 0.0, -1.0), (2.0, 0.0, -1.0), (0.0, 2.0, -1.0)], RED);
    let scene = scene_with(Camera::perspective(90.0, 1.0, 0.5), vec![model]);

    let pipeline = Pipeline::new(RenderConfig::default().with_antialiasing(true));

    let mut framebuffer = RenderBuffer::new(100, 100);
    pipeline.render(&scene, &mut framebuffer).unwrap();

    // clipping cuts the triangle into several pieces, none of which may show through
    for y in 0..50 {
        for x in 0..100 {
            assert_eq!(framebuffer.pixel(Coordinate::new(x, y)), Ok(RED), "pixel ({}, {})", x, y);
        }
    }

    for y in 51..100 {
        for x in 0..100 {
            assert_eq!(framebuffer.pixel(Coordinate::new(x, y)), Ok(BLACK), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_antialiased_face_is_solid() {
    let mut model = Model::new("hexagon");

    for i in 0..6 {
        let angle = (i as f64 * 60.0).to_radians();
        model.add_vertex(Vertex::new(angle.cos() * 1.5, angle.sin() * 1.5, -2.0));
    }

    model.fill_colors(RED);
    model.add_primitive(Primitive::face(&[0, 1, 2, 3, 4, 5]).unwrap());

    let scene = scene_with(Camera::default(), vec![model]);

    let pipeline = Pipeline::new(RenderConfig::default().with_antialiasing(true));

    let mut framebuffer = RenderBuffer::new(64, 64);
    pipeline.render(&scene, &mut framebuffer).unwrap();

    // the projected hexagon has a circumradius of 0.75, so its inscribed circle of radius 0.65 is solid
    for y in 0..64 {
        for x in 0..64 {
            let (nx, ny) = ((x as f64 + 0.5) / 32.0 - 1.0, 1.0 - (y as f64 + 0.5) / 32.0);

            if nx * nx + ny * ny < 0.6 * 0.6 {
                assert_eq!(framebuffer.pixel(Coordinate::new(x, y)), Ok(RED), "pixel ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_painters_order() {
    let first = triangle("first", [(-1.0, -1.0, -2.0), (1.0, -1.0, -2.0), (0.0, 1.0, -2.0)], RED);
    // farther away, but drawn later
    let second = triangle("second", [(-2.0, -2.0, -4.0), (2.0, -2.0, -4.0), (0.0, 2.0, -4.0)], BLUE);

    let scene = scene_with(Camera::default(), vec![first, second]);

    let mut framebuffer = RenderBuffer::new(32, 32);
    render(&scene, &mut framebuffer).unwrap();

    assert_eq!(framebuffer.pixel(Coordinate::new(16, 20)), Ok(BLUE));
    assert_eq!(count(&framebuffer, RED), 0);
}

#[test]
fn test_painters_order_reversed() {
    let first = triangle("first", [(-2.0, -2.0, -4.0), (2.0, -2.0, -4.0), (0.0, 2.0, -4.0)], BLUE);
    let second = triangle("second", [(-1.0, -1.0, -2.0), (1.0, -1.0, -2.0), (0.0, 1.0, -2.0)], RED);

    let scene = scene_with(Camera::default(), vec![first, second]);

    let mut framebuffer = RenderBuffer::new(32, 32);
    render(&scene, &mut framebuffer).unwrap();

    assert_eq!(framebuffer.pixel(Coordinate::new(16, 20)), Ok(RED));
    assert_eq!(count(&framebuffer, BLUE), 0);
}

#[test]
fn test_depth_test_keeps_nearest() {
    let first = triangle("near", [(-1.0, -1.0, -2.0), (1.0, -1.0, -2.0), (0.0, 1.0, -2.0)], RED);
    let second = triangle("far", [(-2.0, -2.0, -4.0), (2.0, -2.0, -4.0), (0.0, 2.0, -4.0)], BLUE);

    let scene = scene_with(Camera::default(), vec![first, second]);

    let pipeline = Pipeline::new(RenderConfig::default().with_depth_test(true));

    let mut framebuffer = RenderBuffer::new(32, 32);
    pipeline.render(&scene, &mut framebuffer).unwrap();

    assert_eq!(framebuffer.pixel(Coordinate::new(16, 20)), Ok(RED));
}

#[test]
fn test_back_faces_culled_by_default() {
    // clockwise as seen by the camera
    let model = triangle("back", [(-1.0, -1.0, -2.0), (0.0, 1.0, -2.0), (1.0, -1.0, -2.0)], RED);
    let scene = scene_with(Camera::default(), vec![model]);

    let mut framebuffer = RenderBuffer::new(16, 16);
    render(&scene, &mut framebuffer).unwrap();

    assert_eq!(count(&framebuffer, RED), 0);
}

#[test]
fn test_two_sided_faces() {
    let mut model = Model::new("two sided");

    model.add_vertices(vec![
        Vertex::new(-1.0, -1.0, -2.0),
        Vertex::new(0.0, 1.0, -2.0),
        Vertex::new(1.0, -1.0, -2.0),
    ]);

    let front = model.add_color(RED);
    let back = model.add_color(GREEN);

    model.add_primitive(Primitive::triangle(0, 1, 2).with_color(front).with_back_color(back));
    model.set_faces_have_two_sides(true);

    let scene = scene_with(Camera::default(), vec![model]);

    let mut framebuffer = RenderBuffer::new(16, 16);
    render(&scene, &mut framebuffer).unwrap();

    assert_eq!(count(&framebuffer, RED), 0);
    assert!(count(&framebuffer, GREEN) > 0);
}

#[test]
fn test_geometry_behind_camera() {
    // one corner far behind the camera, the others in front of it
    let model = triangle("crossing", [(1.0, -1.0, -2.0), (-1.0, -1.0, -2.0), (0.0, 0.0, 5.0)], WHITE);
    let scene = scene_with(Camera::default(), vec![model]);

    let mut framebuffer = RenderBuffer::new(32, 32);
    render(&scene, &mut framebuffer).unwrap();

    assert!(count(&framebuffer, WHITE) > 0);

    // entirely behind the camera
    let hidden = triangle("behind", [(-1.0, -1.0, 2.0), (1.0, -1.0, 2.0), (0.0, 1.0, 2.0)], WHITE);
    let scene = scene_with(Camera::default(), vec![hidden]);

    let mut framebuffer = RenderBuffer::new(32, 32);
    render(&scene, &mut framebuffer).unwrap();

    assert_eq!(count(&framebuffer, WHITE), 0);
}

#[test]
fn test_orthographic_camera() {
    let mut model = Model::new("quad");

    model.add_vertices(vec![
        Vertex::new(0.0, 0.0, -5.0),
        Vertex::new(2.0, 0.0, -5.0),
        Vertex::new(2.0, 2.0, -5.0),
        Vertex::new(0.0, 2.0, -5.0),
    ]);

    model.fill_colors(RED);
    model.add_primitive(Primitive::face(&[0, 1, 2, 3]).unwrap());

    let scene = scene_with(Camera::orthographic(-2.0, 2.0, -2.0, 2.0, 1.0), vec![model]);

    let mut framebuffer = RenderBuffer::new(20, 20);
    render(&scene, &mut framebuffer).unwrap();

    // the upper right quarter
    assert_eq!(count(&framebuffer, RED), 100);
    assert_eq!(framebuffer.pixel(Coordinate::new(15, 5)), Ok(RED));
    assert_eq!(framebuffer.pixel(Coordinate::new(5, 15)), Ok(BLACK));
}

#[test]
fn test_camera_movement() {
    let model = triangle("small", [(-0.5, -0.5, 0.0), (0.5, -0.5, 0.0), (0.0, 0.5, 0.0)], RED);
    let mut scene = scene_with(Camera::default(), vec![model]);

    // at the origin, the camera sits on the triangle's plane and the near plane hides it
    let mut framebuffer = RenderBuffer::new(16, 16);
    render(&scene, &mut framebuffer).unwrap();
    assert_eq!(count(&framebuffer, RED), 0);

    scene.camera_mut().translate(0.0, 0.0, 3.0);

    render(&scene, &mut framebuffer).unwrap();
    assert!(count(&framebuffer, RED) > 0);
}

#[test]
fn test_shared_model_instancing() {
    let model = triangle("instance", [(-0.2, -0.2, -2.0), (0.2, -0.2, -2.0), (0.0, 0.2, -2.0)], RED).into_handle();

    let mut scene = Scene::new(Camera::default());

    scene.add_position(Position::new(model.clone()).with_matrix(Matrix::translate(-1.0, 0.0, 0.0)).into_handle());
    scene.add_position(Position::new(model).with_matrix(Matrix::translate(1.0, 0.0, 0.0)).into_handle());

    let mut framebuffer = RenderBuffer::new(40, 40);
    render(&scene, &mut framebuffer).unwrap();

    assert_eq!(framebuffer.pixel(Coordinate::new(10, 20)), Ok(RED));
    assert_eq!(framebuffer.pixel(Coordinate::new(30, 20)), Ok(RED));
    assert_eq!(framebuffer.pixel(Coordinate::new(20, 20)), Ok(BLACK));
}

#[test]
fn test_render_into_viewport() {
    let model = triangle("wide", [(-2.0, 0.0, -1.0), (2.0, 0.0, -1.0), (0.0, 2.0, -1.0)], RED);
    let scene = scene_with(Camera::perspective(90.0, 1.0, 0.5), vec![model]);

    let mut framebuffer = RenderBuffer::new(20, 20);

    {
        let mut viewport = framebuffer.viewport_mut(Coordinate::new(10, 10), Dimensions::new(10, 10)).unwrap();
        render(&scene, &mut viewport).unwrap();
    }

    // upper half of the lower right quadrant
    assert_eq!(count(&framebuffer, RED), 50);
    assert_eq!(framebuffer.pixel(Coordinate::new(15, 12)), Ok(RED));
    assert_eq!(framebuffer.pixel(Coordinate::new(5, 2)), Ok(BLACK));
    assert_eq!(framebuffer.pixel(Coordinate::new(15, 17)), Ok(BLACK));

    framebuffer.clear_to_background();
    assert_eq!(count(&framebuffer, RED), 0);
}

#[test]
fn test_lines_and_points() {
    let mut model = Model::new("wire");

    model.add_vertices(vec![
        Vertex::new(-0.5, -0.5, -1.0),
        Vertex::new(0.5, -0.5, -1.0),
        Vertex::new(0.5, 0.5, -1.0),
        Vertex::new(-0.5, 0.5, -1.0),
    ]);

    model.fill_colors(WHITE);
    model.add_primitive(Primitive::line_loop(&[0, 1, 2, 3]).unwrap());

    let scene = scene_with(Camera::default(), vec![model]);

    let mut framebuffer = RenderBuffer::new(21, 21);
    render(&scene, &mut framebuffer).unwrap();

    // the square outline, but not its inside
    assert_eq!(framebuffer.pixel(Coordinate::new(5, 5)), Ok(WHITE));
    assert_eq!(framebuffer.pixel(Coordinate::new(15, 15)), Ok(WHITE));
    assert_eq!(framebuffer.pixel(Coordinate::new(10, 5)), Ok(WHITE));
    assert_eq!(framebuffer.pixel(Coordinate::new(10, 10)), Ok(BLACK));
}

#[test]
fn test_gamma_encoding() {
    let gray = Color::rgb(0.25, 0.25, 0.25);
    let model = triangle("wide", [(-2.0, -2.0, -1.0), (2.0, -2.0, -1.0), (0.0, 2.0, -1.0)], gray);
    let scene = scene_with(Camera::default(), vec![model]);

    let pipeline = Pipeline::new(RenderConfig::default().with_gamma(Some(2.0)));

    let mut framebuffer = RenderBuffer::new(8, 8);
    pipeline.render(&scene, &mut framebuffer).unwrap();

    let pixel = framebuffer.pixel(Coordinate::new(4, 4)).unwrap();

    assert!((pixel.r - 0.5).abs() < 1e-5);
}
