use cairo::{Context, ImageSurface};
use scribbler::draw::{
    BLACK, PathProperties, Point, RED, Stroke, StrokeCap, VectorPath, WHITE, render_canvas,
};
use scribbler::input::{DrawMode, InputState, PointerEvent};

const WIDTH: i32 = 60;
const HEIGHT: i32 = 40;

fn surface_with_context() -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, WIDTH, HEIGHT).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Returns (a, r, g, b) of the premultiplied pixel at (x, y).
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().expect("surface data should be accessible");
    let offset = y as usize * stride + x as usize * 4;
    let value = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    )
}

fn line_stroke(from: (f64, f64), to: (f64, f64), erase: bool) -> Stroke {
    let mut path = VectorPath::new();
    path.move_to(Point::new(from.0, from.1));
    path.line_to(Point::new(to.0, to.1));
    Stroke::new(
        path,
        PathProperties {
            stroke_width: 10.0,
            color: BLACK,
            stroke_cap: StrokeCap::Butt,
            erase_mode: erase,
            ..PathProperties::default()
        },
    )
}

fn render(strokes: &[Stroke], background: Option<scribbler::draw::Color>) -> ImageSurface {
    let (surface, ctx) = surface_with_context();
    render_canvas(&ctx, background, strokes, None).unwrap();
    drop(ctx);
    surface
}

const OPAQUE_WHITE: (u8, u8, u8, u8) = (255, 255, 255, 255);
const OPAQUE_BLACK: (u8, u8, u8, u8) = (255, 0, 0, 0);
const CLEAR: (u8, u8, u8, u8) = (0, 0, 0, 0);

#[test]
fn paint_stroke_covers_background() {
    let mut surface = render(&[line_stroke((10.0, 20.0), (50.0, 20.0), false)], Some(WHITE));
    assert_eq!(pixel(&mut surface, 30, 20), OPAQUE_BLACK);
    assert_eq!(pixel(&mut surface, 30, 5), OPAQUE_WHITE);
}

#[test]
fn erase_reveals_background_not_transparency() {
    let strokes = [
        line_stroke((10.0, 20.0), (50.0, 20.0), false),
        line_stroke((10.0, 20.0), (50.0, 20.0), true),
    ];

    let mut surface = render(&strokes, Some(WHITE));
    assert_eq!(pixel(&mut surface, 30, 20), OPAQUE_WHITE);
    assert_eq!(pixel(&mut surface, 30, 5), OPAQUE_WHITE);
    assert_eq!(pixel(&mut surface, 2, 2), OPAQUE_WHITE);

    // Without a background the stroke layer itself is fully cleared.
    let mut bare = render(&strokes, None);
    assert_eq!(pixel(&mut bare, 30, 20), CLEAR);
}

#[test]
fn erase_only_affects_strokes_painted_before_it() {
    let horizontal = line_stroke((10.0, 20.0), (50.0, 20.0), false);
    let vertical_erase = line_stroke((30.0, 5.0), (30.0, 35.0), true);

    let mut erased = render(&[horizontal.clone(), vertical_erase.clone()], Some(WHITE));
    assert_eq!(pixel(&mut erased, 30, 20), OPAQUE_WHITE);
    assert_eq!(pixel(&mut erased, 15, 20), OPAQUE_BLACK);

    let mut kept = render(&[vertical_erase, horizontal], Some(WHITE));
    assert_eq!(pixel(&mut kept, 30, 20), OPAQUE_BLACK);
    assert_eq!(pixel(&mut kept, 15, 20), OPAQUE_BLACK);
}

#[test]
fn alpha_scales_stroke_opacity() {
    let mut stroke = line_stroke((10.0, 20.0), (50.0, 20.0), false);
    stroke.properties.color = RED;
    stroke.properties.alpha = 0.5;

    let mut surface = render(&[stroke], None);
    let (a, r, g, b) = pixel(&mut surface, 30, 20);
    assert!((126..=129).contains(&a), "alpha was {a}");
    assert_eq!(r, a);
    assert_eq!((g, b), (0, 0));
}

#[test]
fn in_progress_stroke_is_composited_until_abandoned() {
    let mut state = InputState::with_defaults(
        PathProperties {
            stroke_cap: StrokeCap::Butt,
            ..PathProperties::default()
        },
        Some(WHITE),
    );
    state.on_pointer_event(&mut PointerEvent::start(10.0, 20.0));
    state.on_pointer_event(&mut PointerEvent::moved(30.0, 20.0));
    state.on_pointer_event(&mut PointerEvent::moved(50.0, 20.0));

    {
        let (mut surface, ctx) = surface_with_context();
        state.render(&ctx).unwrap();
        drop(ctx);
        // Smoothed path so far runs (10,20) → (20,20) → (40,20)
        assert_eq!(pixel(&mut surface, 25, 20), OPAQUE_BLACK);
    }

    state.set_draw_mode(DrawMode::Touch);
    let (mut surface, ctx) = surface_with_context();
    state.render(&ctx).unwrap();
    drop(ctx);
    assert_eq!(pixel(&mut surface, 25, 20), OPAQUE_WHITE);
}

#[test]
fn live_erase_stroke_clears_committed_strokes() {
    let mut state = InputState::with_defaults(PathProperties::default(), Some(WHITE));
    state.on_pointer_event(&mut PointerEvent::start(10.0, 20.0));
    state.on_pointer_event(&mut PointerEvent::end(50.0, 20.0));

    state.set_draw_mode(DrawMode::Erase);
    state.on_pointer_event(&mut PointerEvent::start(10.0, 20.0));
    state.on_pointer_event(&mut PointerEvent::moved(50.0, 20.0));
    state.on_pointer_event(&mut PointerEvent::moved(50.0, 20.0));

    let (mut surface, ctx) = surface_with_context();
    state.render(&ctx).unwrap();
    drop(ctx);
    assert_eq!(pixel(&mut surface, 20, 20), OPAQUE_WHITE);
}

#[test]
fn undo_removes_stroke_from_next_frame() {
    let mut state = InputState::with_defaults(PathProperties::default(), Some(WHITE));
    state.on_pointer_event(&mut PointerEvent::start(10.0, 20.0));
    state.on_pointer_event(&mut PointerEvent::end(50.0, 20.0));
    assert!(state.undo());

    let (mut surface, ctx) = surface_with_context();
    assert!(state.render_if_needed(&ctx).unwrap());
    drop(ctx);
    assert_eq!(pixel(&mut surface, 30, 20), OPAQUE_WHITE);
}
