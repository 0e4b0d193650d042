//! Cairo-based stroke compositing.

use super::color::Color;
use super::path::{PathCommand, Point, VectorPath};
use super::properties::PathProperties;
use super::stroke::Stroke;

/// Fills the whole target with the canvas background.
///
/// Clears the target first so repeated frames never accumulate. With `None`
/// the target is left fully transparent.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `background` - Opaque canvas color, if any
pub fn render_background(ctx: &cairo::Context, background: Option<Color>) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    if let Some(bg) = background {
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = ctx.paint(); // if paint fails we simply keep a transparent bg
    }
    let _ = ctx.restore();
}

/// Renders the complete drawing: background, committed strokes, then the live stroke.
///
/// All strokes are painted into one isolated group which is flattened onto the
/// background at the end. Erase strokes use `Operator::Clear`, so they punch
/// holes only in strokes painted before them inside the group; the background
/// underneath is never touched.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `background` - Canvas background (painted outside the stroke group)
/// * `strokes` - Committed strokes, oldest first
/// * `in_progress` - The stroke currently being drawn, if the pointer is down
///
/// # Errors
/// Returns the Cairo error if the stroke group cannot be merged back.
pub fn render_canvas(
    ctx: &cairo::Context,
    background: Option<Color>,
    strokes: &[Stroke],
    in_progress: Option<(&VectorPath, &PathProperties)>,
) -> Result<(), cairo::Error> {
    render_background(ctx, background);

    ctx.save()?;
    ctx.push_group();

    for stroke in strokes {
        render_stroke(ctx, &stroke.path, &stroke.properties);
    }
    if let Some((path, properties)) = in_progress {
        render_stroke(ctx, path, properties);
    }

    let composite_result = ctx.pop_group_to_source().and_then(|()| {
        ctx.set_operator(cairo::Operator::Over);
        ctx.paint()
    });
    ctx.restore()?;
    composite_result
}

/// Strokes one path into the current target.
///
/// Normal strokes paint with source-over blending. Erase strokes use the same
/// geometry with `Operator::Clear`, removing coverage regardless of color.
pub fn render_stroke(ctx: &cairo::Context, path: &VectorPath, properties: &PathProperties) {
    if path.is_empty() {
        return;
    }

    let _ = ctx.save();
    ctx.set_line_width(properties.stroke_width);
    ctx.set_line_cap(properties.stroke_cap.into());
    ctx.set_line_join(properties.stroke_join.into());

    if properties.erase_mode {
        ctx.set_operator(cairo::Operator::Clear);
        ctx.set_source_rgba(0.0, 0.0, 0.0, 0.0);
    } else {
        let color = properties.effective_color();
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    trace_path(ctx, path);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Emits the path commands onto the Cairo context as a new path.
///
/// Cairo only knows cubic curves, so each quadratic segment is raised to the
/// equivalent cubic.
fn trace_path(ctx: &cairo::Context, path: &VectorPath) {
    ctx.new_path();
    let mut cursor = Point::default();

    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(p) => {
                ctx.move_to(p.x, p.y);
                cursor = p;
            }
            PathCommand::QuadTo { ctrl, to } => {
                let c1 = Point::new(
                    cursor.x + 2.0 / 3.0 * (ctrl.x - cursor.x),
                    cursor.y + 2.0 / 3.0 * (ctrl.y - cursor.y),
                );
                let c2 = Point::new(
                    to.x + 2.0 / 3.0 * (ctrl.x - to.x),
                    to.y + 2.0 / 3.0 * (ctrl.y - to.y),
                );
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                cursor = to;
            }
            PathCommand::LineTo(p) => {
                ctx.line_to(p.x, p.y);
                cursor = p;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn render_canvas_leaves_caller_context_balanced() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        ctx.set_operator(cairo::Operator::Source);

        let mut path = VectorPath::new();
        path.move_to(Point::new(2.0, 10.0));
        path.line_to(Point::new(18.0, 10.0));
        let strokes = [
            Stroke::new(path.clone(), PathProperties::default()),
            Stroke::new(
                path,
                PathProperties {
                    color: BLACK,
                    erase_mode: true,
                    ..PathProperties::default()
                },
            ),
        ];

        render_canvas(&ctx, Some(WHITE), &strokes, None).unwrap();

        assert_eq!(ctx.operator(), cairo::Operator::Source);
        assert_eq!(
            ctx.group_target().to_raw_none(),
            ctx.target().to_raw_none()
        );
        assert!(ctx.restore().is_err(), "no save should be left on the stack");
    }
}
