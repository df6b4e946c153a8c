use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

use crate::error::TrailError;
use super::render::{DrawCommand, Paint};

/// Something the trail can be painted on.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    /// Changes the pixel size. Implementations drop whatever was drawn.
    fn set_size(&mut self, width: u32, height: u32);
    fn draw(&mut self, commands: &[DrawCommand]);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_node(node: &NodeRef) -> Result<Self, TrailError> {
        let canvas = node
            .cast::<HtmlCanvasElement>()
            .ok_or(TrailError::CanvasMissing)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| TrailError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| TrailError::ContextUnavailable("no context returned".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| TrailError::ContextType)?;
        Ok(Self { canvas, ctx })
    }

    fn apply_paint(&self, paint: &Paint) {
        self.ctx.set_global_alpha(paint.alpha);
        self.ctx.set_shadow_color(paint.glow_color);
        self.ctx.set_shadow_blur(paint.glow_blur);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for command in commands {
            match command {
                DrawCommand::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
                DrawCommand::Segment { from, to, width, paint } => {
                    ctx.save();
                    self.apply_paint(paint);
                    ctx.set_stroke_style_str(paint.color);
                    ctx.set_line_width(*width);
                    ctx.begin_path();
                    ctx.move_to(from.0, from.1);
                    ctx.line_to(to.0, to.1);
                    ctx.stroke();
                    ctx.restore();
                }
                DrawCommand::PushTransform { origin, radians } => {
                    ctx.save();
                    // translate/rotate only fail on non-finite input
                    let _ = ctx.translate(origin.0, origin.1);
                    let _ = ctx.rotate(*radians);
                }
                DrawCommand::PopTransform => ctx.restore(),
                DrawCommand::FillSquare { x, y, side, paint } => {
                    self.apply_paint(paint);
                    ctx.set_fill_style_str(paint.color);
                    ctx.fill_rect(*x, *y, *side, *side);
                }
            }
        }
        ctx.set_global_alpha(1.0);
    }
}
