use crate::curve::CurveParams;
use crate::surface::{PathId, Surface};

/// Angle increment per animation step, in degrees.
pub const STEP_DEGREES: f32 = 5.0;

/// One curve being traced: geometry plus drawing progress. The angle only
/// ever grows, in step increments, until the closing threshold flips
/// `complete`; from there the curve is inert until an explicit `restart`.
pub struct Spirograph {
    id: PathId,
    params: CurveParams,
    current_angle: f32,
    complete: bool,
    visible: bool,
}

impl Spirograph {
    /// Creates the curve and positions the pen on its starting point.
    pub fn new(id: PathId, params: CurveParams, surface: &mut dyn Surface) -> Self {
        let mut spiro = Self {
            id,
            params,
            current_angle: 0.0,
            complete: false,
            visible: true,
        };
        surface.set_stroke_color(id, params.color());
        spiro.restart(surface);
        spiro
    }

    pub fn id(&self) -> PathId {
        self.id
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Degrees of outer rotation traced so far.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Swaps in new geometry and stroke color. The drawing position is left
    /// alone; callers wanting to retrace from the start follow up with
    /// `restart`.
    pub fn set_params(&mut self, params: CurveParams, surface: &mut dyn Surface) {
        self.params = params;
        surface.set_stroke_color(self.id, params.color());
    }

    /// Back to the starting point with the cursor shown.
    pub fn restart(&mut self, surface: &mut dyn Surface) {
        self.current_angle = 0.0;
        self.complete = false;
        self.visible = true;
        surface.show_cursor(self.id);
        surface.move_to(self.id, self.params.point_at(0.0));
    }

    /// Advances the trace by one increment. Does nothing once complete;
    /// crossing the closing threshold hides the cursor and freezes the
    /// curve.
    pub fn step(&mut self, step_degrees: f32, surface: &mut dyn Surface) {
        if self.complete {
            return;
        }
        self.current_angle += step_degrees;
        surface.line_to(self.id, self.params.point_at(self.current_angle));
        if self.current_angle >= self.params.total_degrees() {
            self.complete = true;
            surface.hide_cursor(self.id);
        }
    }

    /// Traces the whole closed curve in one call, for the non-animated
    /// mode. The curve ends up complete with the cursor hidden.
    pub fn draw_full(&mut self, step_degrees: f32, surface: &mut dyn Surface) {
        let total = self.params.total_degrees();
        surface.move_to(self.id, self.params.point_at(0.0));
        let mut angle = step_degrees;
        while angle <= total {
            surface.line_to(self.id, self.params.point_at(angle));
            angle += step_degrees;
        }
        self.current_angle = total;
        self.complete = true;
        surface.hide_cursor(self.id);
    }

    /// Erases this curve's trace; drawing progress is unaffected.
    pub fn clear_trace(&self, surface: &mut dyn Surface) {
        surface.clear_path(self.id);
    }

    /// Flips the pen marker. The trace and the angle machinery are
    /// untouched.
    pub fn toggle_visible(&mut self, surface: &mut dyn Surface) {
        self.visible = !self.visible;
        if self.visible {
            surface.show_cursor(self.id);
        } else {
            surface.hide_cursor(self.id);
        }
    }
}
