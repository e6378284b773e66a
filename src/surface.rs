use ggez::glam::Vec2;
use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder};
use ggez::{Context, GameResult};

const STROKE_WIDTH: f32 = 2.0;
const CURSOR_RADIUS: f32 = 4.0;
const CURSOR_TOLERANCE: f32 = 0.1;

/// Index of one curve's path on the surface. Paths are created lazily and
/// keep insertion order, which is also draw order.
pub type PathId = usize;

/// Drawing sink the curve engine writes to. Commands are fire and forget:
/// implementations report nothing back and the engine never reads the
/// surface.
pub trait Surface {
    fn dimensions(&self) -> (f32, f32);
    fn set_stroke_color(&mut self, id: PathId, color: Color);
    /// Reposition the pen without tracing.
    fn move_to(&mut self, id: PathId, pos: Vec2);
    /// Trace a segment from the current pen position.
    fn line_to(&mut self, id: PathId, pos: Vec2);
    /// Drop everything traced for the given path.
    fn clear_path(&mut self, id: PathId);
    fn show_cursor(&mut self, id: PathId);
    fn hide_cursor(&mut self, id: PathId);
}

struct PathState {
    color: Color,
    strokes: Vec<Vec<Vec2>>,
    pen: Option<Vec2>,
    cursor_visible: bool,
}

impl PathState {
    fn new() -> Self {
        Self {
            color: Color::BLACK,
            strokes: Vec::new(),
            pen: None,
            cursor_visible: false,
        }
    }
}

/// Surface backed by ggez meshes. Path commands accumulate per-curve
/// polylines in curve coordinates; `meshes` turns the whole picture into a
/// single mesh for the canvas, with a filled dot marking each visible pen.
pub struct MeshSurface {
    width: f32,
    height: f32,
    paths: Vec<PathState>,
}

impl MeshSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    fn path(&mut self, id: PathId) -> &mut PathState {
        while self.paths.len() <= id {
            self.paths.push(PathState::new());
        }
        &mut self.paths[id]
    }

    /// Everything traced so far, in path order. `None` while no path has a
    /// drawable segment or cursor yet.
    pub fn meshes(&self, ctx: &mut Context) -> GameResult<Option<Mesh>> {
        let mut builder = MeshBuilder::new();
        let mut drawable = false;

        for path in &self.paths {
            for stroke in &path.strokes {
                if stroke.len() >= 2 {
                    builder.line(stroke, STROKE_WIDTH, path.color)?;
                    drawable = true;
                }
            }
            if path.cursor_visible {
                if let Some(pen) = path.pen {
                    builder.circle(DrawMode::fill(), pen, CURSOR_RADIUS, CURSOR_TOLERANCE, path.color)?;
                    drawable = true;
                }
            }
        }

        if !drawable {
            return Ok(None);
        }
        Ok(Some(Mesh::from_data(ctx, builder.build())))
    }
}

impl Surface for MeshSurface {
    fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_stroke_color(&mut self, id: PathId, color: Color) {
        self.path(id).color = color;
    }

    fn move_to(&mut self, id: PathId, pos: Vec2) {
        let path = self.path(id);
        path.strokes.push(vec![pos]);
        path.pen = Some(pos);
    }

    fn line_to(&mut self, id: PathId, pos: Vec2) {
        let path = self.path(id);
        match path.strokes.last_mut() {
            Some(stroke) => stroke.push(pos),
            None => path.strokes.push(vec![pos]),
        }
        path.pen = Some(pos);
    }

    fn clear_path(&mut self, id: PathId) {
        let path = self.path(id);
        path.strokes.clear();
        path.pen = None;
    }

    fn show_cursor(&mut self, id: PathId) {
        self.path(id).cursor_visible = true;
    }

    fn hide_cursor(&mut self, id: PathId) {
        self.path(id).cursor_visible = false;
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Raw surface command, as emitted by the curve engine.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Command {
        SetStrokeColor(PathId, Color),
        MoveTo(PathId, Vec2),
        LineTo(PathId, Vec2),
        ClearPath(PathId),
        ShowCursor(PathId),
        HideCursor(PathId),
    }

    /// Captures the command stream for lifecycle and ordering assertions.
    pub(crate) struct RecordingSurface {
        width: f32,
        height: f32,
        pub(crate) commands: Vec<Command>,
    }

    impl RecordingSurface {
        pub(crate) fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                commands: Vec::new(),
            }
        }

        pub(crate) fn drawn_points(&self, id: PathId) -> Vec<Vec2> {
            self.commands
                .iter()
                .filter_map(|command| match command {
                    Command::MoveTo(i, p) | Command::LineTo(i, p) if *i == id => Some(*p),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn dimensions(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn set_stroke_color(&mut self, id: PathId, color: Color) {
            self.commands.push(Command::SetStrokeColor(id, color));
        }

        fn move_to(&mut self, id: PathId, pos: Vec2) {
            self.commands.push(Command::MoveTo(id, pos));
        }

        fn line_to(&mut self, id: PathId, pos: Vec2) {
            self.commands.push(Command::LineTo(id, pos));
        }

        fn clear_path(&mut self, id: PathId) {
            self.commands.push(Command::ClearPath(id));
        }

        fn show_cursor(&mut self, id: PathId) {
            self.commands.push(Command::ShowCursor(id));
        }

        fn hide_cursor(&mut self, id: PathId) {
            self.commands.push(Command::HideCursor(id));
        }
    }
}
