use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::glam::Vec2;
use ggez::graphics::{self, Canvas, Color, DrawParam};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, ContextBuilder, GameResult};
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use log::{info, warn};
use rand::prelude::StdRng;
use rand::SeedableRng;

use crate::animator::{SpiroAnimator, TICK_INTERVAL_MS};
use crate::curve::CurveParams;
use crate::sampler::ParameterSampler;
use crate::spirograph::{Spirograph, STEP_DEGREES};
use crate::surface::{MeshSurface, Surface};

/// Curves animated simultaneously in the randomized mode.
pub const DEFAULT_CURVE_COUNT: usize = 4;

const WINDOW_WIDTH: f32 = 800.0;
const WINDOW_HEIGHT: f32 = 600.0;
const TICKS_PER_SECOND: u32 = (1000 / TICK_INTERVAL_MS) as u32;

/// How the binary was asked to run: the perpetual randomized animation, or
/// a single fully drawn curve from an explicit parameter triple.
#[derive(Debug)]
pub enum RunMode {
    Animated { count: usize },
    Single { outer: u32, inner: u32, hole: f32 },
}

enum Content {
    Animated(SpiroAnimator),
    /// Fully drawn at startup; the window just keeps showing it.
    Single(Spirograph),
}

pub struct SpiroApp {
    surface: MeshSurface,
    content: Content,
    screen: graphics::ScreenImage,
}

impl SpiroApp {
    pub fn new(ctx: &mut Context, mode: RunMode) -> GameResult<SpiroApp> {
        let mut surface = MeshSurface::new(
            ctx.gfx.frame().width() as f32,
            ctx.gfx.frame().height() as f32,
        );

        let content = match mode {
            RunMode::Animated { count } => {
                let animator = SpiroAnimator::new(
                    count,
                    ParameterSampler::default(),
                    StdRng::from_entropy(),
                    &mut surface,
                )?;
                Content::Animated(animator)
            }
            RunMode::Single { outer, inner, hole } => {
                let params = CurveParams::new(outer, inner, hole, Vec2::ZERO, Color::BLACK)?;
                let mut spiro = Spirograph::new(0, params, &mut surface);
                spiro.draw_full(STEP_DEGREES, &mut surface);
                Content::Single(spiro)
            }
        };

        Ok(SpiroApp {
            surface,
            content,
            screen: graphics::ScreenImage::new(ctx, graphics::ImageFormat::Rgba8UnormSrgb, 1., 1., 1),
        })
    }

    fn save_screenshot(&mut self, ctx: &mut Context) {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let mut filepath = std::env::current_dir().expect("Find current directory");
        filepath.push(format!("spiro-{stamp}"));
        filepath.set_extension("png");
        let filepath = filepath.as_path();

        let image = self.screen.image(ctx);
        if image.width() % 64 != 0 {
            warn!("screenshot width is not a multiple of 64 and cannot be saved");
            return;
        }

        let f = File::create(filepath).expect("File created");
        let writer = &mut std::io::BufWriter::new(f);
        let pixels = image.to_pixels(ctx).expect("Got pixels");
        PngEncoder::new(writer)
            .write_image(&pixels, image.width(), image.height(), ::image::ColorType::Rgba8)
            .expect("Image written");

        info!("drawing saved to {}", filepath.display());
    }

    fn title(&self) -> String {
        match &self.content {
            Content::Animated(animator) => format!("{animator}"),
            Content::Single(spiro) => format!(
                "Spirographs!  R {} r {} l {}",
                spiro.params().outer_radius(),
                spiro.params().inner_radius(),
                spiro.params().hole_ratio()
            ),
        }
    }
}

impl EventHandler<ggez::GameError> for SpiroApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(TICKS_PER_SECOND) {
            if let Content::Animated(animator) = &mut self.content {
                animator.tick(&mut self.surface)?;
            }
        }
        ctx.gfx.window().set_title(&self.title());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_screen_image(ctx, &mut self.screen, Color::WHITE);
        if let Some(mesh) = self.surface.meshes(ctx)? {
            let (width, height) = self.surface.dimensions();
            canvas.draw(&mesh, DrawParam::new().dest(Vec2::new(width / 2.0, height / 2.0)));
        }
        canvas.finish(ctx)?;

        ctx.gfx.present(&self.screen.image(ctx))
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::T) => {
                if let Content::Animated(animator) = &mut self.content {
                    animator.toggle_visibility(&mut self.surface);
                }
            }
            Some(KeyCode::Space) => {
                if let Content::Animated(animator) = &mut self.content {
                    animator.regenerate_all(&mut self.surface)?;
                }
            }
            Some(KeyCode::S) => self.save_screenshot(ctx),
            Some(KeyCode::Escape) => ctx.request_quit(),
            _ => {}
        }
        Ok(())
    }
}

/// Opens the window and runs the event loop until the user quits.
pub fn run(mode: RunMode) -> GameResult {
    let (mut ctx, event_loop) = ContextBuilder::new("spirograph", "spirograph")
        .window_setup(WindowSetup::default().title("Spirographs!"))
        .window_mode(WindowMode::default().dimensions(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build()?;
    let app = SpiroApp::new(&mut ctx, mode)?;
    event::run(ctx, event_loop, app)
}
