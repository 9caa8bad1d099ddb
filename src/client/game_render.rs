use std::collections::HashMap;
use std::path::Path;

use ab_glyph::FontArc;
use cgmath::Vector2;
use glutin::{dpi::PhysicalSize, NotCurrent, PossiblyCurrent, WindowedContext};

use super::error::SurfaceError;
use super::functions::*;
use super::scene::{DrawCommand, Scene};
use super::style::Color;
use super::surface::Surface;
use super::transform::Viewport;

// Prebuilt IBO for 11089 quads (largest count a u16 index can address).
const MAX_QUADS: usize = 11089;

const CLEAR_COLOR: Color = Color::rgb(16, 16, 24);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextKey {
    text: String,
    size_bits: u32,
    color: Color,
}

struct TextEntry {
    texture: ezgl::Texture2D,
    width: usize,
    height: usize,
    used: bool,
}

pub struct GameRender {
    programs: HashMap<&'static str, ezgl::Program>,
    font: Option<FontArc>,

    // General purpose IBO.
    ibo: ezgl::Buffer<u16>,

    // Shape state data.
    shape_xy: ezgl::Buffer<(f32, f32)>,
    shape_rgba: ezgl::Buffer<(f32, f32, f32, f32)>,

    // Text state data.
    text_xy: ezgl::Buffer<(f32, f32)>,
    text_uv: ezgl::Buffer<(f32, f32)>,
    text_cache: HashMap<TextKey, TextEntry>,
}

impl GameRender {
    pub fn new(font: Option<FontArc>) -> Result<Self, SurfaceError> {
        let mut vec = Vec::with_capacity(6 * MAX_QUADS);
        for i in 0..MAX_QUADS as u16 {
            vec.extend_from_slice(&[4 * i, 4 * i + 1, 4 * i + 2, 4 * i + 2, 4 * i + 3, 4 * i]);
        }
        let ibo = ezgl::Buffer::from(ezgl::gl::ELEMENT_ARRAY_BUFFER, &vec);

        Ok(Self {
            programs: load_game_programs()?,
            font,

            ibo,

            shape_xy: ezgl::Buffer::new(),
            shape_rgba: ezgl::Buffer::new(),

            text_xy: ezgl::Buffer::new(),
            text_uv: ezgl::Buffer::new(),
            text_cache: HashMap::new(),
        })
    }

    pub fn render(&mut self, scene: &Scene, viewport: Viewport) -> Result<(), SurfaceError> {
        unsafe {
            let (r, g, b, a) = CLEAR_COLOR.to_f32();
            ezgl::gl::Viewport(0, 0, viewport.width as _, viewport.height as _);
            ezgl::gl::ClearColor(r, g, b, a);
            ezgl::gl::Clear(ezgl::gl::COLOR_BUFFER_BIT);
        }

        let view = view_matrix(viewport);

        // Consecutive shapes are batched; text breaks a batch so draw order holds.
        let mut xy = Vec::new();
        let mut rgba = Vec::new();
        let mut quads = 0;
        for command in scene.commands() {
            match command {
                DrawCommand::Text {
                    text,
                    position,
                    size,
                    color,
                } => {
                    self.draw_shapes(&mut xy, &mut rgba, &mut quads, &view);
                    self.draw_text(text, *position, *size, *color, &view)?;
                }
                shape => {
                    if quads + shape_quad_count(shape) > MAX_QUADS {
                        self.draw_shapes(&mut xy, &mut rgba, &mut quads, &view);
                    }
                    quads += gen_shape_vertices(shape, &mut xy, &mut rgba);
                }
            }
        }
        self.draw_shapes(&mut xy, &mut rgba, &mut quads, &view);

        // Evict text that was not drawn this frame.
        self.text_cache.retain(|_, entry| entry.used);
        for entry in self.text_cache.values_mut() {
            entry.used = false;
        }

        Ok(())
    }

    fn draw_shapes(
        &mut self,
        xy: &mut Vec<(f32, f32)>,
        rgba: &mut Vec<(f32, f32, f32, f32)>,
        quads: &mut usize,
        view: &cgmath::Matrix3<f32>,
    ) {
        if *quads == 0 {
            return;
        }

        self.shape_xy.init(ezgl::gl::ARRAY_BUFFER, &xy[..]);
        self.shape_rgba.init(ezgl::gl::ARRAY_BUFFER, &rgba[..]);
        ezgl::Draw::start_tri_draw(2 * *quads as u32, &self.programs["shape"], &self.ibo)
            .with_buffer(&self.shape_xy, "vert_xy")
            .with_buffer(&self.shape_rgba, "vert_rgba")
            .with_uniform(view.as_ref() as &[[f32; 3]; 3], "view_matrix")
            .enable_blend(ezgl::gl::SRC_ALPHA, ezgl::gl::ONE_MINUS_SRC_ALPHA)
            .draw();

        xy.clear();
        rgba.clear();
        *quads = 0;
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vector2<f32>,
        size: f32,
        color: Color,
        view: &cgmath::Matrix3<f32>,
    ) -> Result<(), SurfaceError> {
        let font = match &self.font {
            Some(font) => font,
            None => return Ok(()),
        };
        if text.is_empty() {
            return Ok(());
        }

        let key = TextKey {
            text: text.to_owned(),
            size_bits: size.to_bits(),
            color,
        };
        if !self.text_cache.contains_key(&key) {
            let (width, height, pixels) = gen_text_pixels(font, text, size, color);
            let mut texture = ezgl::Texture2D::new();
            texture
                .load_from_pixels(width as _, height as _, ezgl::gl::RGBA, &pixels)
                .map_err(|e| SurfaceError::Texture(format!("{:?}", e)))?;
            unsafe {
                ezgl::gl::TexParameteri(
                    ezgl::gl::TEXTURE_2D,
                    ezgl::gl::TEXTURE_MIN_FILTER,
                    ezgl::gl::NEAREST as _,
                );
                ezgl::gl::TexParameteri(
                    ezgl::gl::TEXTURE_2D,
                    ezgl::gl::TEXTURE_MAG_FILTER,
                    ezgl::gl::NEAREST as _,
                );
            }
            self.text_cache.insert(
                key.clone(),
                TextEntry {
                    texture,
                    width,
                    height,
                    used: false,
                },
            );
        }

        let (width, height) = match self.text_cache.get_mut(&key) {
            Some(entry) => {
                entry.used = true;
                (entry.width, entry.height)
            }
            None => return Ok(()),
        };
        let (quad_xy, quad_uv) = gen_text_quad(position, width, height);
        self.text_xy.init(ezgl::gl::ARRAY_BUFFER, &quad_xy);
        self.text_uv.init(ezgl::gl::ARRAY_BUFFER, &quad_uv);

        if let Some(entry) = self.text_cache.get(&key) {
            ezgl::Draw::start_tri_draw(2, &self.programs["text"], &self.ibo)
                .with_buffer(&self.text_xy, "vert_xy")
                .with_buffer(&self.text_uv, "vert_uv")
                .with_uniform(view.as_ref() as &[[f32; 3]; 3], "view_matrix")
                .with_texture(&entry.texture, "glyphs")
                .enable_blend(ezgl::gl::SRC_ALPHA, ezgl::gl::ONE_MINUS_SRC_ALPHA)
                .draw();
        }

        Ok(())
    }
}

/// Pixel space (origin top-left, y down) to clip space.
pub fn view_matrix(viewport: Viewport) -> cgmath::Matrix3<f32> {
    use cgmath::*;
    let (w, h) = (viewport.width.max(1.), viewport.height.max(1.));
    let mut matrix = Matrix3::identity();
    matrix = matrix * Matrix3::from_nonuniform_scale(2. / w, -2. / h);
    matrix = matrix * Matrix3::from_translation(Vector2::new(-w / 2., -h / 2.));
    matrix
}

fn load_game_programs() -> Result<HashMap<&'static str, ezgl::Program>, SurfaceError> {
    let mut hmap = HashMap::new();
    for name in ["shape", "text"] {
        hmap.insert(name, load_program(name)?);
    }
    Ok(hmap)
}

fn load_program(name: &'static str) -> Result<ezgl::Program, SurfaceError> {
    let error = |reason: String| SurfaceError::Program { name, reason };
    let shader = |path: &Path| {
        ezgl::Shader::from_file(path).map_err(|e| error(format!("{:?}: {:?}", path, e)))
    };

    ezgl::ProgramBuilder::new()
        .with(shader(&crate::io::get_resource(format!("{}.frag", name)))?)
        .with(shader(&crate::io::get_resource(format!("{}.vert", name)))?)
        .build()
        .map_err(|e| error(format!("{:?}", e)))
}

/// Loads a TTF/OTF font for HUD text.
pub fn load_font(path: &Path) -> Result<FontArc, SurfaceError> {
    let bytes = std::fs::read(path).map_err(|e| SurfaceError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    FontArc::try_from_vec(bytes).map_err(|e| SurfaceError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// The glutin window as a drawing surface.
pub struct GlSurface {
    // Declared before the context so GL objects go first.
    render: Option<GameRender>,
    context: Option<WindowedContext<PossiblyCurrent>>,
    viewport: Viewport,
}

impl GlSurface {
    pub fn new(
        windowed_context: WindowedContext<NotCurrent>,
        font: Option<FontArc>,
    ) -> Result<Self, SurfaceError> {
        let context = unsafe {
            let ctx = windowed_context
                .make_current()
                .map_err(|(_, e)| SurfaceError::MakeCurrent(e))?;
            ezgl::gl::load_with(|s| ctx.get_proc_address(s) as *const _);
            ezgl::bind_vao();
            ctx
        };

        let PhysicalSize { width, height } = context.window().inner_size();
        Ok(Self {
            render: Some(GameRender::new(font)?),
            context: Some(context),
            viewport: Viewport::new(width as f32, height as f32),
        })
    }
}

impl Surface for GlSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(context) = &self.context {
            context.resize(PhysicalSize::new(width, height));
        }
        self.viewport = Viewport::new(width as f32, height as f32);
    }

    fn present(&mut self, scene: &Scene) -> Result<(), SurfaceError> {
        let (render, context) = match (&mut self.render, &self.context) {
            (Some(render), Some(context)) => (render, context),
            _ => return Ok(()),
        };

        render.render(scene, self.viewport)?;
        context.swap_buffers().map_err(SurfaceError::Swap)
    }

    fn release(&mut self) {
        self.render = None;
        self.context = None;
    }
}
