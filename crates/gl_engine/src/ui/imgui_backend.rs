//! [`GuiLibrary`] implementation for Dear ImGui (`imgui` crate)

use imgui::{DrawCmd, DrawCmdParams, DrawData, DrawVert, FontSource};

use super::backend::{DisplayMetrics, FontAtlasPixels, GuiLibrary, PointerInput};
use super::rendering::{ClipRect, CommandList, DrawCommand, DrawParams, DrawStream, GuiVertex, TextureId};
use crate::core::config::GuiConfig;

/// ImGui context with the default font and the configured style and ini handling
pub fn create_context(config: &GuiConfig) -> imgui::Context {
    let mut context = imgui::Context::create();
    context.set_ini_filename(config.ini_file.as_ref().map(std::path::PathBuf::from));
    context.fonts().add_font(&[FontSource::DefaultFontData { config: None }]);
    if config.dark_style {
        context.style_mut().use_dark_colors();
    }
    context
}

impl GuiLibrary for imgui::Context {
    type Frame = imgui::Ui;

    fn font_atlas(&mut self) -> FontAtlasPixels<'_> {
        let texture = self.fonts().build_rgba32_texture();
        FontAtlasPixels {
            width: texture.width,
            height: texture.height,
            pixels: texture.data,
        }
    }

    fn register_font_texture(&mut self, id: TextureId) {
        self.fonts().tex_id = imgui::TextureId::new(id.0);
    }

    fn release_font_pixels(&mut self) {
        self.fonts().clear_tex_data();
    }

    fn set_display(&mut self, metrics: &DisplayMetrics) {
        let io = self.io_mut();
        io.display_size = metrics.display_size;
        io.display_framebuffer_scale = metrics.framebuffer_scale;
        // ImGui asserts on a non-positive delta
        io.delta_time = metrics.delta_seconds.max(f32::EPSILON);
    }

    fn set_pointer(&mut self, pointer: &PointerInput) {
        let io = self.io_mut();
        io.add_mouse_pos_event(pointer.position);
        for (button, down) in [imgui::MouseButton::Left, imgui::MouseButton::Right, imgui::MouseButton::Middle]
            .into_iter()
            .zip(pointer.buttons)
        {
            io.add_mouse_button_event(button, down);
        }
        if pointer.wheel != [0.0, 0.0] {
            io.add_mouse_wheel_event(pointer.wheel);
        }
    }

    fn begin_frame(&mut self) -> &mut imgui::Ui {
        self.new_frame()
    }

    fn end_frame(&mut self) -> DrawStream {
        to_draw_stream(self.render())
    }
}

fn to_draw_stream(draw_data: &DrawData) -> DrawStream {
    let command_lists = draw_data
        .draw_lists()
        .map(|list| CommandList {
            vertices: list.vtx_buffer().iter().map(to_gui_vertex).collect(),
            indices: list.idx_buffer().to_vec(),
            commands: list.commands().map(to_draw_command).collect(),
        })
        .collect();

    DrawStream { command_lists }
}

fn to_gui_vertex(vertex: &DrawVert) -> GuiVertex {
    GuiVertex::new(vertex.pos, vertex.uv, vertex.col)
}

fn to_draw_command(command: DrawCmd) -> DrawCommand {
    match command {
        DrawCmd::Elements {
            count,
            cmd_params:
                DrawCmdParams {
                    clip_rect: [left, top, right, bottom],
                    texture_id,
                    vtx_offset,
                    idx_offset,
                },
        } => DrawCommand::Elements {
            count,
            params: DrawParams {
                clip_rect: ClipRect::new(left, top, right, bottom),
                texture_id: TextureId(texture_id.id()),
                vtx_offset,
                idx_offset,
            },
        },
        // Render-state resets are callbacks too
        DrawCmd::ResetRenderState | DrawCmd::RawCallback { .. } => DrawCommand::UserCallback,
    }
}
