//! draw a static 2D triangle with a single color from the shader

use glow::HasContext;

use crate::shader_source::ShaderSource;

pub const TRIANGLE_VTX2XY: [f32; 6] = [-0.5, -0.5, 0.0, 0.5, 0.5, -0.5];

pub struct Drawer {
    pub program: Option<glow::Program>,
    pub mode: u32,
    vertex_array: Option<glow::VertexArray>,
    vbo: Option<glow::Buffer>,
    num_vtx: usize,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer {
    pub fn new() -> Self {
        Drawer {
            program: None,
            mode: glow::TRIANGLES,
            vertex_array: None,
            vbo: None,
            num_vtx: 0,
        }
    }

    /// On failure the error is logged and `program` stays `None`.
    pub fn compile_shader(&mut self, gl: &glow::Context, source: &ShaderSource) {
        self.program = crate::program::create_program(gl, crate::program::shader_version(), source);
    }

    pub fn set_vtx2xy(&mut self, gl: &glow::Context, vtx2xy: &[f32]) {
        let Some(program) = self.program else {
            log::warn!("no shader program; vertices are not uploaded");
            return;
        };
        let uploaded = self.upload_vtx2xy(gl, program, vtx2xy);
        // nothing stays bound in eframe's shared context, on any path
        unsafe {
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
        self.num_vtx = match uploaded {
            Ok(num_vtx) => num_vtx,
            Err(e) => {
                log::error!("{e}");
                0
            }
        };
    }

    /// Returns the number of vertices; may leave the vertex array bound.
    fn upload_vtx2xy(
        &mut self,
        gl: &glow::Context,
        program: glow::Program,
        vtx2xy: &[f32],
    ) -> Result<usize, String> {
        unsafe {
            let vertex_array = match self.vertex_array {
                Some(vao) => vao,
                None => gl
                    .create_vertex_array()
                    .map_err(|e| format!("cannot create vertex array: {e}"))?,
            };
            self.vertex_array = Some(vertex_array);
            gl.bind_vertex_array(Some(vertex_array));
            let vbo = match self.vbo {
                Some(vbo) => vbo,
                None => gl
                    .create_buffer()
                    .map_err(|e| format!("cannot create buffer: {e}"))?,
            };
            self.vbo = Some(vbo);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vtx2xy),
                glow::STATIC_DRAW,
            );
            //
            let loc_xy = gl
                .get_attrib_location(program, "position")
                .ok_or("attribute `position` is not active in the shader program")?;
            gl.vertex_attrib_pointer_f32(
                loc_xy,
                2,
                glow::FLOAT,
                false,
                2 * std::mem::size_of::<f32>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(loc_xy);
        }
        Ok(vtx2xy.len() / 2)
    }

    pub fn paint(&self, gl: &glow::Context) {
        if self.program.is_none() || self.vertex_array.is_none() {
            return;
        }
        unsafe {
            gl.use_program(self.program);
            gl.bind_vertex_array(self.vertex_array);
            gl.draw_arrays(self.mode, 0, self.num_vtx as i32);
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(&mut self, gl: &glow::Context) {
        unsafe {
            if let Some(program) = self.program.take() {
                gl.delete_program(program);
            }
            if let Some(vao) = self.vertex_array.take() {
                gl.delete_vertex_array(vao);
            }
            if let Some(vbo) = self.vbo.take() {
                gl.delete_buffer(vbo);
            }
        }
    }
}
