//! compile and link a vertex + fragment shader program

use glow::HasContext;

use crate::shader_source::ShaderSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_kind(&self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProgramError {
    #[error("cannot create {0} shader: {1}")]
    CreateShader(ShaderStage, String),
    #[error("cannot create program: {0}")]
    CreateProgram(String),
    #[error("{0} shader source is empty")]
    EmptySource(ShaderStage),
    #[error("failed to compile {stage} shader: {info_log}")]
    Compile { stage: ShaderStage, info_log: String },
    #[error("failed to link program: {0}")]
    Link(String),
}

/// GLSL header put in front of every stage.
pub fn shader_version() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "#version 300 es"
    } else {
        "#version 330"
    }
}

/// The header is skipped when the source already opens with its own `#version`.
pub fn prepare_source(
    stage: ShaderStage,
    shader_version: &str,
    source: &str,
) -> Result<String, ProgramError> {
    if source.trim().is_empty() {
        return Err(ProgramError::EmptySource(stage));
    }
    let has_version = source
        .lines()
        .map(str::trim_start)
        .find(|line| !line.is_empty())
        .is_some_and(|line| line.starts_with("#version"));
    if shader_version.is_empty() || has_version {
        Ok(source.to_string())
    } else {
        Ok(format!("{shader_version}\n{source}"))
    }
}

pub fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    shader_version: &str,
    source: &str,
) -> Result<glow::Shader, ProgramError> {
    let source = prepare_source(stage, shader_version, source)?;
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(|e| ProgramError::CreateShader(stage, e))?;
        gl.shader_source(shader, &source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ProgramError::Compile { stage, info_log });
        }
        Ok(shader)
    }
}

/// Stage shaders are detached and deleted whether linking succeeds or not.
pub fn link_program(
    gl: &glow::Context,
    shaders: &[glow::Shader],
) -> Result<glow::Program, ProgramError> {
    unsafe {
        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                for &shader in shaders {
                    gl.delete_shader(shader);
                }
                return Err(ProgramError::CreateProgram(e));
            }
        };
        for &shader in shaders {
            gl.attach_shader(program, shader);
        }
        gl.link_program(program);
        let linked = gl.get_program_link_status(program);
        for &shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }
        if !linked {
            let info_log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(ProgramError::Link(info_log));
        }
        Ok(program)
    }
}

pub fn build_program(
    gl: &glow::Context,
    shader_version: &str,
    source: &ShaderSource,
) -> Result<glow::Program, ProgramError> {
    let vs = compile_stage(gl, ShaderStage::Vertex, shader_version, &source.vertex_source)?;
    let fs = match compile_stage(
        gl,
        ShaderStage::Fragment,
        shader_version,
        &source.fragment_source,
    ) {
        Ok(fs) => fs,
        Err(e) => {
            unsafe { gl.delete_shader(vs) };
            return Err(e);
        }
    };
    link_program(gl, &[vs, fs])
}

/// Like [`build_program`], but a failure is logged and `None` is returned so
/// the caller keeps running with nothing bound.
pub fn create_program(
    gl: &glow::Context,
    shader_version: &str,
    source: &ShaderSource,
) -> Option<glow::Program> {
    match build_program(gl, shader_version, source) {
        Ok(program) => Some(program),
        Err(e) => {
            log::error!("{e}");
            None
        }
    }
}
