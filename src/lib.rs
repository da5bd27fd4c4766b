pub mod basic_shader;
pub mod drawer_triangle;
pub mod program;
pub mod shader_source;

pub use program::{ProgramError, ShaderStage};
pub use shader_source::{ShaderSource, ShaderSourceError};
