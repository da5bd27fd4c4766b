//! the solid-red triangle program, both as inline text and as a `.shader` file

use crate::shader_source::ShaderSource;

pub const VERTEX_SOURCE: &str = r#"
in vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SOURCE: &str = r#"
precision mediump float;
out vec4 out_color;
void main() {
    out_color = vec4(1.0, 0.0, 0.0, 1.0);
}
"#;

pub const BASIC_SHADER_FILE: &str = include_str!("../shaders/basic.shader");

pub fn inline() -> ShaderSource {
    ShaderSource::new(VERTEX_SOURCE, FRAGMENT_SOURCE)
}

pub fn embedded() -> ShaderSource {
    ShaderSource::split_str(BASIC_SHADER_FILE)
}
