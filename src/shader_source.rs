//! split a single `.shader` text into vertex-stage and fragment-stage source
//!
//! ```text
//! #shader vertex
//! <vertex-stage source lines>
//! #shader fragment
//! <fragment-stage source lines>
//! ```
//!
//! Lines before the first directive are dropped. A directive line is never
//! part of the output.

use std::io::BufRead;

const DIRECTIVE: &str = "#shader";

#[derive(thiserror::Error, Debug)]
pub enum ShaderSourceError {
    #[error("cannot read shader source `{resource}`: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex_source: String,
    pub fragment_source: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParseState {
    None,
    Vertex,
    Fragment,
}

impl ShaderSource {
    pub fn new(vertex_source: &str, fragment_source: &str) -> Self {
        ShaderSource {
            vertex_source: vertex_source.to_string(),
            fragment_source: fragment_source.to_string(),
        }
    }

    pub fn split_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParseState::None;
        let mut vertex_accum = String::new();
        let mut fragment_accum = String::new();
        for (i_line, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.contains(DIRECTIVE) {
                // vertex is checked first, so a line naming both stages selects vertex
                if line.contains("vertex") {
                    state = ParseState::Vertex;
                } else if line.contains("fragment") {
                    state = ParseState::Fragment;
                } else {
                    log::warn!(
                        "line {}: unrecognized shader directive `{}` ignored",
                        i_line + 1,
                        line
                    );
                }
                continue;
            }
            let accum = match state {
                ParseState::None => continue,
                ParseState::Vertex => &mut vertex_accum,
                ParseState::Fragment => &mut fragment_accum,
            };
            accum.push_str(line);
            accum.push('\n');
        }
        log::debug!(
            "split shader source: vertex {} bytes, fragment {} bytes",
            vertex_accum.len(),
            fragment_accum.len()
        );
        ShaderSource {
            vertex_source: vertex_accum,
            fragment_source: fragment_accum,
        }
    }

    pub fn split_str(text: &str) -> Self {
        Self::split_lines(text.lines())
    }

    /// Reads every line of `reader` before splitting. A read failure in the
    /// middle of the stream is reported the same way as a failure to open.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ShaderSourceError> {
        Self::read_named(reader, "<reader>")
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ShaderSourceError> {
        let path = path.as_ref();
        let resource = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|source| {
            ShaderSourceError::ResourceUnavailable {
                resource: resource.clone(),
                source,
            }
        })?;
        Self::read_named(std::io::BufReader::new(file), &resource)
    }

    fn read_named<R: BufRead>(reader: R, resource: &str) -> Result<Self, ShaderSourceError> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(|source| ShaderSourceError::ResourceUnavailable {
                resource: resource.to_string(),
                source,
            })?;
        Ok(Self::split_lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::ShaderSource;

    #[test]
    fn test_two_sections() {
        let src = ShaderSource::split_str("#shader vertex\nA\nB\n#shader fragment\nC\n");
        assert_eq!(src.vertex_source, "A\nB\n");
        assert_eq!(src.fragment_source, "C\n");
    }

    #[test]
    fn test_no_directive() {
        let src = ShaderSource::split_str("hello\nworld\n");
        assert_eq!(src, ShaderSource::default());
    }

    #[test]
    fn test_missing_fragment() {
        let src = ShaderSource::split_str("#shader vertex\nX\n");
        assert_eq!(src.vertex_source, "X\n");
        assert_eq!(src.fragment_source, "");
    }

    #[test]
    fn test_lines_before_first_directive_are_dropped() {
        let src = ShaderSource::split_str("preamble\n\n#shader fragment\nF\n");
        assert_eq!(src.vertex_source, "");
        assert_eq!(src.fragment_source, "F\n");
    }

    #[test]
    fn test_both_stage_names_select_vertex() {
        let src = ShaderSource::split_str("#shader vertex fragment\nV\n#shader fragment vertex\nW\n");
        assert_eq!(src.vertex_source, "V\nW\n");
        assert_eq!(src.fragment_source, "");
    }

    #[test]
    fn test_unknown_directive_keeps_state() {
        let src = ShaderSource::split_str("#shader vertex\nA\n#shader geometry\nB\n");
        assert_eq!(src.vertex_source, "A\nB\n");
        assert_eq!(src.fragment_source, "");
        // before any stage was selected, lines are still dropped
        let src = ShaderSource::split_str("#shader compute\nA\n");
        assert_eq!(src, ShaderSource::default());
    }

    #[test]
    fn test_interleaved_sections_accumulate() {
        let text = "#shader vertex\nv0\n#shader fragment\nf0\n#shader vertex\nv1\n";
        let src = ShaderSource::split_str(text);
        assert_eq!(src.vertex_source, "v0\nv1\n");
        assert_eq!(src.fragment_source, "f0\n");
    }

    #[test]
    fn test_directive_is_substring_and_case_sensitive() {
        let src = ShaderSource::split_str("  // #shader   vertex stage\nA\n#SHADER fragment\nB\n");
        // `#SHADER` is not a directive, so it lands in the vertex block
        assert_eq!(src.vertex_source, "A\n#SHADER fragment\nB\n");
        assert_eq!(src.fragment_source, "");
    }

    #[test]
    fn test_directives_never_in_output() {
        let text = "x\n#shader vertex\na\n\n#shader fragment\n\nb\n#shader fragment\n";
        let src = ShaderSource::split_str(text);
        assert!(!src.vertex_source.contains("#shader"));
        assert!(!src.fragment_source.contains("#shader"));
        assert_eq!(src.vertex_source, "a\n\n");
        assert_eq!(src.fragment_source, "\nb\n");
    }

    #[test]
    fn test_split_is_idempotent() {
        let text = "#shader vertex\nvoid main() {}\n#shader fragment\nvoid main() {}\n";
        assert_eq!(ShaderSource::split_str(text), ShaderSource::split_str(text));
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let src = ShaderSource::split_str("#shader vertex\r\nA\r\n#shader fragment\r\nB");
        assert_eq!(src.vertex_source, "A\n");
        assert_eq!(src.fragment_source, "B\n");
    }

    #[test]
    fn test_from_reader_matches_split_str() {
        let text = "#shader vertex\nA\n#shader fragment\nC\n";
        let src = ShaderSource::from_reader(std::io::Cursor::new(text)).unwrap();
        assert_eq!(src, ShaderSource::split_str(text));
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let bytes: &[u8] = b"#shader vertex\n\xff\xfe\n";
        let err = ShaderSource::from_reader(bytes).unwrap_err();
        assert!(matches!(
            err,
            super::ShaderSourceError::ResourceUnavailable { .. }
        ));
    }

    #[test]
    fn test_bundled_shader_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/basic.shader");
        let src = ShaderSource::from_file(path).unwrap();
        assert!(src.vertex_source.starts_with("in vec2 position;\n"));
        assert!(src.fragment_source.starts_with("precision mediump float;\n"));
        assert!(!src.vertex_source.contains("#shader"));
        assert!(!src.fragment_source.contains("#shader"));
        assert_eq!(src, crate::basic_shader::embedded());
        // reading the same file again gives the same value
        assert_eq!(src, ShaderSource::from_file(path).unwrap());
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/does_not_exist.shader");
        match ShaderSource::from_file(path) {
            Err(super::ShaderSourceError::ResourceUnavailable { resource, source }) => {
                assert!(resource.ends_with("does_not_exist.shader"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            Ok(_) => panic!("a missing file must not split"),
        }
    }

    #[test]
    fn test_directory_is_resource_unavailable() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders");
        let err = ShaderSource::from_file(path).unwrap_err();
        assert!(err.to_string().starts_with("cannot read shader source"));
    }
}
