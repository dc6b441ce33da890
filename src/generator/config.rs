//! Configuration for document generation

/// Configuration options for generated documents
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of spaces used to indent attribute and `Use` lines
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// The indent string emitted before each body line
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
