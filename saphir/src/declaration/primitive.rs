use super::{Declaration, DeclarationKind};
use crate::keys::{InputPrimitiveType, OutputPrimitiveType};

/// Primitive consumed by a geometry or tesselation stage (`layout(triangles) in;`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPrimitive {
    primitive: InputPrimitiveType,
}

impl InputPrimitive {
    pub fn new(primitive: InputPrimitiveType) -> Self {
        Self { primitive }
    }

    pub fn primitive(&self) -> InputPrimitiveType {
        self.primitive
    }

    /// Vertices per primitive, used to size array inputs
    pub fn vertex_count(&self) -> u32 {
        self.primitive.vertex_count()
    }
}

impl Declaration for InputPrimitive {
    const KIND: DeclarationKind = DeclarationKind::InputPrimitive;

    fn name(&self) -> &str {
        self.primitive.to_str()
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn source_code(&self) -> String {
        format!("layout({}) in;\n", self.primitive.to_str())
    }
}

/// Primitive emitted by a geometry or tesselation stage
/// (`layout(triangle_strip, max_vertices = 3) out;`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPrimitive {
    primitive: OutputPrimitiveType,
    max_vertices: u32,
}

impl OutputPrimitive {
    pub fn new(primitive: OutputPrimitiveType, max_vertices: u32) -> Self {
        Self {
            primitive,
            max_vertices,
        }
    }

    pub fn primitive(&self) -> OutputPrimitiveType {
        self.primitive
    }

    pub fn max_vertices(&self) -> u32 {
        self.max_vertices
    }
}

impl Declaration for OutputPrimitive {
    const KIND: DeclarationKind = DeclarationKind::OutputPrimitive;

    fn name(&self) -> &str {
        self.primitive.to_str()
    }

    fn is_valid(&self) -> bool {
        self.max_vertices > 0
    }

    fn source_code(&self) -> String {
        format!(
            "layout({}, max_vertices = {}) out;\n",
            self.primitive.to_str(),
            self.max_vertices
        )
    }
}
