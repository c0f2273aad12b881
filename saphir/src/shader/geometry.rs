use super::{Shader, ShaderStage, Stage, StageInterface};
use crate::declaration::{
    ArraySize, InputBlock, InputPrimitive, OutputBlock, OutputPrimitive, StageInput, StageOutput,
};
use crate::error::Result;
use crate::keys::{InputPrimitiveType, OutputPrimitiveType};

/// Geometry stage state
///
/// A geometry shader only generates with exactly one input and one output
/// primitive layout.
#[derive(Debug, Clone, Default)]
pub struct GeometryStage {
    interface: StageInterface,
}

accepts_stage!(GeometryStage {
    InputPrimitive => interface.input_primitives,
    StageInput => interface.stage_inputs,
    InputBlock => interface.input_blocks,
    OutputPrimitive => interface.output_primitives,
    StageOutput => interface.stage_outputs,
    OutputBlock => interface.output_blocks,
});

impl GeometryStage {
    /// Stage state with its primitive layouts already declared
    pub fn new(input: InputPrimitiveType, output: OutputPrimitiveType, max_vertices: u32) -> Self {
        let mut interface = StageInterface::default();
        interface.input_primitives.insert(InputPrimitive::new(input));
        interface.output_primitives.insert(OutputPrimitive::new(output, max_vertices));
        Self { interface }
    }

    pub fn interface(&self) -> &StageInterface {
        &self.interface
    }
}

impl Stage for GeometryStage {
    const STAGE: ShaderStage = ShaderStage::Geometry;

    fn on_source_code_generation(&self, shader_name: &str, code: &mut String) -> Result<()> {
        self.interface.check_primitives(Self::STAGE.label(), shader_name, true)?;
        self.interface.generate(code);
        Ok(())
    }

    fn on_declaration_stats(&self, stats: &mut String) {
        self.interface.stats(stats);
    }

    fn input_array_size(&self) -> Option<ArraySize> {
        Some(self.interface.input_array_size())
    }
}

/// Geometry shader
pub type GeometryShader = Shader<GeometryStage>;

impl Shader<GeometryStage> {
    /// Create a geometry shader with its primitive layouts
    ///
    /// # Example
    ///
    /// ```no_run
    /// use saphir::{GeometryShader, InputPrimitiveType, OutputPrimitiveType};
    ///
    /// let shader = GeometryShader::with_primitives(
    ///     "Explode",
    ///     InputPrimitiveType::Triangles,
    ///     OutputPrimitiveType::TriangleStrip,
    ///     3,
    /// );
    /// ```
    pub fn with_primitives(
        name: impl Into<String>,
        input: InputPrimitiveType,
        output: OutputPrimitiveType,
        max_vertices: u32,
    ) -> Self {
        Self::with_stage(name, GeometryStage::new(input, output, max_vertices))
    }
}
