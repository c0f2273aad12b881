use super::{stats_line, Shader, ShaderStage, Stage};
use crate::declaration::{Declaration, DeclarationBucket, InputAttribute, OutputBlock, StageOutput};
use crate::error::Result;
use crate::keys::VertexAttributeType;
use std::collections::BTreeSet;

/// Vertex stage state
///
/// After a successful generation it exposes the vertex attribute slots the
/// shader reads, which the vertex buffer layout must provide.
#[derive(Debug, Clone, Default)]
pub struct VertexStage {
    input_attributes: DeclarationBucket<InputAttribute>,
    stage_outputs: DeclarationBucket<StageOutput>,
    output_blocks: DeclarationBucket<OutputBlock>,
    vertex_attributes: BTreeSet<VertexAttributeType>,
    instancing: bool,
}

accepts_stage!(VertexStage {
    InputAttribute => input_attributes,
    StageOutput => stage_outputs,
    OutputBlock => output_blocks,
});

impl Stage for VertexStage {
    const STAGE: ShaderStage = ShaderStage::Vertex;

    fn on_source_code_generation(&self, _shader_name: &str, code: &mut String) -> Result<()> {
        self.input_attributes.generate(code, InputAttribute::KIND.label());
        self.stage_outputs.generate(code, StageOutput::KIND.label());
        self.output_blocks.generate(code, OutputBlock::KIND.label());
        Ok(())
    }

    fn on_generated(&mut self) {
        self.vertex_attributes = self
            .input_attributes
            .iter()
            .flat_map(|attribute| attribute.attribute().occupied_slots().iter().copied())
            .collect();
        self.instancing = self
            .vertex_attributes
            .iter()
            .any(|attribute| attribute.is_instance_attribute());
    }

    fn on_declaration_stats(&self, stats: &mut String) {
        stats_line(stats, InputAttribute::KIND.label(), self.input_attributes.len());
        stats_line(stats, StageOutput::KIND.label(), self.stage_outputs.len());
        stats_line(stats, OutputBlock::KIND.label(), self.output_blocks.len());
    }
}

/// Vertex shader
pub type VertexShader = Shader<VertexStage>;

impl Shader<VertexStage> {
    /// Attribute slots read by the last generated text
    pub fn vertex_attributes(&self) -> &BTreeSet<VertexAttributeType> {
        &self.stage.vertex_attributes
    }

    /// Whether the last generated text reads per-instance model matrices
    pub fn is_instancing_enabled(&self) -> bool {
        self.stage.instancing
    }
}
