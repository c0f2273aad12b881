use super::{stats_line, Shader, ShaderStage, Stage};
use crate::declaration::{Declaration, DeclarationBucket, InputBlock, OutputFragment, StageInput};
use crate::error::Result;

/// Fragment stage state
#[derive(Debug, Clone, Default)]
pub struct FragmentStage {
    stage_inputs: DeclarationBucket<StageInput>,
    input_blocks: DeclarationBucket<InputBlock>,
    output_fragments: DeclarationBucket<OutputFragment>,
    fragment_outputs: Vec<String>,
}

accepts_stage!(FragmentStage {
    StageInput => stage_inputs,
    InputBlock => input_blocks,
    OutputFragment => output_fragments,
});

impl Stage for FragmentStage {
    const STAGE: ShaderStage = ShaderStage::Fragment;

    fn on_source_code_generation(&self, _shader_name: &str, code: &mut String) -> Result<()> {
        self.stage_inputs.generate(code, StageInput::KIND.label());
        self.input_blocks.generate(code, InputBlock::KIND.label());
        self.output_fragments.generate(code, OutputFragment::KIND.label());
        Ok(())
    }

    fn on_generated(&mut self) {
        self.fragment_outputs = self.output_fragments.names().map(str::to_string).collect();
    }

    fn on_declaration_stats(&self, stats: &mut String) {
        stats_line(stats, StageInput::KIND.label(), self.stage_inputs.len());
        stats_line(stats, InputBlock::KIND.label(), self.input_blocks.len());
        stats_line(stats, OutputFragment::KIND.label(), self.output_fragments.len());
    }
}

/// Fragment shader
pub type FragmentShader = Shader<FragmentStage>;

impl Shader<FragmentStage> {
    /// Output fragment names of the last generated text, by location order of declaration
    pub fn fragment_outputs(&self) -> &[String] {
        &self.stage.fragment_outputs
    }
}
