//! Declarations shared by the primitive processing stages
//! (tesselation control, tesselation evaluation, geometry).

use super::stats_line;
use crate::declaration::{
    ArraySize, Declaration, DeclarationBucket, InputBlock, InputPrimitive, OutputBlock,
    OutputPrimitive, StageInput, StageOutput,
};
use crate::error::{Error, Result};

const SOURCE: &str = "saphir::Shader";

#[derive(Debug, Clone, Default)]
pub struct StageInterface {
    pub(crate) input_primitives: DeclarationBucket<InputPrimitive>,
    pub(crate) stage_inputs: DeclarationBucket<StageInput>,
    pub(crate) input_blocks: DeclarationBucket<InputBlock>,
    pub(crate) output_primitives: DeclarationBucket<OutputPrimitive>,
    pub(crate) stage_outputs: DeclarationBucket<StageOutput>,
    pub(crate) output_blocks: DeclarationBucket<OutputBlock>,
}

impl StageInterface {
    pub fn input_primitive(&self) -> Option<&InputPrimitive> {
        self.input_primitives.iter().next()
    }

    pub fn output_primitive(&self) -> Option<&OutputPrimitive> {
        self.output_primitives.iter().next()
    }

    /// `[N]` from the input primitive, `[]` without one
    pub(crate) fn input_array_size(&self) -> ArraySize {
        self.input_primitive()
            .map(|primitive| ArraySize::Fixed(primitive.vertex_count()))
            .unwrap_or(ArraySize::Unsized)
    }

    /// Check the primitive layouts
    ///
    /// A stage holds at most one layout per direction; `required` makes
    /// both mandatory.
    pub(crate) fn check_primitives(
        &self,
        stage_label: &str,
        shader_name: &str,
        required: bool,
    ) -> Result<()> {
        for (kind, count) in [
            (InputPrimitive::KIND, self.input_primitives.len()),
            (OutputPrimitive::KIND, self.output_primitives.len()),
        ] {
            if count > 1 {
                crate::saphir_bail!(SOURCE, Error::GenerationFailed,
                    "{} '{}' declares {} {:?} layouts, only one is allowed",
                    stage_label, shader_name, count, kind);
            }

            if required && count == 0 {
                crate::saphir_bail!(SOURCE, Error::GenerationFailed,
                    "{} '{}' has no {:?} layout", stage_label, shader_name, kind);
            }
        }

        Ok(())
    }

    pub(crate) fn generate(&self, code: &mut String) {
        self.input_primitives.generate(code, InputPrimitive::KIND.label());
        self.stage_inputs.generate(code, StageInput::KIND.label());
        self.input_blocks.generate(code, InputBlock::KIND.label());
        self.output_primitives.generate(code, OutputPrimitive::KIND.label());
        self.stage_outputs.generate(code, StageOutput::KIND.label());
        self.output_blocks.generate(code, OutputBlock::KIND.label());
    }

    pub(crate) fn stats(&self, stats: &mut String) {
        stats_line(stats, InputPrimitive::KIND.label(), self.input_primitives.len());
        stats_line(stats, StageInput::KIND.label(), self.stage_inputs.len());
        stats_line(stats, InputBlock::KIND.label(), self.input_blocks.len());
        stats_line(stats, OutputPrimitive::KIND.label(), self.output_primitives.len());
        stats_line(stats, StageOutput::KIND.label(), self.stage_outputs.len());
        stats_line(stats, OutputBlock::KIND.label(), self.output_blocks.len());
    }
}
