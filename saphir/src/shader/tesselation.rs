use super::{Shader, ShaderStage, Stage, StageInterface};
use crate::declaration::{
    ArraySize, InputBlock, InputPrimitive, OutputBlock, OutputPrimitive, StageInput, StageOutput,
};
use crate::error::Result;

// ===== TESSELATION CONTROL =====

/// Tesselation control stage state
#[derive(Debug, Clone, Default)]
pub struct TesselationControlStage {
    interface: StageInterface,
}

accepts_stage!(TesselationControlStage {
    InputPrimitive => interface.input_primitives,
    StageInput => interface.stage_inputs,
    InputBlock => interface.input_blocks,
    OutputPrimitive => interface.output_primitives,
    StageOutput => interface.stage_outputs,
    OutputBlock => interface.output_blocks,
});

impl TesselationControlStage {
    pub fn interface(&self) -> &StageInterface {
        &self.interface
    }
}

impl Stage for TesselationControlStage {
    const STAGE: ShaderStage = ShaderStage::TesselationControl;

    fn on_source_code_generation(&self, shader_name: &str, code: &mut String) -> Result<()> {
        self.interface.check_primitives(Self::STAGE.label(), shader_name, false)?;
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

/// Tesselation control shader
pub type TesselationControlShader = Shader<TesselationControlStage>;

// ===== TESSELATION EVALUATION =====

/// Tesselation evaluation stage state
#[derive(Debug, Clone, Default)]
pub struct TesselationEvaluationStage {
    interface: StageInterface,
}

accepts_stage!(TesselationEvaluationStage {
    InputPrimitive => interface.input_primitives,
    StageInput => interface.stage_inputs,
    InputBlock => interface.input_blocks,
    OutputPrimitive => interface.output_primitives,
    StageOutput => interface.stage_outputs,
    OutputBlock => interface.output_blocks,
});

impl TesselationEvaluationStage {
    pub fn interface(&self) -> &StageInterface {
        &self.interface
    }
}

impl Stage for TesselationEvaluationStage {
    const STAGE: ShaderStage = ShaderStage::TesselationEvaluation;

    fn on_source_code_generation(&self, shader_name: &str, code: &mut String) -> Result<()> {
        self.interface.check_primitives(Self::STAGE.label(), shader_name, false)?;
        self.interface.generate(code);
        Ok(())
    }

    fn on_declaration_stats(&self, stats: &mut String) {
        self.interface.stats(stats);
    }
}

/// Tesselation evaluation shader
pub type TesselationEvaluationShader = Shader<TesselationEvaluationStage>;
