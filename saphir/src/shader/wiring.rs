//! Stage wiring
//!
//! A generated upstream shader hands out a `StageWiringContext`, an
//! immutable snapshot of its outputs. The downstream shader turns every
//! output into the matching input:
//!
//! ```no_run
//! use saphir::{FragmentShader, VertexShader};
//!
//! let mut vertex = VertexShader::new("Lit");
//! // ... declarations, instructions ...
//! vertex.generate_source_code()?;
//!
//! let mut fragment = FragmentShader::new("Lit");
//! fragment.connect_from_previous_shader(&vertex.wiring_context()?)?;
//! # Ok::<(), saphir::Error>(())
//! ```

use super::{Accepts, Shader, ShaderStage, Stage};
use crate::declaration::{InputBlock, OutputBlock, StageInput, StageOutput};
use crate::error::{Error, Result};

const SOURCE: &str = "saphir::StageWiring";

/// Outputs of a generated shader, ready to be consumed by the next stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageWiringContext {
    stage: ShaderStage,
    shader_name: String,
    stage_outputs: Vec<StageOutput>,
    output_blocks: Vec<OutputBlock>,
}

impl StageWiringContext {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn shader_name(&self) -> &str {
        &self.shader_name
    }

    pub fn stage_outputs(&self) -> &[StageOutput] {
        &self.stage_outputs
    }

    pub fn output_blocks(&self) -> &[OutputBlock] {
        &self.output_blocks
    }

    pub fn has_outputs(&self) -> bool {
        !self.stage_outputs.is_empty() || !self.output_blocks.is_empty()
    }
}

impl<S> Shader<S>
where
    S: Stage + Accepts<StageOutput> + Accepts<OutputBlock>,
{
    /// Snapshot of the outputs for the next stage
    ///
    /// # Errors
    ///
    /// Returns `Error::UpstreamNotGenerated` if this shader has no text yet.
    pub fn wiring_context(&self) -> Result<StageWiringContext> {
        if !self.is_generated() {
            crate::saphir_bail!(SOURCE, Error::UpstreamNotGenerated,
                "{} '{}' must be generated before feeding the next stage", S::STAGE, self.name());
        }

        Ok(StageWiringContext {
            stage: S::STAGE,
            shader_name: self.name().to_string(),
            stage_outputs: self.declarations::<StageOutput>().as_slice().to_vec(),
            output_blocks: self.declarations::<OutputBlock>().as_slice().to_vec(),
        })
    }
}

impl<S> Shader<S>
where
    S: Stage + Accepts<StageInput> + Accepts<InputBlock>,
{
    /// Declare one input per upstream output
    ///
    /// Geometry and tesselation control shaders receive scalar upstream
    /// outputs as arrays sized by their input primitive.
    ///
    /// # Errors
    ///
    /// - `Error::IncompatibleStages` if the upstream stage cannot feed this one
    /// - `Error::UpstreamHasNoOutputs` if a non vertex upstream exports nothing
    /// - `Error::InvalidDeclaration` if a derived input is rejected, in which
    ///   case no input at all is declared
    pub fn connect_from_previous_shader(&mut self, context: &StageWiringContext) -> Result<()> {
        if !context.stage.can_feed(S::STAGE) {
            crate::saphir_bail!(SOURCE, Error::IncompatibleStages,
                "{} '{}' cannot feed {} '{}'",
                context.stage, context.shader_name, S::STAGE, self.name());
        }

        if !context.has_outputs() {
            if context.stage == ShaderStage::Vertex {
                crate::saphir_debug!(SOURCE, "{} '{}' has no output for {} '{}'",
                    context.stage, context.shader_name, S::STAGE, self.name());
                return Ok(());
            }

            crate::saphir_bail!(SOURCE, Error::UpstreamHasNoOutputs,
                "{} '{}' has no output for {} '{}'",
                context.stage, context.shader_name, S::STAGE, self.name());
        }

        let promotion = self.stage.input_array_size();

        let inputs = context
            .stage_outputs
            .iter()
            .map(|output| match promotion {
                Some(array_size) if !output.array_size().is_array() => {
                    StageInput::from_output_with_array_size(output, array_size)
                }
                _ => StageInput::from(output),
            })
            .collect::<Vec<_>>();

        let input_blocks = context
            .output_blocks
            .iter()
            .map(|output| match promotion {
                Some(array_size) if !output.array_size().is_array() => {
                    InputBlock::from_output_with_array_size(output, array_size)
                }
                _ => InputBlock::from(output),
            })
            .collect::<Vec<_>>();

        // Nothing is declared unless every derived input is valid
        for input in &inputs {
            self.check_declaration(input)?;
        }
        for input in &input_blocks {
            self.check_declaration(input)?;
        }

        for input in inputs {
            self.declare(input)?;
        }
        for input in input_blocks {
            self.declare(input)?;
        }

        crate::saphir_debug!(SOURCE, "{} '{}' connected to {} '{}' ({} inputs, {} blocks)",
            S::STAGE, self.name(), context.stage, context.shader_name,
            context.stage_outputs.len(), context.output_blocks.len());

        Ok(())
    }
}

#[cfg(test)]
#[path = "wiring_tests.rs"]
mod tests;
