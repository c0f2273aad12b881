//! Shader generator
//!
//! A `ShaderGenerator` is the transient builder material code works with.
//! It borrows one target shader exclusively, stages every declaration and
//! instruction on a copy, records synthesis requests, and on
//! `generate_source_code` runs the synthesis routines and commits the
//! staged shader. A failed pass leaves the target untouched.
//!
//! ```no_run
//! use saphir::{GeneratorConfig, ShaderGenerator, ShaderVariable, VariableScope, VertexShader};
//!
//! let mut shader = VertexShader::new("Unlit");
//! let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
//! generator.request_synthesis(ShaderVariable::PositionScreenSpace, VariableScope::ToNextStage)?;
//! generator.request_synthesis(
//!     ShaderVariable::Primary2DTextureCoordinates,
//!     VariableScope::ToNextStage,
//! )?;
//! generator.generate_source_code()?;
//!
//! assert!(shader.is_generated());
//! # Ok::<(), saphir::Error>(())
//! ```

mod config;
mod preparation;
mod request;
mod synthesis;
mod uniforms;

pub use config::{GeneratorConfig, ModelMatrixType, RenderPassType, SetIndexes};
pub use preparation::{Preparation, PreparationKey, PreparationSet};
pub use request::{RequestList, SynthesisRequest, VariableScope};
pub use synthesis::{SynthesizedCode, Synthesizer};
pub use uniforms::{
    material_uniform, material_uniform_block, matrices_push_constant_block, model_uniform,
    model_uniform_block, push_constant_matrix, view_uniform, view_uniform_block,
};

use crate::code::{CodeGenerator, InstructionBuffer};
use crate::declaration::{Declaration, Member, OutputFragment, UniformBlock};
use crate::error::{Error, Result};
use crate::keys::{ExtensionBehavior, ShaderVariable, VariableType};
use crate::shader::{Accepts, Declared, FragmentStage, Shader, Stage, VertexStage};

const SOURCE: &str = "saphir::ShaderGenerator";

/// Builder bound to one target shader
pub struct ShaderGenerator<'a, S: Stage> {
    target: &'a mut Shader<S>,
    staged: Shader<S>,
    config: GeneratorConfig,
    requests: RequestList,
}

impl<'a, S: Stage> ShaderGenerator<'a, S> {
    /// Bind a generator to `target`
    ///
    /// Declarations already present on the target are kept and new ones are
    /// added on top of them.
    pub fn new(target: &'a mut Shader<S>, config: GeneratorConfig) -> Self {
        let staged = target.clone();

        crate::saphir_debug!(SOURCE, "Generator bound to {} '{}' ({:?}, {:?})",
            S::STAGE, staged.name(), config.model_matrix_type, config.render_pass_type);

        Self {
            target,
            staged,
            config,
            requests: RequestList::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Staged shader, with every declaration made so far
    pub fn shader(&self) -> &Shader<S> {
        &self.staged
    }

    pub fn shader_name(&self) -> &str {
        self.staged.name()
    }

    /// Add a declaration to the staged shader
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDeclaration` for an incomplete declaration.
    pub fn declare<D>(&mut self, declaration: D) -> Result<Declared>
    where
        D: Declaration,
        S: Accepts<D>,
    {
        self.staged.declare(declaration)
    }

    /// Declare `MaterialUniformBlock ubMaterial` in the per model layer set
    ///
    /// Read its members with `material_uniform`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDeclaration` when `members` is empty.
    pub fn declare_material_uniform_block<I>(&mut self, members: I) -> Result<Declared>
    where
        I: IntoIterator<Item = Member>,
    {
        let block = members.into_iter().fold(
            material_uniform_block(self.config.set_indexes.per_model_layer),
            UniformBlock::with_member,
        );
        self.declare(block)
    }

    pub fn set_extension_behavior(
        &mut self,
        extension: impl Into<String>,
        behavior: ExtensionBehavior,
    ) {
        self.staged.set_extension_behavior(extension, behavior);
    }

    pub fn declaration_stats(&self) -> String {
        self.staged.declaration_stats()
    }

    /// Pending synthesis requests, prerequisites first
    pub fn requests(&self) -> &RequestList {
        &self.requests
    }

    /// Stage output location of a synthesized variable
    pub fn shader_variable_location(variable: ShaderVariable) -> Option<u32> {
        variable.location()
    }

    pub fn shader_variable_type(variable: ShaderVariable) -> VariableType {
        variable.variable_type()
    }
}

impl<S: Synthesizer> ShaderGenerator<'_, S> {
    /// Synthesize the requested variables, generate the text and commit it
    /// to the target shader
    ///
    /// Body order: preparations, synthesized top lines, caller top, caller
    /// main, synthesized output lines, caller output.
    ///
    /// # Errors
    ///
    /// - `Error::GenerationFailed` if the target already holds text, or if a
    ///   routine or the stage hook fails
    /// - `Error::InvalidDeclaration` if a synthesized declaration is rejected
    ///
    /// The target shader is unchanged on error. A target generated by a
    /// previous pass must go through `Shader::reset_source` first.
    pub fn generate_source_code(self) -> Result<()> {
        let ShaderGenerator {
            target,
            mut staged,
            config,
            requests,
        } = self;

        if target.is_generated() {
            crate::saphir_bail!(SOURCE, Error::GenerationFailed,
                "{} '{}' is already generated, reset its source first", S::STAGE, target.name());
        }

        let mut preparations = PreparationSet::default();
        let synthesized = S::synthesize(&mut staged, &requests, &mut preparations, &config)?;

        let mut top = preparations.code_lines();
        top.extend(synthesized.top);

        staged.generate_source_code_with(&top, &synthesized.output)?;

        crate::saphir_info!(SOURCE, "{} '{}' generated ({} requests, {} preparations)",
            S::STAGE, staged.name(), requests.len(), preparations.len());

        *target = staged;

        Ok(())
    }
}

impl<S: Stage> CodeGenerator for ShaderGenerator<'_, S> {
    fn instructions(&self) -> &InstructionBuffer {
        self.staged.instructions()
    }

    fn instructions_mut(&mut self) -> &mut InstructionBuffer {
        self.staged.instructions_mut()
    }
}

// ===== VERTEX =====

impl ShaderGenerator<'_, VertexStage> {
    /// Request a synthesized variable
    ///
    /// Requesting a variable twice with different scopes promotes it to
    /// `VariableScope::Both`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedSyntheticVariable` for variables without a
    /// synthesis routine.
    pub fn request_synthesis(
        &mut self,
        variable: ShaderVariable,
        scope: VariableScope,
    ) -> Result<()> {
        self.requests.request(variable, scope)
    }

    /// Request a synthesized variable by its key (e.g. "PositionViewSpace")
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedSyntheticVariable` for unknown keys.
    pub fn request_synthesis_by_name(&mut self, key: &str, scope: VariableScope) -> Result<()> {
        let variable = key.parse::<ShaderVariable>().map_err(|_| {
            crate::saphir_err!(SOURCE, Error::UnsupportedSyntheticVariable,
                "Unknown shader variable '{}'", key)
        })?;

        self.request_synthesis(variable, scope)
    }
}

// ===== FRAGMENT =====

impl ShaderGenerator<'_, FragmentStage> {
    /// Declare `layout(location = 0) out vec4 ssv_OutputFragment;`
    ///
    /// # Errors
    ///
    /// Never fails in practice; the declaration is always valid.
    pub fn declare_default_output_fragment(&mut self) -> Result<Declared> {
        let variable = ShaderVariable::OutputFragment;
        self.declare(OutputFragment::new(
            variable.location().unwrap_or_default(),
            variable.variable_type(),
            variable.name(),
        ))
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
