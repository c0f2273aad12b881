use super::{stats_line, Accepts, Declared, ShaderStage, Stage};
use crate::code::{CodeGenerator, InstructionBuffer};
use crate::declaration::{
    Declaration, DeclarationBucket, DeclarationKind, Function, PushConstantBlock, Sampler,
    ShaderStorageBlock, SpecializationConstant, Structure, TexelBuffer, UniformBlock,
};
use crate::error::{Error, Result};
use crate::keys::{ExtensionBehavior, DEFAULT_GLSL_PROFILE, DEFAULT_GLSL_VERSION};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

const SOURCE: &str = "saphir::Shader";

/// Declarations every stage accepts
#[derive(Debug, Clone, Default)]
pub(crate) struct CommonDeclarations {
    pub(crate) specialization_constants: DeclarationBucket<SpecializationConstant>,
    pub(crate) structures: DeclarationBucket<Structure>,
    pub(crate) uniform_blocks: DeclarationBucket<UniformBlock>,
    pub(crate) shader_storage_blocks: DeclarationBucket<ShaderStorageBlock>,
    pub(crate) samplers: DeclarationBucket<Sampler>,
    pub(crate) texel_buffers: DeclarationBucket<TexelBuffer>,
    pub(crate) push_constant_blocks: DeclarationBucket<PushConstantBlock>,
    pub(crate) functions: DeclarationBucket<Function>,
}

impl CommonDeclarations {
    fn generate(&self, code: &mut String) {
        self.specialization_constants
            .generate(code, DeclarationKind::SpecializationConstant.label());
        self.structures.generate(code, DeclarationKind::Structure.label());
        self.uniform_blocks.generate(code, DeclarationKind::UniformBlock.label());
        self.shader_storage_blocks
            .generate(code, DeclarationKind::ShaderStorageBlock.label());
        self.samplers.generate(code, DeclarationKind::Sampler.label());
        self.texel_buffers.generate(code, DeclarationKind::TexelBuffer.label());
        self.push_constant_blocks
            .generate(code, DeclarationKind::PushConstantBlock.label());
        self.functions.generate(code, DeclarationKind::Function.label());
    }

    fn stats(&self, stats: &mut String) {
        let counts = [
            (DeclarationKind::SpecializationConstant, self.specialization_constants.len()),
            (DeclarationKind::Structure, self.structures.len()),
            (DeclarationKind::UniformBlock, self.uniform_blocks.len()),
            (DeclarationKind::ShaderStorageBlock, self.shader_storage_blocks.len()),
            (DeclarationKind::Sampler, self.samplers.len()),
            (DeclarationKind::TexelBuffer, self.texel_buffers.len()),
            (DeclarationKind::PushConstantBlock, self.push_constant_blocks.len()),
            (DeclarationKind::Function, self.functions.len()),
        ];

        for (kind, count) in counts {
            stats_line(stats, kind.label(), count);
        }
    }
}

/// GLSL shader of stage `S`
///
/// Lifecycle: declarations and instructions are added, then
/// `generate_source_code` assembles the text and caches its hash. The
/// text is only replaced by a successful generation or by an explicit
/// `set_source_code` / `load_source_code`.
#[derive(Debug, Clone)]
pub struct Shader<S: Stage> {
    name: String,
    glsl_version: String,
    glsl_profile: String,
    extension_behaviors: Vec<(String, ExtensionBehavior)>,
    pub(crate) common: CommonDeclarations,
    pub(crate) stage: S,
    instructions: InstructionBuffer,
    source_code: String,
    source_hash: u64,
}

impl<S: Stage> Shader<S> {
    /// Create an empty shader targeting GLSL 460 core
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stage(name, S::default())
    }

    /// Create a shader around an already configured stage state
    pub fn with_stage(name: impl Into<String>, stage: S) -> Self {
        Self {
            name: name.into(),
            glsl_version: DEFAULT_GLSL_VERSION.to_string(),
            glsl_profile: DEFAULT_GLSL_PROFILE.to_string(),
            extension_behaviors: Vec::new(),
            common: CommonDeclarations::default(),
            stage,
            instructions: InstructionBuffer::default(),
            source_code: String::new(),
            source_hash: 0,
        }
    }

    // ===== IDENTITY =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> ShaderStage {
        S::STAGE
    }

    /// Stage specific state
    pub fn stage_state(&self) -> &S {
        &self.stage
    }

    pub fn glsl_version(&self) -> &str {
        &self.glsl_version
    }

    pub fn glsl_profile(&self) -> &str {
        &self.glsl_profile
    }

    /// Change the `#version` header (e.g. "450", "core")
    pub fn set_glsl_version(&mut self, version: impl Into<String>, profile: impl Into<String>) {
        self.glsl_version = version.into();
        self.glsl_profile = profile.into();
    }

    /// Add or replace an `#extension` directive
    ///
    /// Directives keep their first insertion order.
    pub fn set_extension_behavior(
        &mut self,
        extension: impl Into<String>,
        behavior: ExtensionBehavior,
    ) {
        let extension = extension.into();
        match self.extension_behaviors.iter_mut().find(|(name, _)| *name == extension) {
            Some(entry) => entry.1 = behavior,
            None => self.extension_behaviors.push((extension, behavior)),
        }
    }

    pub fn extension_behaviors(&self) -> &[(String, ExtensionBehavior)] {
        &self.extension_behaviors
    }

    // ===== DECLARATIONS =====

    /// Add a declaration
    ///
    /// # Returns
    ///
    /// `Declared::Added`, or `Declared::AlreadyPresent` (with a warning) when
    /// a declaration with the same name exists. The first one is kept.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDeclaration` when the declaration is incomplete
    /// or is an unsized input on a stage that cannot size it.
    pub fn declare<D>(&mut self, declaration: D) -> Result<Declared>
    where
        D: Declaration,
        S: Accepts<D>,
    {
        self.check_declaration(&declaration)?;

        if S::bucket(self).contains(declaration.name()) {
            crate::saphir_warn!(SOURCE, "{:?} '{}' is already declared in {} '{}'",
                D::KIND, declaration.name(), S::STAGE, self.name);
            return Ok(Declared::AlreadyPresent);
        }

        let name = declaration.name().to_string();
        S::bucket_mut(self).insert(declaration);

        crate::saphir_debug!(SOURCE, "{:?} '{}' has been declared to {} '{}'",
            D::KIND, name, S::STAGE, self.name);

        Ok(Declared::Added)
    }

    /// Validity checks run by `declare`, without inserting anything
    pub(crate) fn check_declaration<D: Declaration>(&self, declaration: &D) -> Result<()> {
        if !declaration.is_valid() {
            crate::saphir_bail!(SOURCE, Error::InvalidDeclaration,
                "{:?} '{}' is invalid for {} '{}'",
                D::KIND, declaration.name(), S::STAGE, self.name);
        }

        if declaration.is_unsized_input() && !S::STAGE.accepts_unsized_inputs() {
            crate::saphir_bail!(SOURCE, Error::InvalidDeclaration,
                "{:?} '{}' cannot be an unsized array in {} '{}'",
                D::KIND, declaration.name(), S::STAGE, self.name);
        }

        Ok(())
    }

    /// Declarations of kind `D`, in insertion order
    pub fn declarations<D>(&self) -> &DeclarationBucket<D>
    where
        D: Declaration,
        S: Accepts<D>,
    {
        S::bucket(self)
    }

    /// Whether a declaration of kind `D` named `name` exists
    pub fn is_declared<D>(&self, name: &str) -> bool
    where
        D: Declaration,
        S: Accepts<D>,
    {
        S::bucket(self).contains(name)
    }

    /// Diagnostic summary of every bucket
    pub fn declaration_stats(&self) -> String {
        let mut stats = format!("Shader declarations ({} '{}') :\n", S::STAGE, self.name);
        self.common.stats(&mut stats);
        self.stage.on_declaration_stats(&mut stats);
        stats
    }

    /// Names of samplers and texel buffers
    pub fn uniforms(&self) -> Vec<&str> {
        self.common
            .samplers
            .names()
            .chain(self.common.texel_buffers.names())
            .collect()
    }

    pub fn uniform_blocks(&self) -> Vec<&str> {
        self.common.uniform_blocks.names().collect()
    }

    pub fn shader_storage_blocks(&self) -> Vec<&str> {
        self.common.shader_storage_blocks.names().collect()
    }

    // ===== GENERATION =====

    /// Assemble the complete GLSL text from the declarations and instructions
    ///
    /// # Errors
    ///
    /// Returns `Error::GenerationFailed` when the stage hook fails. The
    /// previous text and hash are kept in that case.
    pub fn generate_source_code(&mut self) -> Result<()> {
        self.generate_source_code_with(&[], &[])
    }

    /// Generation with extra lines placed before the top and output lists
    pub(crate) fn generate_source_code_with(
        &mut self,
        prepend_top: &[String],
        prepend_output: &[String],
    ) -> Result<()> {
        let mut code = String::new();

        self.generate_headers(&mut code);
        self.common.generate(&mut code);
        self.stage.on_source_code_generation(&self.name, &mut code)?;

        code.push_str("void main ()\n{\n");
        code.push_str(&self.instructions.assemble(prepend_top, prepend_output));
        code.push_str("}\n");

        self.stage.on_generated();
        self.set_source_code(code);

        crate::saphir_debug!(SOURCE, "{} '{}' generated ({} bytes, hash {:#018x})",
            S::STAGE, self.name, self.source_code.len(), self.source_hash);

        Ok(())
    }

    fn generate_headers(&self, code: &mut String) {
        code.push_str(&format!("#version {} {}\n", self.glsl_version, self.glsl_profile));
        for (extension, behavior) in &self.extension_behaviors {
            code.push_str(&format!("#extension {} : {}\n", extension, behavior.to_str()));
        }
        code.push('\n');
        code.push_str(&format!("/* {} : {} */\n\n", S::STAGE, self.name));
    }

    // ===== SOURCE CODE =====

    pub fn is_generated(&self) -> bool {
        !self.source_code.is_empty()
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    /// Content hash of the current text (0 when there is none)
    pub fn hash(&self) -> u64 {
        self.source_hash
    }

    /// Replace the text and recompute its hash
    pub fn set_source_code(&mut self, source_code: impl Into<String>) {
        self.source_code = source_code.into();
        self.source_hash = compute_hash(&self.source_code);
    }

    /// Forget the text and the instructions, back to the not generated state
    ///
    /// Declarations are kept. Declaring them again in the next pass reports
    /// `Declared::AlreadyPresent`.
    pub fn reset_source(&mut self) {
        self.source_code.clear();
        self.source_hash = 0;
        self.instructions.clear();
    }

    /// Read precomputed text from a file
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read. The current text is kept.
    pub fn load_source_code(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source_code = std::fs::read_to_string(path).map_err(|error| {
            crate::saphir_err!(SOURCE, Error::Io, "Unable to read '{}' : {}", path.display(), error)
        })?;

        self.set_source_code(source_code);

        crate::saphir_debug!(SOURCE, "{} '{}' loaded from '{}'",
            S::STAGE, self.name, path.display());

        Ok(())
    }

    /// Write the current text to a file
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written.
    pub fn write_source_code(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.source_code).map_err(|error| {
            crate::saphir_err!(SOURCE, Error::Io,
                "Unable to write '{}' : {}", path.display(), error)
        })
    }
}

impl<S: Stage> CodeGenerator for Shader<S> {
    fn instructions(&self) -> &InstructionBuffer {
        &self.instructions
    }

    fn instructions_mut(&mut self) -> &mut InstructionBuffer {
        &mut self.instructions
    }
}

/// Stage independent view of a shader
///
/// Lets shaders of different stages be listed together (see
/// `Program::shaders`).
pub trait ShaderSource {
    fn stage(&self) -> ShaderStage;

    fn name(&self) -> &str;

    fn source_code(&self) -> &str;

    fn hash(&self) -> u64;

    fn is_generated(&self) -> bool {
        !self.source_code().is_empty()
    }
}

impl<S: Stage> ShaderSource for Shader<S> {
    fn stage(&self) -> ShaderStage {
        S::STAGE
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source_code(&self) -> &str {
        &self.source_code
    }

    fn hash(&self) -> u64 {
        self.source_hash
    }
}

/// FxHash of a shader text
pub(crate) fn compute_hash(source_code: &str) -> u64 {
    let mut hasher = FxHasher::default();
    source_code.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
