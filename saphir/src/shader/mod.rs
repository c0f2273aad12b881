//! Shaders
//!
//! A `Shader<S>` holds the declarations, instructions and generated text of
//! one pipeline stage. The stage parameter `S` carries the stage specific
//! declarations and the generation hook; which declaration kinds a stage
//! accepts is decided by its `Accepts` implementations, so declaring an
//! input attribute on a fragment shader does not compile.
//!
//! ```no_run
//! use saphir::{CodeGenerator, FragmentShader, OutputFragment, VariableType};
//!
//! let mut shader = FragmentShader::new("Unlit");
//! shader.declare(OutputFragment::new(0, VariableType::FloatVector4, "outColor"))?;
//! shader.add_instruction("outColor = vec4(1.0);");
//! shader.generate_source_code()?;
//! # Ok::<(), saphir::Error>(())
//! ```

use crate::declaration::{
    Declaration, DeclarationBucket, Function, PushConstantBlock, Sampler, ShaderStorageBlock,
    SpecializationConstant, Structure, TexelBuffer, UniformBlock,
};
use crate::error::Result;
use std::fmt;

/// Implement `Accepts` for kinds stored on the shader itself, for every stage
macro_rules! accepts_common {
    ($($declaration:ty => $field:ident),* $(,)?) => {
        $(
            impl<S: Stage> Accepts<$declaration> for S {
                fn bucket(shader: &Shader<S>) -> &DeclarationBucket<$declaration> {
                    &shader.common.$field
                }

                fn bucket_mut(shader: &mut Shader<S>) -> &mut DeclarationBucket<$declaration> {
                    &mut shader.common.$field
                }
            }
        )*
    };
}

/// Implement `Accepts` for kinds stored in the stage state
macro_rules! accepts_stage {
    ($stage:ty { $($declaration:ty => $($field:ident).+),* $(,)? }) => {
        $(
            impl $crate::shader::Accepts<$declaration> for $stage {
                fn bucket(
                    shader: &$crate::shader::Shader<Self>,
                ) -> &$crate::declaration::DeclarationBucket<$declaration> {
                    &shader.stage.$($field).+
                }

                fn bucket_mut(
                    shader: &mut $crate::shader::Shader<Self>,
                ) -> &mut $crate::declaration::DeclarationBucket<$declaration> {
                    &mut shader.stage.$($field).+
                }
            }
        )*
    };
}

mod compute;
mod fragment;
mod geometry;
mod interface;
mod shader;
mod stage;
mod tesselation;
mod vertex;
mod wiring;

pub use compute::{ComputeShader, ComputeStage};
pub use fragment::{FragmentShader, FragmentStage};
pub use geometry::{GeometryShader, GeometryStage};
pub use interface::StageInterface;
pub use shader::{Shader, ShaderSource};
pub use stage::ShaderStage;
pub use tesselation::{
    TesselationControlShader, TesselationControlStage, TesselationEvaluationShader,
    TesselationEvaluationStage,
};
pub use vertex::{VertexShader, VertexStage};
pub use wiring::StageWiringContext;

use crate::declaration::ArraySize;

// ===== STAGE TRAIT =====

/// Stage specific state and generation hook
pub trait Stage: Clone + Default + fmt::Debug {
    const STAGE: ShaderStage;

    /// Append the stage declarations (and layouts) after the common ones
    ///
    /// # Errors
    ///
    /// Returns `Error::GenerationFailed` when the stage is incomplete.
    fn on_source_code_generation(&self, shader_name: &str, code: &mut String) -> Result<()>;

    /// Called once the whole text has been generated successfully
    fn on_generated(&mut self) {}

    /// Append one ` - <label> : <count>` line per stage bucket
    fn on_declaration_stats(&self, stats: &mut String);

    /// Array size given to scalar upstream outputs when they become inputs
    ///
    /// `None` keeps upstream outputs unchanged.
    fn input_array_size(&self) -> Option<ArraySize> {
        None
    }
}

/// Access to the bucket of declaration kind `D` of a shader
///
/// Implemented only for the kinds a stage accepts.
pub trait Accepts<D: Declaration>: Stage {
    fn bucket(shader: &Shader<Self>) -> &DeclarationBucket<D>;

    fn bucket_mut(shader: &mut Shader<Self>) -> &mut DeclarationBucket<D>;
}

accepts_common! {
    SpecializationConstant => specialization_constants,
    Structure => structures,
    UniformBlock => uniform_blocks,
    ShaderStorageBlock => shader_storage_blocks,
    Sampler => samplers,
    TexelBuffer => texel_buffers,
    PushConstantBlock => push_constant_blocks,
    Function => functions,
}

/// Outcome of a successful declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declared {
    /// The declaration was appended
    Added,
    /// A declaration with the same name was already there and is kept
    AlreadyPresent,
}

impl Declared {
    pub fn is_added(self) -> bool {
        self == Declared::Added
    }
}

pub(crate) fn stats_line(stats: &mut String, label: &str, count: usize) {
    stats.push_str(&format!(" - {} : {}\n", label, count));
}
