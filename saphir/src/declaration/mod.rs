//! GLSL declarations
//!
//! Each declaration kind is an immutable value object. A declaration knows
//! its unique name (the deduplication key inside a shader), whether it is
//! complete, how to render itself as GLSL and how many bytes it occupies.
//!
//! Declarations are stored per kind in a `DeclarationBucket`, which keeps
//! insertion order and rejects name collisions.

mod block;
mod bucket;
mod function;
mod input_attribute;
mod output_fragment;
mod primitive;
mod sampler;
mod specialization_constant;
mod stage_io;
mod structure;

pub use block::{PushConstantBlock, ShaderStorageBlock, UniformBlock};
pub use bucket::DeclarationBucket;
pub use function::{Function, Parameter, ParameterQualifier};
pub use input_attribute::InputAttribute;
pub use output_fragment::OutputFragment;
pub use primitive::{InputPrimitive, OutputPrimitive};
pub use sampler::{Sampler, TexelBuffer};
pub use specialization_constant::SpecializationConstant;
pub use stage_io::{InputBlock, OutputBlock, StageInput, StageOutput};
pub use structure::Structure;

use crate::keys::{Interpolation, VariableType};
use bitflags::bitflags;
use std::fmt;

// ===== DECLARATION TRAIT =====

/// Common behavior of every declaration kind
pub trait Declaration: Clone + fmt::Debug {
    /// Kind of the declaration, used for labels and capability checks
    const KIND: DeclarationKind;

    /// Unique name inside its bucket
    fn name(&self) -> &str;

    /// Whether every required token is present
    fn is_valid(&self) -> bool;

    /// GLSL fragment, terminated by a newline
    fn source_code(&self) -> String;

    /// Estimated size in bytes (0 when not applicable)
    fn bytes(&self) -> u32 {
        0
    }

    /// Whether this is an input whose array size is left open (`name[]`)
    fn is_unsized_input(&self) -> bool {
        false
    }
}

// ===== DECLARATION KINDS =====

/// Kinds of declarations a shader can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    SpecializationConstant,
    Structure,
    UniformBlock,
    ShaderStorageBlock,
    Sampler,
    TexelBuffer,
    PushConstantBlock,
    Function,
    InputAttribute,
    StageInput,
    InputBlock,
    StageOutput,
    OutputBlock,
    InputPrimitive,
    OutputPrimitive,
    OutputFragment,
}

impl DeclarationKind {
    /// Label used in generated section comments and statistics
    pub fn label(self) -> &'static str {
        match self {
            DeclarationKind::SpecializationConstant => "Specialization constants",
            DeclarationKind::Structure => "Structures",
            DeclarationKind::UniformBlock => "Uniform blocks (UBO)",
            DeclarationKind::ShaderStorageBlock => "Shader storage blocks (SSBO)",
            DeclarationKind::Sampler => "Samplers",
            DeclarationKind::TexelBuffer => "Texel buffers",
            DeclarationKind::PushConstantBlock => "Push constant blocks",
            DeclarationKind::Function => "Functions",
            DeclarationKind::InputAttribute => "Input vertex attributes",
            DeclarationKind::StageInput => "Stage inputs (From previous stage)",
            DeclarationKind::InputBlock => "Input blocks (From previous stage)",
            DeclarationKind::StageOutput => "Stage outputs (To next stage)",
            DeclarationKind::OutputBlock => "Output blocks (To next stage)",
            DeclarationKind::InputPrimitive => "Input primitive",
            DeclarationKind::OutputPrimitive => "Output primitive",
            DeclarationKind::OutputFragment => "Output fragments",
        }
    }

    pub fn flag(self) -> DeclarationKinds {
        match self {
            DeclarationKind::SpecializationConstant => DeclarationKinds::SPECIALIZATION_CONSTANT,
            DeclarationKind::Structure => DeclarationKinds::STRUCTURE,
            DeclarationKind::UniformBlock => DeclarationKinds::UNIFORM_BLOCK,
            DeclarationKind::ShaderStorageBlock => DeclarationKinds::SHADER_STORAGE_BLOCK,
            DeclarationKind::Sampler => DeclarationKinds::SAMPLER,
            DeclarationKind::TexelBuffer => DeclarationKinds::TEXEL_BUFFER,
            DeclarationKind::PushConstantBlock => DeclarationKinds::PUSH_CONSTANT_BLOCK,
            DeclarationKind::Function => DeclarationKinds::FUNCTION,
            DeclarationKind::InputAttribute => DeclarationKinds::INPUT_ATTRIBUTE,
            DeclarationKind::StageInput => DeclarationKinds::STAGE_INPUT,
            DeclarationKind::InputBlock => DeclarationKinds::INPUT_BLOCK,
            DeclarationKind::StageOutput => DeclarationKinds::STAGE_OUTPUT,
            DeclarationKind::OutputBlock => DeclarationKinds::OUTPUT_BLOCK,
            DeclarationKind::InputPrimitive => DeclarationKinds::INPUT_PRIMITIVE,
            DeclarationKind::OutputPrimitive => DeclarationKinds::OUTPUT_PRIMITIVE,
            DeclarationKind::OutputFragment => DeclarationKinds::OUTPUT_FRAGMENT,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

bitflags! {
    /// Set of declaration kinds, used as a per-stage capability table
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeclarationKinds: u32 {
        const SPECIALIZATION_CONSTANT = 1 << 0;
        const STRUCTURE = 1 << 1;
        const UNIFORM_BLOCK = 1 << 2;
        const SHADER_STORAGE_BLOCK = 1 << 3;
        const SAMPLER = 1 << 4;
        const TEXEL_BUFFER = 1 << 5;
        const PUSH_CONSTANT_BLOCK = 1 << 6;
        const FUNCTION = 1 << 7;
        const INPUT_ATTRIBUTE = 1 << 8;
        const STAGE_INPUT = 1 << 9;
        const INPUT_BLOCK = 1 << 10;
        const STAGE_OUTPUT = 1 << 11;
        const OUTPUT_BLOCK = 1 << 12;
        const INPUT_PRIMITIVE = 1 << 13;
        const OUTPUT_PRIMITIVE = 1 << 14;
        const OUTPUT_FRAGMENT = 1 << 15;

        /// Kinds every stage accepts
        const COMMON = Self::SPECIALIZATION_CONSTANT.bits()
            | Self::STRUCTURE.bits()
            | Self::UNIFORM_BLOCK.bits()
            | Self::SHADER_STORAGE_BLOCK.bits()
            | Self::SAMPLER.bits()
            | Self::TEXEL_BUFFER.bits()
            | Self::PUSH_CONSTANT_BLOCK.bits()
            | Self::FUNCTION.bits();

        /// Kinds of the primitive processing stages (tesselation, geometry)
        const PRIMITIVE_STAGE = Self::STAGE_INPUT.bits()
            | Self::INPUT_BLOCK.bits()
            | Self::STAGE_OUTPUT.bits()
            | Self::OUTPUT_BLOCK.bits()
            | Self::INPUT_PRIMITIVE.bits()
            | Self::OUTPUT_PRIMITIVE.bits();
    }
}

// ===== ARRAY SIZE =====

/// Array dimension of a variable or block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArraySize {
    /// Not an array
    #[default]
    None,
    /// `name[N]`
    Fixed(u32),
    /// `name[]`, sized by the pipeline (geometry inputs, runtime SSBO arrays)
    Unsized,
}

impl ArraySize {
    /// GLSL suffix appended to the variable name
    pub fn suffix(self) -> String {
        match self {
            ArraySize::None => String::new(),
            ArraySize::Fixed(count) => format!("[{}]", count),
            ArraySize::Unsized => "[]".to_string(),
        }
    }

    pub fn is_array(self) -> bool {
        !matches!(self, ArraySize::None)
    }

    /// Element count used for size estimates
    pub fn multiplier(self) -> u32 {
        match self {
            ArraySize::Fixed(count) => count,
            _ => 1,
        }
    }

    /// A fixed array of zero elements is not valid GLSL
    pub fn is_valid(self) -> bool {
        !matches!(self, ArraySize::Fixed(0))
    }
}

// ===== MEMBER =====

/// Member of a structure or a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub variable_type: VariableType,
    pub name: String,
    pub array_size: ArraySize,
    pub interpolation: Option<Interpolation>,
}

impl Member {
    pub fn new(variable_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            variable_type,
            name: name.into(),
            array_size: ArraySize::None,
            interpolation: None,
        }
    }

    pub fn with_array_size(mut self, array_size: ArraySize) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.variable_type != VariableType::Void
            && self.array_size.is_valid()
    }

    pub fn bytes(&self) -> u32 {
        self.variable_type.bytes() * self.array_size.multiplier()
    }

    /// Tab-indented member line
    pub fn source_code(&self) -> String {
        let interpolation = self
            .interpolation
            .map(|i| format!("{} ", i.to_str()))
            .unwrap_or_default();
        format!(
            "\t{}{} {}{};\n",
            interpolation,
            self.variable_type,
            self.name,
            self.array_size.suffix()
        )
    }
}

/// Render `{ members }` followed by the optional instance name
pub(crate) fn block_body(
    members: &[Member],
    instance: Option<&str>,
    array_size: ArraySize,
) -> String {
    let mut code = String::from("{\n");
    for member in members {
        code.push_str(&member.source_code());
    }
    match instance {
        Some(instance) => code.push_str(&format!("}} {}{};\n", instance, array_size.suffix())),
        None => code.push_str("};\n"),
    }
    code
}

pub(crate) fn members_are_valid(members: &[Member]) -> bool {
    !members.is_empty() && members.iter().all(Member::is_valid)
}

pub(crate) fn members_bytes(members: &[Member]) -> u32 {
    members.iter().map(Member::bytes).sum()
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
