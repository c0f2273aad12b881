/*!
# Saphir

GLSL shader source generator.

Saphir assembles the GLSL text of every pipeline stage from declarative
fragments, wires the outputs of one stage to the inputs of the next, and
synthesizes derived vertex variables (transformed positions, tangent space
matrices, texture coordinates) on request from material code.

## Architecture

- **Declarations**: immutable GLSL declarations (blocks, samplers, stage
  inputs and outputs, primitives, functions), deduplicated by name
- **Shader**: `Shader<S>` per stage, declarations + instructions + generated
  text and its hash; which declarations a stage accepts is checked at
  compile time
- **StageWiringContext**: outputs of a generated shader, turned into the
  inputs of the next stage
- **ShaderGenerator**: builder bound to one shader, resolves synthesis
  requests and their prerequisites, commits the text atomically
- **Program**: the shaders of one pipeline, wired in pipeline order, with
  fallback vertex and fragment shaders

The produced text is handed to the graphics backend as is; Saphir does not
parse or compile GLSL.
*/

// Internal modules
mod error;
mod saphir;

pub mod code;
pub mod declaration;
pub mod generator;
pub mod keys;
pub mod log;
pub mod program;
pub mod shader;

// Error types
pub use crate::error::{Error, Result};

// Logging facade
pub use crate::saphir::Saphir;

// Instruction lists
pub use crate::code::{CodeGenerator, InstructionBuffer};

// Declarations
pub use crate::declaration::{
    ArraySize, Declaration, DeclarationBucket, DeclarationKind, DeclarationKinds, Function,
    InputAttribute, InputBlock, InputPrimitive, Member, OutputBlock, OutputFragment,
    OutputPrimitive, Parameter, ParameterQualifier, PushConstantBlock, Sampler,
    ShaderStorageBlock, SpecializationConstant, StageInput, StageOutput, Structure, TexelBuffer,
    UniformBlock,
};

// GLSL vocabulary
pub use crate::keys::{
    ExtensionBehavior, InputPrimitiveType, Interpolation, MemoryLayout, OutputPrimitiveType,
    ShaderVariable, VariableType, VertexAttributeType,
};

// Shaders
pub use crate::shader::{
    Accepts, ComputeShader, ComputeStage, Declared, FragmentShader, FragmentStage,
    GeometryShader, GeometryStage, Shader, ShaderSource, ShaderStage, Stage, StageWiringContext,
    TesselationControlShader, TesselationControlStage, TesselationEvaluationShader,
    TesselationEvaluationStage, VertexShader, VertexStage,
};

// Generator
pub use crate::generator::{
    GeneratorConfig, ModelMatrixType, RenderPassType, SetIndexes, ShaderGenerator,
    VariableScope,
};

// Programs
pub use crate::program::Program;
