//! GLSL vocabulary
//!
//! Token tables shared by declarations, shaders and the generator: GLSL
//! type keywords, qualifiers, primitive layouts, vertex attribute slots and
//! the names of every variable the generator knows how to synthesize.

use std::fmt;
use std::str::FromStr;

/// GLSL version written by default in the `#version` header
pub const DEFAULT_GLSL_VERSION: &str = "460";

/// GLSL profile written by default in the `#version` header
pub const DEFAULT_GLSL_PROFILE: &str = "core";

// ===== VARIABLE TYPES =====

/// GLSL type keyword
///
/// `Structure` names a user struct declared through a `Structure`
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableType {
    Void,
    Float,
    Double,
    UnsignedInteger,
    Integer,
    AtomicUnsignedInteger,
    Boolean,
    FloatVector2,
    FloatVector3,
    FloatVector4,
    DoubleVector2,
    DoubleVector3,
    DoubleVector4,
    UIntVector2,
    UIntVector3,
    UIntVector4,
    SIntVector2,
    SIntVector3,
    SIntVector4,
    BooleanVector2,
    BooleanVector3,
    BooleanVector4,
    Matrix2,
    Matrix3,
    Matrix4,
    Matrix2x3,
    Matrix2x4,
    Matrix3x2,
    Matrix3x4,
    Matrix4x2,
    Matrix4x3,
    DoubleMatrix2,
    DoubleMatrix3,
    DoubleMatrix4,
    Sampler1D,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    Sampler1DArray,
    Sampler2DArray,
    SamplerCubeArray,
    Sampler2DMultisample,
    Sampler2DShadow,
    Sampler2DArrayShadow,
    SamplerCubeShadow,
    SamplerBuffer,
    UIntSampler2D,
    SIntSampler2D,
    UIntSamplerBuffer,
    SIntSamplerBuffer,
    Image2D,
    Image3D,
    ImageCube,
    ImageBuffer,
    SubpassInput,
    Structure(String),
}

impl VariableType {
    /// GLSL keyword for this type
    pub fn to_str(&self) -> &str {
        match self {
            VariableType::Void => "void",
            VariableType::Float => "float",
            VariableType::Double => "double",
            VariableType::UnsignedInteger => "uint",
            VariableType::Integer => "int",
            VariableType::AtomicUnsignedInteger => "atomic_uint",
            VariableType::Boolean => "bool",
            VariableType::FloatVector2 => "vec2",
            VariableType::FloatVector3 => "vec3",
            VariableType::FloatVector4 => "vec4",
            VariableType::DoubleVector2 => "dvec2",
            VariableType::DoubleVector3 => "dvec3",
            VariableType::DoubleVector4 => "dvec4",
            VariableType::UIntVector2 => "uvec2",
            VariableType::UIntVector3 => "uvec3",
            VariableType::UIntVector4 => "uvec4",
            VariableType::SIntVector2 => "ivec2",
            VariableType::SIntVector3 => "ivec3",
            VariableType::SIntVector4 => "ivec4",
            VariableType::BooleanVector2 => "bvec2",
            VariableType::BooleanVector3 => "bvec3",
            VariableType::BooleanVector4 => "bvec4",
            VariableType::Matrix2 => "mat2",
            VariableType::Matrix3 => "mat3",
            VariableType::Matrix4 => "mat4",
            VariableType::Matrix2x3 => "mat2x3",
            VariableType::Matrix2x4 => "mat2x4",
            VariableType::Matrix3x2 => "mat3x2",
            VariableType::Matrix3x4 => "mat3x4",
            VariableType::Matrix4x2 => "mat4x2",
            VariableType::Matrix4x3 => "mat4x3",
            VariableType::DoubleMatrix2 => "dmat2",
            VariableType::DoubleMatrix3 => "dmat3",
            VariableType::DoubleMatrix4 => "dmat4",
            VariableType::Sampler1D => "sampler1D",
            VariableType::Sampler2D => "sampler2D",
            VariableType::Sampler3D => "sampler3D",
            VariableType::SamplerCube => "samplerCube",
            VariableType::Sampler1DArray => "sampler1DArray",
            VariableType::Sampler2DArray => "sampler2DArray",
            VariableType::SamplerCubeArray => "samplerCubeArray",
            VariableType::Sampler2DMultisample => "sampler2DMS",
            VariableType::Sampler2DShadow => "sampler2DShadow",
            VariableType::Sampler2DArrayShadow => "sampler2DArrayShadow",
            VariableType::SamplerCubeShadow => "samplerCubeShadow",
            VariableType::SamplerBuffer => "samplerBuffer",
            VariableType::UIntSampler2D => "usampler2D",
            VariableType::SIntSampler2D => "isampler2D",
            VariableType::UIntSamplerBuffer => "usamplerBuffer",
            VariableType::SIntSamplerBuffer => "isamplerBuffer",
            VariableType::Image2D => "image2D",
            VariableType::Image3D => "image3D",
            VariableType::ImageCube => "imageCube",
            VariableType::ImageBuffer => "imageBuffer",
            VariableType::SubpassInput => "subpassInput",
            VariableType::Structure(name) => name.as_str(),
        }
    }

    /// Estimated size in bytes inside a std140 block
    ///
    /// Vectors are padded to four components, matrices count one padded
    /// column per row. Opaque types, `void` and structures report 0.
    pub fn bytes(&self) -> u32 {
        match self {
            VariableType::Float
            | VariableType::UnsignedInteger
            | VariableType::Integer
            | VariableType::AtomicUnsignedInteger
            | VariableType::Boolean => 4,
            VariableType::Double => 8,
            VariableType::FloatVector2
            | VariableType::FloatVector3
            | VariableType::FloatVector4
            | VariableType::UIntVector2
            | VariableType::UIntVector3
            | VariableType::UIntVector4
            | VariableType::SIntVector2
            | VariableType::SIntVector3
            | VariableType::SIntVector4
            | VariableType::BooleanVector2
            | VariableType::BooleanVector3
            | VariableType::BooleanVector4 => 16,
            VariableType::DoubleVector2
            | VariableType::DoubleVector3
            | VariableType::DoubleVector4 => 32,
            VariableType::Matrix2 | VariableType::Matrix2x3 | VariableType::Matrix2x4 => 32,
            VariableType::Matrix3 | VariableType::Matrix3x2 | VariableType::Matrix3x4 => 48,
            VariableType::Matrix4 | VariableType::Matrix4x2 | VariableType::Matrix4x3 => 64,
            VariableType::DoubleMatrix2 => 64,
            VariableType::DoubleMatrix3 => 96,
            VariableType::DoubleMatrix4 => 128,
            _ => 0,
        }
    }

    /// Scalar types usable as specialization constants
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            VariableType::Float
                | VariableType::Double
                | VariableType::UnsignedInteger
                | VariableType::Integer
                | VariableType::Boolean
        )
    }

    /// Opaque types bound through descriptors (samplers, images, subpass inputs)
    pub fn is_opaque(&self) -> bool {
        matches!(
            self,
            VariableType::Sampler1D
                | VariableType::Sampler2D
                | VariableType::Sampler3D
                | VariableType::SamplerCube
                | VariableType::Sampler1DArray
                | VariableType::Sampler2DArray
                | VariableType::SamplerCubeArray
                | VariableType::Sampler2DMultisample
                | VariableType::Sampler2DShadow
                | VariableType::Sampler2DArrayShadow
                | VariableType::SamplerCubeShadow
                | VariableType::UIntSampler2D
                | VariableType::SIntSampler2D
                | VariableType::Image2D
                | VariableType::Image3D
                | VariableType::ImageCube
                | VariableType::SubpassInput
        ) || self.is_buffer_sampler()
    }

    /// Types allowed for texel buffers
    pub fn is_buffer_sampler(&self) -> bool {
        matches!(
            self,
            VariableType::SamplerBuffer
                | VariableType::UIntSamplerBuffer
                | VariableType::SIntSamplerBuffer
                | VariableType::ImageBuffer
        )
    }

    /// Types allowed for fragment shader outputs
    pub fn is_fragment_output(&self) -> bool {
        matches!(
            self,
            VariableType::Float
                | VariableType::Integer
                | VariableType::UnsignedInteger
                | VariableType::FloatVector2
                | VariableType::FloatVector3
                | VariableType::FloatVector4
                | VariableType::SIntVector2
                | VariableType::SIntVector3
                | VariableType::SIntVector4
                | VariableType::UIntVector2
                | VariableType::UIntVector3
                | VariableType::UIntVector4
        )
    }

    /// Types that may cross a stage interface (no opaque, no void, no bool)
    pub fn is_interface(&self) -> bool {
        !matches!(
            self,
            VariableType::Void
                | VariableType::Boolean
                | VariableType::BooleanVector2
                | VariableType::BooleanVector3
                | VariableType::BooleanVector4
                | VariableType::AtomicUnsignedInteger
        ) && !self.is_opaque()
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

// ===== QUALIFIERS =====

/// Interpolation qualifier of a stage interface variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interpolation {
    Smooth,
    Flat,
    NoPerspective,
}

impl Interpolation {
    pub fn to_str(self) -> &'static str {
        match self {
            Interpolation::Smooth => "smooth",
            Interpolation::Flat => "flat",
            Interpolation::NoPerspective => "noperspective",
        }
    }
}

/// Memory layout of a uniform or storage block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryLayout {
    Shared,
    Packed,
    Std140,
    Std430,
}

impl MemoryLayout {
    pub fn to_str(self) -> &'static str {
        match self {
            MemoryLayout::Shared => "shared",
            MemoryLayout::Packed => "packed",
            MemoryLayout::Std140 => "std140",
            MemoryLayout::Std430 => "std430",
        }
    }
}

/// Behavior of an `#extension` directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionBehavior {
    Enable,
    Require,
    Warn,
    Disable,
}

impl ExtensionBehavior {
    pub fn to_str(self) -> &'static str {
        match self {
            ExtensionBehavior::Enable => "enable",
            ExtensionBehavior::Require => "require",
            ExtensionBehavior::Warn => "warn",
            ExtensionBehavior::Disable => "disable",
        }
    }
}

// ===== PRIMITIVES =====

/// Input primitive layout of geometry and tesselation stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPrimitiveType {
    Points,
    Lines,
    LinesAdjacency,
    Triangles,
    TrianglesAdjacency,
}

impl InputPrimitiveType {
    pub fn to_str(self) -> &'static str {
        match self {
            InputPrimitiveType::Points => "points",
            InputPrimitiveType::Lines => "lines",
            InputPrimitiveType::LinesAdjacency => "lines_adjacency",
            InputPrimitiveType::Triangles => "triangles",
            InputPrimitiveType::TrianglesAdjacency => "triangles_adjacency",
        }
    }

    /// Number of vertices delivered per primitive
    pub fn vertex_count(self) -> u32 {
        match self {
            InputPrimitiveType::Points => 1,
            InputPrimitiveType::Lines => 2,
            InputPrimitiveType::LinesAdjacency => 4,
            InputPrimitiveType::Triangles => 3,
            InputPrimitiveType::TrianglesAdjacency => 6,
        }
    }
}

/// Output primitive layout of geometry and tesselation stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputPrimitiveType {
    Points,
    LineStrip,
    TriangleStrip,
}

impl OutputPrimitiveType {
    pub fn to_str(self) -> &'static str {
        match self {
            OutputPrimitiveType::Points => "points",
            OutputPrimitiveType::LineStrip => "line_strip",
            OutputPrimitiveType::TriangleStrip => "triangle_strip",
        }
    }
}

// ===== VERTEX ATTRIBUTES =====

/// Vertex attribute slot
///
/// The discriminant is the attribute location. Matrix attributes occupy
/// one location per row; only the first row is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexAttributeType {
    Position = 0,
    Tangent = 1,
    Binormal = 2,
    Normal = 3,
    Primary2DTextureCoordinates = 4,
    Primary3DTextureCoordinates = 5,
    Secondary2DTextureCoordinates = 6,
    Secondary3DTextureCoordinates = 7,
    VertexColor = 8,
    ModelMatrixR0 = 9,
    ModelMatrixR1 = 10,
    ModelMatrixR2 = 11,
    ModelMatrixR3 = 12,
    NormalModelMatrixR0 = 13,
    NormalModelMatrixR1 = 14,
    NormalModelMatrixR2 = 15,
}

impl VertexAttributeType {
    pub fn location(self) -> u32 {
        self as u32
    }

    /// GLSL name of the attribute, `None` for the non-leading matrix rows
    pub fn name(self) -> Option<&'static str> {
        match self {
            VertexAttributeType::Position => Some(attribute::POSITION),
            VertexAttributeType::Tangent => Some(attribute::TANGENT),
            VertexAttributeType::Binormal => Some(attribute::BINORMAL),
            VertexAttributeType::Normal => Some(attribute::NORMAL),
            VertexAttributeType::Primary2DTextureCoordinates => {
                Some(attribute::PRIMARY_2D_TEX_COORD)
            }
            VertexAttributeType::Primary3DTextureCoordinates => {
                Some(attribute::PRIMARY_3D_TEX_COORD)
            }
            VertexAttributeType::Secondary2DTextureCoordinates => {
                Some(attribute::SECONDARY_2D_TEX_COORD)
            }
            VertexAttributeType::Secondary3DTextureCoordinates => {
                Some(attribute::SECONDARY_3D_TEX_COORD)
            }
            VertexAttributeType::VertexColor => Some(attribute::COLOR),
            VertexAttributeType::ModelMatrixR0 => Some(attribute::MODEL_MATRIX),
            VertexAttributeType::NormalModelMatrixR0 => Some(attribute::NORMAL_MODEL_MATRIX),
            _ => None,
        }
    }

    /// GLSL type of the attribute, `None` for the non-leading matrix rows
    pub fn variable_type(self) -> Option<VariableType> {
        match self {
            VertexAttributeType::Position
            | VertexAttributeType::Tangent
            | VertexAttributeType::Binormal
            | VertexAttributeType::Normal
            | VertexAttributeType::Primary3DTextureCoordinates
            | VertexAttributeType::Secondary3DTextureCoordinates => {
                Some(VariableType::FloatVector3)
            }
            VertexAttributeType::Primary2DTextureCoordinates
            | VertexAttributeType::Secondary2DTextureCoordinates => {
                Some(VariableType::FloatVector2)
            }
            VertexAttributeType::VertexColor => Some(VariableType::FloatVector4),
            VertexAttributeType::ModelMatrixR0 => Some(VariableType::Matrix4),
            VertexAttributeType::NormalModelMatrixR0 => Some(VariableType::Matrix3),
            _ => None,
        }
    }

    /// Number of components read from the vertex buffer for this slot
    pub fn component_count(self) -> u32 {
        match self {
            VertexAttributeType::Primary2DTextureCoordinates
            | VertexAttributeType::Secondary2DTextureCoordinates => 2,
            VertexAttributeType::VertexColor
            | VertexAttributeType::ModelMatrixR0
            | VertexAttributeType::ModelMatrixR1
            | VertexAttributeType::ModelMatrixR2
            | VertexAttributeType::ModelMatrixR3 => 4,
            _ => 3,
        }
    }

    /// Every slot occupied by this attribute (all rows for matrices)
    pub fn occupied_slots(self) -> &'static [VertexAttributeType] {
        use VertexAttributeType::*;
        match self {
            ModelMatrixR0 => &[ModelMatrixR0, ModelMatrixR1, ModelMatrixR2, ModelMatrixR3],
            NormalModelMatrixR0 => &[NormalModelMatrixR0, NormalModelMatrixR1, NormalModelMatrixR2],
            Position => &[Position],
            Tangent => &[Tangent],
            Binormal => &[Binormal],
            Normal => &[Normal],
            Primary2DTextureCoordinates => &[Primary2DTextureCoordinates],
            Primary3DTextureCoordinates => &[Primary3DTextureCoordinates],
            Secondary2DTextureCoordinates => &[Secondary2DTextureCoordinates],
            Secondary3DTextureCoordinates => &[Secondary3DTextureCoordinates],
            VertexColor => &[VertexColor],
            ModelMatrixR1 => &[ModelMatrixR1],
            ModelMatrixR2 => &[ModelMatrixR2],
            ModelMatrixR3 => &[ModelMatrixR3],
            NormalModelMatrixR1 => &[NormalModelMatrixR1],
            NormalModelMatrixR2 => &[NormalModelMatrixR2],
        }
    }

    /// Per-instance attributes (model matrices fed by a vertex buffer)
    pub fn is_instance_attribute(self) -> bool {
        self.location() >= VertexAttributeType::ModelMatrixR0.location()
    }
}

/// Vertex attribute names
pub mod attribute {
    pub const POSITION: &str = "sva_Vertex";
    pub const TANGENT: &str = "sva_Tangent";
    pub const BINORMAL: &str = "sva_Binormal";
    pub const NORMAL: &str = "sva_Normal";
    pub const COLOR: &str = "sva_Color";
    pub const PRIMARY_2D_TEX_COORD: &str = "sva_2DTexCoord0";
    pub const PRIMARY_3D_TEX_COORD: &str = "sva_3DTexCoord0";
    pub const SECONDARY_2D_TEX_COORD: &str = "sva_2DTexCoord1";
    pub const SECONDARY_3D_TEX_COORD: &str = "sva_3DTexCoord1";
    pub const MODEL_MATRIX: &str = "sva_ModelMatrix";
    pub const NORMAL_MODEL_MATRIX: &str = "sva_NormalModelMatrix";
}

/// Uniform block, push constant and instance names used by generated code
pub mod uniform {
    pub const VIEW_BLOCK: &str = "ViewUniformBlock";
    pub const VIEW_INSTANCE: &str = "ubView";
    pub const MODEL_BLOCK: &str = "ModelUniformBlock";
    pub const MODEL_INSTANCE: &str = "ubModel";
    pub const MATERIAL_BLOCK: &str = "MaterialUniformBlock";
    pub const MATERIAL_INSTANCE: &str = "ubMaterial";
    pub const MATRICES_PUSH_CONSTANT: &str = "MatricesPushConstant";
    pub const MATRICES_INSTANCE: &str = "pcMatrices";

    pub const VIEW_MATRIX: &str = "viewMatrix";
    pub const PROJECTION_MATRIX: &str = "projectionMatrix";
    pub const VIEW_PROJECTION_MATRIX: &str = "viewProjectionMatrix";
    pub const POSITION_WORLD_SPACE: &str = "positionWorldSpace";
    pub const VIEW_PROPERTIES: &str = "viewProperties";
    pub const MODEL_MATRIX: &str = "modelMatrix";
    pub const MODEL_VIEW_MATRIX: &str = "modelViewMatrix";
    pub const NORMAL_MODEL_MATRIX: &str = "normalModelMatrix";
    pub const NORMAL_MATRIX: &str = "normalMatrix";
    pub const MODEL_VIEW_PROJECTION_MATRIX: &str = "modelViewProjectionMatrix";
}

// ===== SHADER VARIABLES =====

/// Variables produced by generated code
///
/// The synthesizable ones can be requested from a vertex shader generator;
/// the others are produced by preparations or by fragment shaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVariable {
    PositionScreenSpace,
    PositionWorldSpace,
    GLPositionWorldSpace,
    PositionViewSpace,
    PositionTextureSpace,
    Color,
    Primary2DTextureCoordinates,
    Primary3DTextureCoordinates,
    Secondary2DTextureCoordinates,
    Secondary3DTextureCoordinates,
    TangentWorldSpace,
    TangentViewSpace,
    BinormalWorldSpace,
    BinormalViewSpace,
    NormalWorldSpace,
    NormalViewSpace,
    WorldTBNMatrix,
    ViewTBNMatrix,
    WorldToTangentMatrix,
    ModelViewMatrix,
    NormalMatrix,
    ModelViewProjectionMatrix,
    BillboardModelMatrix,
    OutputFragment,
}

impl ShaderVariable {
    pub const ALL: [ShaderVariable; 24] = [
        ShaderVariable::PositionScreenSpace,
        ShaderVariable::PositionWorldSpace,
        ShaderVariable::GLPositionWorldSpace,
        ShaderVariable::PositionViewSpace,
        ShaderVariable::PositionTextureSpace,
        ShaderVariable::Color,
        ShaderVariable::Primary2DTextureCoordinates,
        ShaderVariable::Primary3DTextureCoordinates,
        ShaderVariable::Secondary2DTextureCoordinates,
        ShaderVariable::Secondary3DTextureCoordinates,
        ShaderVariable::TangentWorldSpace,
        ShaderVariable::TangentViewSpace,
        ShaderVariable::BinormalWorldSpace,
        ShaderVariable::BinormalViewSpace,
        ShaderVariable::NormalWorldSpace,
        ShaderVariable::NormalViewSpace,
        ShaderVariable::WorldTBNMatrix,
        ShaderVariable::ViewTBNMatrix,
        ShaderVariable::WorldToTangentMatrix,
        ShaderVariable::ModelViewMatrix,
        ShaderVariable::NormalMatrix,
        ShaderVariable::ModelViewProjectionMatrix,
        ShaderVariable::BillboardModelMatrix,
        ShaderVariable::OutputFragment,
    ];

    /// Request token (e.g. "PositionTextureSpace")
    pub fn key(self) -> &'static str {
        match self {
            ShaderVariable::PositionScreenSpace => "PositionScreenSpace",
            ShaderVariable::PositionWorldSpace => "PositionWorldSpace",
            ShaderVariable::GLPositionWorldSpace => "GLPositionWorldSpace",
            ShaderVariable::PositionViewSpace => "PositionViewSpace",
            ShaderVariable::PositionTextureSpace => "PositionTextureSpace",
            ShaderVariable::Color => "Color",
            ShaderVariable::Primary2DTextureCoordinates => "Primary2DTextureCoordinates",
            ShaderVariable::Primary3DTextureCoordinates => "Primary3DTextureCoordinates",
            ShaderVariable::Secondary2DTextureCoordinates => "Secondary2DTextureCoordinates",
            ShaderVariable::Secondary3DTextureCoordinates => "Secondary3DTextureCoordinates",
            ShaderVariable::TangentWorldSpace => "TangentWorldSpace",
            ShaderVariable::TangentViewSpace => "TangentViewSpace",
            ShaderVariable::BinormalWorldSpace => "BinormalWorldSpace",
            ShaderVariable::BinormalViewSpace => "BinormalViewSpace",
            ShaderVariable::NormalWorldSpace => "NormalWorldSpace",
            ShaderVariable::NormalViewSpace => "NormalViewSpace",
            ShaderVariable::WorldTBNMatrix => "WorldTBNMatrix",
            ShaderVariable::ViewTBNMatrix => "ViewTBNMatrix",
            ShaderVariable::WorldToTangentMatrix => "WorldToTangentMatrix",
            ShaderVariable::ModelViewMatrix => "ModelViewMatrix",
            ShaderVariable::NormalMatrix => "NormalMatrix",
            ShaderVariable::ModelViewProjectionMatrix => "ModelViewProjectionMatrix",
            ShaderVariable::BillboardModelMatrix => "BillboardModelMatrix",
            ShaderVariable::OutputFragment => "OutputFragment",
        }
    }

    /// Identifier used in GLSL code
    pub fn name(self) -> &'static str {
        match self {
            ShaderVariable::PositionScreenSpace | ShaderVariable::GLPositionWorldSpace => {
                "gl_Position"
            }
            ShaderVariable::PositionWorldSpace => "ssv_PositionWorldSpace",
            ShaderVariable::PositionViewSpace => "ssv_PositionViewSpace",
            ShaderVariable::PositionTextureSpace => "ssv_PositionTextureSpace",
            ShaderVariable::Color => "ssv_Color",
            ShaderVariable::Primary2DTextureCoordinates => "ssv_2DTexCoord0",
            ShaderVariable::Primary3DTextureCoordinates => "ssv_3DTexCoord0",
            ShaderVariable::Secondary2DTextureCoordinates => "ssv_2DTexCoord1",
            ShaderVariable::Secondary3DTextureCoordinates => "ssv_3DTexCoord1",
            ShaderVariable::TangentWorldSpace => "ssv_TangentWorldSpace",
            ShaderVariable::TangentViewSpace => "ssv_TangentViewSpace",
            ShaderVariable::BinormalWorldSpace => "ssv_BinormalWorldSpace",
            ShaderVariable::BinormalViewSpace => "ssv_BinormalViewSpace",
            ShaderVariable::NormalWorldSpace => "ssv_NormalWorldSpace",
            ShaderVariable::NormalViewSpace => "ssv_NormalViewSpace",
            ShaderVariable::WorldTBNMatrix => "ssv_WorldTBNMatrix",
            ShaderVariable::ViewTBNMatrix => "ssv_ViewTBNMatrix",
            ShaderVariable::WorldToTangentMatrix => "ssv_WorldToTangentMatrix",
            ShaderVariable::ModelViewMatrix => "ssv_ModelViewMatrix",
            ShaderVariable::NormalMatrix => "ssv_NormalMatrix",
            ShaderVariable::ModelViewProjectionMatrix => "ssv_ModelViewProjectionMatrix",
            ShaderVariable::BillboardModelMatrix => "ssv_BillboardModelMatrix",
            ShaderVariable::OutputFragment => "ssv_OutputFragment",
        }
    }

    /// GLSL type of the variable
    pub fn variable_type(self) -> VariableType {
        match self {
            ShaderVariable::Primary2DTextureCoordinates
            | ShaderVariable::Secondary2DTextureCoordinates => VariableType::FloatVector2,
            ShaderVariable::Primary3DTextureCoordinates
            | ShaderVariable::Secondary3DTextureCoordinates
            | ShaderVariable::TangentWorldSpace
            | ShaderVariable::TangentViewSpace
            | ShaderVariable::BinormalWorldSpace
            | ShaderVariable::BinormalViewSpace
            | ShaderVariable::NormalWorldSpace
            | ShaderVariable::NormalViewSpace => VariableType::FloatVector3,
            ShaderVariable::WorldTBNMatrix
            | ShaderVariable::ViewTBNMatrix
            | ShaderVariable::WorldToTangentMatrix
            | ShaderVariable::NormalMatrix => VariableType::Matrix3,
            ShaderVariable::ModelViewMatrix
            | ShaderVariable::ModelViewProjectionMatrix
            | ShaderVariable::BillboardModelMatrix => VariableType::Matrix4,
            _ => VariableType::FloatVector4,
        }
    }

    /// Stage interface location when the variable leaves the vertex stage
    ///
    /// mat3 outputs take three consecutive locations.
    pub fn location(self) -> Option<u32> {
        match self {
            ShaderVariable::PositionWorldSpace => Some(0),
            ShaderVariable::PositionViewSpace => Some(1),
            ShaderVariable::PositionTextureSpace => Some(2),
            ShaderVariable::Color => Some(3),
            ShaderVariable::Primary2DTextureCoordinates => Some(4),
            ShaderVariable::Primary3DTextureCoordinates => Some(5),
            ShaderVariable::Secondary2DTextureCoordinates => Some(6),
            ShaderVariable::Secondary3DTextureCoordinates => Some(7),
            ShaderVariable::TangentWorldSpace => Some(8),
            ShaderVariable::TangentViewSpace => Some(9),
            ShaderVariable::BinormalWorldSpace => Some(10),
            ShaderVariable::BinormalViewSpace => Some(11),
            ShaderVariable::NormalWorldSpace => Some(12),
            ShaderVariable::NormalViewSpace => Some(13),
            ShaderVariable::WorldTBNMatrix => Some(14),
            ShaderVariable::ViewTBNMatrix => Some(17),
            ShaderVariable::WorldToTangentMatrix => Some(20),
            ShaderVariable::OutputFragment => Some(0),
            _ => None,
        }
    }

    /// Whether a vertex shader generator has a synthesis routine for it
    pub fn is_synthesizable(self) -> bool {
        !matches!(
            self,
            ShaderVariable::ModelViewMatrix
                | ShaderVariable::NormalMatrix
                | ShaderVariable::ModelViewProjectionMatrix
                | ShaderVariable::BillboardModelMatrix
                | ShaderVariable::OutputFragment
        )
    }

    /// Variables that must be available locally before this one is computed
    pub fn prerequisites(self) -> &'static [ShaderVariable] {
        match self {
            ShaderVariable::PositionTextureSpace => &[
                ShaderVariable::PositionViewSpace,
                ShaderVariable::TangentViewSpace,
                ShaderVariable::BinormalViewSpace,
                ShaderVariable::NormalViewSpace,
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for ShaderVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShaderVariable {
    type Err = String;

    /// Parse a request token such as "PositionViewSpace"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShaderVariable::ALL
            .iter()
            .copied()
            .find(|variable| variable.key() == s)
            .ok_or_else(|| format!("unknown shader variable '{}'", s))
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
