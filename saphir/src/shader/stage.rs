use crate::declaration::{DeclarationKind, DeclarationKinds};
use std::fmt;

/// Pipeline stage of a shader
///
/// Graphics stages are ordered from vertex to fragment; compute stands
/// apart and never takes part in stage wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShaderStage {
    Vertex,
    TesselationControl,
    TesselationEvaluation,
    Geometry,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::TesselationControl,
        ShaderStage::TesselationEvaluation,
        ShaderStage::Geometry,
        ShaderStage::Fragment,
        ShaderStage::Compute,
    ];

    /// Declaration kinds a shader of this stage accepts
    ///
    /// Mirrors the `Accepts` implementations, which enforce the same rules
    /// at compile time.
    pub const fn accepted_declarations(self) -> DeclarationKinds {
        match self {
            ShaderStage::Vertex => DeclarationKinds::COMMON
                .union(DeclarationKinds::INPUT_ATTRIBUTE)
                .union(DeclarationKinds::STAGE_OUTPUT)
                .union(DeclarationKinds::OUTPUT_BLOCK),
            ShaderStage::TesselationControl
            | ShaderStage::TesselationEvaluation
            | ShaderStage::Geometry => {
                DeclarationKinds::COMMON.union(DeclarationKinds::PRIMITIVE_STAGE)
            }
            ShaderStage::Fragment => DeclarationKinds::COMMON
                .union(DeclarationKinds::STAGE_INPUT)
                .union(DeclarationKinds::INPUT_BLOCK)
                .union(DeclarationKinds::OUTPUT_FRAGMENT),
            ShaderStage::Compute => DeclarationKinds::COMMON,
        }
    }

    pub fn accepts(self, kind: DeclarationKind) -> bool {
        self.accepted_declarations().contains(kind.flag())
    }

    /// Whether outputs of this stage can be consumed by `downstream`
    pub fn can_feed(self, downstream: ShaderStage) -> bool {
        matches!(
            (self, downstream),
            (ShaderStage::Vertex, ShaderStage::TesselationControl)
                | (ShaderStage::Vertex, ShaderStage::Geometry)
                | (ShaderStage::Vertex, ShaderStage::Fragment)
                | (ShaderStage::TesselationControl, ShaderStage::TesselationEvaluation)
                | (ShaderStage::TesselationEvaluation, ShaderStage::Geometry)
                | (ShaderStage::TesselationEvaluation, ShaderStage::Fragment)
                | (ShaderStage::Geometry, ShaderStage::Fragment)
        )
    }

    /// Stages whose inputs may be declared as `name[]`
    pub fn accepts_unsized_inputs(self) -> bool {
        matches!(
            self,
            ShaderStage::TesselationControl
                | ShaderStage::TesselationEvaluation
                | ShaderStage::Geometry
        )
    }

    pub fn is_graphics(self) -> bool {
        self != ShaderStage::Compute
    }

    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex shader",
            ShaderStage::TesselationControl => "Tesselation control shader",
            ShaderStage::TesselationEvaluation => "Tesselation evaluation shader",
            ShaderStage::Geometry => "Geometry shader",
            ShaderStage::Fragment => "Fragment shader",
            ShaderStage::Compute => "Compute shader",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
