//! Generator configuration
//!
//! Pipeline facts the material code cannot decide alone: where model
//! matrices come from, which render pass the program serves and which
//! descriptor sets the standard blocks live in.

/// Source of the model matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelMatrixType {
    /// One draw per object, matrices in `ModelUniformBlock` and push constants
    #[default]
    UniformBufferObject,
    /// Instanced draws, matrices read per instance from the vertex buffer
    VertexBufferObject,
}

/// Render pass the generated program is used in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderPassType {
    #[default]
    SimplePass,
    AmbientPass,
    DirectionalLightPass,
    PointLightPass,
    SpotLightPass,
}

/// Descriptor set index of each binding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetIndexes {
    pub per_view: u32,
    pub per_model: u32,
    /// Material blocks (`MaterialUniformBlock ubMaterial`)
    pub per_model_layer: u32,
}

impl Default for SetIndexes {
    fn default() -> Self {
        Self {
            per_view: 0,
            per_model: 1,
            per_model_layer: 2,
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GeneratorConfig {
    pub model_matrix_type: ModelMatrixType,
    pub render_pass_type: RenderPassType,
    /// Replace the model rotation by a camera facing one (instanced only)
    pub billboarding: bool,
    pub set_indexes: SetIndexes,
}

impl GeneratorConfig {
    /// Configuration for instanced draws
    pub fn instanced() -> Self {
        Self {
            model_matrix_type: ModelMatrixType::VertexBufferObject,
            ..Self::default()
        }
    }

    pub fn with_billboarding(mut self) -> Self {
        self.billboarding = true;
        self
    }

    pub fn with_render_pass_type(mut self, render_pass_type: RenderPassType) -> Self {
        self.render_pass_type = render_pass_type;
        self
    }

    pub fn is_instanced(&self) -> bool {
        self.model_matrix_type == ModelMatrixType::VertexBufferObject
    }
}
