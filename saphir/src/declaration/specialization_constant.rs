use super::{Declaration, DeclarationKind};
use crate::keys::VariableType;

/// Pipeline specialization constant
/// (`layout(constant_id = N) const T name = value;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecializationConstant {
    constant_id: u32,
    variable_type: VariableType,
    name: String,
    default_value: String,
}

impl SpecializationConstant {
    /// # Arguments
    ///
    /// * `constant_id` - Vulkan specialization constant id
    /// * `variable_type` - Scalar type of the constant
    /// * `name` - GLSL identifier
    /// * `default_value` - GLSL literal used when the pipeline does not specialize it
    pub fn new(
        constant_id: u32,
        variable_type: VariableType,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            constant_id,
            variable_type,
            name: name.into(),
            default_value: default_value.into(),
        }
    }

    pub fn constant_id(&self) -> u32 {
        self.constant_id
    }

    pub fn variable_type(&self) -> &VariableType {
        &self.variable_type
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

impl Declaration for SpecializationConstant {
    const KIND: DeclarationKind = DeclarationKind::SpecializationConstant;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.variable_type.is_scalar() && !self.default_value.is_empty()
    }

    fn source_code(&self) -> String {
        format!(
            "layout(constant_id = {}) const {} {} = {};\n",
            self.constant_id, self.variable_type, self.name, self.default_value
        )
    }

    fn bytes(&self) -> u32 {
        self.variable_type.bytes()
    }
}
