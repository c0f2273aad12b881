use super::{Declaration, DeclarationKind};
use crate::code::{CodeGenerator, InstructionBuffer};
use crate::keys::VariableType;

/// Direction qualifier of a function parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterQualifier {
    In,
    Out,
    InOut,
}

impl ParameterQualifier {
    pub fn to_str(self) -> &'static str {
        match self {
            ParameterQualifier::In => "in",
            ParameterQualifier::Out => "out",
            ParameterQualifier::InOut => "inout",
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub qualifier: Option<ParameterQualifier>,
    pub variable_type: VariableType,
    pub name: String,
}

impl Parameter {
    pub fn new(variable_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            variable_type,
            name: name.into(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: ParameterQualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }

    fn source_code(&self) -> String {
        match self.qualifier {
            Some(qualifier) => {
                format!("{} {} {}", qualifier.to_str(), self.variable_type, self.name)
            }
            None => format!("{} {}", self.variable_type, self.name),
        }
    }
}

/// GLSL function with its own instruction buffer
///
/// The body is built with the `CodeGenerator` methods before the function
/// is declared on a shader.
///
/// # Example
///
/// ```no_run
/// use saphir::{CodeGenerator, Function, Parameter, VariableType};
///
/// let mut function = Function::new(VariableType::Float, "luminance")
///     .with_parameter(Parameter::new(VariableType::FloatVector3, "color"));
/// function.add_instruction("return dot(color, vec3(0.2126, 0.7152, 0.0722));");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    return_type: VariableType,
    name: String,
    parameters: Vec<Parameter>,
    instructions: InstructionBuffer,
}

impl Function {
    pub fn new(return_type: VariableType, name: impl Into<String>) -> Self {
        Self {
            return_type,
            name: name.into(),
            parameters: Vec::new(),
            instructions: InstructionBuffer::default(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn return_type(&self) -> &VariableType {
        &self.return_type
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl CodeGenerator for Function {
    fn instructions(&self) -> &InstructionBuffer {
        &self.instructions
    }

    fn instructions_mut(&mut self) -> &mut InstructionBuffer {
        &mut self.instructions
    }
}

impl Declaration for Function {
    const KIND: DeclarationKind = DeclarationKind::Function;

    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self
                .parameters
                .iter()
                .all(|p| !p.name.is_empty() && p.variable_type != VariableType::Void)
    }

    fn source_code(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(Parameter::source_code)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} {} ({})\n{{\n{}}}\n",
            self.return_type,
            self.name,
            parameters,
            self.instructions.assemble(&[], &[])
        )
    }
}
