//! Program
//!
//! A `Program` owns the shaders of one graphics pipeline, at most one per
//! stage, all sharing the program GLSL version. Shaders are created through
//! the `init_*` methods, generated one by one in pipeline order, and each
//! downstream shader receives its inputs from the closest upstream shader
//! with `connect_stage`.
//!
//! ```no_run
//! use saphir::{GeneratorConfig, Program, ShaderGenerator, ShaderStage};
//!
//! let mut program = Program::new("Material");
//! program.generate_fallback_vertex_shader(GeneratorConfig::default(), true)?;
//!
//! program.init_fragment_shader("MaterialFragment")?;
//! program.connect_stage(ShaderStage::Fragment)?;
//! if let Some(fragment) = program.fragment_shader_mut() {
//!     let mut generator = ShaderGenerator::new(fragment, GeneratorConfig::default());
//!     generator.declare_default_output_fragment()?;
//!     generator.generate_source_code()?;
//! }
//!
//! assert!(program.is_complete());
//! # Ok::<(), saphir::Error>(())
//! ```

use crate::code::CodeGenerator;
use crate::declaration::InputAttribute;
use crate::error::{Error, Result};
use crate::generator::{GeneratorConfig, ShaderGenerator, VariableScope};
use crate::keys::{
    attribute, ExtensionBehavior, InputPrimitiveType, OutputPrimitiveType, ShaderVariable,
    VertexAttributeType, DEFAULT_GLSL_PROFILE, DEFAULT_GLSL_VERSION,
};
use crate::shader::{
    FragmentShader, FragmentStage, GeometryShader, GeometryStage, Shader, ShaderSource,
    ShaderStage, Stage, StageWiringContext, TesselationControlShader, TesselationControlStage,
    TesselationEvaluationShader, TesselationEvaluationStage, VertexShader, VertexStage,
};

const SOURCE: &str = "saphir::Program";

/// Extension enabled on fallback shaders
pub const SEPARATE_SHADER_OBJECTS: &str = "GL_ARB_separate_shader_objects";

/// Fallback fragment color (magenta)
const FALLBACK_COLOR: &str = "vec4(1.0, 0.0, 1.0, 1.0)";

/// Shaders of one graphics pipeline
#[derive(Debug, Clone)]
pub struct Program {
    name: String,
    glsl_version: String,
    glsl_profile: String,
    vertex: Option<VertexShader>,
    tesselation_control: Option<TesselationControlShader>,
    tesselation_evaluation: Option<TesselationEvaluationShader>,
    geometry: Option<GeometryShader>,
    fragment: Option<FragmentShader>,
}

impl Program {
    /// Create an empty program targeting GLSL 460 core
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glsl_version: DEFAULT_GLSL_VERSION.to_string(),
            glsl_profile: DEFAULT_GLSL_PROFILE.to_string(),
            vertex: None,
            tesselation_control: None,
            tesselation_evaluation: None,
            geometry: None,
            fragment: None,
        }
    }

    /// GLSL version and profile given to every shader created afterwards
    pub fn with_glsl_version(
        mut self,
        version: impl Into<String>,
        profile: impl Into<String>,
    ) -> Self {
        self.glsl_version = version.into();
        self.glsl_profile = profile.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== SHADER CREATION =====

    /// Create the vertex shader
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderAlreadyInitialized` if the program has one.
    pub fn init_vertex_shader(&mut self, name: impl Into<String>) -> Result<&mut VertexShader> {
        let shader = self.create_shader(name, VertexStage::default());
        install(&self.name, &mut self.vertex, shader)
    }

    /// Create the tesselation control shader
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderAlreadyInitialized` if the program has one.
    pub fn init_tesselation_control_shader(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut TesselationControlShader> {
        let shader = self.create_shader(name, TesselationControlStage::default());
        install(&self.name, &mut self.tesselation_control, shader)
    }

    /// Create the tesselation evaluation shader
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderAlreadyInitialized` if the program has one.
    pub fn init_tesselation_evaluation_shader(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut TesselationEvaluationShader> {
        let shader = self.create_shader(name, TesselationEvaluationStage::default());
        install(&self.name, &mut self.tesselation_evaluation, shader)
    }

    /// Create the geometry shader with its primitive layouts
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderAlreadyInitialized` if the program has one.
    pub fn init_geometry_shader(
        &mut self,
        name: impl Into<String>,
        input: InputPrimitiveType,
        output: OutputPrimitiveType,
        max_vertices: u32,
    ) -> Result<&mut GeometryShader> {
        let shader = self.create_shader(name, GeometryStage::new(input, output, max_vertices));
        install(&self.name, &mut self.geometry, shader)
    }

    /// Create the fragment shader
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderAlreadyInitialized` if the program has one.
    pub fn init_fragment_shader(&mut self, name: impl Into<String>) -> Result<&mut FragmentShader> {
        let shader = self.create_shader(name, FragmentStage::default());
        install(&self.name, &mut self.fragment, shader)
    }

    fn create_shader<S: Stage>(&self, name: impl Into<String>, stage: S) -> Shader<S> {
        let mut shader = Shader::with_stage(name, stage);
        shader.set_glsl_version(self.glsl_version.clone(), self.glsl_profile.clone());
        shader
    }

    // ===== ACCESSORS =====

    pub fn vertex_shader(&self) -> Option<&VertexShader> {
        self.vertex.as_ref()
    }

    pub fn vertex_shader_mut(&mut self) -> Option<&mut VertexShader> {
        self.vertex.as_mut()
    }

    pub fn tesselation_control_shader(&self) -> Option<&TesselationControlShader> {
        self.tesselation_control.as_ref()
    }

    pub fn tesselation_control_shader_mut(&mut self) -> Option<&mut TesselationControlShader> {
        self.tesselation_control.as_mut()
    }

    pub fn tesselation_evaluation_shader(&self) -> Option<&TesselationEvaluationShader> {
        self.tesselation_evaluation.as_ref()
    }

    pub fn tesselation_evaluation_shader_mut(
        &mut self,
    ) -> Option<&mut TesselationEvaluationShader> {
        self.tesselation_evaluation.as_mut()
    }

    pub fn geometry_shader(&self) -> Option<&GeometryShader> {
        self.geometry.as_ref()
    }

    pub fn geometry_shader_mut(&mut self) -> Option<&mut GeometryShader> {
        self.geometry.as_mut()
    }

    pub fn fragment_shader(&self) -> Option<&FragmentShader> {
        self.fragment.as_ref()
    }

    pub fn fragment_shader_mut(&mut self) -> Option<&mut FragmentShader> {
        self.fragment.as_mut()
    }

    /// Present shaders, in pipeline order
    pub fn shaders(&self) -> Vec<&dyn ShaderSource> {
        let mut shaders: Vec<&dyn ShaderSource> = Vec::with_capacity(5);
        if let Some(shader) = &self.vertex {
            shaders.push(shader);
        }
        if let Some(shader) = &self.tesselation_control {
            shaders.push(shader);
        }
        if let Some(shader) = &self.tesselation_evaluation {
            shaders.push(shader);
        }
        if let Some(shader) = &self.geometry {
            shaders.push(shader);
        }
        if let Some(shader) = &self.fragment {
            shaders.push(shader);
        }
        shaders
    }

    fn shader(&self, stage: ShaderStage) -> Option<&dyn ShaderSource> {
        self.shaders().into_iter().find(|shader| shader.stage() == stage)
    }

    pub fn has_stage(&self, stage: ShaderStage) -> bool {
        self.shader(stage).is_some()
    }

    // ===== STATE =====

    /// Whether every present shader is generated and the pipeline can run
    ///
    /// Vertex and fragment shaders are mandatory, a tesselation control
    /// shader needs its evaluation shader.
    pub fn is_complete(&self) -> bool {
        let generated = |stage: ShaderStage| {
            self.shader(stage).is_some_and(|shader| shader.is_generated())
        };

        if !generated(ShaderStage::Vertex) || !generated(ShaderStage::Fragment) {
            return false;
        }

        if self.tesselation_control.is_some() && !self.use_tesselation() {
            return false;
        }

        self.shaders().iter().all(|shader| shader.is_generated())
    }

    /// Whether both tesselation shaders are present
    pub fn use_tesselation(&self) -> bool {
        match (&self.tesselation_control, &self.tesselation_evaluation) {
            (Some(_), Some(_)) => true,
            (Some(control), None) => {
                crate::saphir_debug!(SOURCE, "Program '{}' has {} '{}' but no {}",
                    self.name, ShaderStage::TesselationControl, control.name(),
                    ShaderStage::TesselationEvaluation);
                false
            }
            _ => false,
        }
    }

    /// Last generated stage, the one producing the rasterized outputs
    pub fn last_shader_stage(&self) -> Option<ShaderStage> {
        self.shaders()
            .into_iter()
            .rev()
            .find(|shader| shader.is_generated())
            .map(|shader| shader.stage())
    }

    /// Whether the vertex shader reads per-instance model matrices
    pub fn is_instancing_enabled(&self) -> bool {
        self.vertex
            .as_ref()
            .is_some_and(|vertex| vertex.is_instancing_enabled())
    }

    // ===== WIRING =====

    /// Declare the inputs of `stage` from the closest upstream shader
    ///
    /// # Errors
    ///
    /// - `Error::IncompatibleStages` for vertex and compute stages, or when
    ///   the closest upstream shader cannot feed `stage`
    /// - `Error::ShaderNotInitialized` if `stage` or every upstream stage is
    ///   missing
    /// - any error of `Shader::wiring_context` and
    ///   `Shader::connect_from_previous_shader`
    pub fn connect_stage(&mut self, stage: ShaderStage) -> Result<()> {
        let context = self.upstream_context(stage)?;

        match stage {
            ShaderStage::TesselationControl => {
                required(&self.name, &mut self.tesselation_control)?
                    .connect_from_previous_shader(&context)
            }
            ShaderStage::TesselationEvaluation => {
                required(&self.name, &mut self.tesselation_evaluation)?
                    .connect_from_previous_shader(&context)
            }
            ShaderStage::Geometry => {
                required(&self.name, &mut self.geometry)?.connect_from_previous_shader(&context)
            }
            ShaderStage::Fragment => {
                required(&self.name, &mut self.fragment)?.connect_from_previous_shader(&context)
            }
            ShaderStage::Vertex | ShaderStage::Compute => {
                crate::saphir_bail!(SOURCE, Error::IncompatibleStages,
                    "{} has no upstream stage in program '{}'", stage, self.name);
            }
        }
    }

    /// Wiring context of the closest shader before `stage`
    fn upstream_context(&self, stage: ShaderStage) -> Result<StageWiringContext> {
        if matches!(stage, ShaderStage::Vertex | ShaderStage::Compute) {
            crate::saphir_bail!(SOURCE, Error::IncompatibleStages,
                "{} has no upstream stage in program '{}'", stage, self.name);
        }

        let upstream = [
            ShaderStage::Geometry,
            ShaderStage::TesselationEvaluation,
            ShaderStage::TesselationControl,
            ShaderStage::Vertex,
        ]
        .into_iter()
        .filter(|upstream| *upstream < stage)
        .find(|upstream| self.has_stage(*upstream));

        let context = match upstream {
            Some(ShaderStage::Vertex) => self.vertex.as_ref().map(|s| s.wiring_context()),
            Some(ShaderStage::TesselationControl) => {
                self.tesselation_control.as_ref().map(|s| s.wiring_context())
            }
            Some(ShaderStage::TesselationEvaluation) => {
                self.tesselation_evaluation.as_ref().map(|s| s.wiring_context())
            }
            Some(ShaderStage::Geometry) => self.geometry.as_ref().map(|s| s.wiring_context()),
            _ => None,
        };

        match context {
            Some(context) => context,
            None => crate::saphir_bail!(SOURCE, Error::ShaderNotInitialized,
                "Program '{}' has no shader upstream of {}", self.name, stage),
        }
    }

    // ===== FALLBACK SHADERS =====

    /// Generate a vertex shader that only writes `gl_Position`
    ///
    /// With `transform_position` the position goes through the model view
    /// projection matrix of `config`, otherwise it is written untouched.
    /// The shader is only stored once generated.
    ///
    /// # Errors
    ///
    /// - `Error::ShaderAlreadyInitialized` if the program has a vertex shader
    /// - any generation error
    pub fn generate_fallback_vertex_shader(
        &mut self,
        config: GeneratorConfig,
        transform_position: bool,
    ) -> Result<()> {
        ensure_free(&self.name, &self.vertex)?;

        let suffix = if transform_position {
            "FallbackMVPVertexShader"
        } else {
            "FallbackVertexShader"
        };
        let mut shader =
            self.create_shader(format!("{}{}", self.name, suffix), VertexStage::default());

        let mut generator = ShaderGenerator::new(&mut shader, config);
        generator.set_extension_behavior(SEPARATE_SHADER_OBJECTS, ExtensionBehavior::Enable);
        generator.declare(InputAttribute::new(VertexAttributeType::Position))?;
        if transform_position {
            generator.request_synthesis(
                ShaderVariable::PositionScreenSpace,
                VariableScope::ToNextStage,
            )?;
        } else {
            let position = format!("gl_Position = vec4({}, 1.0);", attribute::POSITION);
            generator.add_output_instruction(position);
        }
        generator.generate_source_code()?;

        crate::saphir_info!(SOURCE, "Program '{}' uses fallback {} '{}'",
            self.name, ShaderStage::Vertex, shader.name());

        install(&self.name, &mut self.vertex, shader).map(|_| ())
    }

    /// Generate a fragment shader writing a flat magenta color
    ///
    /// Inputs are connected from the closest upstream shader. The shader is
    /// only stored once generated.
    ///
    /// # Errors
    ///
    /// - `Error::ShaderAlreadyInitialized` if the program has a fragment shader
    /// - `Error::ShaderNotInitialized` without any upstream shader
    /// - any wiring or generation error
    pub fn generate_fallback_fragment_shader(&mut self) -> Result<()> {
        ensure_free(&self.name, &self.fragment)?;

        let context = self.upstream_context(ShaderStage::Fragment)?;
        let mut shader = self.create_shader(
            format!("{}FallbackFragmentShader", self.name),
            FragmentStage::default(),
        );
        shader.connect_from_previous_shader(&context)?;

        let mut generator = ShaderGenerator::new(&mut shader, GeneratorConfig::default());
        generator.set_extension_behavior(SEPARATE_SHADER_OBJECTS, ExtensionBehavior::Enable);
        generator.declare_default_output_fragment()?;
        generator.add_output_instruction(format!(
            "{} = {};",
            ShaderVariable::OutputFragment.name(),
            FALLBACK_COLOR
        ));
        generator.generate_source_code()?;

        crate::saphir_info!(SOURCE, "Program '{}' uses fallback {} '{}'",
            self.name, ShaderStage::Fragment, shader.name());

        install(&self.name, &mut self.fragment, shader).map(|_| ())
    }
}

fn ensure_free<S: Stage>(program: &str, slot: &Option<Shader<S>>) -> Result<()> {
    if let Some(existing) = slot {
        crate::saphir_bail!(SOURCE, Error::ShaderAlreadyInitialized,
            "Program '{}' already has {} '{}'", program, S::STAGE, existing.name());
    }

    Ok(())
}

fn install<'a, S: Stage>(
    program: &str,
    slot: &'a mut Option<Shader<S>>,
    shader: Shader<S>,
) -> Result<&'a mut Shader<S>> {
    ensure_free(program, slot)?;

    crate::saphir_debug!(SOURCE, "{} '{}' added to program '{}'",
        S::STAGE, shader.name(), program);

    Ok(slot.insert(shader))
}

fn required<'a, S: Stage>(
    program: &str,
    slot: &'a mut Option<Shader<S>>,
) -> Result<&'a mut Shader<S>> {
    match slot {
        Some(shader) => Ok(shader),
        None => crate::saphir_bail!(SOURCE, Error::ShaderNotInitialized,
            "Program '{}' has no {}", program, S::STAGE),
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
