//! Synthesis of requested vertex shader variables
//!
//! Each request is dispatched to a routine that declares the attributes
//! and blocks it reads, pulls the preparations it needs and emits either a
//! top instruction (`Local`, `Both`) or an output instruction
//! (`ToNextStage`). Exported variables get a smooth `StageOutput` whose
//! location and type come from `ShaderVariable`.

use super::config::GeneratorConfig;
use super::preparation::{PreparationKey, PreparationSet};
use super::request::{RequestList, SynthesisRequest, VariableScope};
use super::uniforms::{
    matrices_push_constant_block, model_uniform, model_uniform_block, push_constant_matrix,
    view_uniform, view_uniform_block,
};
use crate::declaration::{Declaration, InputAttribute, StageOutput};
use crate::error::{Error, Result};
use crate::keys::uniform::{
    MODEL_MATRIX, MODEL_VIEW_MATRIX, MODEL_VIEW_PROJECTION_MATRIX, NORMAL_MATRIX,
    NORMAL_MODEL_MATRIX, VIEW_MATRIX, VIEW_PROJECTION_MATRIX,
};
use crate::keys::{Interpolation, ShaderVariable, VertexAttributeType};
use crate::shader::{
    Accepts, ComputeStage, FragmentStage, GeometryStage, Shader, Stage, TesselationControlStage,
    TesselationEvaluationStage, VertexStage,
};

const SOURCE: &str = "saphir::ShaderGenerator";

/// Lines produced by synthesis, placed around the caller's instructions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesizedCode {
    pub(crate) top: Vec<String>,
    pub(crate) output: Vec<String>,
}

/// Stage specific synthesis, run once when a generator is finalized
///
/// Only vertex shaders synthesize variables; the other stages never hold
/// requests.
pub trait Synthesizer: Stage {
    fn synthesize(
        _shader: &mut Shader<Self>,
        _requests: &RequestList,
        _preparations: &mut PreparationSet,
        _config: &GeneratorConfig,
    ) -> Result<SynthesizedCode> {
        Ok(SynthesizedCode::default())
    }
}

impl Synthesizer for TesselationControlStage {}
impl Synthesizer for TesselationEvaluationStage {}
impl Synthesizer for GeometryStage {}
impl Synthesizer for FragmentStage {}
impl Synthesizer for ComputeStage {}

impl Synthesizer for VertexStage {
    fn synthesize(
        shader: &mut Shader<Self>,
        requests: &RequestList,
        preparations: &mut PreparationSet,
        config: &GeneratorConfig,
    ) -> Result<SynthesizedCode> {
        let mut synthesis = VertexSynthesis {
            shader,
            config,
            preparations,
            code: SynthesizedCode::default(),
        };

        for request in requests.iter() {
            synthesis.run(request)?;
        }

        Ok(synthesis.code)
    }
}

struct VertexSynthesis<'a> {
    shader: &'a mut Shader<VertexStage>,
    config: &'a GeneratorConfig,
    preparations: &'a mut PreparationSet,
    code: SynthesizedCode,
}

impl VertexSynthesis<'_> {
    fn run(&mut self, request: &SynthesisRequest) -> Result<()> {
        let scope = request.scope();

        crate::saphir_trace!(SOURCE, "Synthesizing '{}' ({:?}) for '{}'",
            request.variable(), scope, self.shader.name());

        match request.variable() {
            ShaderVariable::PositionScreenSpace => self.position_screen_space(),
            ShaderVariable::PositionWorldSpace => self.position_world_space(scope),
            ShaderVariable::GLPositionWorldSpace => self.gl_position_world_space(scope),
            ShaderVariable::PositionViewSpace => self.position_view_space(scope),
            ShaderVariable::PositionTextureSpace => self.position_texture_space(scope),
            ShaderVariable::Color => {
                self.copy_attribute(ShaderVariable::Color, VertexAttributeType::VertexColor, scope)
            }
            ShaderVariable::Primary2DTextureCoordinates => self.copy_attribute(
                ShaderVariable::Primary2DTextureCoordinates,
                VertexAttributeType::Primary2DTextureCoordinates,
                scope,
            ),
            ShaderVariable::Primary3DTextureCoordinates => self.copy_attribute(
                ShaderVariable::Primary3DTextureCoordinates,
                VertexAttributeType::Primary3DTextureCoordinates,
                scope,
            ),
            ShaderVariable::Secondary2DTextureCoordinates => self.copy_attribute(
                ShaderVariable::Secondary2DTextureCoordinates,
                VertexAttributeType::Secondary2DTextureCoordinates,
                scope,
            ),
            ShaderVariable::Secondary3DTextureCoordinates => self.copy_attribute(
                ShaderVariable::Secondary3DTextureCoordinates,
                VertexAttributeType::Secondary3DTextureCoordinates,
                scope,
            ),
            ShaderVariable::TangentWorldSpace => self.world_vector(
                ShaderVariable::TangentWorldSpace,
                VertexAttributeType::Tangent,
                scope,
            ),
            ShaderVariable::BinormalWorldSpace => self.world_vector(
                ShaderVariable::BinormalWorldSpace,
                VertexAttributeType::Binormal,
                scope,
            ),
            ShaderVariable::NormalWorldSpace => self.world_vector(
                ShaderVariable::NormalWorldSpace,
                VertexAttributeType::Normal,
                scope,
            ),
            ShaderVariable::TangentViewSpace => self.view_vector(
                ShaderVariable::TangentViewSpace,
                VertexAttributeType::Tangent,
                scope,
            ),
            ShaderVariable::BinormalViewSpace => self.view_vector(
                ShaderVariable::BinormalViewSpace,
                VertexAttributeType::Binormal,
                scope,
            ),
            ShaderVariable::NormalViewSpace => self.view_vector(
                ShaderVariable::NormalViewSpace,
                VertexAttributeType::Normal,
                scope,
            ),
            ShaderVariable::WorldTBNMatrix => self.world_tbn_matrix(scope),
            ShaderVariable::ViewTBNMatrix => self.view_tbn_matrix(scope),
            ShaderVariable::WorldToTangentMatrix => self.world_to_tangent_matrix(scope),
            variable @ (ShaderVariable::ModelViewMatrix
            | ShaderVariable::NormalMatrix
            | ShaderVariable::ModelViewProjectionMatrix
            | ShaderVariable::BillboardModelMatrix
            | ShaderVariable::OutputFragment) => {
                crate::saphir_bail!(SOURCE, Error::UnsupportedSyntheticVariable,
                    "'{}' cannot be synthesized", variable);
            }
        }
    }

    // ===== DECLARATION HELPERS =====

    fn declare<D>(&mut self, declaration: D) -> Result<()>
    where
        D: Declaration,
        VertexStage: Accepts<D>,
    {
        self.shader.declare(declaration).map(|_| ())
    }

    /// Declare a vertex attribute and return its GLSL name
    fn attribute(&mut self, attribute: VertexAttributeType) -> Result<&'static str> {
        if attribute.is_instance_attribute() && !self.config.is_instanced() {
            crate::saphir_bail!(SOURCE, Error::GenerationFailed,
                "'{}' reads per-instance attribute {:?} without instanced model matrices",
                self.shader.name(), attribute);
        }

        let declaration = InputAttribute::new(attribute);
        let name = attribute.name().unwrap_or_default();
        self.declare(declaration)?;

        Ok(name)
    }

    fn stage_output(&mut self, variable: ShaderVariable) -> Result<()> {
        let Some(location) = variable.location() else {
            crate::saphir_bail!(SOURCE, Error::GenerationFailed,
                "'{}' has no stage output location", variable);
        };

        self.declare(
            StageOutput::new(location, variable.variable_type(), variable.name())
                .with_interpolation(Interpolation::Smooth),
        )
    }

    /// Emit `variable = expression` according to the scope
    fn assign(
        &mut self,
        variable: ShaderVariable,
        scope: VariableScope,
        expression: String,
    ) -> Result<()> {
        match scope {
            VariableScope::Local => {
                self.code.top.push(format!(
                    "const {} {} = {};",
                    variable.variable_type(),
                    variable.name(),
                    expression
                ));
            }
            VariableScope::ToNextStage => {
                self.stage_output(variable)?;
                self.code.output.push(format!("{} = {};", variable.name(), expression));
            }
            VariableScope::Both => {
                self.stage_output(variable)?;
                self.code.top.push(format!("{} = {};", variable.name(), expression));
            }
        }

        Ok(())
    }

    // ===== MATRIX SOURCES =====

    fn model_matrix(&mut self) -> Result<String> {
        if !self.config.is_instanced() {
            self.declare(model_uniform_block(self.config.set_indexes.per_model))?;
            return Ok(model_uniform(MODEL_MATRIX));
        }

        if self.config.billboarding {
            self.prepare_billboard_model_matrix()?;
            return Ok(ShaderVariable::BillboardModelMatrix.name().to_string());
        }

        Ok(self.attribute(VertexAttributeType::ModelMatrixR0)?.to_string())
    }

    fn normal_model_matrix(&mut self) -> Result<String> {
        if !self.config.is_instanced() {
            self.declare(model_uniform_block(self.config.set_indexes.per_model))?;
            return Ok(model_uniform(NORMAL_MODEL_MATRIX));
        }

        Ok(self.attribute(VertexAttributeType::NormalModelMatrixR0)?.to_string())
    }

    fn model_view_matrix(&mut self) -> Result<String> {
        if !self.config.is_instanced() {
            self.declare(model_uniform_block(self.config.set_indexes.per_model))?;
            return Ok(model_uniform(MODEL_VIEW_MATRIX));
        }

        self.prepare_model_view_matrix()?;
        Ok(ShaderVariable::ModelViewMatrix.name().to_string())
    }

    fn normal_matrix(&mut self) -> Result<String> {
        if !self.config.is_instanced() {
            self.declare(model_uniform_block(self.config.set_indexes.per_model))?;
            return Ok(model_uniform(NORMAL_MATRIX));
        }

        self.prepare_normal_matrix()?;
        Ok(ShaderVariable::NormalMatrix.name().to_string())
    }

    fn model_view_projection_matrix(&mut self) -> Result<String> {
        if !self.config.is_instanced() {
            self.declare(matrices_push_constant_block())?;
            return Ok(push_constant_matrix(MODEL_VIEW_PROJECTION_MATRIX));
        }

        self.prepare_model_view_projection_matrix()?;
        Ok(ShaderVariable::ModelViewProjectionMatrix.name().to_string())
    }

    // ===== PREPARATIONS =====

    fn prepare_billboard_model_matrix(&mut self) -> Result<()> {
        if self.preparations.contains(PreparationKey::BillboardModelMatrix) {
            return Ok(());
        }

        self.declare(view_uniform_block(self.config.set_indexes.per_view))?;
        let model = self.attribute(VertexAttributeType::ModelMatrixR0)?;
        let view = view_uniform(VIEW_MATRIX);

        // Rotation part of the inverse view (transposed), translation of the model
        let columns = (0..3)
            .map(|r| format!("vec4({v}[0][{r}], {v}[1][{r}], {v}[2][{r}], 0.0)", v = view))
            .collect::<Vec<_>>()
            .join(", ");

        self.preparations.insert(
            PreparationKey::BillboardModelMatrix,
            format!(
                "const mat4 {} = mat4({}, {}[3]);",
                ShaderVariable::BillboardModelMatrix.name(),
                columns,
                model
            ),
        );

        Ok(())
    }

    fn prepare_model_view_matrix(&mut self) -> Result<()> {
        if self.preparations.contains(PreparationKey::ModelViewMatrix) {
            return Ok(());
        }

        self.declare(view_uniform_block(self.config.set_indexes.per_view))?;
        let model = self.model_matrix()?;

        self.preparations.insert(
            PreparationKey::ModelViewMatrix,
            format!(
                "const mat4 {} = {} * {};",
                ShaderVariable::ModelViewMatrix.name(),
                view_uniform(VIEW_MATRIX),
                model
            ),
        );

        Ok(())
    }

    fn prepare_normal_matrix(&mut self) -> Result<()> {
        if self.preparations.contains(PreparationKey::NormalMatrix) {
            return Ok(());
        }

        self.prepare_model_view_matrix()?;

        self.preparations.insert(
            PreparationKey::NormalMatrix,
            format!(
                "const mat3 {} = transpose(inverse(mat3({})));",
                ShaderVariable::NormalMatrix.name(),
                ShaderVariable::ModelViewMatrix.name()
            ),
        );

        Ok(())
    }

    fn prepare_model_view_projection_matrix(&mut self) -> Result<()> {
        if self.preparations.contains(PreparationKey::ModelViewProjectionMatrix) {
            return Ok(());
        }

        self.declare(view_uniform_block(self.config.set_indexes.per_view))?;
        let model = self.model_matrix()?;

        self.preparations.insert(
            PreparationKey::ModelViewProjectionMatrix,
            format!(
                "const mat4 {} = {} * {};",
                ShaderVariable::ModelViewProjectionMatrix.name(),
                view_uniform(VIEW_PROJECTION_MATRIX),
                model
            ),
        );

        Ok(())
    }

    // ===== ROUTINES =====

    fn position_screen_space(&mut self) -> Result<()> {
        let position = self.attribute(VertexAttributeType::Position)?;
        let matrix = self.model_view_projection_matrix()?;

        self.code
            .output
            .push(format!("gl_Position = {} * vec4({}, 1.0);", matrix, position));

        Ok(())
    }

    fn position_world_space(&mut self, scope: VariableScope) -> Result<()> {
        let position = self.attribute(VertexAttributeType::Position)?;
        let matrix = self.model_matrix()?;

        self.assign(
            ShaderVariable::PositionWorldSpace,
            scope,
            format!("{} * vec4({}, 1.0)", matrix, position),
        )
    }

    /// World space position written to `gl_Position` (cubemap and shadow passes)
    fn gl_position_world_space(&mut self, scope: VariableScope) -> Result<()> {
        let position = self.attribute(VertexAttributeType::Position)?;
        let matrix = self.model_matrix()?;
        let line = format!("gl_Position = {} * vec4({}, 1.0);", matrix, position);

        if scope.is_computed_first() {
            self.code.top.push(line);
        } else {
            self.code.output.push(line);
        }

        Ok(())
    }

    fn position_view_space(&mut self, scope: VariableScope) -> Result<()> {
        let position = self.attribute(VertexAttributeType::Position)?;
        let matrix = self.model_view_matrix()?;

        self.assign(
            ShaderVariable::PositionViewSpace,
            scope,
            format!("{} * vec4({}, 1.0)", matrix, position),
        )
    }

    /// View direction expressed in the tangent frame
    ///
    /// Reads the view space position and TBN vectors, computed earlier as
    /// prerequisites.
    fn position_texture_space(&mut self, scope: VariableScope) -> Result<()> {
        let position = ShaderVariable::PositionViewSpace.name();

        for (axis, vector) in [
            ("X", ShaderVariable::TangentViewSpace),
            ("Y", ShaderVariable::BinormalViewSpace),
            ("Z", ShaderVariable::NormalViewSpace),
        ] {
            self.code.top.push(format!(
                "const float positionTexture{} = dot(-{}.xyz, {});",
                axis,
                position,
                vector.name()
            ));
        }

        self.assign(
            ShaderVariable::PositionTextureSpace,
            scope,
            "vec4(positionTextureX, positionTextureY, positionTextureZ, 1.0)".to_string(),
        )
    }

    /// Color and texture coordinates, forwarded unchanged
    fn copy_attribute(
        &mut self,
        variable: ShaderVariable,
        attribute: VertexAttributeType,
        scope: VariableScope,
    ) -> Result<()> {
        let attribute = self.attribute(attribute)?;
        self.assign(variable, scope, attribute.to_string())
    }

    fn world_vector(
        &mut self,
        variable: ShaderVariable,
        attribute: VertexAttributeType,
        scope: VariableScope,
    ) -> Result<()> {
        let attribute = self.attribute(attribute)?;
        let matrix = self.normal_model_matrix()?;
        self.assign(variable, scope, format!("normalize({} * {})", matrix, attribute))
    }

    fn view_vector(
        &mut self,
        variable: ShaderVariable,
        attribute: VertexAttributeType,
        scope: VariableScope,
    ) -> Result<()> {
        let attribute = self.attribute(attribute)?;
        let matrix = self.normal_matrix()?;
        self.assign(variable, scope, format!("normalize({} * {})", matrix, attribute))
    }

    fn tbn_attributes(&mut self) -> Result<[(&'static str, &'static str); 3]> {
        Ok([
            ("Tangent", self.attribute(VertexAttributeType::Tangent)?),
            ("Binormal", self.attribute(VertexAttributeType::Binormal)?),
            ("Normal", self.attribute(VertexAttributeType::Normal)?),
        ])
    }

    fn world_tbn_matrix(&mut self, scope: VariableScope) -> Result<()> {
        let attributes = self.tbn_attributes()?;
        let matrix = self.model_matrix()?;

        for (axis, attribute) in attributes {
            self.code.top.push(format!(
                "const vec3 world{} = normalize(({} * vec4({}, 0.0)).xyz);",
                axis, matrix, attribute
            ));
        }

        self.assign(
            ShaderVariable::WorldTBNMatrix,
            scope,
            "mat3(worldTangent, worldBinormal, worldNormal)".to_string(),
        )
    }

    fn view_tbn_matrix(&mut self, scope: VariableScope) -> Result<()> {
        let attributes = self.tbn_attributes()?;
        let matrix = self.normal_matrix()?;

        for (axis, attribute) in attributes {
            self.code.top.push(format!(
                "const vec3 view{} = normalize({} * {});",
                axis, matrix, attribute
            ));
        }

        self.assign(
            ShaderVariable::ViewTBNMatrix,
            scope,
            "transpose(mat3(viewTangent, viewBinormal, viewNormal))".to_string(),
        )
    }

    fn world_to_tangent_matrix(&mut self, scope: VariableScope) -> Result<()> {
        let [(_, tangent), (_, binormal), (_, normal)] = self.tbn_attributes()?;
        let matrix = self.normal_model_matrix()?;

        self.assign(
            ShaderVariable::WorldToTangentMatrix,
            scope,
            format!("transpose({} * mat3({}, {}, {}))", matrix, tangent, binormal, normal),
        )
    }
}

#[cfg(test)]
#[path = "synthesis_tests.rs"]
mod tests;
