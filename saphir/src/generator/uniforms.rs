//! Standard blocks shared by every generated program
//!
//! - `ViewUniformBlock ubView` (per view set): camera matrices
//! - `ModelUniformBlock ubModel` (per model set): object matrices
//! - `MaterialUniformBlock ubMaterial` (per model layer set): material
//!   properties, members given by the material code
//! - `MatricesPushConstant pcMatrices`: model-view-projection matrix of
//!   non instanced draws

use crate::declaration::{Member, PushConstantBlock, UniformBlock};
use crate::keys::uniform::*;
use crate::keys::VariableType;

pub fn view_uniform_block(set: u32) -> UniformBlock {
    UniformBlock::new(set, 0, VIEW_BLOCK)
        .with_instance_name(VIEW_INSTANCE)
        .with_member(Member::new(VariableType::Matrix4, PROJECTION_MATRIX))
        .with_member(Member::new(VariableType::Matrix4, VIEW_MATRIX))
        .with_member(Member::new(VariableType::Matrix4, VIEW_PROJECTION_MATRIX))
        .with_member(Member::new(VariableType::FloatVector4, POSITION_WORLD_SPACE))
        .with_member(Member::new(VariableType::FloatVector4, VIEW_PROPERTIES))
}

pub fn model_uniform_block(set: u32) -> UniformBlock {
    UniformBlock::new(set, 0, MODEL_BLOCK)
        .with_instance_name(MODEL_INSTANCE)
        .with_member(Member::new(VariableType::Matrix4, MODEL_MATRIX))
        .with_member(Member::new(VariableType::Matrix4, MODEL_VIEW_MATRIX))
        .with_member(Member::new(VariableType::Matrix3, NORMAL_MODEL_MATRIX))
        .with_member(Member::new(VariableType::Matrix3, NORMAL_MATRIX))
}

/// Material block without members; the material adds its own
pub fn material_uniform_block(set: u32) -> UniformBlock {
    UniformBlock::new(set, 0, MATERIAL_BLOCK).with_instance_name(MATERIAL_INSTANCE)
}

pub fn matrices_push_constant_block() -> PushConstantBlock {
    PushConstantBlock::new(MATRICES_PUSH_CONSTANT)
        .with_instance_name(MATRICES_INSTANCE)
        .with_member(Member::new(VariableType::Matrix4, MODEL_VIEW_PROJECTION_MATRIX))
}

/// `ubView.<component>`
pub fn view_uniform(component: &str) -> String {
    format!("{}.{}", VIEW_INSTANCE, component)
}

/// `ubModel.<component>`
pub fn model_uniform(component: &str) -> String {
    format!("{}.{}", MODEL_INSTANCE, component)
}

/// `ubMaterial.<component>`
pub fn material_uniform(component: &str) -> String {
    format!("{}.{}", MATERIAL_INSTANCE, component)
}

/// `pcMatrices.<component>`
pub fn push_constant_matrix(component: &str) -> String {
    format!("{}.{}", MATRICES_INSTANCE, component)
}
