use super::{Shader, ShaderStage, Stage};
use crate::error::{Error, Result};

const SOURCE: &str = "saphir::Shader";

/// Compute stage state (workgroup size)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeStage {
    local_size: [u32; 3],
}

impl Default for ComputeStage {
    fn default() -> Self {
        Self { local_size: [1, 1, 1] }
    }
}

impl ComputeStage {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { local_size: [x, y, z] }
    }

    pub fn local_size(&self) -> [u32; 3] {
        self.local_size
    }
}

impl Stage for ComputeStage {
    const STAGE: ShaderStage = ShaderStage::Compute;

    fn on_source_code_generation(&self, shader_name: &str, code: &mut String) -> Result<()> {
        let [x, y, z] = self.local_size;
        if x == 0 || y == 0 || z == 0 {
            crate::saphir_bail!(SOURCE, Error::GenerationFailed,
                "{} '{}' has an empty workgroup ({}, {}, {})", Self::STAGE, shader_name, x, y, z);
        }

        code.push_str("/* Compute workgroup */\n");
        code.push_str(&format!(
            "layout(local_size_x = {}, local_size_y = {}, local_size_z = {}) in;\n\n",
            x, y, z
        ));
        Ok(())
    }

    fn on_declaration_stats(&self, stats: &mut String) {
        let [x, y, z] = self.local_size;
        stats.push_str(&format!(" - Workgroup : {} x {} x {}\n", x, y, z));
    }
}

/// Compute shader
pub type ComputeShader = Shader<ComputeStage>;

impl Shader<ComputeStage> {
    /// Create a compute shader with its workgroup size
    pub fn with_local_size(name: impl Into<String>, x: u32, y: u32, z: u32) -> Self {
        Self::with_stage(name, ComputeStage::new(x, y, z))
    }

    pub fn local_size(&self) -> [u32; 3] {
        self.stage.local_size
    }
}
