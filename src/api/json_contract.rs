use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope for persisted render frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Parses either a bare frame payload or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse frame json payload: {e}")))?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
