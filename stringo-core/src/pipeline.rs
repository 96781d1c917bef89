// stringo-core/src/pipeline.rs
//! A stored transform pipeline.
//!
//! [`Pipeline`] captures the mode, the flags and the length limit of a
//! transform so it can be built once (typically from a configuration recipe)
//! and replayed over many inputs.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::engines::transform_engine::{transform, transform_serially, TransformFlag};

/// How the flags of a [`Pipeline`] are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// All flags are merged and applied in the engine's fixed priority order.
    #[default]
    Combined,
    /// Steps are applied in the stored order.
    Serial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    mode: PipelineMode,
    steps: Vec<TransformFlag>,
    max_len: usize,
}

impl Pipeline {
    /// Flag-mode pipeline.
    pub fn combined(flags: TransformFlag, max_len: usize) -> Self {
        Self {
            mode: PipelineMode::Combined,
            steps: vec![flags],
            max_len,
        }
    }

    /// Serial-mode pipeline.
    pub fn serial(steps: Vec<TransformFlag>, max_len: usize) -> Self {
        Self {
            mode: PipelineMode::Serial,
            steps,
            max_len,
        }
    }

    /// Builds a pipeline of the given mode. In combined mode the steps are
    /// unioned into a single flag set.
    pub fn from_steps(mode: PipelineMode, steps: &[TransformFlag], max_len: usize) -> Self {
        match mode {
            PipelineMode::Combined => {
                let flags = steps.iter().fold(TransformFlag::empty(), |acc, f| acc | *f);
                Self::combined(flags, max_len)
            }
            PipelineMode::Serial => Self::serial(steps.to_vec(), max_len),
        }
    }

    pub fn mode(&self) -> PipelineMode {
        self.mode
    }

    pub fn steps(&self) -> &[TransformFlag] {
        &self.steps
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Runs the pipeline over `input`.
    pub fn apply(&self, input: &str) -> String {
        match self.mode {
            PipelineMode::Combined => {
                let flags = self.steps.first().copied().unwrap_or_else(TransformFlag::empty);
                transform(input, self.max_len, flags)
            }
            PipelineMode::Serial => transform_serially(input, self.max_len, &self.steps),
        }
    }
}
