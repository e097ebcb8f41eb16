//! Atari environment and network descriptions.
use anyhow::{bail, Result};
use bve_core::{EnvironmentSpec, NetworkFactory};
use serde::{Deserialize, Serialize};

/// Describes the Atari environments of an experiment.
///
/// The emulator lives in the runner the experiment is handed to; this value
/// only names the level and its wrappers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AtariEnvFactory {
    pub level: String,
    pub sticky_actions: bool,
    pub zero_discount_on_life_loss: bool,
}

impl AtariEnvFactory {
    /// Sticky actions on, zero discount on life loss off.
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            sticky_actions: true,
            zero_discount_on_life_loss: false,
        }
    }
}

/// Convolution layer of the Q-network torso.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvLayer {
    pub out_channels: usize,
    pub kernel_size: usize,
    pub stride: usize,
}

/// Layers of the DQN Atari network for a given environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DqnAtariNetwork {
    pub input_shape: Vec<usize>,
    pub conv_layers: Vec<ConvLayer>,
    pub hidden_units: usize,
    pub num_actions: usize,
}

/// Builds [`DqnAtariNetwork`]s: three convolutions, one hidden layer, one
/// output per action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DqnAtariNetworkFactory {
    pub n_stack: usize,
    pub conv_layers: Vec<ConvLayer>,
    pub hidden_units: usize,
}

impl Default for DqnAtariNetworkFactory {
    fn default() -> Self {
        let conv = |out_channels, kernel_size, stride| ConvLayer {
            out_channels,
            kernel_size,
            stride,
        };
        Self {
            n_stack: 4,
            conv_layers: vec![conv(32, 8, 4), conv(64, 4, 2), conv(64, 3, 1)],
            hidden_units: 512,
        }
    }
}

impl NetworkFactory for DqnAtariNetworkFactory {
    type Networks = DqnAtariNetwork;

    fn make(&self, spec: &EnvironmentSpec) -> Result<DqnAtariNetwork> {
        if spec.num_actions == 0 {
            bail!("Environment has no action");
        }
        let mut input_shape = vec![self.n_stack];
        input_shape.extend(spec.observation_shape.iter().rev().take(2).rev());
        Ok(DqnAtariNetwork {
            input_shape,
            conv_layers: self.conv_layers.clone(),
            hidden_units: self.hidden_units,
            num_actions: spec.num_actions,
        })
    }
}
