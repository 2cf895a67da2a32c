//! State encoding for learning hosts that consume owned tensors.
//!
//! `GameState::observation_tensor` fills a caller buffer; this module
//! wraps it for hosts that want an allocated tensor plus its shape.

use serde::{Deserialize, Serialize};

use crate::core::board::{CELL_STATES, NUM_CELLS};
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Encoded game state as a flat tensor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    #[must_use]
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Whether the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Encodes game state into tensors from a player's perspective.
pub trait StateEncoder: Send + Sync {
    /// Encode the state from `perspective`'s point of view.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the flat action id space (the policy vector length).
    fn action_space_size(&self) -> usize;
}

/// One-hot board encoder: `(CELL_STATES, NUM_CELLS)`, channel 0 empty,
/// 1 nought, 2 cross. Perfect information, so the perspective only
/// selects whose contract is being checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneHotBoardEncoder;

impl StateEncoder for OneHotBoardEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState {
        let mut tensor = vec![0.0f32; CELL_STATES * NUM_CELLS];
        state.observation_tensor(perspective, &mut tensor);
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![CELL_STATES, NUM_CELLS]
    }

    fn action_space_size(&self) -> usize {
        NUM_CELLS + 1
    }
}
