//! Neural network integration.
//!
//! Turns game states into flat `f32` tensors for policy/value networks that
//! live outside the crate.
//!
//! ## Usage
//!
//! ```
//! use connect_five::core::PlayerId;
//! use connect_five::games::ConnectFive;
//! use connect_five::nn::{ConnectFiveEncoder, StateEncoder};
//! use connect_five::rules::RulesEngine;
//!
//! let game = ConnectFive::new();
//! let state = game.init();
//!
//! let encoded = ConnectFiveEncoder::new().encode(&state, PlayerId::new(0));
//! assert_eq!(encoded.shape, [2, 9, 9]);
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{ConnectFiveEncoder, StateEncoder};
pub use tensor::{EncodedState, ENCODED_SHAPE};
