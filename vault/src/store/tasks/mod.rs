//! # Lifecycle Tasks
//!
//! One background task per accepted operation. Each task awaits its stage
//! delays sequentially, so a stage can never fire before the previous stage's
//! state mutation is visible, and applies mutations through the store's
//! single-writer helpers.

pub(crate) mod deposit;
pub(crate) mod transfer;
pub(crate) mod withdraw;
