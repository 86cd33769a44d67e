// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod input_blocking;

pub use animated_spinner::AnimatedSpinner;
pub use input_blocking::{input_blocking, InputBlocking};
