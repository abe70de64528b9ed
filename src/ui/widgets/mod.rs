// SPDX-License-Identifier: MPL-2.0
pub mod animated_icon;

pub use animated_icon::AnimatedIcon;
