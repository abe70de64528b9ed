// SPDX-License-Identifier: MPL-2.0
//! Tab selection state and its reflection onto animation handles.
//!
//! - [`descriptor`] - The fixed set of icons shown in the bar
//! - [`Selection`] - Which tab is active, if any
//! - [`HandleRegistry`] - Non-owning icon-to-handle mapping
//! - [`reconciler`] - Selection changes, startup forcing and periodic drift correction
//!
//! Nothing in this module depends on the GUI toolkit; the
//! [`tab_bar`](crate::ui::tab_bar) component wires it to Iced.

pub mod descriptor;
pub mod reconciler;
mod registry;
mod selection;

pub use descriptor::{default_icons, Glyph, IconDescriptor, IconId};
pub use reconciler::{DeferredForce, DriftReport, Tuning};
pub use registry::HandleRegistry;
pub use selection::Selection;
