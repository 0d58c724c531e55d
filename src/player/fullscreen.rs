// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability of the presentation surface.

use crate::error::FullscreenError;

/// Host fullscreen API, scoped to the overlay's container element.
///
/// The surface is authoritative: the controller only flips its own flag after
/// a request or exit returns `Ok`.
pub trait FullscreenSurface {
    /// Returns true if the overlay's container is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
}
