// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value types with no host or I/O dependencies.

pub mod playback;
