// SPDX-License-Identifier: MPL-2.0
//! Application-level plumbing: preferences and directory resolution.

pub mod config;
pub mod paths;
