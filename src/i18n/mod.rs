// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent bundles embedded at compile time.

pub mod fluent;
