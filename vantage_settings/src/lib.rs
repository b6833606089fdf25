// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_settings --heading-base-level=0

//! Vantage Settings: configuration and gesture policy for pan/zoom views.
//!
//! This crate holds the tunable state a gesture-driven view needs but does
//! not interpret it: the viewport and image geometry, the configured zoom
//! range, and the policy flags that decide which gestures are currently
//! allowed. It is consumed by higher layers such as `vantage_zoom` (zoom
//! bounds derivation) and by gesture controllers that classify touch input.
//!
//! The required inputs are the viewport size and the image size; everything
//! else has a usable default.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_settings::{ExitType, Settings};
//!
//! let mut settings = Settings::new();
//! settings
//!     .set_viewport(1080, 1920)
//!     .set_image(3000, 2000)
//!     .set_rotation_enabled(true)
//!     .set_exit_type(ExitType::Scroll);
//!
//! assert!(settings.is_zoom_enabled());
//! assert!(settings.is_rotation_enabled());
//! ```
//!
//! ## Nested disabling
//!
//! Gestures and bounds restrictions can be suppressed temporarily, for
//! example while an animation runs or while content is still loading. These
//! calls nest: every [`Settings::disable_gestures`] must be matched by a
//! [`Settings::enable_gestures`] before gestures come back.
//!
//! ```rust
//! use vantage_settings::Settings;
//!
//! let mut settings = Settings::new();
//! settings.disable_gestures().disable_gestures();
//! settings.enable_gestures();
//! assert!(!settings.is_gestures_enabled());
//! settings.enable_gestures();
//! assert!(settings.is_gestures_enabled());
//! ```
//!
//! ## Design notes
//!
//! - `Settings` is pure data plus validation; it performs no I/O and holds
//!   no references to views or input pipelines.
//! - Policy getters such as [`Settings::is_zoom_enabled`] fold the nested
//!   disable counters into the answer, so callers can consult a single
//!   method per decision.
//! - Setters are fluent and return `&mut Self`; the only fallible one is
//!   [`Settings::set_overzoom_factor`], which rejects factors below one.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod settings;

pub use modes::ExitType;
pub use settings::{Settings, SettingsError};
