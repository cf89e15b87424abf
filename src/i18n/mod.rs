// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! Locale bundles live in `assets/i18n/*.ftl` and are embedded into the
//! binary at compile time. The active locale is resolved from the CLI,
//! the config file, and the OS locale, in that order.

pub mod fluent;

pub use fluent::I18n;
