// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens & Surfaces
//!
//! - [`header`] - Top bar with the add-image action
//! - [`gallery_grid`] + [`card`] - Paginated card grid with load-more
//! - [`image_modal`] - Full-size preview modal
//! - [`upload_form`] - Upload form modal with validation
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable views (loading, list error state)
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback

pub mod card;
pub mod components;
pub mod design_tokens;
pub mod gallery_grid;
pub mod header;
pub mod image_modal;
pub mod notifications;
pub mod styles;
pub mod upload_form;
pub mod widgets;
