// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Bizhelper integration tests.
//!
//! Provides in-memory implementations of the collaborator traits for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MockRepository`] - In-memory message store with failure injection
//! - [`MockDelivery`] - Recording delivery channel
//! - [`MockBackend`] - Scripted backend link

pub mod mock_backend;
pub mod mock_delivery;
pub mod mock_repository;

pub use mock_backend::MockBackend;
pub use mock_delivery::{MockDelivery, SentMessage};
pub use mock_repository::MockRepository;
