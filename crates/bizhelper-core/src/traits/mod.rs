// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions.
//!
//! The gateway and the backend only talk to each other, to storage and to
//! Telegram through these traits. All of them use `#[async_trait]` so they
//! can be held as `Arc<dyn Trait>`.

pub mod backend;
pub mod delivery;
pub mod repository;

pub use backend::BackendLink;
pub use delivery::DeliveryChannel;
pub use repository::MessageRepository;
