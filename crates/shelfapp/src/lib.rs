//! # shelfapp Architecture
//!
//! shelfapp is the **UI-agnostic core** of a personal book tracker. Users put
//! books on one of four predefined shelves (to read, reading, read, did not
//! finish) and optionally on custom shelves, record dates, ratings and reviews,
//! set a yearly reading goal and look at statistics about what they read.
//!
//! Two pieces carry the real logic:
//!
//! - the **book form workflow** ([`form`]): which fields are visible, which are
//!   validated and which get cleared all depend on the chosen shelf;
//! - the **statistics engine** ([`stats`]): metrics derived from the read shelf.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (not part of this crate)                                │
//! │  - Renders FormLayout, CmdMessage, StatisticsReport         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (shelf names → categories)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)        Form (form/)          │
//! │  - save / delete / list / goal        - state machine       │
//! │  - Returns Result<CmdResult>          - visibility, checks  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - FileStore (JSON), InMemoryStore (testing)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing here writes to stdout or stderr. Diagnostics go through the [`log`]
//! facade; the embedding application picks the logger. "Today" is always a
//! parameter so date rules and yearly statistics are deterministic in tests.
//!
//! ## Testing Strategy
//!
//! 1. **Form and stats** (`form/`, `stats/`): pure unit tests.
//! 2. **Commands** (`commands/*.rs`): behaviour against `InMemoryStore`,
//!    including write failures and broken shelf data.
//! 3. **API** (`api.rs`): dispatch and input normalization.
//! 4. **Integration** (`tests/`): whole workflows through [`api::ShelfApi`],
//!    and the JSON store on a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: facade
//! - [`commands`]: business operations
//! - [`config`]: layered configuration
//! - [`error`]: error type
//! - [`form`]: book form and custom shelf form
//! - [`init`]: bootstrapping over the file store
//! - [`model`]: books, shelves, goals
//! - [`stats`]: statistics
//! - [`store`]: storage abstraction and implementations

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod init;
pub mod model;
pub mod stats;
pub mod store;
