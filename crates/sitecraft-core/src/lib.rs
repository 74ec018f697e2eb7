//! Sitecraft Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sitecraft
//! static-website scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sitecraft-cli (CLI)            │
//! │     (Resolves options, shows progress)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, Pipeline, steps)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, AssetFetcher, ArchiveReader│
//! │          ProgressReporter)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sitecraft-adapters (Infrastructure) │
//! │ (LocalFilesystem, HttpAssetFetcher, zip)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldOptions, colours, routing,     │
//! │            rendering)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitecraft_core::prelude::*;
//!
//! // 1. Validate options
//! let options = ScaffoldOptions::builder()
//!     .name("demo")
//!     .colors(["#ff0000"])
//!     .sections(["intro", "contact"])
//!     .build()?;
//!
//! // 2. Run the pipeline with injected adapters
//! let service = ScaffoldService::new(filesystem, fetcher, archive_reader);
//! let report = service.scaffold(options, ".").await?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ScaffoldReport, ScaffoldService, StepName, StepStatus,
        ports::{
            ArchiveEntry, ArchiveReader, AssetFetcher, Filesystem, NoProgress, ProgressEvent,
            ProgressReporter,
        },
    };
    pub use crate::domain::{
        AssetSources, ColorClassifier, HexColor, NamedColor, ScaffoldOptions,
        ScaffoldOptionsBuilder,
    };
    pub use crate::error::{ErrorKind, SitecraftError, SitecraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
