//! Discover and classify a website's legal documents.
//!
//! Given a site's root URL, a scan looks for seven kinds of legal document
//! (terms, privacy, accessibility, cookies, AI usage, refunds, copyright)
//! and reports, per kind, either a rendered reference or `"None"`.
//!
//! ```rust,ignore
//! use legal_scout::{Scanner, ScoutConfig};
//!
//! let scanner = Scanner::from_config(ScoutConfig::from_env()?)?;
//! let report = scanner.scan("example.com").await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod acquisition;
pub mod cartography;
pub mod classify;
pub mod config;
pub mod error;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod taxonomy;

pub use cartography::{Candidate, CandidateOrigin};
pub use classify::{Classification, Classifier};
pub use config::{OracleConfig, ScoutConfig, Strategy};
pub use error::{Result, ScoutError};
pub use report::{ScanMeta, ScanStatus, ScrapeReport, NOT_FOUND};
pub use scan::{normalize_target, Scanner};
pub use taxonomy::Category;
