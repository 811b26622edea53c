pub mod culture;
pub mod error;
pub mod pool;
pub mod resolver;
pub mod service;
pub mod settings;
pub mod shared;
pub mod source;
pub mod types;

pub use culture::{Culture, DEFAULT_LANGUAGE};
pub use error::{CultureError, ManifestError, TableLoadError};
pub use pool::TablePool;
pub use resolver::{MatchKind, Resolution, ResolvedLocale, fallback_chain, resolve};
pub use service::{Localization, SubscriptionId};
pub use settings::{LocalizationSettings, TableDefinition, TableManifest, TableStatus};
pub use shared::SharedLocalization;
pub use source::{TableLoad, TableSlot, TableSource};
pub use types::{LocaleTag, LocalizationTable};
