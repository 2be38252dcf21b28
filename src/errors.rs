use schema::{Category, Dataset};

/// Failure to read or decode one dataset document.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {dataset} dataset: {source}")]
    Io {
        dataset: Dataset,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {dataset} dataset: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
    #[error("no {dataset} dataset is available")]
    Missing { dataset: Dataset },
}

/// The only two outcomes a lookup can fail with.
///
/// `NotFound` is a normal answer about the user's query. `DataUnavailable` hides its
/// cause from the caller; the engine logs the underlying [`DataError`] before returning it.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{}", not_found_message(*category, key))]
    NotFound { category: Category, key: String },
    #[error("Sorry, I couldn't fetch the {} data.", category.data_label())]
    DataUnavailable {
        category: Category,
        #[source]
        source: DataError,
    },
}

impl LookupError {
    pub fn not_found(category: Category, key: &str) -> Self {
        LookupError::NotFound {
            category,
            key: key.to_string(),
        }
    }
}

fn not_found_message(category: Category, key: &str) -> String {
    match category {
        Category::EggMoves | Category::Locations | Category::LearnableMoves => {
            format!("No {} data found for {}.", category.label(), key)
        }
        _ => format!(
            "{} '{}' not found. Please check the name and try again.",
            category.label(),
            key
        ),
    }
}

/// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid channel id '{0}'")]
    InvalidChannel(String),
}

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using LookupError
pub type LookupResult<T> = Result<T, LookupError>;
