// src/lib.rs

pub mod c_api;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::config::{IrregularWords, MagnitudeTable, ReadingConfig};
pub use crate::core::engine::NumberReader;
pub use crate::core::types::{NumberInput, ParsedNumber};
pub use crate::error::{ReadingError, ReadingResult};
pub use num_bigint;

/// Reads `value` aloud with `config`, e.g. `"1,000,005"` becomes
/// "Một triệu không trăm lẻ năm đồng" under the Vietnamese defaults.
pub fn convert_number_to_words(
    value: impl Into<NumberInput>,
    config: &ReadingConfig,
) -> ReadingResult<String> {
    NumberReader::new(config.clone())?.read(value)
}

/// Installs a stderr log subscriber filtered by `DOC_SO_LOG` (default `warn`).
/// Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("DOC_SO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
