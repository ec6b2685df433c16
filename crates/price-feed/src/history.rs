use crate::error::FeedError;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Monthly closes read from a text file, oldest first.
///
/// One decimal price per line; blank lines and `#` comments are ignored.
/// The leading `skip` entries are dropped so a scenario can start part-way
/// into the recorded history. The feed is finite and the simulator stops
/// early when it runs out.
#[derive(Debug)]
pub struct HistoryPrices {
    prices: std::vec::IntoIter<Decimal>,
}

impl HistoryPrices {
    pub fn from_file(path: &Path, skip: usize) -> Result<Self, FeedError> {
        let file = File::open(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut prices = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| FeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let price = Decimal::from_str(trimmed).map_err(|_| FeedError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                value: trimmed.to_string(),
            })?;
            prices.push(price);
        }

        tracing::debug!(
            loaded = prices.len(),
            skip,
            path = %path.display(),
            "loaded price history"
        );
        let prices: Vec<Decimal> = prices.into_iter().skip(skip).collect();
        Ok(Self {
            prices: prices.into_iter(),
        })
    }
}

impl Iterator for HistoryPrices {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        self.prices.next()
    }
}
