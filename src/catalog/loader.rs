use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use crate::catalog::catalog::{Catalog, CatalogError};
use crate::catalog::item::{Attributes, CatalogItem};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("Row {row}: cannot parse price {value:?}")]
    InvalidPrice { row: usize, value: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load a catalog from a headed CSV file.
///
/// Requires `category` and `price` columns (header match is
/// case-insensitive); every other column is carried through as a
/// passthrough attribute.
pub fn load_catalog_csv(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let file = File::open(path)?;
    read_catalog_csv(file)
}

pub fn read_catalog_csv<R: Read>(input: R) -> Result<Catalog, CatalogLoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let category_col = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("category"))
        .ok_or(CatalogLoadError::MissingColumn("category"))?;
    let price_col = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("price"))
        .ok_or(CatalogLoadError::MissingColumn("price"))?;

    let mut items = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;

        let category = record.get(category_col).unwrap_or("").to_string();
        let raw_price = record.get(price_col).unwrap_or("");
        let price: f64 = raw_price
            .parse()
            .map_err(|_| CatalogLoadError::InvalidPrice {
                row,
                value: raw_price.to_string(),
            })?;

        let mut attributes = Attributes::new();
        for (col, field) in record.iter().enumerate() {
            if col == category_col || col == price_col {
                continue;
            }
            let Some(name) = headers.get(col) else {
                continue;
            };
            // Integer-looking columns stay numeric; everything else is a string.
            match field.parse::<i64>() {
                Ok(n) => attributes.insert_number(name, n),
                Err(_) => attributes.insert_string(name, field),
            }
        }

        items.push(CatalogItem::with_attributes(category, price, attributes));
    }

    Ok(Catalog::new(items)?)
}
