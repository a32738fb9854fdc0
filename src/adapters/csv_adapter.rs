//! CSV file bid source adapter.

use crate::domain::bid::Bid;
use crate::domain::error::BidIndexError;
use crate::domain::money::parse_currency;
use crate::ports::data_port::BidSource;
use std::fs;
use std::path::PathBuf;

/// Column positions of the four fields consumed from the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: usize,
    pub id: usize,
    pub amount: usize,
    pub fund: usize,
}

impl Default for ColumnMap {
    /// Layout of the eBid monthly sales export.
    fn default() -> Self {
        ColumnMap {
            title: 0,
            id: 1,
            amount: 4,
            fund: 8,
        }
    }
}

#[derive(Debug)]
pub struct CsvBidSource {
    path: PathBuf,
    columns: ColumnMap,
    currency_symbol: char,
}

impl CsvBidSource {
    pub fn new(path: PathBuf, columns: ColumnMap, currency_symbol: char) -> Self {
        Self {
            path,
            columns,
            currency_symbol,
        }
    }
}

impl BidSource for CsvBidSource {
    fn load_bids(&self) -> Result<Vec<Bid>, BidIndexError> {
        let content = fs::read_to_string(&self.path).map_err(|e| BidIndexError::Source {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());

        let headers = rdr.headers().map_err(|e| BidIndexError::Source {
            reason: format!("CSV header error: {}", e),
        })?;
        eprintln!("{}", headers.iter().collect::<Vec<_>>().join(" | "));

        let mut bids = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| BidIndexError::Source {
                reason: format!("CSV parse error: {}", e),
            })?;

            // First data row is row 1; the header is not counted.
            let row = i + 1;
            let field = |column: usize| -> Result<String, BidIndexError> {
                record
                    .get(column)
                    .map(str::to_string)
                    .ok_or(BidIndexError::MissingColumn { column, row })
            };

            let amount = parse_currency(&field(self.columns.amount)?, self.currency_symbol);
            bids.push(Bid {
                id: field(self.columns.id)?,
                title: field(self.columns.title)?,
                fund: field(self.columns.fund)?,
                amount,
            });
        }

        Ok(bids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tempfile::TempDir;

    const EXPORT: &str = "\
ArticleTitle,ArticleID,Department,CloseDate,WinningBid,CCFee,FeePct,AuctionFee,Fund
Mahogany Writing Desk,98223,Surplus,12/9/2016,$225.00,$7.43,3.3%,$5.00,Enterprise
A Bedroom Suite,97986,Surplus,12/9/2016,$177.50,$5.86,3.3%,$5.00,General Fund
";

    fn write_export(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sales.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_bids_maps_default_columns() {
        let (_dir, path) = write_export(EXPORT);
        let source = CsvBidSource::new(path, ColumnMap::default(), '$');

        let bids = source.load_bids().unwrap();
        assert_eq!(bids.len(), 2);
        assert_eq!(bids[0].id, "98223");
        assert_eq!(bids[0].title, "Mahogany Writing Desk");
        assert_eq!(bids[0].fund, "Enterprise");
        assert_relative_eq!(bids[0].amount, 225.0);
        assert_eq!(bids[1].fund, "General Fund");
        assert_relative_eq!(bids[1].amount, 177.5);
    }

    #[test]
    fn load_bids_with_custom_columns() {
        let (_dir, path) = write_export(
            "id,title,amount,fund\n501,Office Chair,$12.00,Capital\n",
        );
        let columns = ColumnMap {
            title: 1,
            id: 0,
            amount: 2,
            fund: 3,
        };
        let source = CsvBidSource::new(path, columns, '$');

        let bids = source.load_bids().unwrap();
        assert_eq!(bids.len(), 1);
        assert_eq!(bids[0].id, "501");
        assert_eq!(bids[0].title, "Office Chair");
        assert_relative_eq!(bids[0].amount, 12.0);
    }

    #[test]
    fn unparseable_amount_defaults_to_zero() {
        let (_dir, path) = write_export(
            "title,id,x,y,amount,a,b,c,fund\nLamp,700,-,-,n/a,-,-,-,General\n",
        );
        let source = CsvBidSource::new(path, ColumnMap::default(), '$');

        let bids = source.load_bids().unwrap();
        assert_relative_eq!(bids[0].amount, 0.0);
    }

    #[test]
    fn short_row_is_rejected_with_position() {
        // Only five columns; the fund column (8) does not exist.
        let (_dir, path) = write_export(
            "title,id,x,y,amount\nLamp,700,-,-,$5.00\n",
        );
        let source = CsvBidSource::new(path, ColumnMap::default(), '$');

        let err = source.load_bids().unwrap_err();
        assert!(matches!(
            err,
            BidIndexError::MissingColumn { column: 8, row: 1 }
        ));
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let source = CsvBidSource::new(
            PathBuf::from("/nonexistent/sales.csv"),
            ColumnMap::default(),
            '$',
        );
        let err = source.load_bids().unwrap_err();
        assert!(matches!(err, BidIndexError::Source { .. }));
    }

    #[test]
    fn empty_export_yields_no_bids() {
        let (_dir, path) = write_export(
            "ArticleTitle,ArticleID,Department,CloseDate,WinningBid,CCFee,FeePct,AuctionFee,Fund\n",
        );
        let source = CsvBidSource::new(path, ColumnMap::default(), '$');
        assert!(source.load_bids().unwrap().is_empty());
    }
}
