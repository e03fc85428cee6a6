//! Loading and summarising the wine quality measurements.

use crate::ReportError;
use std::path::Path;
use std::str::FromStr;

/// One row of the wine quality CSV.
///
/// Field names follow the dataset's headers (semicolon-delimited, spaces in
/// the header names). `quality` is an integer score in the data but is kept
/// as `f64` so every column feeds the same statistics and scatter paths.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct WineRecord {
    #[serde(rename = "fixed acidity")]
    pub fixed_acidity: f64,
    #[serde(rename = "volatile acidity")]
    pub volatile_acidity: f64,
    #[serde(rename = "citric acid")]
    pub citric_acid: f64,
    #[serde(rename = "residual sugar")]
    pub residual_sugar: f64,
    pub chlorides: f64,
    #[serde(rename = "free sulfur dioxide")]
    pub free_sulfur_dioxide: f64,
    #[serde(rename = "total sulfur dioxide")]
    pub total_sulfur_dioxide: f64,
    pub density: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub sulphates: f64,
    pub alcohol: f64,
    pub quality: f64,
}

/// A column of the wine quality schema, usable as a scatter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FixedAcidity,
    VolatileAcidity,
    CitricAcid,
    ResidualSugar,
    Chlorides,
    FreeSulfurDioxide,
    TotalSulfurDioxide,
    Density,
    Ph,
    Sulphates,
    Alcohol,
    Quality,
}

impl Column {
    /// Every column, in CSV header order.
    pub const ALL: [Column; 12] = [
        Column::FixedAcidity,
        Column::VolatileAcidity,
        Column::CitricAcid,
        Column::ResidualSugar,
        Column::Chlorides,
        Column::FreeSulfurDioxide,
        Column::TotalSulfurDioxide,
        Column::Density,
        Column::Ph,
        Column::Sulphates,
        Column::Alcohol,
        Column::Quality,
    ];

    /// The column name exactly as it appears in the CSV header.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Column::FixedAcidity => "fixed acidity",
            Column::VolatileAcidity => "volatile acidity",
            Column::CitricAcid => "citric acid",
            Column::ResidualSugar => "residual sugar",
            Column::Chlorides => "chlorides",
            Column::FreeSulfurDioxide => "free sulfur dioxide",
            Column::TotalSulfurDioxide => "total sulfur dioxide",
            Column::Density => "density",
            Column::Ph => "pH",
            Column::Sulphates => "sulphates",
            Column::Alcohol => "alcohol",
            Column::Quality => "quality",
        }
    }

    fn value(&self, record: &WineRecord) -> f64 {
        match self {
            Column::FixedAcidity => record.fixed_acidity,
            Column::VolatileAcidity => record.volatile_acidity,
            Column::CitricAcid => record.citric_acid,
            Column::ResidualSugar => record.residual_sugar,
            Column::Chlorides => record.chlorides,
            Column::FreeSulfurDioxide => record.free_sulfur_dioxide,
            Column::TotalSulfurDioxide => record.total_sulfur_dioxide,
            Column::Density => record.density,
            Column::Ph => record.ph,
            Column::Sulphates => record.sulphates,
            Column::Alcohol => record.alcohol,
            Column::Quality => record.quality,
        }
    }
}

impl FromStr for Column {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| ReportError::UnknownColumn(s.to_owned()))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics for one column over the loaded records.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0.0 below two records.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Loads the wine quality CSV at `path`.
///
/// The file is expected to be semicolon-delimited with the dataset's header
/// row. Rows are read eagerly; the first bad row fails the load with its
/// line number.
///
/// # Errors
///
/// [`ReportError::Open`] if the file cannot be opened, [`ReportError::Parse`]
/// for the first row that does not deserialize.
pub fn load(path: &Path) -> Result<Vec<WineRecord>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(ReportError::Open)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        // Data starts on line 2, after the header.
        let record: WineRecord = row.map_err(|source| ReportError::Parse {
            row: index + 2,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Computes summary statistics for every column, in CSV header order.
///
/// An empty record set yields summaries with `count == 0` and zeroed
/// statistics rather than NaNs.
#[must_use]
pub fn summarize(records: &[WineRecord]) -> Vec<ColumnSummary> {
    Column::ALL
        .into_iter()
        .map(|column| summarize_column(records, column))
        .collect()
}

fn summarize_column(records: &[WineRecord], column: Column) -> ColumnSummary {
    let count = records.len();
    if count == 0 {
        return ColumnSummary {
            column,
            count,
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let value = column.value(record);
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }
    let mean = sum / count as f64;

    let std_dev = if count > 1 {
        let sum_sq: f64 = records
            .iter()
            .map(|record| {
                let diff = column.value(record) - mean;
                diff * diff
            })
            .sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    ColumnSummary {
        column,
        count,
        mean,
        std_dev,
        min,
        max,
    }
}

/// Extracts the point pairs for a scatter plot of `y` against `x`,
/// in record order.
#[must_use]
pub fn scatter(records: &[WineRecord], x: Column, y: Column) -> Vec<(f64, f64)> {
    records
        .iter()
        .map(|record| (x.value(record), y.value(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportError;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "fixed acidity;volatile acidity;citric acid;residual sugar;chlorides;free sulfur dioxide;total sulfur dioxide;density;pH;sulphates;alcohol;quality";

    /// Helper to write a CSV fixture and return its path.
    fn write_fixture(temp: &TempDir, rows: &[&str]) -> std::path::PathBuf {
        let path = temp.path().join("winequality.csv");
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    #[test]
    fn test_load_parses_rows() {
        let temp = TempDir::new().unwrap();
        let path = write_fixture(
            &temp,
            &[
                "7.4;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5",
                "7.8;0.88;0.00;2.6;0.098;25;67;0.9968;3.20;0.68;9.8;5",
            ],
        );

        let records = load(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fixed_acidity, 7.4);
        assert_eq!(records[0].ph, 3.51);
        assert_eq!(records[1].alcohol, 9.8);
        assert_eq!(records[1].quality, 5.0);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("nowhere.csv")).expect_err("should fail to open");
        assert!(matches!(err, ReportError::Open(_)));
    }

    #[test]
    fn test_load_reports_bad_row_with_line_number() {
        let temp = TempDir::new().unwrap();
        let path = write_fixture(
            &temp,
            &[
                "7.4;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5",
                "7.8;not-a-number;0.00;2.6;0.098;25;67;0.9968;3.20;0.68;9.8;5",
            ],
        );

        let err = load(&path).expect_err("second row is malformed");
        assert!(matches!(err, ReportError::Parse { row: 3, .. }));
    }

    #[test]
    fn test_summarize_statistics() {
        let temp = TempDir::new().unwrap();
        let path = write_fixture(
            &temp,
            &[
                "7.0;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.0;5",
                "8.0;0.88;0.00;2.6;0.098;25;67;0.9968;3.20;0.68;10.0;6",
                "9.0;0.76;0.04;2.3;0.092;15;54;0.9970;3.26;0.65;11.0;7",
            ],
        );
        let records = load(&path).unwrap();

        let summaries = summarize(&records);
        assert_eq!(summaries.len(), Column::ALL.len());

        let alcohol = summaries
            .iter()
            .find(|s| s.column == Column::Alcohol)
            .unwrap();
        assert_eq!(alcohol.count, 3);
        assert!((alcohol.mean - 10.0).abs() < 1e-9);
        assert!((alcohol.std_dev - 1.0).abs() < 1e-9);
        assert_eq!(alcohol.min, 9.0);
        assert_eq!(alcohol.max, 11.0);

        let quality = summaries
            .iter()
            .find(|s| s.column == Column::Quality)
            .unwrap();
        assert!((quality.mean - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_empty_records() {
        let summaries = summarize(&[]);
        assert_eq!(summaries.len(), Column::ALL.len());
        assert!(summaries.iter().all(|s| s.count == 0 && s.mean == 0.0));
    }

    #[test]
    fn test_scatter_pairs_in_record_order() {
        let temp = TempDir::new().unwrap();
        let path = write_fixture(
            &temp,
            &[
                "7.0;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.0;5",
                "8.0;0.88;0.00;2.6;0.098;25;67;0.9968;3.20;0.68;10.0;6",
            ],
        );
        let records = load(&path).unwrap();

        let points = scatter(&records, Column::Alcohol, Column::Quality);
        assert_eq!(points, vec![(9.0, 5.0), (10.0, 6.0)]);
    }

    #[test]
    fn test_column_from_str_uses_header_names() {
        assert_eq!("pH".parse::<Column>().unwrap(), Column::Ph);
        assert_eq!(
            "fixed acidity".parse::<Column>().unwrap(),
            Column::FixedAcidity
        );

        let err = "colour".parse::<Column>().expect_err("not a column");
        assert!(matches!(err, ReportError::UnknownColumn(name) if name == "colour"));
    }
}
