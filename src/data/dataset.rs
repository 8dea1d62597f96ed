use super::*;
use crate::tree::Meta;

/// Ordered test set. Row order is playback order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, samples: Vec<Sample>) -> Self {
        Self { columns, samples }
    }
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, DataError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }
    /// Parses comma-separated text with a header row.
    /// Blank lines are skipped; surrounding quotes and whitespace are trimmed.
    pub fn parse(text: &str) -> Result<Self, DataError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.trim().is_empty());
        let columns = lines
            .next()
            .map(|(_, header)| Self::fields(header))
            .ok_or(DataError::MissingHeader)?;
        let samples = lines
            .map(|(line, row)| {
                let cells = Self::fields(row);
                match cells.len() == columns.len() {
                    true => Ok(columns.iter().cloned().zip(cells).collect::<Sample>()),
                    false => Err(DataError::Ragged {
                        line,
                        expected: columns.len(),
                        found: cells.len(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { columns, samples })
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    /// Feature and target columns the metadata expects but the header lacks.
    pub fn missing(&self, meta: &Meta) -> Vec<String> {
        meta.feature_names()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(meta.target()))
            .filter(|name| !self.columns.iter().any(|c| c == name))
            .map(String::from)
            .collect()
    }
}

impl Dataset {
    fn fields(line: &str) -> Vec<String> {
        line.split(',')
            .map(|cell| cell.trim().trim_matches('"').to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "MedInc,HouseAge,MedHouseVal\n\
                       8.3252,41.0,4.526\n\
                       \n\
                       7.2574,\"52.0\",3.585\r\n";

    #[test]
    fn parses_rows_in_order() {
        let data = Dataset::parse(CSV).unwrap();
        assert_eq!(data.columns(), &["MedInc", "HouseAge", "MedHouseVal"]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.get(0).and_then(|s| s.number("MedInc")), Some(8.3252));
        assert_eq!(data.get(1).and_then(|s| s.number("HouseAge")), Some(52.0));
        assert_eq!(data.get(1).and_then(|s| s.number("MedHouseVal")), Some(3.585));
        assert!(data.get(2).is_none());
    }
    #[test]
    fn header_only_is_empty() {
        let data = Dataset::parse("a,b,y\n").unwrap();
        assert!(data.is_empty());
    }
    #[test]
    fn blank_file_has_no_header() {
        assert!(matches!(Dataset::parse("\n\n"), Err(DataError::MissingHeader)));
    }
    #[test]
    fn ragged_row_is_rejected() {
        let err = Dataset::parse("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(
            err,
            DataError::Ragged {
                line: 3,
                expected: 2,
                found: 1
            }
        ));
    }
    #[test]
    fn reports_missing_columns() {
        let data = Dataset::parse("a,y\n1,2\n").unwrap();
        let meta = Meta::new(vec!["a".into(), "b".into()], "y");
        assert_eq!(data.missing(&meta), vec![String::from("b")]);
    }
}
