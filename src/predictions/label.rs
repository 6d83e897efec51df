//! @ai:module:intent Opaque class labels and column typing for prediction files
//! @ai:module:layer domain
//! @ai:module:public_api Label, LabelKind, LabelColumn
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Cell values read as missing, same set a dataframe reader treats as NA.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_VALUES: &[&str] = &["True", "TRUE", "true"];
const FALSE_VALUES: &[&str] = &["False", "FALSE", "false"];

/// @ai:intent A class label compared by value; numbers sort before text
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Number(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => write!(f, "{}", s),
        }
    }
}

/// @ai:intent Inferred type of a whole label column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Numeric,
    Text,
}

/// @ai:intent A typed label column read from one prediction file
#[derive(Debug, Clone, PartialEq)]
pub struct LabelColumn {
    pub kind: LabelKind,
    pub labels: Vec<Label>,
}

impl LabelColumn {
    /// @ai:intent Type raw cells the way a dataframe reader would, then convert them to labels
    /// @ai:pre cells are the column's values in row order, header excluded
    /// @ai:post numeric columns hold only Label::Number, text columns only Label::Text
    /// @ai:effects pure
    pub fn from_cells(cells: Vec<String>, path: &Path, column: &str) -> Result<Self> {
        if let Some(row) = cells.iter().position(|c| NA_VALUES.contains(&c.as_str())) {
            return Err(Error::MissingLabel {
                path: path.to_path_buf(),
                column: column.to_string(),
                row: row + 1,
            });
        }

        if let Some(labels) = parse_all(&cells, parse_bool) {
            return Ok(Self::numeric(labels));
        }

        if let Some(labels) = parse_all(&cells, |c| c.trim().parse::<i64>().ok()) {
            return Ok(Self::numeric(labels));
        }

        if let Some(reals) = parse_all(&cells, |c| c.trim().parse::<f64>().ok()) {
            let labels = parse_all(&reals, |v| integral(*v)).ok_or_else(|| {
                Error::ContinuousLabels {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                }
            })?;
            return Ok(Self::numeric(labels));
        }

        Ok(Self {
            kind: LabelKind::Text,
            labels: cells.into_iter().map(Label::Text).collect(),
        })
    }

    fn numeric(values: Vec<i64>) -> Self {
        Self {
            kind: LabelKind::Numeric,
            labels: values.into_iter().map(Label::Number).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// @ai:intent Apply a parser to every item, failing as a whole if any item fails
/// @ai:effects pure
fn parse_all<T, U>(items: &[T], parse: impl Fn(&T) -> Option<U>) -> Option<Vec<U>> {
    items.iter().map(parse).collect()
}

fn parse_bool(cell: &String) -> Option<i64> {
    if TRUE_VALUES.contains(&cell.as_str()) {
        Some(1)
    } else if FALSE_VALUES.contains(&cell.as_str()) {
        Some(0)
    } else {
        None
    }
}

/// @ai:intent Convert a real to an integer class when it has no fractional part
/// @ai:effects pure
fn integral(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

    if value.is_finite() && value.fract() == 0.0 && value.abs() <= LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn column(values: &[&str]) -> Result<LabelColumn> {
        LabelColumn::from_cells(cells(values), Path::new("p.csv"), "pred")
    }

    #[test]
    fn test_integer_column() {
        let col = column(&["0", "1", "2"]).unwrap();
        assert_eq!(col.kind, LabelKind::Numeric);
        assert_eq!(
            col.labels,
            vec![Label::Number(0), Label::Number(1), Label::Number(2)]
        );
    }

    #[test]
    fn test_integral_reals_are_numbers() {
        let col = column(&["1.0", "0.0", "2"]).unwrap();
        assert_eq!(
            col.labels,
            vec![Label::Number(1), Label::Number(0), Label::Number(2)]
        );
    }

    #[test]
    fn test_boolean_column() {
        let col = column(&["True", "false"]).unwrap();
        assert_eq!(col.labels, vec![Label::Number(1), Label::Number(0)]);
    }

    #[test]
    fn test_mixed_cells_make_a_text_column() {
        let col = column(&["True", "1", "cat"]).unwrap();
        assert_eq!(col.kind, LabelKind::Text);
        assert_eq!(col.labels[1], Label::Text("1".to_string()));
    }

    #[test]
    fn test_continuous_values_rejected() {
        let err = column(&["0.5", "1.0"]).unwrap_err();
        assert!(matches!(err, Error::ContinuousLabels { ref column, .. } if column == "pred"));
    }

    #[test]
    fn test_missing_cell_reports_row() {
        let err = column(&["1", "NaN", "0"]).unwrap_err();
        assert!(matches!(err, Error::MissingLabel { row: 2, .. }));

        let err = column(&["1", "0", ""]).unwrap_err();
        assert!(matches!(err, Error::MissingLabel { row: 3, .. }));
    }

    #[test]
    fn test_numbers_sort_before_text() {
        let mut labels = vec![
            Label::Text("b".to_string()),
            Label::Number(3),
            Label::Text("a".to_string()),
            Label::Number(-1),
        ];
        labels.sort();
        assert_eq!(
            labels,
            vec![
                Label::Number(-1),
                Label::Number(3),
                Label::Text("a".to_string()),
                Label::Text("b".to_string()),
            ]
        );
    }
}
