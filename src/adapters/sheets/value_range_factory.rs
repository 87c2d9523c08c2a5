use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    /// Update payload for a single cell.
    fn from_single_cell(cell_value: &str) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_single_cell(cell_value: &str) -> Self {
        ValueRange {
            major_dimension: None,
            range: None,
            values: Some(vec![vec![Value::String(cell_value.to_owned())]]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_single_cell() {
        let value_range = ValueRange::from_single_cell("1234567");
        assert_eq!(value_range.major_dimension, None);
        assert_eq!(value_range.range, None);
        assert_eq!(
            value_range.values,
            Some(vec![vec![Value::String("1234567".to_string())]])
        );
    }
}
