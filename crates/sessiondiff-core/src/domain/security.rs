use serde::{Deserialize, Serialize};

use super::CalendarDate;
use crate::error::DecodeError;

/// Decoded schedule of one security group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Security {
    pub market_segment_id: u32,
    pub product_complex: String,
    /// Lookup key in a [`crate::SecurityIndex`].
    pub security_group: String,
    pub declared_date_count: usize,
    pub dates: Vec<CalendarDate>,
}

impl Security {
    /// Builds a security whose date list must match the declared count.
    pub fn new(
        market_segment_id: u32,
        product_complex: impl Into<String>,
        security_group: impl Into<String>,
        declared_date_count: usize,
        dates: Vec<CalendarDate>,
    ) -> Result<Self, DecodeError> {
        if dates.len() != declared_date_count {
            return Err(DecodeError::GroupCountMismatch {
                group: "dates",
                declared: declared_date_count,
                found: dates.len(),
            });
        }

        Ok(Self {
            market_segment_id,
            product_complex: product_complex.into(),
            security_group: security_group.into(),
            declared_date_count,
            dates,
        })
    }

    pub fn date(&self, date_string: &str) -> Option<&CalendarDate> {
        self.dates
            .iter()
            .find(|date| date.date_string == date_string)
    }

    pub fn session_count(&self) -> usize {
        self.dates.iter().map(|date| date.sessions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Session;

    #[test]
    fn rejects_date_count_mismatch() {
        let err = Security::new(74, "Equity", "ES", 2, Vec::new()).expect_err("must fail");
        assert!(matches!(
            err,
            DecodeError::GroupCountMismatch { group: "dates", declared: 2, found: 0 }
        ));
    }

    #[test]
    fn finds_date_by_string() {
        let dates = vec![
            CalendarDate::from_sessions("20180528", vec![Session::new(21, "2018052722000000")]),
            CalendarDate::from_sessions("20180529", Vec::new()),
        ];
        let security = Security::new(74, "Equity", "ES", 2, dates).expect("valid");

        assert_eq!(
            security.date("20180529").map(|d| d.sessions.len()),
            Some(0)
        );
        assert!(security.date("20180530").is_none());
        assert_eq!(security.session_count(), 1);
    }
}
