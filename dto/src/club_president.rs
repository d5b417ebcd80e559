use chrono::{Local, NaiveDate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The person in charge of a club for a given term.
/// A term without an end date is still running.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct ClubPresident {
    id: u32,
    first_name: String,
    middle_initial: char,
    last_name: String,
    term_start: NaiveDate,
    term_end: Option<NaiveDate>,
}

impl ClubPresident {
    /// Creates a president whose term starts today.
    pub fn new(id: u32, first_name: String, middle_initial: char, last_name: String) -> Self {
        Self {
            id,
            first_name,
            middle_initial,
            last_name,
            term_start: Local::now().date_naive(),
            term_end: None,
        }
    }

    pub fn with_term(
        id: u32,
        first_name: String,
        middle_initial: char,
        last_name: String,
        term_start: NaiveDate,
        term_end: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            first_name,
            middle_initial,
            last_name,
            term_start,
            term_end,
        }
    }
}

impl fmt::Display for ClubPresident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.last_name, self.first_name)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl ClubPresident {
        pub fn new_test(last_name: &str, first_name: &str) -> Self {
            ClubPresident::with_term(
                0,
                first_name.to_string(),
                'Q',
                last_name.to_string(),
                NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                None,
            )
        }
    }

    pub const PRESIDENT_LAST_NAME: &str = "Doe";
    pub const PRESIDENT_FIRST_NAME: &str = "Jon";

    pub fn get_expected_president() -> ClubPresident {
        ClubPresident::with_term(
            1,
            PRESIDENT_FIRST_NAME.to_string(),
            'H',
            PRESIDENT_LAST_NAME.to_string(),
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            Some(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()),
        )
    }

    #[test]
    fn should_display_as_last_name_comma_first_name() {
        let president = get_expected_president();
        assert_eq!("Doe,Jon", president.to_string());
    }

    #[test]
    fn should_start_term_today_by_default() {
        let president = ClubPresident::new(2, "Jonette".to_string(), 'B', "Snow".to_string());
        assert_eq!(&Local::now().date_naive(), president.term_start());
        assert_eq!(&None, president.term_end());
    }

    #[test]
    fn should_be_equal_over_all_fields() {
        assert_eq!(get_expected_president(), get_expected_president());
    }

    #[test]
    fn should_not_be_equal_when_a_term_date_differs() {
        let president = get_expected_president();
        let successor = ClubPresident::with_term(
            *president.id(),
            president.first_name().to_owned(),
            *president.middle_initial(),
            president.last_name().to_owned(),
            *president.term_start(),
            None,
        );

        assert_ne!(president, successor);
    }
}
