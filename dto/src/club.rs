use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::club_president::ClubPresident;
use crate::error::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

/// A club as registered in the system.
///
/// The name is the uniqueness key of the registry, compared after trimming and
/// case-folding; it is stored here untouched. The id is caller-assigned and
/// never validated.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, Default)]
pub struct Club {
    id: u32,
    name: String,
    member_count: u32,
    president: Option<ClubPresident>,
}

impl Club {
    /// Creates a club with no president and no members yet.
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            member_count: 0,
            president: None,
        }
    }

    /// Creates a fully described club.
    /// The member count must be at least one here; only the short
    /// constructors may leave it at zero.
    pub fn with_details(
        id: u32,
        name: String,
        president: ClubPresident,
        member_count: u32,
    ) -> Result<Self> {
        if member_count == 0 {
            return Err(Error::InvalidMemberCount(member_count));
        }

        Ok(Self {
            id,
            name,
            member_count,
            president: Some(president),
        })
    }
}

/// Equality and hashing ignore the president: a club keeps its identity
/// across a change of board.
impl PartialEq for Club {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.member_count == other.member_count && self.name == other.name
    }
}

impl Eq for Club {}

impl Hash for Club {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.member_count.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Club name: {}", self.name)?;
        match &self.president {
            Some(president) => writeln!(f, "Club president: {president}")?,
            None => writeln!(f, "Club president: none")?,
        }
        write!(f, "Member count: {}", self.member_count)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::club_president::tests::get_expected_president;
    use parameterized::{ide, parameterized};

    ide!();

    impl Club {
        pub fn new_test(name: &str, member_count: u32) -> Self {
            Club {
                id: 0,
                name: name.to_string(),
                member_count,
                president: None,
            }
        }

        pub fn new_test_with_president(
            name: &str,
            member_count: u32,
            president: ClubPresident,
        ) -> Self {
            Club {
                id: 0,
                name: name.to_string(),
                member_count,
                president: Some(president),
            }
        }
    }

    pub const CLUB_NAME: &str = "Doki Doki Literature Club";

    pub fn get_expected_club() -> Club {
        Club {
            id: 1,
            name: CLUB_NAME.to_string(),
            member_count: 4,
            president: Some(get_expected_president()),
        }
    }

    #[test]
    fn should_create_fully_described_club() {
        let club = Club::with_details(
            1,
            CLUB_NAME.to_string(),
            get_expected_president(),
            4,
        )
        .unwrap();

        assert_eq!(get_expected_club(), club);
        assert_eq!(&Some(get_expected_president()), club.president());
    }

    #[test]
    fn should_reject_club_without_members() {
        let result = Club::with_details(1, CLUB_NAME.to_string(), get_expected_president(), 0);

        assert_eq!(Err(Error::InvalidMemberCount(0)), result);
    }

    #[test]
    fn should_create_club_with_no_members_yet() {
        let club = Club::new(3, "Videogame club".to_string());

        assert_eq!(&0, club.member_count());
        assert_eq!(&None, club.president());
    }

    #[parameterized(
        left = {
        Club::new_test(CLUB_NAME, 4),
        Club::new_test(CLUB_NAME, 4),
        Club::new_test(CLUB_NAME, 4),
        },
        right = {
        Club::new_test_with_president(CLUB_NAME, 4, get_expected_president()),
        Club::new_test(CLUB_NAME, 12),
        Club::new_test("Cooking club", 4),
        },
        expected_equal = {
        true,
        false,
        false,
        }
    )]
    fn should_ignore_president_in_equality(left: Club, right: Club, expected_equal: bool) {
        assert_eq!(expected_equal, left == right);
    }

    #[test]
    fn should_display_club_with_president() {
        let club = get_expected_club();

        assert_eq!(
            "Club name: Doki Doki Literature Club\nClub president: Doe,Jon\nMember count: 4",
            club.to_string()
        );
    }

    #[test]
    fn should_display_club_without_president() {
        let club = Club::new_test("Computer Club", 3);

        assert_eq!(
            "Club name: Computer Club\nClub president: none\nMember count: 3",
            club.to_string()
        );
    }
}
