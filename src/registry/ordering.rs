use std::cmp::Ordering;

use dto::club::Club;

/// Ascending number of members. Clubs with the same count keep no guaranteed
/// relative order.
pub fn by_member_count(left: &Option<Club>, right: &Option<Club>) -> Ordering {
    with_occupied(left, right, |left, right| {
        left.member_count().cmp(right.member_count())
    })
}

/// Descending lexicographic order on the stored name, exactly as typed.
/// Lookups fold case and trim; the sort does not.
pub fn by_name(left: &Option<Club>, right: &Option<Club>) -> Ordering {
    with_occupied(left, right, |left, right| right.name().cmp(left.name()))
}

/// Descending lexicographic order on the president display form
/// (`last_name,first_name`). Clubs without a president order after every club
/// that has one.
pub fn by_president(left: &Option<Club>, right: &Option<Club>) -> Ordering {
    with_occupied(left, right, |left, right| {
        match (left.president(), right.president()) {
            (Some(left), Some(right)) => right.to_string().cmp(&left.to_string()),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    })
}

/// Extends a comparison over occupied slots into a total order over the whole
/// store: empty slots sort after every occupied one.
fn with_occupied<F>(left: &Option<Club>, right: &Option<Club>, compare: F) -> Ordering
where
    F: Fn(&Club, &Club) -> Ordering,
{
    match (left, right) {
        (Some(left), Some(right)) => compare(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::club_president::ClubPresident;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        member_counts = {
        (4, 6),
        (6, 4),
        (6, 6),
        },
        expected_result = {
        Ordering::Less,
        Ordering::Greater,
        Ordering::Equal,
        }
    )]
    fn should_order_by_ascending_member_count(
        member_counts: (u32, u32),
        expected_result: Ordering,
    ) {
        let (left_count, right_count) = member_counts;
        let left = Some(Club::new_test("Videogame club", left_count));
        let right = Some(Club::new_test("Cooking club", right_count));

        assert_eq!(expected_result, by_member_count(&left, &right));
    }

    #[parameterized(
        names = {
        ("Cooking club", "Computer Club"),
        ("Computer Club", "Cooking club"),
        ("Cooking club", "Cooking club"),
        },
        expected_result = {
        Ordering::Less,
        Ordering::Greater,
        Ordering::Equal,
        }
    )]
    fn should_order_by_descending_name(names: (&str, &str), expected_result: Ordering) {
        let (left_name, right_name) = names;
        let left = Some(Club::new_test(left_name, 3));
        let right = Some(Club::new_test(right_name, 3));

        assert_eq!(expected_result, by_name(&left, &right));
    }

    #[test]
    fn should_order_by_descending_president_display_form() {
        let snow = Some(Club::new_test_with_president(
            "Videogame club",
            6,
            ClubPresident::new_test("Snow", "Jonette"),
        ));
        let doe = Some(Club::new_test_with_president(
            "Cooking club",
            12,
            ClubPresident::new_test("Doe", "Jon"),
        ));

        assert_eq!(Ordering::Less, by_president(&snow, &doe));
        assert_eq!(Ordering::Greater, by_president(&doe, &snow));
    }

    #[test]
    fn should_order_club_without_president_after_club_with_one() {
        let with_president = Some(Club::new_test_with_president(
            "Cooking club",
            12,
            ClubPresident::new_test("Doe", "Jon"),
        ));
        let without_president = Some(Club::new_test("Computer Club", 3));

        assert_eq!(
            Ordering::Less,
            by_president(&with_president, &without_president)
        );
        assert_eq!(
            Ordering::Greater,
            by_president(&without_president, &with_president)
        );
    }

    #[parameterized(
        comparator = {
        by_member_count,
        by_name,
        by_president,
        }
    )]
    fn should_order_empty_slots_last(
        comparator: fn(&Option<Club>, &Option<Club>) -> Ordering,
    ) {
        let occupied = Some(Club::new_test("Martial Arts Club", 10));

        assert_eq!(Ordering::Less, comparator(&occupied, &None));
        assert_eq!(Ordering::Greater, comparator(&None, &occupied));
        assert_eq!(Ordering::Equal, comparator(&None, &None));
    }
}
