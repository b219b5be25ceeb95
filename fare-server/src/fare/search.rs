//! Route search filtering and ranking.
//!
//! Backs the type-ahead route picker: on every keystroke the full
//! cached route collection (never a previously filtered result) is
//! re-filtered and re-ordered against the current query.
//!
//! Users type short numeric prefixes ("5", "22") expecting the base
//! route before its branch variants ("508", "225區"). Plain
//! lexicographic ordering would put "225" before "5", so numeric-leading
//! routes are compared by their leading integer value, while exact and
//! prefix matches on the canonical key always surface first.

use std::cmp::Ordering;

use crate::domain::Route;

/// Filter and order routes for display against a free-text query.
///
/// A route passes when the query is contained (case-insensitively, as a
/// plain substring) in either its display name or its canonical key;
/// the empty query passes every route. Matching routes are ordered by
/// [`compare_ranked`]. The input is not mutated, the sort is stable,
/// and the result is deterministic for a given input pair.
pub fn rank_routes(routes: &[Route], query: &str) -> Vec<Route> {
    let query = query.to_lowercase();

    let mut ranked: Vec<RankKey<'_>> = routes
        .iter()
        .map(RankKey::new)
        .filter(|k| k.name.contains(&query) || k.route.contains(&query))
        .collect();

    // Vec::sort_by is stable, so equal-comparing routes keep their
    // collection order.
    ranked.sort_by(|a, b| compare_ranked(a, b, &query));

    ranked.into_iter().map(|k| k.source.clone()).collect()
}

/// Pre-lowered sort key for one route, computed once per ranking pass.
struct RankKey<'a> {
    source: &'a Route,
    /// Lowercased canonical key.
    route: String,
    /// Lowercased display name.
    name: String,
    /// Leading integer value of the canonical key, if it starts with a
    /// decimal digit.
    leading: Option<u64>,
}

impl<'a> RankKey<'a> {
    fn new(source: &'a Route) -> Self {
        let route = source.route_name.as_str().to_lowercase();
        let name = source.output_name.to_lowercase();
        let leading = leading_integer(&route);
        Self {
            source,
            route,
            name,
            leading,
        }
    }
}

/// The pairwise ordering applied to filtered routes. Each rule
/// short-circuits to the next on a tie:
///
/// 1. Exact match of the canonical key against the query.
/// 2. Prefix match of the canonical key against the query.
/// 3. Numeric-leading keys before non-numeric-leading keys.
/// 4. Both numeric-leading: ascending by leading integer value, equal
///    values falling back to display-name comparison (a base route and
///    its suffixed variant share a value).
/// 5. Both non-numeric-leading: shorter display name first.
/// 6. Display-name comparison.
fn compare_ranked(a: &RankKey<'_>, b: &RankKey<'_>, query: &str) -> Ordering {
    let exact_a = a.route == query;
    let exact_b = b.route == query;
    if exact_a != exact_b {
        return if exact_a { Ordering::Less } else { Ordering::Greater };
    }

    let prefix_a = a.route.starts_with(query);
    let prefix_b = b.route.starts_with(query);
    if prefix_a != prefix_b {
        return if prefix_a { Ordering::Less } else { Ordering::Greater };
    }

    match (a.leading, b.leading) {
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (Some(num_a), Some(num_b)) => {
            return num_a.cmp(&num_b).then_with(|| compare_names(a, b));
        }
        (None, None) => {}
    }

    let len_a = a.name.chars().count();
    let len_b = b.name.chars().count();
    len_a.cmp(&len_b).then_with(|| compare_names(a, b))
}

/// Display-name tie-break. Unicode code-point order over the lowered
/// names; the locale-sensitive collation of the ordering's origin is
/// deliberately not reproduced more precisely than this.
fn compare_names(a: &RankKey<'_>, b: &RankKey<'_>) -> Ordering {
    a.name.cmp(&b.name)
}

/// Parse the leading ASCII-digit run of a key as an integer, consuming
/// digits and ignoring everything from the first non-digit on.
///
/// Returns `None` when the key does not start with a digit. Saturates
/// rather than overflows on absurdly long digit runs.
fn leading_integer(s: &str) -> Option<u64> {
    let digits = s.as_bytes().iter().take_while(|b| b.is_ascii_digit());
    let mut value: Option<u64> = None;
    for b in digits {
        let digit = u64::from(b - b'0');
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit),
        );
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteName;

    fn route(route_name: &str, output_name: &str) -> Route {
        Route::new(RouteName::parse(route_name).unwrap(), output_name)
    }

    fn names(ranked: &[Route]) -> Vec<&str> {
        ranked.iter().map(|r| r.route_name.as_str()).collect()
    }

    #[test]
    fn empty_query_passes_everything() {
        let routes = vec![route("307", "307"), route("紅5", "紅5"), route("5", "5")];
        let ranked = rank_routes(&routes, "");
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn substring_filter_checks_both_names() {
        let routes = vec![
            route("225區", "225區(副)"),
            route("307", "307"),
            route("F501", "F501 小巴"),
        ];

        // Matches the display name of 225區 and the key of F501.
        assert_eq!(names(&rank_routes(&routes, "副")), vec!["225區"]);
        assert_eq!(names(&rank_routes(&routes, "f50")), vec!["F501"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let routes = vec![route("F501", "F501 Shuttle"), route("307", "307")];
        assert_eq!(names(&rank_routes(&routes, "shuttle")), vec!["F501"]);
        assert_eq!(names(&rank_routes(&routes, "SHUTTLE")), vec!["F501"]);
        assert_eq!(names(&rank_routes(&routes, "f501")), vec!["F501"]);
    }

    #[test]
    fn numeric_prefix_query_orders_base_route_first() {
        let routes = vec![
            route("225", "225"),
            route("225區", "225區(副)"),
            route("5", "5"),
        ];

        let ranked = rank_routes(&routes, "22");
        assert_eq!(names(&ranked), vec!["225", "225區"]);
    }

    #[test]
    fn exact_match_beats_numeric_value() {
        let routes = vec![
            route("225", "225"),
            route("225區", "225區(副)"),
            route("5", "5"),
        ];

        // "5" is an exact key match and must surface first even though
        // 5 < 225 would already order it first numerically; "225" and
        // "225區" match by containing the digit 5.
        let ranked = rank_routes(&routes, "5");
        assert_eq!(names(&ranked), vec!["5", "225", "225區"]);
    }

    #[test]
    fn prefix_match_beats_plain_containment() {
        let routes = vec![route("508", "508"), route("250", "250")];

        // Both contain "50"; only 508 starts with it.
        let ranked = rank_routes(&routes, "50");
        assert_eq!(names(&ranked), vec!["508", "250"]);
    }

    #[test]
    fn numeric_leading_before_textual() {
        let routes = vec![route("紅5", "紅5"), route("307", "307")];
        let ranked = rank_routes(&routes, "");
        assert_eq!(names(&ranked), vec!["307", "紅5"]);
    }

    #[test]
    fn numeric_value_not_lexicographic() {
        let routes = vec![route("22", "22"), route("5", "5"), route("225", "225")];
        let ranked = rank_routes(&routes, "");
        assert_eq!(names(&ranked), vec!["5", "22", "225"]);
    }

    #[test]
    fn equal_leading_integer_falls_to_display_name() {
        let routes = vec![
            route("225區", "225區(副)"),
            route("225", "225"),
            route("225夜", "225夜間"),
        ];

        let ranked = rank_routes(&routes, "");
        assert_eq!(names(&ranked), vec!["225", "225區", "225夜"]);
    }

    #[test]
    fn leading_integer_ignores_suffix() {
        assert_eq!(leading_integer("225區"), Some(225));
        assert_eq!(leading_integer("1a"), Some(1));
        assert_eq!(leading_integer("紅5"), None);
        assert_eq!(leading_integer(""), None);
        // Saturates instead of overflowing.
        assert_eq!(
            leading_integer("99999999999999999999999999"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn textual_routes_order_by_length_then_name() {
        let routes = vec![
            route("內科通勤專車", "內科通勤專車10"),
            route("紅5", "紅5"),
            route("藍1", "藍1"),
        ];

        let ranked = rank_routes(&routes, "");
        // Shorter display names first, then code-point order.
        assert_eq!(names(&ranked), vec!["紅5", "藍1", "內科通勤專車"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let routes = vec![route("22", "22"), route("5", "5")];
        let before = routes.clone();
        let _ = rank_routes(&routes, "2");
        assert_eq!(routes, before);
    }
}
