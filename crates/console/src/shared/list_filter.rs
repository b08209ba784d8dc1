//! List filtering shared by every page: free-text search over an entity's
//! configured fields plus any number of categorical filters.

/// Types that support free-text search
///
/// Implementations check the query against a fixed set of display fields
/// with OR semantics: the record matches if any field contains the query.
pub trait Searchable {
    fn matches_search(&self, query: &str) -> bool;
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A categorical filter value: either the "all" sentinel or one category
///
/// `All` imposes no constraint; it is never matched literally against a
/// category named "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterChoice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> FilterChoice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: std::str::FromStr> FilterChoice<T> {
    /// Parse a UI filter parameter; the literal `"all"` means no constraint
    pub fn from_param(param: &str) -> Result<Self, T::Err> {
        if param == "all" {
            Ok(Self::All)
        } else {
            param.parse().map(Self::Only)
        }
    }
}

/// Derive the visible subset: text match AND every categorical predicate
///
/// Pure and order-preserving; an empty query matches every record. Called
/// on every keystroke, so it never mutates and never re-sorts.
pub fn filter_list<'a, E: Searchable>(
    items: &'a [E],
    query: &str,
    categorical: impl Fn(&E) -> bool,
) -> Vec<&'a E> {
    items
        .iter()
        .filter(|item| (query.is_empty() || item.matches_search(query)) && categorical(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: String,
        status: &'static str,
    }

    impl Searchable for Row {
        fn matches_search(&self, query: &str) -> bool {
            contains_ci(&self.name, query)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Acme".into(), status: "Active" },
            Row { name: "Foo".into(), status: "Inactive" },
        ]
    }

    #[test]
    fn search_and_status_combine_with_and() {
        let rows = rows();
        let status = FilterChoice::Only("Active");
        let visible = filter_list(&rows, "ac", |r| status.matches(&r.status));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Acme");
    }

    #[test]
    fn all_sentinel_imposes_no_constraint() {
        let rows = rows();
        let status: FilterChoice<&str> = FilterChoice::All;
        let visible = filter_list(&rows, "", |r| status.matches(&r.status));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn created_record_shows_up_in_filtered_view() {
        let mut rows = rows();
        rows.push(Row { name: "Bar".into(), status: "Active" });
        let status = FilterChoice::Only("Active");
        let names: Vec<_> = filter_list(&rows, "", |r| status.matches(&r.status))
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Acme", "Bar"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = rows();
        let visible = filter_list(&rows, "ACME", |_| true);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn order_is_preserved() {
        let rows = vec![
            Row { name: "Beta".into(), status: "Active" },
            Row { name: "Alpha".into(), status: "Active" },
            Row { name: "Betamax".into(), status: "Active" },
        ];
        let names: Vec<_> = filter_list(&rows, "bet", |_| true)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Beta", "Betamax"]);
    }

    #[test]
    fn from_param_parses_sentinel_and_values() {
        let all: FilterChoice<i32> = FilterChoice::from_param("all").unwrap();
        assert!(all.is_all());
        let only: FilterChoice<i32> = FilterChoice::from_param("7").unwrap();
        assert_eq!(only, FilterChoice::Only(7));
        assert!(FilterChoice::<i32>::from_param("x").is_err());
    }
}
