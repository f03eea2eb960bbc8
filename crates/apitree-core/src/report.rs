//! Console text for the analysis reports.

use std::fmt::Write as _;

use crate::analysis::{DuplicateGroup, PrefixStats};

/// Per tag and depth, the `top` most frequent prefixes.
pub fn format_prefix_report(stats: &PrefixStats, top: usize) -> String {
    if stats.is_empty() {
        return "No tagged operations with named segments.\n".to_string();
    }

    let mut out = String::new();
    for tag in stats.tags() {
        let _ = writeln!(out, "Tag: {tag}");
        for depth in stats.depths(tag) {
            let _ = writeln!(out, "  Depth {depth}:");
            for (prefix, count) in stats.top(tag, depth, top) {
                let _ = writeln!(out, "    {prefix}: {count}");
            }
        }
    }
    out
}

/// Each shared endpoint name with every occurrence.
pub fn format_duplicate_report(groups: &[DuplicateGroup]) -> String {
    if groups.is_empty() {
        return "No duplicate endpoint names found.\n".to_string();
    }

    let mut out = String::from("Duplicate endpoint names:\n");
    for group in groups {
        let name = if group.name.is_empty() {
            "(root)"
        } else {
            group.name.as_str()
        };
        let _ = writeln!(out, "  {name} ({} occurrences)", group.endpoints.len());
        for endpoint in &group.endpoints {
            let _ = writeln!(out, "    {endpoint}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Endpoint, find_duplicates};
    use crate::parse::ApiDocument;
    use serde_json::json;

    #[test]
    fn test_prefix_report() {
        let doc = ApiDocument::new(json!({
            "paths": {
                "/o/create_order": {"post": {"tags": ["Orders"]}},
                "/o/create_order_item": {"post": {"tags": ["Orders"]}},
                "/o/cancel_order": {"post": {"tags": ["Orders"]}}
            }
        }));
        let stats = PrefixStats::compute(&doc, 2);

        insta::assert_snapshot!(format_prefix_report(&stats, 5), @r"
        Tag: Orders
          Depth 1:
            create: 2
            cancel: 1
          Depth 2:
            create_order: 2
            cancel_order: 1
        ");
    }

    #[test]
    fn test_prefix_report_respects_top() {
        let doc = ApiDocument::new(json!({
            "paths": {
                "/a_1": {"get": {"tags": ["T"]}},
                "/b_1": {"get": {"tags": ["T"]}},
                "/c_1": {"get": {"tags": ["T"]}}
            }
        }));
        let report = format_prefix_report(&PrefixStats::compute(&doc, 1), 2);
        assert_eq!(report, "Tag: T\n  Depth 1:\n    a: 1\n    b: 1\n");
    }

    #[test]
    fn test_empty_reports() {
        assert_eq!(
            format_prefix_report(&PrefixStats::default(), 5),
            "No tagged operations with named segments.\n"
        );
        assert_eq!(
            format_duplicate_report(&[]),
            "No duplicate endpoint names found.\n"
        );
    }

    #[test]
    fn test_duplicate_report() {
        let doc = ApiDocument::new(json!({
            "paths": {
                "/users/{id}": {"get": {}},
                "/orders/{id}": {"get": {}, "delete": {}}
            }
        }));
        insta::assert_snapshot!(format_duplicate_report(&find_duplicates(&doc)), @r"
        Duplicate endpoint names:
          {id} (3 occurrences)
            GET /users/{id}
            GET /orders/{id}
            DELETE /orders/{id}
        ");
    }

    #[test]
    fn test_duplicate_report_names_root() {
        let groups = vec![DuplicateGroup {
            name: String::new(),
            endpoints: vec![Endpoint::new("/", "GET"), Endpoint::new("/", "POST")],
        }];
        assert!(format_duplicate_report(&groups).contains("  (root) (2 occurrences)\n"));
    }
}
