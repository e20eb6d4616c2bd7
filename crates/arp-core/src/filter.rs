//! Free-text filtering over record fields.

use arp_model::{FieldName, Record};

use crate::normalize::{normalize, normalize_str};

/// Rows whose normalized haystack contains the normalized `query`.
///
/// An empty (or all-whitespace) query keeps every row. Matching is plain
/// substring containment and surviving rows keep their input order.
pub fn filter<'a, R, I>(rows: I, query: &str, fields: Option<&[FieldName]>) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = normalize_str(query);
    if needle.is_empty() {
        return rows.into_iter().collect();
    }
    rows.into_iter()
        .filter(|row| haystack(*row, fields).contains(&needle))
        .collect()
}

/// Normalized values of `fields` (all fields when `None`) joined by a space.
/// A field the row lacks contributes an empty string.
pub fn haystack<R: Record>(row: &R, fields: Option<&[FieldName]>) -> String {
    let parts: Vec<String> = match fields {
        Some(fields) => fields
            .iter()
            .map(|field| normalize(row.value(field.as_str()).as_deref()))
            .collect(),
        None => row
            .values()
            .iter()
            .map(|value| normalize(Some(&**value)))
            .collect(),
    };
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arp_model::{Row, Scalar};

    fn rows() -> Vec<Row> {
        vec![
            Row::from_pairs([
                ("id", Scalar::from(1)),
                ("name", "Priya".into()),
                ("dept", "CSE".into()),
            ])
            .unwrap(),
            Row::from_pairs([
                ("id", Scalar::from(2)),
                ("name", "kumar".into()),
                ("dept", "ECE".into()),
            ])
            .unwrap(),
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        let rows = rows();
        let kept = filter(&rows, "   ", None);
        assert_eq!(kept.len(), 2);
        assert!(std::ptr::eq(kept[0], &rows[0]));
    }

    #[test]
    fn query_is_case_and_space_insensitive() {
        let rows = rows();
        let kept = filter(&rows, "  PRI ", None);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some(&Scalar::from("Priya")));
    }

    #[test]
    fn haystack_joins_fields_with_single_space() {
        let rows = rows();
        assert_eq!(haystack(&rows[0], None), "1 priya cse");
        // Cross-field match is possible through the separator.
        assert_eq!(filter(&rows, "priya cse", None).len(), 1);
    }

    #[test]
    fn restricted_fields_ignore_others() {
        let rows = rows();
        let fields = vec![FieldName::new("name").unwrap()];
        assert!(filter(&rows, "cse", Some(&fields)).is_empty());
        let missing = vec![FieldName::new("email").unwrap()];
        assert_eq!(haystack(&rows[0], Some(&missing)), "");
    }
}
