//! Single-column sorting.
//!
//! Rows are ordered by the normalized value of the sort key using a
//! base-strength comparison (case and accents ignored). Descending order is,
//! by default, the exact reverse of the ascending result, which means rows
//! with equal keys come out in reversed relative order. Set
//! [`DescendingOrder::Stable`] to keep equal rows in input order instead.

use std::cmp::Ordering;

use arp_model::{Record, SortDirection, SortSpec};

use crate::normalize::{collation_key, normalize, primary_weight};
use crate::options::{Collation, DescendingOrder, SortOptions};

/// Order `rows` by `spec`. `None` returns the rows in input order.
///
/// The input is never reordered in place. Rows missing the key sort as an
/// empty string, i.e. first in ascending order.
pub fn sort<'a, R, I>(rows: I, spec: Option<&SortSpec>, options: SortOptions) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let Some(spec) = spec else {
        return rows.into_iter().collect();
    };
    let key = spec.key.as_str();
    let mut keyed: Vec<(String, &'a R)> = rows
        .into_iter()
        .map(|row| (collation_key(&normalize(row.value(key).as_deref())), row))
        .collect();

    let collation = options.collation;
    match (spec.direction, options.descending) {
        (SortDirection::Asc, _) => keyed.sort_by(|a, b| compare(&a.0, &b.0, collation)),
        (SortDirection::Desc, DescendingOrder::Reverse) => {
            keyed.sort_by(|a, b| compare(&a.0, &b.0, collation));
            keyed.reverse();
        }
        (SortDirection::Desc, DescendingOrder::Stable) => {
            keyed.sort_by(|a, b| compare(&b.0, &a.0, collation));
        }
    }
    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Compare two collation keys character by character on primary weight, so
/// punctuation sorts before digits and digits before letters.
pub fn compare(a: &str, b: &str, collation: Collation) -> Ordering {
    match collation {
        Collation::Lexical => a.chars().map(primary_weight).cmp(b.chars().map(primary_weight)),
        Collation::Natural => natural_cmp(a, b),
    }
}

/// Compare strings treating each run of ASCII digits as a number.
///
/// Numeric runs compare by value (leading zeros ignored, then by length of
/// the zero-padded form); everything else compares character by character on
/// primary weight.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ordering = compare_digit_runs(&l_run, &r_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = primary_weight(l).cmp(&primary_weight(r));
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}
