//! Weighted multi-criteria stable ranking.
//!
//! Each item's total score is the sum of every scorer's output. Items are
//! returned by descending total; items with equal totals keep their input
//! order. Scores are computed once per item, before sorting.

use std::convert::Infallible;

/// Contribution of one scorer to an item's total.
pub type Score = i64;

/// Rank `items` by the sum of all `scorers`.
///
/// An empty scorer slice returns `items` unchanged.
pub fn rank<T, F>(items: Vec<T>, scorers: &[F]) -> Vec<T>
where
    F: Fn(&T) -> Score,
{
    let fallible: Vec<_> = scorers
        .iter()
        .map(|scorer| move |item: &T| Ok::<Score, Infallible>(scorer(item)))
        .collect();

    match try_rank(items, &fallible) {
        Ok(ranked) => ranked,
        Err(never) => match never {},
    }
}

/// Rank `items` with scorers that may fail.
///
/// The first scorer error aborts the ranking and is returned as-is.
pub fn try_rank<T, F, E>(items: Vec<T>, scorers: &[F]) -> Result<Vec<T>, E>
where
    F: Fn(&T) -> Result<Score, E>,
{
    if scorers.is_empty() {
        return Ok(items);
    }

    let mut scored = items
        .into_iter()
        .map(|item| -> Result<(Score, T), E> {
            let total = scorers
                .iter()
                .try_fold(0 as Score, |total, scorer| {
                    scorer(&item).map(|score| total.saturating_add(score))
                })?;
            Ok((total, item))
        })
        .collect::<Result<Vec<_>, E>>()?;

    // sort_by is stable: equal totals keep input order
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(scored.into_iter().map(|(_, item)| item).collect())
}
