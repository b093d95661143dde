use std::collections::BTreeMap;

/// Joins `values` against a complete key space, filling gaps with `default`.
///
/// Every key of `key_space` yields exactly one output pair, in key-space
/// order. Values whose key is not in the key space are left out.
pub fn fill_missing<K, V>(
    key_space: impl IntoIterator<Item = K>,
    values: &BTreeMap<K, V>,
    default: V,
) -> Vec<(K, V)>
where
    K: Ord,
    V: Clone,
{
    key_space
        .into_iter()
        .map(|k| {
            let v = values.get(&k).cloned().unwrap_or_else(|| default.clone());
            (k, v)
        })
        .collect()
}

/// Returns at most `n` rows ordered by `metric`, largest first.
///
/// The sort is stable, so ties keep their input order.
pub fn top_n<T: Clone>(rows: &[T], n: usize, metric: impl Fn(&T) -> f64) -> Vec<T> {
    let mut ranked: Vec<&T> = rows.iter().collect();
    ranked.sort_by(|a, b| metric(b).total_cmp(&metric(a)));
    ranked.into_iter().take(n).cloned().collect()
}
