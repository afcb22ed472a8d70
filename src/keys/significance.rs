use hashbrown::HashMap as FastHashMap;
use std::hash::Hash;

struct Tally<K> {
    key: K,
    count: usize,
    last_set: usize,
}

/// Number of sets containing each key, in first-seen order. A key listed
/// twice in one set is counted once.
///
/// Encounter order inside a set follows the map's own iteration order, so
/// ordered maps give fully deterministic output.
pub fn key_frequencies<'a, M, K, V>(sets: impl IntoIterator<Item = &'a M>) -> Vec<(K, usize)>
where
    M: 'a + ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a + Eq + Hash + Clone,
    V: 'a,
{
    let mut index: FastHashMap<K, usize> = FastHashMap::new();
    let mut tallies: Vec<Tally<K>> = Vec::new();

    for (set_idx, set) in sets.into_iter().enumerate() {
        for (key, _) in set {
            match index.get(key) {
                Some(&slot) => {
                    let tally = &mut tallies[slot];
                    if tally.last_set != set_idx {
                        tally.count += 1;
                        tally.last_set = set_idx;
                    }
                }
                None => {
                    index.insert(key.clone(), tallies.len());
                    tallies.push(Tally {
                        key: key.clone(),
                        count: 1,
                        last_set: set_idx,
                    });
                }
            }
        }
    }

    tallies
        .into_iter()
        .map(|tally| (tally.key, tally.count))
        .collect()
}

/// Keys whose frequency is at least the mean frequency (integer division),
/// most frequent first. Equal counts keep first-seen order.
#[tracing::instrument(level = "trace", skip(sets))]
pub fn significant_keys<'a, M, K, V>(sets: impl IntoIterator<Item = &'a M>) -> Vec<K>
where
    M: 'a + ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a + Eq + Hash + Clone,
    V: 'a,
{
    let mut frequencies = key_frequencies(sets);
    if frequencies.is_empty() {
        return Vec::new();
    }

    let total: usize = frequencies.iter().map(|(_, count)| count).sum();
    let threshold = total / frequencies.len();
    tracing::trace!(
        distinct = frequencies.len() as u64,
        threshold = threshold as u64,
        "key significance threshold"
    );

    frequencies.retain(|(_, count)| *count >= threshold);
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies.into_iter().map(|(key, _)| key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn set(keys: &[&'static str]) -> BTreeMap<&'static str, u8> {
        keys.iter().map(|key| (*key, 1)).collect()
    }

    #[test]
    fn everything_meets_a_low_threshold() {
        let sets = [set(&["a", "b"]), set(&["a"]), set(&["a", "c"])];
        assert_eq!(significant_keys(&sets), vec!["a", "b", "c"]);
    }

    #[test]
    fn rare_keys_fall_below_the_mean() {
        let sets = [
            set(&["id", "format"]),
            set(&["id", "format"]),
            set(&["id", "page"]),
            set(&["id"]),
        ];
        // counts: id 4, format 2, page 1 -> threshold 7 / 3 = 2
        assert_eq!(significant_keys(&sets), vec!["id", "format"]);
    }

    #[test]
    fn no_keys_yield_nothing() {
        let sets: Vec<BTreeMap<String, ()>> = vec![BTreeMap::new(), BTreeMap::new()];
        assert!(significant_keys(&sets).is_empty());
        let none: Vec<BTreeMap<String, ()>> = Vec::new();
        assert!(significant_keys(&none).is_empty());
    }

    #[test]
    fn frequencies_keep_first_seen_order() {
        let sets = [set(&["b", "c"]), set(&["a", "c"])];
        assert_eq!(key_frequencies(&sets), vec![("b", 1), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn works_with_hash_maps() {
        let mut first = HashMap::new();
        first.insert("user".to_string(), 1);
        first.insert("post".to_string(), 2);
        let mut second = HashMap::new();
        second.insert("user".to_string(), 3);

        let keys = significant_keys(&[first, second]);
        assert_eq!(keys[0], "user");
        assert_eq!(keys.len(), 2);
    }
}
