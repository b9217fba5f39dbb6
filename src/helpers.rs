use strsim::levenshtein;

/// Largest edit distance still offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Every candidate tied for the smallest edit distance to `target`, in
/// candidate order. Empty when nothing is within
/// [`MAX_SUGGESTION_DISTANCE`].
pub fn closest_names<'a>(target: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let scored: Vec<(&'a str, usize)> = candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(target, candidate)))
        .filter(|&(_, distance)| distance <= MAX_SUGGESTION_DISTANCE)
        .collect();

    let Some(best) = scored.iter().map(|&(_, distance)| distance).min() else {
        return Vec::new();
    };

    scored
        .into_iter()
        .filter(|&(_, distance)| distance == best)
        .map(|(name, _)| name)
        .collect()
}
