// Resolve raw operator input (a list number or a name fragment) to exactly
// one available player.

use super::error::DraftError;

/// Most candidates reported back in an `Ambiguous` error.
pub const MAX_CANDIDATES: usize = 10;

/// Resolve `input` against the current `available` list.
///
/// All-digit input is a 1-based position in `available`; anything else is
/// matched by name (see [`resolve_name`]).
pub fn resolve_selection(available: &[String], input: &str) -> Result<String, DraftError> {
    let query = input.trim();
    if !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit()) {
        // Anything too large for usize is out of range by definition.
        let number = query.parse::<usize>().unwrap_or(usize::MAX);
        return resolve_number(available, number);
    }
    resolve_name(available, query)
}

/// The player at 1-based position `number` in `available`.
pub fn resolve_number(available: &[String], number: usize) -> Result<String, DraftError> {
    match number.checked_sub(1).and_then(|i| available.get(i)) {
        Some(player) => Ok(player.clone()),
        None => Err(DraftError::OutOfRange {
            index: number,
            len: available.len(),
        }),
    }
}

/// Match `query` by name: a unique case-insensitive exact match wins,
/// otherwise a unique case-insensitive substring match. Blank queries never
/// match.
pub fn resolve_name(available: &[String], query: &str) -> Result<String, DraftError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(DraftError::NotFound {
            query: String::new(),
        });
    }

    let needle = query.to_lowercase();

    let mut exact = available.iter().filter(|p| p.to_lowercase() == needle);
    if let (Some(only), None) = (exact.next(), exact.next()) {
        return Ok(only.clone());
    }

    let matches: Vec<&String> = available
        .iter()
        .filter(|p| p.to_lowercase().contains(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(DraftError::NotFound {
            query: query.to_string(),
        }),
        [only] => Ok((*only).clone()),
        many => Err(DraftError::Ambiguous {
            query: query.to_string(),
            candidates: many
                .iter()
                .take(MAX_CANDIDATES)
                .map(|p| (*p).clone())
                .collect(),
            total: many.len(),
        }),
    }
}
