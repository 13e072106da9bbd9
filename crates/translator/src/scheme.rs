//! Single-segment name conversion.

/// Converts one dot-free name segment into another naming style.
///
/// Implementations must be deterministic and total over any non-empty input.
pub trait NameScheme: Send + Sync {
    fn convert(&self, segment: &str) -> String;
}

impl<F> NameScheme for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert(&self, segment: &str) -> String {
        self(segment)
    }
}

/// PascalCase / snake_case / kebab-case to camelCase.
///
/// A leading acronym is lowered as a unit (`URLCode` -> `urlCode`, `ID` -> `id`);
/// casing after the first word is left alone (`UserID` -> `userID`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CamelCaseScheme;

impl CamelCaseScheme {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | ' ')
    }

    fn lower_head(word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        let upper_run = chars.iter().take_while(|c| c.is_uppercase()).count();

        // Keep the last capital of an acronym when it starts the next word.
        let lower_len = match chars.get(upper_run) {
            Some(next) if upper_run > 1 && next.is_lowercase() => upper_run - 1,
            _ => upper_run,
        };

        let mut out = String::with_capacity(word.len());
        for c in &chars[..lower_len] {
            out.extend(c.to_lowercase());
        }
        out.extend(&chars[lower_len..]);
        out
    }

    fn upper_head(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl NameScheme for CamelCaseScheme {
    fn convert(&self, segment: &str) -> String {
        let mut words = segment.split(Self::is_separator).filter(|w| !w.is_empty());

        let Some(first) = words.next() else {
            return String::new();
        };

        let mut out = Self::lower_head(first);
        for word in words {
            out.push_str(&Self::upper_head(word));
        }
        out
    }
}
