//! Environment variable value validation with helpful warnings
//!
//! Used for values that have a fixed vocabulary (`PXF_PROTOCOL`, the
//! `PXF_CLUSTER_*` overrides). Invalid values are never fatal: the caller
//! decides what to fall back to, and the warning carries a typo suggestion.

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` (with a logged warning) if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                tracing::warn!("{}", self.warning(value));
                default
            }
        }
    }

    /// Log a warning if `value` is not one of the valid values
    pub fn check(&self, value: &str) -> bool {
        let valid = self.valid_values.contains(&value);
        if !valid {
            tracing::warn!("{}", self.warning(value));
        }
        valid
    }

    /// Warning text for an invalid `value`
    pub fn warning(&self, value: &str) -> String {
        format!(
            "Invalid {} value '{}'{}; valid values: {}",
            self.var_name,
            value,
            self.suggest(value),
            self.valid_values.join(", ")
        )
    }

    /// Typo suggestion for `value`, or an empty string
    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| (1..=2).contains(dist))
            .map(|(valid, _)| format!(" (did you mean '{}'?)", valid))
            .unwrap_or_default()
    }
}

/// Parse a boolean override (`true/false`, `1/0`, `yes/no`)
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

pub const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no"];

/// Levenshtein distance for typo detection
///
/// Works on chars, keeping a single row of the edit matrix.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in target.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[target.len()]
}
