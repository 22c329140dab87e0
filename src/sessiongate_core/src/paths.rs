/// Set of path prefixes that require a session.
///
/// A prefix matches itself and every sub-path below it: `/dashboard` covers
/// `/dashboard`, `/dashboard/` and `/dashboard/settings`, but not
/// `/dashboards`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedPaths {
    prefixes: Vec<String>,
}

impl ProtectedPaths {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = prefixes
            .into_iter()
            .filter_map(|prefix| normalize(prefix.as_ref()))
            .collect();

        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            // "/" protects everything
            if prefix == "/" {
                return true;
            }
            match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            }
        })
    }
}

fn normalize(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        // Only an explicit "/" survives trimming down to nothing
        return prefix.trim().starts_with('/').then(|| "/".to_string());
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}
