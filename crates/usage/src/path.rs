/// A dotted selection path to one usage, e.g. `GetUser.user.UserFields.email`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UsagePath(String);

impl UsagePath {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments: operation or fragment prefix, traversed names, matched field.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The matched field name.
    #[must_use]
    pub fn field_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or_default()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UsagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UsagePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for UsagePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Segment stack kept in step with the walker's frames.
#[derive(Debug, Default)]
pub(crate) struct UsagePathBuilder {
    segments: Vec<String>,
}

impl UsagePathBuilder {
    pub(crate) fn push(&mut self, segment: String) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    pub(crate) fn clear(&mut self) {
        self.segments.clear();
    }

    /// Join the current segments and the matched field.
    pub(crate) fn finish(&self, field_name: &str) -> UsagePath {
        let len = self.segments.iter().map(|s| s.len() + 1).sum::<usize>() + field_name.len();
        let mut path = String::with_capacity(len);
        for segment in &self.segments {
            path.push_str(segment);
            path.push('.');
        }
        path.push_str(field_name);
        UsagePath(path)
    }
}
