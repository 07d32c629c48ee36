use std::collections::HashMap;

/// The raw field data sent by a website visitor, as a flat mapping from field name to the list of
/// submitted values. Repeated keys accumulate, which is how multi-select inputs (e.g. volunteer
/// availability) arrive in a URL-encoded body.
///
/// A submission is never mutated after parsing; handlers read it, validate it, and drop it.
#[derive(Debug, Default)]
pub struct FormSubmission {
    fields: HashMap<String, Vec<String>>,
}

impl FormSubmission {
    /// Parse a URL-encoded request body into a submission.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        Ok(Self::from_pairs(pairs))
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_default().push(value);
        }
        Self { fields }
    }

    /// The first submitted value for a field, if any.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All submitted values for a field. Empty for fields that were not submitted.
    pub fn values(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first submitted value, defaulting to the empty string. Form extraction echoes whatever
    /// the visitor typed, so missing single-value fields collapse to "".
    pub fn text(&self, field: &str) -> String {
        self.value(field).unwrap_or_default().to_string()
    }

    /// The first submitted value, with empty strings collapsed to `None` the way the original
    /// forms treat unticked optional inputs.
    pub fn optional_text(&self, field: &str) -> Option<String> {
        self.value(field)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}
