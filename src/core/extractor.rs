use std::path::Path;
use tracing::debug;

use crate::error::{Result, SummarizerError};
use super::languages::{patterns_for, Language};

/// Extract the source text of `function_name` from the file at `path`.
///
/// The file is read once and classified by extension. The language's rules
/// are tried in priority order and the first rule that matches anywhere in
/// the file wins, even if a later rule would produce a tidier snippet.
pub async fn extract_function<P: AsRef<Path>>(path: P, function_name: &str) -> Result<String> {
    let path = path.as_ref();

    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SummarizerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let language = Language::from_path(path);
    debug!("Classified {} as {}", path.display(), language);

    find_function(&source, language, function_name)?.ok_or_else(|| {
        SummarizerError::FunctionNotFound {
            name: function_name.to_string(),
            path: path.to_path_buf(),
        }
    })
}

/// Pure core of [`extract_function`]: `Ok(None)` when no rule matches.
pub fn find_function(source: &str, language: Language, function_name: &str) -> Result<Option<String>> {
    for rule in patterns_for(language, function_name)? {
        if let Some(snippet) = rule.find(source) {
            debug!(
                "Matched '{}' with {} rule '{}' ({:?})",
                function_name,
                language,
                rule.label(),
                rule.terminator()
            );
            return Ok(Some(snippet.to_string()));
        }
    }

    Ok(None)
}
