//! Subject and sample identifier derivation from marker filenames

use crate::io::configuration::{SAMPLE_PAD_WIDTH, SAMPLE_SENTINEL};
use crate::io::error::{PipelineError, Result};

// Session tokens carry the acquisition year
const SESSION_MARKER: &str = "2025";

/// Subject and sample identifiers derived from a filename stem
///
/// Used purely as an output-naming key; neither part is validated against
/// any participant registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectId {
    /// Subject identifier
    pub subject: String,
    /// Sample identifier, zero-padded to four digits
    pub sample: String,
}

impl SubjectId {
    /// Derive subject and sample identifiers from a filename stem
    ///
    /// The stem is split on `-` and `_`; a leading literal `sub` token is
    /// dropped. The subject is the first token, unless a token contains the
    /// session marker: then the subject is that token's remainder after the
    /// marker, or the following token when the marker stands alone. The
    /// sample is the last token, with the whole-slide sentinel normalized
    /// to sample 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the stem holds no usable tokens or the session
    /// marker is not followed by a subject token
    pub fn from_stem(stem: &str) -> Result<Self> {
        let mut tokens: Vec<&str> = stem.split(['-', '_']).filter(|t| !t.is_empty()).collect();
        if tokens.first() == Some(&"sub") {
            tokens.remove(0);
        }

        let first = *tokens.first().ok_or_else(|| PipelineError::Naming {
            stem: stem.to_string(),
            reason: "stem holds no identifier tokens",
        })?;

        let subject = match tokens.iter().position(|t| t.contains(SESSION_MARKER)) {
            Some(i) => {
                let token = tokens.get(i).copied().unwrap_or_default();
                match token.strip_prefix(SESSION_MARKER) {
                    Some(rest) if !rest.is_empty() => rest,
                    _ => *tokens.get(i + 1).ok_or_else(|| PipelineError::Naming {
                        stem: stem.to_string(),
                        reason: "no subject token after the session token",
                    })?,
                }
            }
            None => first,
        };

        let sample_token = tokens.last().copied().unwrap_or(first);
        let sample = if sample_token == SAMPLE_SENTINEL {
            "1"
        } else {
            sample_token
        };

        let width = SAMPLE_PAD_WIDTH;
        Ok(Self {
            subject: subject.to_string(),
            sample: format!("{sample:0>width$}"),
        })
    }

    /// Output filename for this subject's compressed keypoints
    pub fn keypoints_filename(&self) -> String {
        format!("sub-{}_sample-{}_keypoints.json", self.subject, self.sample)
    }
}
