use crate::data::{default_region, find_locale, LocaleData};
use crate::LocaleError;

const MAX_SUBTAG_LEN: usize = 8;

/// Language and region extracted from a BCP 47 tag.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageTag {
    language: String,
    region: Option<String>,
}

impl LanguageTag {
    fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut subtags = trimmed.split(['-', '_']);
        let language = subtags.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|ch| ch.is_ascii_alphabetic())
        {
            return None;
        }

        let mut region = None;
        for subtag in subtags {
            let valid = !subtag.is_empty()
                && subtag.len() <= MAX_SUBTAG_LEN
                && subtag.chars().all(|ch| ch.is_ascii_alphanumeric());
            if !valid {
                return None;
            }

            // Extensions and private use (`-u-...`, `-x-...`) carry nothing we resolve on.
            if subtag.len() == 1 {
                break;
            }

            let is_region = (subtag.len() == 2 && subtag.chars().all(|ch| ch.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.chars().all(|ch| ch.is_ascii_digit()));
            if is_region && region.is_none() {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }
}

/// Resolve a locale tag against the builtin locale table.
///
/// Matching is case-insensitive and accepts `_` as a separator. Script,
/// variant and extension subtags are ignored. An unsupported region falls
/// back to the language's default region; an unsupported language fails.
pub fn resolve_locale(tag: &str) -> Result<&'static LocaleData, LocaleError> {
    let resolved = LanguageTag::parse(tag).and_then(|parsed| {
        parsed
            .region
            .as_deref()
            .and_then(|region| find_locale(&format!("{}-{region}", parsed.language)))
            .or_else(|| default_region(&parsed.language).and_then(find_locale))
    });

    resolved.ok_or_else(|| {
        tracing::debug!(locale = tag, "locale could not be resolved");
        LocaleError::UnsupportedLocale {
            locale: tag.to_owned(),
        }
    })
}
