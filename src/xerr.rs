// std imports
use std::{cmp::Ordering, collections::HashSet, fmt, sync::Arc};

const MIN_RELEVANCE: f64 = 0.75;

// ---

/// Suggestions holds known variants similar to a mistyped value,
/// most relevant first.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    candidates: Vec<(f64, Arc<str>)>,
}

impl Suggestions {
    pub fn new<T, I>(wanted: &str, variants: I) -> Self
    where
        T: Into<Arc<str>>,
        I: IntoIterator<Item = T>,
    {
        let wanted = wanted.to_lowercase();
        let mut candidates = Vec::<(f64, Arc<str>)>::new();
        let mut reg = HashSet::new();

        for variant in variants {
            let variant = variant.into();
            if !reg.insert(variant.clone()) {
                continue;
            }

            let relevance = strsim::jaro(&wanted, &variant);
            if relevance > MIN_RELEVANCE {
                let pos = candidates
                    .binary_search_by(|candidate| {
                        if candidate.0 < relevance {
                            Ordering::Greater
                        } else {
                            Ordering::Less
                        }
                    })
                    .unwrap_or_else(|e| e);
                candidates.insert(pos, (relevance, variant));
            }
        }

        Self { candidates }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|(_, v)| &**v)
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, variant) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{:?}", variant)?;
        }
        Ok(())
    }
}
