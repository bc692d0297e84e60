use crate::{Dialect, Error, Result};
use std::{collections::BTreeMap, sync::Arc};
use url::Url;

pub type DialectFactory = fn() -> Arc<dyn Dialect>;

/// Dialects addressable by `<family>.<driver>`. Built once at startup, never mutated afterwards.
#[derive(Default)]
pub struct DialectRegistry {
    entries: BTreeMap<&'static str, DialectFactory>,
}

impl DialectRegistry {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, DialectFactory)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn load(&self, key: &str) -> Result<Arc<dyn Dialect>> {
        match self.entries.get(key) {
            Some(factory) => Ok(factory()),
            None => {
                let error = Error::msg(format!(
                    "No dialect registered as `{}` (available: {})",
                    key,
                    self.keys().collect::<Vec<_>>().join(", ")
                ));
                log::error!("{:#}", error);
                Err(error)
            }
        }
    }

    /// Select the dialect from a connection URL scheme `<family>+<driver>://...`.
    pub fn from_url(&self, url: &str) -> Result<Arc<dyn Dialect>> {
        let context = || format!("While selecting the dialect for `{}`", url);
        let parsed = Url::parse(url).map_err(|e| {
            let error = Error::new(e).context(context());
            log::error!("{:#}", error);
            error
        })?;
        let Some((family, driver)) = parsed.scheme().split_once('+') else {
            let error = Error::msg(format!(
                "Connection url scheme `{}` must have the form `<family>+<driver>`",
                parsed.scheme()
            ))
            .context(context());
            log::error!("{:#}", error);
            return Err(error);
        };
        self.load(&format!("{}.{}", family, driver))
    }
}
