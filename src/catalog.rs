mod builtin;
mod model;

use std::{fs, path::Path};

use indexmap::{map::Entry, IndexMap};
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::error::CatalogError;

pub use model::*;

/// Fixed collection of games, keyed by id and kept in definition order.
///
/// Built once at startup and only read afterwards. Serializes as a plain
/// JSON array of [`GameEntry`] objects.
#[derive(Debug, Default)]
pub struct Catalog {
    games: IndexMap<String, GameEntry>,
}

impl Catalog {
    /// Catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_entries(builtin::games())
    }

    /// Builds a catalog, rejecting entries with an empty or repeated id.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = GameEntry>,
    {
        let mut games: IndexMap<String, GameEntry> = IndexMap::new();

        for (position, game) in entries.into_iter().enumerate() {
            if game.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }

            if !game.is_available() {
                debug!("Game {} is not available yet", game.id);
            }

            match games.entry(game.id.clone()) {
                Entry::Occupied(v) => return Err(CatalogError::DuplicateId(v.key().clone())),
                Entry::Vacant(v) => {
                    v.insert(game);
                }
            }
        }

        Ok(Self { games })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<GameEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json: String = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    /// Loads the catalog file when one is configured, the builtin catalog otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog: Catalog = match path {
            Some(v) => {
                info!("Loading game catalog from {:?}", v);
                Self::from_json_file(v)?
            }
            None => Self::builtin()?,
        };

        info!("Game catalog holds {} games", catalog.len());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&GameEntry> {
        self.games.get(id)
    }

    /// Entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = &GameEntry> {
        self.games.values()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.games.values())
    }
}
