//! # Favorites Registry
//!
//! A set of country names toggled on and off. The registry is owned by the
//! app state and reached through [`crate::core::state::App::favorites_mut`];
//! when it is not mounted the accessor returns [`FavoritesError::OutsideProvider`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    /// The registry was accessed while no provider owns it.
    OutsideProvider,
}

impl fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoritesError::OutsideProvider => {
                write!(f, "favorites accessed outside of their provider")
            }
        }
    }
}

impl std::error::Error for FavoritesError {}

/// Favorite country names, in the order they were added. No duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    names: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `name` if present, adds it otherwise.
    /// Returns true when `name` is a favorite afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
