// ABOUTME: Read-only food-equivalents catalog used to populate food entries before aggregation
// ABOUTME: FoodCatalog trait plus an in-memory catalog loaded from JSON with accent-insensitive search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::EngineConfig;
use nutricalc_core::errors::{AppError, AppResult};
use nutricalc_core::models::FoodItem;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read-only lookup of per-serving food values
pub trait FoodCatalog {
    /// Foods whose name contains `query`, ignoring case and accents
    ///
    /// A blank query matches nothing.
    fn search(&self, query: &str) -> Vec<&FoodItem>;

    /// Food by catalog identifier
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no food has this identifier
    fn get(&self, id: &str) -> AppResult<&FoodItem>;
}

/// Lowercase `text` and strip the accents used in Spanish food names
#[must_use]
pub fn fold_for_search(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Catalog held in memory, searched in catalog order
#[derive(Debug, Clone)]
pub struct InMemoryFoodCatalog {
    items: Vec<FoodItem>,
    folded_names: Vec<String>,
    max_results: usize,
}

impl InMemoryFoodCatalog {
    /// Catalog over `items`, capped by the global configuration's `max_results`
    #[must_use]
    pub fn new(items: Vec<FoodItem>) -> Self {
        let folded_names = items.iter().map(|item| fold_for_search(&item.name)).collect();
        Self {
            items,
            folded_names,
            max_results: EngineConfig::global().catalog.max_results,
        }
    }

    /// Override the search result cap (at least 1)
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }

    /// Parse a JSON array of foods
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is not an array of foods
    pub fn from_json(json: &str) -> AppResult<Self> {
        let items: Vec<FoodItem> = serde_json::from_str(json)?;
        debug!(count = items.len(), "Parsed food catalog");
        Ok(Self::new(items))
    }

    /// Load a JSON array of foods from a file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a serialization
    /// error if its content is not an array of foods
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read food catalog {}", path.display()))
                .with_source(e)
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), count = catalog.len(), "Loaded food catalog");
        Ok(catalog)
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FoodCatalog for InMemoryFoodCatalog {
    fn search(&self, query: &str) -> Vec<&FoodItem> {
        let needle = fold_for_search(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .zip(&self.folded_names)
            .filter(|(_, name)| name.contains(&needle))
            .map(|(item, _)| item)
            .take(self.max_results)
            .collect()
    }

    fn get(&self, id: &str) -> AppResult<&FoodItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::not_found(format!("Food {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutricalc_core::errors::ErrorCode;

    const CATALOG: &str = r#"[
        {"id": "cer-1", "name": "Tortilla de maíz", "group": "cereales", "unit": "pieza",
         "kcal": 70, "protein_g": 2, "fat_g": 0.5, "carb_g": 15},
        {"id": "cer-2", "name": "Tortilla de harina", "group": "cereales", "unit": "pieza",
         "kcal": 115, "protein_g": 3, "fat_g": 3, "carb_g": 19},
        {"id": "leg-1", "name": "Frijol cocido", "group": "leguminosas", "unit": "taza",
         "kcal": 120, "protein_g": 8, "fat_g": 1, "carb_g": 20},
        {"id": "fru-1", "name": "Piña", "group": "frutas", "unit": "taza",
         "kcal": 60, "protein_g": 0, "fat_g": 0, "carb_g": 15}
    ]"#;

    #[test]
    fn test_search_ignores_case_and_accents() {
        let catalog = InMemoryFoodCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 4);

        let names: Vec<&str> = catalog
            .search("MAIZ")
            .into_iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Tortilla de maíz"]);

        assert_eq!(catalog.search("pina").len(), 1);
        assert_eq!(catalog.search("tortilla").len(), 2);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let catalog = InMemoryFoodCatalog::from_json(CATALOG).unwrap();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_search_is_capped() {
        let catalog = InMemoryFoodCatalog::from_json(CATALOG)
            .unwrap()
            .with_max_results(1);
        let hits = catalog.search("o");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "cer-1");
    }

    #[test]
    fn test_get_by_id() {
        let catalog = InMemoryFoodCatalog::from_json(CATALOG).unwrap();
        assert!((catalog.get("leg-1").unwrap().per_serving.protein_g - 8.0).abs() < f64::EPSILON);
        let err = catalog.get("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = InMemoryFoodCatalog::from_json("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_fold_for_search() {
        assert_eq!(fold_for_search("  Jamón Ñoño "), "jamon nono");
    }
}
