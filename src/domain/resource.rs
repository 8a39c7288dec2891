use super::enums::Category;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique ID for internal references (not persisted)
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl Resource {
    pub fn new(name: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            url,
        }
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.url == other.url
    }
}

impl Eq for Resource {}

/// A row of the flattened resource list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRow {
    Header(Category),
    Entry {
        category: Category,
        index: usize,
        id: Uuid,
        name: String,
        url: String,
    },
}

impl ResourceRow {
    /// Text for list rendering
    pub fn label(&self) -> String {
        match self {
            ResourceRow::Header(category) => format!("--- {} ---", category.label()),
            ResourceRow::Entry { name, url, .. } => format!("{} - {}", name, url),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ResourceRow::Header(_))
    }
}

/// Resources grouped by category
///
/// One field per category, so the data file always carries all three keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRegistry {
    #[serde(default)]
    reading: Vec<Resource>,
    #[serde(default)]
    practice: Vec<Resource>,
    #[serde(default)]
    links: Vec<Resource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, category: Category) -> &[Resource] {
        match category {
            Category::Reading => &self.reading,
            Category::Practice => &self.practice,
            Category::Links => &self.links,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<Resource> {
        match category {
            Category::Reading => &mut self.reading,
            Category::Practice => &mut self.practice,
            Category::Links => &mut self.links,
        }
    }

    /// Validate and append a resource; returns its category and id
    pub fn add(&mut self, category: &str, name: &str, url: &str) -> Result<(Category, Uuid)> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(AppError::validation("Resource name and URL are required"));
        }
        let category: Category = category.parse()?;

        let resource = Resource::new(name.to_string(), url.to_string());
        let id = resource.id;
        self.entries_mut(category).push(resource);
        Ok((category, id))
    }

    /// Remove the resource at `index` within `category`
    pub fn delete(&mut self, category: &str, index: usize) -> Result<Resource> {
        let category: Category = category.parse()?;
        self.delete_in(category, index)
    }

    pub fn delete_in(&mut self, category: Category, index: usize) -> Result<Resource> {
        let entries = self.entries_mut(category);
        if index >= entries.len() {
            return Err(AppError::Index {
                what: "resource",
                index,
                len: entries.len(),
            });
        }
        Ok(entries.remove(index))
    }

    /// Remove the resource with `id`, wherever it lives
    pub fn delete_by_id(&mut self, id: Uuid) -> Result<(Category, Resource)> {
        let (category, index) = self
            .locate(id)
            .ok_or_else(|| AppError::validation("The selected resource no longer exists"))?;
        let resource = self.delete_in(category, index)?;
        Ok((category, resource))
    }

    /// Owning category and position of the resource with `id`
    pub fn locate(&self, id: Uuid) -> Option<(Category, usize)> {
        Category::all().iter().find_map(|&category| {
            self.entries(category)
                .iter()
                .position(|r| r.id == id)
                .map(|index| (category, index))
        })
    }

    pub fn get(&self, id: Uuid) -> Option<&Resource> {
        self.locate(id)
            .map(|(category, index)| &self.entries(category)[index])
    }

    /// Flattened rows: a header per category followed by its entries
    pub fn list(&self) -> Vec<ResourceRow> {
        let mut rows = Vec::with_capacity(self.len() + Category::all().len());

        for &category in Category::all() {
            rows.push(ResourceRow::Header(category));
            for (index, resource) in self.entries(category).iter().enumerate() {
                rows.push(ResourceRow::Entry {
                    category,
                    index,
                    id: resource.id,
                    name: resource.name.clone(),
                    url: resource.url.clone(),
                });
            }
        }

        rows
    }

    pub fn len(&self) -> usize {
        self.reading.len() + self.practice.len() + self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_to_each_category() {
        let mut registry = ResourceRegistry::new();
        registry.add("reading", "Rust Book", "https://doc.rust-lang.org/book/").unwrap();
        registry.add("Practice", "Exercism", "https://exercism.org").unwrap();
        registry.add("LINKS", "Docs", "https://docs.rs").unwrap();

        assert_eq!(registry.entries(Category::Reading)[0].name, "Rust Book");
        assert_eq!(registry.entries(Category::Practice)[0].url, "https://exercism.org");
        assert_eq!(registry.entries(Category::Links)[0].name, "Docs");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_unknown_category_does_not_mutate() {
        let mut registry = ResourceRegistry::new();
        let before = registry.clone();

        let err = registry.add("videos", "Talk", "https://example.com").unwrap_err();
        assert_eq!(err.code(), "unknown_category");
        assert_eq!(registry, before);
    }

    #[test]
    fn test_add_requires_name_and_url() {
        let mut registry = ResourceRegistry::new();
        assert_eq!(registry.add("reading", "", "u").unwrap_err().code(), "validation");
        assert_eq!(registry.add("reading", "n", " ").unwrap_err().code(), "validation");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_delete() {
        let mut registry = ResourceRegistry::new();
        registry.add("practice", "A", "a").unwrap();
        registry.add("practice", "B", "b").unwrap();

        let removed = registry.delete("practice", 0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(registry.entries(Category::Practice)[0].name, "B");

        assert_eq!(registry.delete("practice", 5).unwrap_err().code(), "index");
        assert_eq!(registry.delete("reading", 0).unwrap_err().code(), "index");
        assert_eq!(registry.delete("videos", 0).unwrap_err().code(), "unknown_category");
    }

    #[test]
    fn test_delete_by_id_uses_owning_category() {
        let mut registry = ResourceRegistry::new();
        registry.add("reading", "R", "r").unwrap();
        let (_, links_id) = registry.add("links", "L", "l").unwrap();

        let (category, removed) = registry.delete_by_id(links_id).unwrap();
        assert_eq!(category, Category::Links);
        assert_eq!(removed.name, "L");
        assert_eq!(registry.entries(Category::Reading).len(), 1);
    }

    #[test]
    fn test_list_groups_in_fixed_order() {
        let mut registry = ResourceRegistry::new();
        registry.add("links", "L", "l").unwrap();
        registry.add("reading", "R", "r").unwrap();

        let labels: Vec<String> = registry.list().iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec![
                "--- Reading ---",
                "R - r",
                "--- Practice ---",
                "--- Links ---",
                "L - l",
            ]
        );
    }

    #[test]
    fn test_list_on_empty_registry_has_headers() {
        let rows = ResourceRegistry::new().list();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.is_header()));
    }

    #[test]
    fn test_json_always_has_three_keys() {
        let json = serde_json::to_value(ResourceRegistry::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "reading": [], "practice": [], "links": [] })
        );

        let partial: ResourceRegistry =
            serde_json::from_str(r#"{ "links": [{ "name": "a", "url": "b" }] }"#).unwrap();
        assert_eq!(partial.entries(Category::Links).len(), 1);
        assert!(partial.entries(Category::Reading).is_empty());
    }
}
