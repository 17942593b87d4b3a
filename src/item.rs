//! Raw build items and the ordered list they are collected in.

/// A candidate constant as declared in the build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Constant name; must be a valid identifier to be emitted.
    pub name: String,

    /// Raw value text. Items without a value are skipped silently.
    #[serde(default)]
    pub value: Option<String>,

    /// Value type: `string` (the default) or `bool`.
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,

    /// Documentation text for the generated member.
    #[serde(default)]
    pub summary: Option<String>,

    /// Whether this item comes from project metadata rather than a declaration.
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

impl Item {
    /// Creates a string item with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Sets the type tag.
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }

    /// Sets the documentation summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Returns the value if it is present and non-empty.
    pub fn non_empty_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// An insertion-ordered list of items.
///
/// Duplicates are kept; deciding which one wins is the generator's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item at the end.
    pub fn push(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Removes every item named `name`. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        before - self.items.len()
    }

    /// Drops default-marked items unless `include` is set.
    pub fn retain_defaults(&mut self, include: bool) -> &mut Self {
        if !include {
            self.items.retain(|item| !item.is_default);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

impl Extend<Item> for ItemList {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &ItemList) -> Vec<&str> {
        list.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let mut list = ItemList::new();
        list.push(Item::new("B", "2"))
            .push(Item::new("A", "1"))
            .push(Item::new("C", "3"));
        assert_eq!(names(&list), ["B", "A", "C"]);
    }

    #[test]
    fn test_remove_by_name() {
        let mut list: ItemList = [
            Item::new("Version", "1.0.0"),
            Item::new("Product", "App"),
            Item::new("Version", "2.0.0"),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.remove("Version"), 2);
        assert_eq!(names(&list), ["Product"]);
        assert_eq!(list.remove("Missing"), 0);
        // ordinal match only
        assert_eq!(list.remove("product"), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_retain_defaults() {
        let mut default = Item::new("Version", "1.0.0");
        default.is_default = true;
        let mut list: ItemList = [default, Item::new("Custom", "x")].into_iter().collect();

        list.retain_defaults(true);
        assert_eq!(list.len(), 2);

        list.retain_defaults(false);
        assert_eq!(names(&list), ["Custom"]);
    }

    #[test]
    fn test_non_empty_value() {
        assert_eq!(Item::new("A", "x").non_empty_value(), Some("x"));
        assert_eq!(Item::new("A", "").non_empty_value(), None);
        let absent = Item {
            name: "A".into(),
            ..Default::default()
        };
        assert_eq!(absent.non_empty_value(), None);
    }

    #[test]
    fn test_item_deserialize() {
        let item: Item = serde_json::from_str(
            r#"{"name": "IsDebug", "value": "true", "type": "bool", "summary": "Debug build."}"#,
        )
        .unwrap();
        assert_eq!(
            item,
            Item::new("IsDebug", "true")
                .with_type("bool")
                .with_summary("Debug build.")
        );
        assert!(!item.is_default);

        let bare: Item = serde_json::from_str(r#"{"name": "Empty"}"#).unwrap();
        assert_eq!(bare.value, None);
        assert_eq!(bare.type_tag, None);

        assert!(serde_json::from_str::<Item>(r#"{"name": "X", "vaule": "typo"}"#).is_err());
    }
}
