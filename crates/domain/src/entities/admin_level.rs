//! Administrative hierarchy levels

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Deepest administrative level an address may carry
pub const MAX_ADMIN_LEVEL: u8 = 5;

/// One rung of an address's administrative hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLevel {
    level: u8,
    name: String,
    code: Option<String>,
}

impl AdminLevel {
    /// Create an administrative level
    #[must_use]
    pub fn new(level: u8, name: impl Into<String>, code: Option<String>) -> Self {
        Self {
            level,
            name: name.into(),
            code,
        }
    }

    /// Level number (1 is the widest)
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Administrative code, when the source provided one
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// Validated, level-ordered set of [`AdminLevel`]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminLevelCollection {
    levels: Vec<AdminLevel>,
}

impl AdminLevelCollection {
    /// Build a collection, sorting by level
    ///
    /// # Errors
    ///
    /// Returns an error if a level is outside `1..=MAX_ADMIN_LEVEL` or a
    /// level occurs more than once.
    pub fn new(mut levels: Vec<AdminLevel>) -> Result<Self, DomainError> {
        for admin_level in &levels {
            if admin_level.level == 0 || admin_level.level > MAX_ADMIN_LEVEL {
                return Err(DomainError::InvalidAdminLevel {
                    level: admin_level.level,
                    max: MAX_ADMIN_LEVEL,
                });
            }
        }

        levels.sort_by_key(AdminLevel::level);
        if let Some(pair) = levels.windows(2).find(|pair| pair[0].level == pair[1].level) {
            return Err(DomainError::DuplicateAdminLevel(pair[0].level));
        }

        Ok(Self { levels })
    }

    /// Look up a level by number
    #[must_use]
    pub fn get(&self, level: u8) -> Option<&AdminLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// The widest level present
    #[must_use]
    pub fn first(&self) -> Option<&AdminLevel> {
        self.levels.first()
    }

    /// Iterate from the widest to the narrowest level
    pub fn iter(&self) -> std::slice::Iter<'_, AdminLevel> {
        self.levels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdminLevelCollection {
    type Item = &'a AdminLevel;
    type IntoIter = std::slice::Iter<'a, AdminLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_sorted() {
        let collection = AdminLevelCollection::new(vec![
            AdminLevel::new(5, "Burgwallen-Oude Zijde", Some("BU03630000".to_string())),
            AdminLevel::new(1, "Noord-Holland", Some("PV27".to_string())),
            AdminLevel::new(2, "Amsterdam", None),
        ])
        .unwrap();

        let order: Vec<u8> = collection.iter().map(AdminLevel::level).collect();
        assert_eq!(order, vec![1, 2, 5]);
        assert_eq!(collection.first().unwrap().name(), "Noord-Holland");
    }

    #[test]
    fn get_by_level() {
        let collection =
            AdminLevelCollection::new(vec![AdminLevel::new(3, "Centrum", None)]).unwrap();
        assert_eq!(collection.get(3).unwrap().name(), "Centrum");
        assert!(collection.get(3).unwrap().code().is_none());
        assert!(collection.get(1).is_none());
    }

    #[test]
    fn rejects_out_of_range_level() {
        assert!(matches!(
            AdminLevelCollection::new(vec![AdminLevel::new(6, "Too deep", None)]),
            Err(DomainError::InvalidAdminLevel { level: 6, .. })
        ));
        assert!(AdminLevelCollection::new(vec![AdminLevel::new(0, "Zero", None)]).is_err());
    }

    #[test]
    fn rejects_duplicate_level() {
        let result = AdminLevelCollection::new(vec![
            AdminLevel::new(2, "Amsterdam", None),
            AdminLevel::new(2, "Rotterdam", None),
        ]);
        assert!(matches!(result, Err(DomainError::DuplicateAdminLevel(2))));
    }

    #[test]
    fn empty_collection() {
        let collection = AdminLevelCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.first().is_none());
    }
}
