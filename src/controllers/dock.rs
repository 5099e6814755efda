//! Hotkey wiring for the dock.

use ahash::AHashMap;

use crate::error::{Error, Result};

/// Single-key hotkeys mapped to dock item positions
#[derive(Debug, Clone, Default)]
pub struct DockHotkeys {
    keys: AHashMap<char, usize>,
}

impl DockHotkeys {
    /// Build the map from each item's optional hotkey, in item order.
    ///
    /// Hotkeys are single characters compared case-insensitively; a key
    /// claimed by two items is rejected.
    pub fn from_items<'a, I>(hotkeys: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut keys = AHashMap::new();

        for (index, hotkey) in hotkeys.into_iter().enumerate() {
            let Some(hotkey) = hotkey else {
                continue;
            };
            let key = normalize_hotkey(hotkey).ok_or_else(|| Error::InvalidParam {
                component: "dock",
                field: "hotkey",
                message: format!("{hotkey:?} is not a single character"),
            })?;

            if let Some(existing) = keys.insert(key, index) {
                return Err(Error::InvalidParam {
                    component: "dock",
                    field: "hotkey",
                    message: format!("{key:?} is bound to items {existing} and {index}"),
                });
            }
        }

        Ok(Self { keys })
    }

    /// Item index bound to the pressed key, if any
    pub fn resolve(&self, pressed: &str) -> Option<usize> {
        normalize_hotkey(pressed).and_then(|key| self.keys.get(&key).copied())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The lowercase character a hotkey stands for, ignoring surrounding
/// whitespace; `None` unless exactly one character remains
pub fn normalize_hotkey(key: &str) -> Option<char> {
    let mut chars = key.trim().chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    first.to_lowercase().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hotkey() {
        assert_eq!(normalize_hotkey(" H "), Some('h'));
        assert_eq!(normalize_hotkey("k"), Some('k'));
        assert_eq!(normalize_hotkey("  "), None);
        assert_eq!(normalize_hotkey("Tab"), None);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let hotkeys = DockHotkeys::from_items([Some("h"), None, Some("S")]).expect("valid");
        assert_eq!(hotkeys.len(), 2);
        assert_eq!(hotkeys.resolve("H"), Some(0));
        assert_eq!(hotkeys.resolve("s"), Some(2));
        assert_eq!(hotkeys.resolve("x"), None);
        assert_eq!(hotkeys.resolve("Shift"), None);
    }

    #[test]
    fn test_duplicate_hotkey_rejected() {
        let err = DockHotkeys::from_items([Some("g"), Some("G")]).expect_err("duplicate");
        assert!(err.to_string().contains("hotkey"));
    }

    #[test]
    fn test_multi_char_hotkey_rejected() {
        assert!(DockHotkeys::from_items([Some("ctrl")]).is_err());
    }
}
