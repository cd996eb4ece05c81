//! Reserved keys and sentinel names used while reading the export.

/// Configuration for building an action catalog from a Postman export.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CatalogConfig {
    /// Parameter key carrying the action identifier (e.g. "action")
    pub action_key: String,
    /// Session parameter that is never emitted as an argument (e.g. "CID")
    pub session_key: String,
    /// Display name given to the tree root
    pub root_name: String,
    /// Folder name skipped entirely during descent
    pub skip_folder: String,
    /// Character that joins words in slugs, call names and identifiers
    pub connector: char,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            action_key: "action".into(),
            session_key: "CID".into(),
            root_name: "Root".into(),
            skip_folder: "DEPRECATED".into(),
            connector: '_',
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter key that identifies the action.
    pub fn action_key(mut self, key: impl Into<String>) -> Self {
        self.action_key = key.into();
        self
    }

    /// Set the session parameter key that is dropped from every call.
    pub fn session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set the folder name that is skipped at the point of descent.
    pub fn skip_folder(mut self, name: impl Into<String>) -> Self {
        self.skip_folder = name.into();
        self
    }

    pub fn connector(mut self, connector: char) -> Self {
        self.connector = connector;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_documented_reserved_names() {
        let config = CatalogConfig::default();
        assert_eq!(config.action_key, "action");
        assert_eq!(config.session_key, "CID");
        assert_eq!(config.root_name, "Root");
        assert_eq!(config.skip_folder, "DEPRECATED");
        assert_eq!(config.connector, '_');
    }

    #[test]
    fn builder_setters_override_defaults() {
        let config = CatalogConfig::new()
            .action_key("op")
            .session_key("token")
            .root_name("Api")
            .skip_folder("OLD")
            .connector('-');
        assert_eq!(config.action_key, "op");
        assert_eq!(config.session_key, "token");
        assert_eq!(config.root_name, "Api");
        assert_eq!(config.skip_folder, "OLD");
        assert_eq!(config.connector, '-');
    }
}
