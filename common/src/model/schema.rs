use serde::{Deserialize, Serialize};

/// A schema column as returned by the backend: either a bare name or a
/// `{ "name": ..., "type": ... }` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaColumn {
    Name(String),
    Typed {
        name: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        data_type: Option<String>,
    },
}

impl SchemaColumn {
    pub fn name(&self) -> &str {
        match self {
            SchemaColumn::Name(name) => name,
            SchemaColumn::Typed { name, .. } => name,
        }
    }

    pub fn data_type(&self) -> Option<&str> {
        match self {
            SchemaColumn::Name(_) => None,
            SchemaColumn::Typed { data_type, .. } => data_type.as_deref(),
        }
    }
}

/// Ordered column list of the dataset behind the current data path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<SchemaColumn>,
}

impl Schema {
    pub fn new(columns: Vec<SchemaColumn>) -> Self {
        Schema { columns }
    }

    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.name() == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_plain_and_typed_columns() {
        let schema: Schema = serde_json::from_value(json!({
            "columns": ["ID", { "name": "AMT", "type": "double" }]
        }))
        .unwrap();
        assert_eq!(schema.names(), vec!["ID".to_string(), "AMT".to_string()]);
        assert_eq!(schema.columns[1].data_type(), Some("double"));
        assert!(schema.contains("AMT"));
        assert!(!schema.contains("amt"));
    }
}
