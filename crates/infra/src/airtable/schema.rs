//! Base metadata: table schemas and choice-field extraction

use rfshop_domain::constants::SINGLE_SELECT_FIELD_TYPE;
use rfshop_domain::SelectOptionsMap;
use serde::Deserialize;

/// Response of `GET {base}/meta/bases/{base_id}/tables`.
#[derive(Debug, Default, Deserialize)]
pub struct TablesResponse {
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

#[derive(Debug, Deserialize)]
pub struct TableSchema {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Option<FieldOptions>,
}

#[derive(Debug, Deserialize)]
pub struct FieldOptions {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub name: String,
}

impl TablesResponse {
    /// Declared values of every single-choice field, in declaration order.
    ///
    /// Field names are not namespaced by table: when two tables declare a
    /// field with the same name, the later table wins.
    pub fn select_options(&self) -> SelectOptionsMap {
        let mut options = SelectOptionsMap::new();

        for table in &self.tables {
            for field in &table.fields {
                if field.kind != SINGLE_SELECT_FIELD_TYPE {
                    continue;
                }
                let Some(choices) = field.options.as_ref().and_then(|o| o.choices.as_ref()) else {
                    continue;
                };
                options.insert(field.name.clone(), choices.iter().map(|c| c.name.clone()).collect());
            }
        }

        options
    }
}
