use super::equipment::Equipment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub company_id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Company {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            equipment: Vec::new(),
            projects: Vec::new(),
        }
    }
}
