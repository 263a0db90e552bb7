use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PoliticalGroupDto {
    pub id: i32,
    pub name: String,
    pub leader: Option<String>,
    pub affiliation: Option<String>,
    pub allies: Option<String>,
    pub enemies: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PoliticalGroupPayloadDto {
    pub name: String,
    pub leader: Option<String>,
    pub affiliation: Option<String>,
    pub allies: Option<String>,
    pub enemies: Option<String>,
    pub description: Option<String>,
}
