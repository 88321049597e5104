use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A servant as exposed over the API.
///
/// Field names match the catalog export consumed by the front-end, including the
/// snake_case `face_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServantDto {
    pub collection_no: i32,
    pub original_name: String,
    pub name: String,
    pub rarity: i32,
    pub class_name: String,
    pub atk_max: i32,
    pub hp_max: i32,
    pub attribute: String,
    pub face: String,
    #[serde(rename = "face_path")]
    pub face_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServantListDto {
    pub servants: Vec<ServantDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServantLookupDto {
    pub servant: ServantDto,
}
