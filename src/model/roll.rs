use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::servant::ServantDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SingleRollDto {
    pub roll: ServantDto,
}

/// Result of a multi roll. `rolls[0]` is the guaranteed 4★-or-above slot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MultiRollDto {
    pub rolls: Vec<ServantDto>,
}
