//! Servant domain model.

use crate::model::servant::ServantDto;

/// A playable character record from the catalog.
///
/// Records are loaded once at startup and never modified. Draw results are owned clones so
/// they can be serialized independently of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Servant {
    /// Unique identifier within the catalog.
    pub collection_no: i32,
    /// Name in the original language.
    pub original_name: String,
    /// Display name.
    pub name: String,
    /// Rarity tier, the only input to draw weighting.
    pub rarity: i32,
    /// Class of the servant. Informational only.
    pub class_name: String,
    /// Attack at max level.
    pub atk_max: i32,
    /// HP at max level.
    pub hp_max: i32,
    /// Attribute of the servant. Informational only.
    pub attribute: String,
    /// Portrait asset name.
    pub face: String,
    /// Portrait asset path.
    pub face_path: String,
}

impl Servant {
    /// Converts an entity model to a servant domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Servant` - The converted servant domain model
    pub fn from_entity(entity: entity::servant::Model) -> Self {
        Self {
            collection_no: entity.collection_no,
            original_name: entity.original_name,
            name: entity.name,
            rarity: entity.rarity,
            class_name: entity.class_name,
            atk_max: entity.atk_max,
            hp_max: entity.hp_max,
            attribute: entity.attribute,
            face: entity.face,
            face_path: entity.face_path,
        }
    }

    /// Converts the servant domain model to a DTO for API responses.
    pub fn into_dto(self) -> ServantDto {
        ServantDto {
            collection_no: self.collection_no,
            original_name: self.original_name,
            name: self.name,
            rarity: self.rarity,
            class_name: self.class_name,
            atk_max: self.atk_max,
            hp_max: self.hp_max,
            attribute: self.attribute,
            face: self.face,
            face_path: self.face_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    #[test]
    fn default_fixture_maps_to_default_servant() {
        let servant = Servant::from_entity(fixture::servant::entity());

        assert_eq!(servant.collection_no, fixture::servant::DEFAULT_COLLECTION_NO);
        assert_eq!(servant.rarity, fixture::servant::DEFAULT_RARITY);
        assert_eq!(servant.name, "Servant 1");
        assert_eq!(servant.original_name, servant.name);
    }

    #[test]
    fn carries_every_field_through_to_dto() {
        let entity = fixture::servant::entity_builder()
            .collection_no(1)
            .name("Mash Kyrielight")
            .original_name("マシュ・キリエライト")
            .rarity(4)
            .class_name("shielder")
            .atk_max(6791)
            .hp_max(12877)
            .attribute("earth")
            .build();

        let dto = Servant::from_entity(entity.clone()).into_dto();

        assert_eq!(dto.collection_no, 1);
        assert_eq!(dto.name, "Mash Kyrielight");
        assert_eq!(dto.original_name, "マシュ・キリエライト");
        assert_eq!(dto.rarity, 4);
        assert_eq!(dto.class_name, "shielder");
        assert_eq!(dto.atk_max, 6791);
        assert_eq!(dto.hp_max, 12877);
        assert_eq!(dto.attribute, "earth");
        assert_eq!(dto.face, entity.face);
        assert_eq!(dto.face_path, entity.face_path);
    }
}
