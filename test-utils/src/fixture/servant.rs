//! Servant fixtures for creating in-memory test data.

use entity::servant;

/// Default collection number for fixture servants.
pub const DEFAULT_COLLECTION_NO: i32 = 1;

/// Default rarity for fixture servants.
pub const DEFAULT_RARITY: i32 = 3;

/// Default class name for fixture servants.
pub const DEFAULT_CLASS_NAME: &str = "saber";

/// Default attribute for fixture servants.
pub const DEFAULT_ATTRIBUTE: &str = "earth";

/// Creates a servant entity model with default values.
///
/// # Default Values
/// - collection_no: `1`
/// - name / original_name: `"Servant 1"`
/// - rarity: `3`
/// - class_name: `"saber"`
/// - atk_max: `10000`, hp_max: `12000`
/// - attribute: `"earth"`
/// - face / face_path derived from the collection number
///
/// # Returns
/// - `servant::Model` - In-memory servant entity
pub fn entity() -> servant::Model {
    entity_builder().build()
}

/// Creates a servant entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let servant = fixture::servant::entity_builder()
///     .collection_no(42)
///     .rarity(5)
///     .build();
/// ```
pub fn entity_builder() -> ServantEntityBuilder {
    ServantEntityBuilder::default()
}

/// Builds one servant per `(collection_no, rarity)` pair with otherwise default values.
///
/// # Arguments
/// - `servants` - Collection number and rarity of each servant, in output order
///
/// # Returns
/// - `Vec<servant::Model>` - Servants in the order given
pub fn entities_with_rarities(servants: &[(i32, i32)]) -> Vec<servant::Model> {
    servants
        .iter()
        .map(|&(collection_no, rarity)| {
            entity_builder()
                .collection_no(collection_no)
                .rarity(rarity)
                .build()
        })
        .collect()
}

/// Builder for creating customized servant entity models.
pub struct ServantEntityBuilder {
    collection_no: i32,
    name: Option<String>,
    original_name: Option<String>,
    rarity: i32,
    class_name: String,
    atk_max: i32,
    hp_max: i32,
    attribute: String,
}

impl Default for ServantEntityBuilder {
    fn default() -> Self {
        Self {
            collection_no: DEFAULT_COLLECTION_NO,
            name: None,
            original_name: None,
            rarity: DEFAULT_RARITY,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            atk_max: 10000,
            hp_max: 12000,
            attribute: DEFAULT_ATTRIBUTE.to_string(),
        }
    }
}

impl ServantEntityBuilder {
    /// Sets the collection number.
    pub fn collection_no(mut self, collection_no: i32) -> Self {
        self.collection_no = collection_no;
        self
    }

    /// Sets the display name. Defaults to `"Servant {collection_no}"`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the original (untranslated) name. Defaults to the display name.
    pub fn original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = Some(original_name.into());
        self
    }

    /// Sets the rarity tier.
    pub fn rarity(mut self, rarity: i32) -> Self {
        self.rarity = rarity;
        self
    }

    /// Sets the class name.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets the maximum attack stat.
    pub fn atk_max(mut self, atk_max: i32) -> Self {
        self.atk_max = atk_max;
        self
    }

    /// Sets the maximum HP stat.
    pub fn hp_max(mut self, hp_max: i32) -> Self {
        self.hp_max = hp_max;
        self
    }

    /// Sets the attribute.
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Builds and returns the servant entity model.
    pub fn build(self) -> servant::Model {
        let name = self
            .name
            .unwrap_or_else(|| format!("Servant {}", self.collection_no));
        let original_name = self.original_name.unwrap_or_else(|| name.clone());
        let face = format!("{}_face.png", self.collection_no);
        let face_path = format!("/faces/{}", face);

        servant::Model {
            collection_no: self.collection_no,
            original_name,
            name,
            rarity: self.rarity,
            class_name: self.class_name,
            atk_max: self.atk_max,
            hp_max: self.hp_max,
            attribute: self.attribute,
            face,
            face_path,
        }
    }
}
