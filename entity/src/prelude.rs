pub use super::servant::Entity as Servant;
