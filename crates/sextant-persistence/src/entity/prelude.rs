pub use super::api_definition::Entity as ApiDefinitionEntity;
