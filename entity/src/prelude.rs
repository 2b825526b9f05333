pub use super::product::Entity as Product;
