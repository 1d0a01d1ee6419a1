pub use super::message::Entity as Message;
pub use super::postboard_user::Entity as PostboardUser;
