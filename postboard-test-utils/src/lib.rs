pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::factory, test_setup_with_message_tables, test_setup_with_tables,
        TestBuilder, TestContext, TestError,
    };
}
