pub mod user_factory;

pub use user_factory::UserFactory;
