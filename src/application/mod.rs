pub mod dtos;
pub mod ports;
pub mod services;

// Re-exportaciones para facilitar el acceso a los principales puertos
pub use ports::output_port::OutputPort;
pub use ports::user_ports::{CreateUserUseCase, UserOutputPort};
pub use ports::post_ports::{CreatePostUseCase, PostOutputPort};
pub use ports::favorite_ports::{FavoriteOutputPort, ToggleFavoriteUseCase};
