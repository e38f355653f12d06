pub mod output_port;
pub mod user_ports;
pub mod post_ports;
pub mod favorite_ports;
