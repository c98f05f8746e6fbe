pub mod compiler;
pub mod entities;
pub mod pagination;
pub mod parser;
pub mod ports;
pub mod resolver;
pub mod services;
pub mod value_objects;
