// Job CRUD: listing with filters and pagination, creation with validation, deletion.

pub mod handlers;
pub mod service;
