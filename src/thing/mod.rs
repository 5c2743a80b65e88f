pub mod insert_workflow;
pub mod thing;
pub mod thing_repository;
