pub mod storage;
pub mod product {
    pub mod entity;
    pub mod json_repository;
    pub mod memory_repository;
}
