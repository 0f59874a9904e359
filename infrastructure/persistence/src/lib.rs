pub mod catalog;
pub mod product {
    pub mod dao;
}
