/// Raised when a cart cannot be bought as a whole.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuyError {
    #[error("shopping.insufficient_stock")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
}
