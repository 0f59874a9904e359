use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shopping::service::ShoppingService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    shopping_service: Arc<dyn ShoppingService>,
}

impl ProductApi {
    pub fn new(shopping_service: Arc<dyn ShoppingService>) -> Self {
        Self { shopping_service }
    }
}

/// Product catalog API
///
/// Read-only endpoints over the product catalog.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in catalog order, including those out of stock.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.shopping_service.get_all_products().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by name
    ///
    /// Exact, case-sensitive match on the product name.
    #[oai(path = "/products/:name", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_name(&self, name: Path<String>) -> GetProductByNameResponse {
        match self.shopping_service.get_product_by_name(&name.0).await {
            Ok(product) => GetProductByNameResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByNameResponse::NotFound(json),
                    _ => GetProductByNameResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByNameResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
