use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::shopping::cart::Cart;
use business::domain::shopping::service::ShoppingService;

use crate::api::cart::dto::{BuyCartRequest, BuyCartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    shopping_service: Arc<dyn ShoppingService>,
}

impl CartApi {
    pub fn new(shopping_service: Arc<dyn ShoppingService>) -> Self {
        Self { shopping_service }
    }
}

/// Cart API
#[OpenApi]
impl CartApi {
    /// Buy a cart
    ///
    /// Resolves every item against the catalog and checks the requested
    /// quantities against current stock. The cart is bought as a whole or
    /// not at all; stock levels are not changed.
    #[oai(path = "/cart/buy", method = "post", tag = "ApiTags::Cart")]
    async fn buy(&self, body: Json<BuyCartRequest>) -> BuyResponse {
        let mut cart = Cart::new();

        for item in body.0.items {
            if item.quantity == 0 {
                return BuyResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "cart.invalid_quantity",
                )));
            }

            let product = match self.shopping_service.get_product_by_name(&item.name).await {
                Ok(product) => product,
                Err(err) => {
                    let (status, json) = err.into_error_response();
                    return match status.as_u16() {
                        404 => BuyResponse::NotFound(json),
                        _ => BuyResponse::InternalError(json),
                    };
                }
            };

            cart.add(product, item.quantity);
        }

        match self.shopping_service.buy(&cart).await {
            Ok(purchased) => BuyResponse::Ok(Json(BuyCartResponse { purchased })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                BuyResponse::Conflict(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BuyResponse {
    #[oai(status = 200)]
    Ok(Json<BuyCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::shopping::service::ShoppingServiceImpl;
    use business::domain::product::model::Product;
    use logger::TracingLogger;
    use persistence::product::dao::InMemoryProductDao;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    fn client() -> TestClient<Route> {
        let service = Arc::new(ShoppingServiceImpl {
            dao: Arc::new(InMemoryProductDao::new(vec![
                Product::new("Pencil", 1),
                Product::new("Pen", 2),
            ])),
            logger: Arc::new(TracingLogger),
        });
        let api = OpenApiService::new(CartApi::new(service), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", api))
    }

    #[tokio::test]
    async fn should_buy_when_stock_covers_every_item() {
        let cli = client();

        let resp = cli
            .post("/cart/buy")
            .body_json(&json!({ "items": [
                { "name": "Pencil", "quantity": 1 },
                { "name": "Pen", "quantity": 2 }
            ]}))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "purchased": true })).await;
    }

    #[tokio::test]
    async fn should_report_not_purchased_for_empty_cart() {
        let cli = client();

        let resp = cli
            .post("/cart/buy")
            .body_json(&json!({ "items": [] }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "purchased": false })).await;
    }

    #[tokio::test]
    async fn should_return_409_when_stock_is_short() {
        let cli = client();

        let resp = cli
            .post("/cart/buy")
            .body_json(&json!({ "items": [{ "name": "Pencil", "quantity": 2 }] }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_merge_repeated_items_before_checking_stock() {
        let cli = client();

        let resp = cli
            .post("/cart/buy")
            .body_json(&json!({ "items": [
                { "name": "Pen", "quantity": 2 },
                { "name": "Pen", "quantity": 1 }
            ]}))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_item() {
        let cli = client();

        let resp = cli
            .post("/cart/buy")
            .body_json(&json!({ "items": [{ "name": "Stapler", "quantity": 1 }] }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let cli = client();

        let resp = cli
            .post("/cart/buy")
            .body_json(&json!({ "items": [{ "name": "Pen", "quantity": 0 }] }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
